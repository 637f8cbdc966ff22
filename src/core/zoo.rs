use crate::domain::model::Animal;
use crate::domain::ports::Creature;
use crate::utils::error::Result;
use std::io::Write;

/// Owns every animal on site and the sink their announcements go to.
///
/// Animals leave the zoo either through [`Zoo::remove`] or when the zoo
/// itself is dropped; either way each one announces its removal exactly once.
pub struct Zoo<W: Write> {
    animals: Vec<Animal>,
    out: W,
}

impl<W: Write> Zoo<W> {
    pub fn new(out: W) -> Self {
        Self {
            animals: Vec::new(),
            out,
        }
    }

    pub fn admit(&mut self, animal: impl Into<Animal>) {
        let animal = animal.into();
        tracing::debug!("Admitted {} the {}", animal.name(), animal.species());
        self.animals.push(animal);
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Animal> {
        self.animals.iter()
    }

    pub fn find(&self, name: &str) -> Option<&Animal> {
        self.animals.iter().find(|animal| animal.name() == name)
    }

    /// Removes the first animal called `name`, announcing it on the way out.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let Some(index) = self.animals.iter().position(|a| a.name() == name) else {
            return Ok(false);
        };
        let animal = self.animals.remove(index);
        announce_removal(&mut self.out, &animal)?;
        Ok(true)
    }

    /// Writes one line to the zoo's sink.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Writes each animal's line produced by `line`, in admission order.
    pub fn announce_each<F>(&mut self, line: F) -> Result<()>
    where
        F: Fn(&Animal) -> String,
    {
        for animal in &self.animals {
            writeln!(self.out, "{}", line(animal))?;
        }
        Ok(())
    }
}

impl<'a, W: Write> IntoIterator for &'a Zoo<W> {
    type Item = &'a Animal;
    type IntoIter = std::slice::Iter<'a, Animal>;

    fn into_iter(self) -> Self::IntoIter {
        self.animals.iter()
    }
}

impl<W: Write> Drop for Zoo<W> {
    fn drop(&mut self) {
        for animal in self.animals.drain(..) {
            if let Err(e) = announce_removal(&mut self.out, &animal) {
                tracing::warn!("Could not announce removal of {}: {}", animal.name(), e);
            }
        }
        if let Err(e) = self.out.flush() {
            tracing::warn!("Could not flush zoo output: {}", e);
        }
    }
}

fn announce_removal<W: Write>(out: &mut W, animal: &Animal) -> std::io::Result<()> {
    tracing::debug!("Removing {} the {}", animal.name(), animal.species());
    writeln!(out, "{} has been removed from the zoo.", animal.name())
}
