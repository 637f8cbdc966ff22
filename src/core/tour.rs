use crate::core::zoo::Zoo;
use crate::domain::model::{Animal, Species};
use crate::domain::ports::Creature;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// Steps of a zoo tour. Each phase runs once and never returns to an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Populate,
    AnnounceSounds,
    Feed,
    SpecificBehaviors,
    Summarize,
    Close,
    Done,
}

impl Phase {
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Init => Some(Phase::Populate),
            Phase::Populate => Some(Phase::AnnounceSounds),
            Phase::AnnounceSounds => Some(Phase::Feed),
            Phase::Feed => Some(Phase::SpecificBehaviors),
            Phase::SpecificBehaviors => Some(Phase::Summarize),
            Phase::Summarize => Some(Phase::Close),
            Phase::Close => Some(Phase::Done),
            Phase::Done => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidentSummary {
    pub name: String,
    pub age: u32,
    pub species: Species,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourReport {
    pub total_animals: usize,
    pub residents: Vec<ResidentSummary>,
}

impl TourReport {
    fn from_animals(animals: &[Animal]) -> Self {
        Self {
            total_animals: animals.len(),
            residents: animals
                .iter()
                .map(|a| ResidentSummary {
                    name: a.name().to_string(),
                    age: a.age(),
                    species: a.species(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct ZooTour {
    roster: Vec<Animal>,
}

impl ZooTour {
    pub fn new(roster: Vec<Animal>) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &[Animal] {
        &self.roster
    }

    /// Walks every phase in order, writing the tour to `out`.
    ///
    /// The zoo is dropped after the closing banner, so each animal's
    /// removal line is the last thing written.
    pub fn run<W: Write>(self, out: W) -> Result<TourReport> {
        let mut roster = self.roster.into_iter();
        let mut zoo = Zoo::new(out);
        let mut report = None;
        let mut phase = Phase::Init;

        loop {
            tracing::debug!("Entering phase {:?}", phase);
            match phase {
                Phase::Init => {
                    zoo.say("=== ZOO MANAGEMENT SYSTEM ===")?;
                    zoo.say("")?;
                }
                Phase::Populate => {
                    for animal in roster.by_ref() {
                        zoo.admit(animal);
                    }
                    tracing::info!("Zoo populated with {} animals", zoo.len());
                }
                Phase::AnnounceSounds => {
                    zoo.say("=== ANIMAL SOUNDS (Polymorphism) ===")?;
                    zoo.announce_each(|a| a.make_sound())?;
                }
                Phase::Feed => {
                    zoo.say("")?;
                    zoo.say("=== FEEDING TIME ===")?;
                    zoo.announce_each(|a| a.eat())?;
                }
                Phase::SpecificBehaviors => {
                    zoo.say("")?;
                    zoo.say("=== SPECIFIC BEHAVIOURS ===")?;
                    zoo.announce_each(Animal::specialty)?;
                }
                Phase::Summarize => {
                    zoo.say("")?;
                    zoo.say("=== ZOO INFORMATION ===")?;
                    zoo.say(&format!("Total animals: {}", zoo.len()))?;
                    zoo.announce_each(|a| format!("- {} (Age: {})", a.name(), a.age()))?;
                    report = Some(TourReport::from_animals(zoo.animals()));
                }
                Phase::Close => {
                    zoo.say("")?;
                    zoo.say("=== ZOO CLOSING ===")?;
                }
                Phase::Done => break,
            }
            phase = match phase.next() {
                Some(next) => next,
                None => break,
            };
        }

        drop(zoo);
        tracing::info!("Tour finished");
        Ok(report.unwrap_or_else(|| TourReport::from_animals(&[])))
    }
}
