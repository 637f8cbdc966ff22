use crate::domain::ports::Creature;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Lion,
    Elephant,
    Bird,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Species::Lion => "Lion",
            Species::Elephant => "Elephant",
            Species::Bird => "Bird",
        };
        f.write_str(label)
    }
}

/// Name and age, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    name: String,
    age: u32,
}

impl Profile {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lion {
    profile: Profile,
    mane_length: u32,
}

impl Lion {
    pub fn new(name: impl Into<String>, age: u32, mane_length: u32) -> Self {
        Self {
            profile: Profile::new(name, age),
            mane_length,
        }
    }

    pub fn mane_length(&self) -> u32 {
        self.mane_length
    }

    pub fn hunt(&self) -> String {
        format!(
            "{} is hunting with {}cm mane!",
            self.profile.name, self.mane_length
        )
    }
}

impl Creature for Lion {
    fn name(&self) -> &str {
        &self.profile.name
    }

    fn age(&self) -> u32 {
        self.profile.age
    }

    fn make_sound(&self) -> String {
        format!("{} roars loudly! ROAR!", self.profile.name)
    }

    fn eat(&self) -> String {
        format!("{} eats meat (carnivore).", self.profile.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Elephant {
    profile: Profile,
    tusk_length: f64,
}

impl Elephant {
    pub fn new(name: impl Into<String>, age: u32, tusk_length: f64) -> Self {
        Self {
            profile: Profile::new(name, age),
            tusk_length,
        }
    }

    pub fn tusk_length(&self) -> f64 {
        self.tusk_length
    }

    pub fn spray_water(&self) -> String {
        format!("{} sprays water with its trunk!", self.profile.name)
    }
}

impl Creature for Elephant {
    fn name(&self) -> &str {
        &self.profile.name
    }

    fn age(&self) -> u32 {
        self.profile.age
    }

    fn make_sound(&self) -> String {
        format!("{} trumpets! TOOT TOOT!", self.profile.name)
    }

    fn eat(&self) -> String {
        format!("{} eats plants (herbivore).", self.profile.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    profile: Profile,
    wingspan: f64,
    can_fly: bool,
}

impl Bird {
    pub fn new(name: impl Into<String>, age: u32, wingspan: f64, can_fly: bool) -> Self {
        Self {
            profile: Profile::new(name, age),
            wingspan,
            can_fly,
        }
    }

    pub fn wingspan(&self) -> f64 {
        self.wingspan
    }

    pub fn can_fly(&self) -> bool {
        self.can_fly
    }

    pub fn fly(&self) -> String {
        if self.can_fly {
            format!(
                "{} flies with {}cm wingspan!",
                self.profile.name, self.wingspan
            )
        } else {
            format!("{} cannot fly (flightless bird).", self.profile.name)
        }
    }
}

impl Creature for Bird {
    fn name(&self) -> &str {
        &self.profile.name
    }

    fn age(&self) -> u32 {
        self.profile.age
    }

    fn make_sound(&self) -> String {
        format!("{} chirps! Chirp Chirp!", self.profile.name)
    }

    fn eat(&self) -> String {
        format!("{} eats seeds and insects.", self.profile.name)
    }
}

/// Any animal the zoo can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Animal {
    Lion(Lion),
    Elephant(Elephant),
    Bird(Bird),
}

impl Animal {
    pub fn species(&self) -> Species {
        match self {
            Animal::Lion(_) => Species::Lion,
            Animal::Elephant(_) => Species::Elephant,
            Animal::Bird(_) => Species::Bird,
        }
    }

    /// Runs the one behaviour only this animal's species has.
    pub fn specialty(&self) -> String {
        match self {
            Animal::Lion(lion) => lion.hunt(),
            Animal::Elephant(elephant) => elephant.spray_water(),
            Animal::Bird(bird) => bird.fly(),
        }
    }

    fn as_creature(&self) -> &dyn Creature {
        match self {
            Animal::Lion(lion) => lion,
            Animal::Elephant(elephant) => elephant,
            Animal::Bird(bird) => bird,
        }
    }
}

impl Creature for Animal {
    fn name(&self) -> &str {
        self.as_creature().name()
    }

    fn age(&self) -> u32 {
        self.as_creature().age()
    }

    fn make_sound(&self) -> String {
        self.as_creature().make_sound()
    }

    fn eat(&self) -> String {
        self.as_creature().eat()
    }
}

impl From<Lion> for Animal {
    fn from(lion: Lion) -> Self {
        Animal::Lion(lion)
    }
}

impl From<Elephant> for Animal {
    fn from(elephant: Elephant) -> Self {
        Animal::Elephant(elephant)
    }
}

impl From<Bird> for Animal {
    fn from(bird: Bird) -> Self {
        Animal::Bird(bird)
    }
}

/// Same for every species; not part of the overridable capability set.
pub fn sleep(creature: &dyn Creature) -> String {
    format!("{} is sleeping... Zzz", creature.name())
}
