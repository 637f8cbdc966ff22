pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::ZooConfig;
pub use crate::core::{
    roster::founding_animals,
    tour::{Phase, TourReport, ZooTour},
    zoo::Zoo,
};
pub use crate::domain::{
    model::{sleep, Animal, Bird, Elephant, Lion, Species},
    ports::Creature,
};
pub use crate::utils::error::{Result, ZooError};
