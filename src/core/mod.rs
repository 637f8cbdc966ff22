pub mod roster;
pub mod tour;
pub mod zoo;

pub use crate::domain::model::{Animal, Bird, Elephant, Lion, Species};
pub use crate::domain::ports::Creature;
pub use crate::utils::error::Result;
