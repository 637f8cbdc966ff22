// Domain layer: animals and the capability set they share. No I/O here.

pub mod model;
pub mod ports;
