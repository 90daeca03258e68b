pub mod narrow;
pub mod rng;
pub mod sample;
