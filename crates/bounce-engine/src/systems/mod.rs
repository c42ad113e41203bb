pub mod bounce;
pub mod rng;
