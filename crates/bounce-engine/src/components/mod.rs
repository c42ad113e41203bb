pub mod entity;
pub mod mover;
