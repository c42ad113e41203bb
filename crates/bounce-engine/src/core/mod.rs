pub mod camera;
pub mod scene;
pub mod simulation;
pub mod time;
