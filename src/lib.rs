pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod cube;
pub mod frame;
pub mod script;
pub mod traits;

pub use cube::{Cube, CubeError, CubeSettings, Move, MoveStatus};
