pub mod controller;
pub mod input_adapter;
pub mod timer;

pub use controller::*;
pub use input_adapter::*;
pub use timer::*;
