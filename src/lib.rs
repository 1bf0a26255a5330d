mod board;
mod common;
mod config;
mod logging;
mod vessel;

pub use board::*;
pub use common::*;
pub use config::*;
pub use logging::init_logging;
pub use vessel::*;
