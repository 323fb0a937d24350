//! Monty Hall - generalized N-door simulator library
//!
//! Exposes the simulator and the terminal chart grid for testing and
//! external use.

pub mod build_info;
pub mod simulator;
pub mod ui;

pub use simulator::{run, run_simulation, GameConfiguration, SimConfig, SimError, SimReport};
