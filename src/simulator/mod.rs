//! Monte Carlo simulator for the generalized Monty Hall game.
//!
//! Plays many independent games per (doors, reveals) configuration with the
//! always-switch strategy and reports the observed win/loss rates:
//! - `game`: one trial and configuration validation
//! - `runner`: trial loop and parallel per-configuration driver
//! - `report`: aggregated results as text or JSON

mod config;
mod game;
mod report;
mod runner;

pub use config::{SimConfig, DEFAULT_CONFIGURATIONS, DEFAULT_NUM_SIMULATIONS};
pub use game::{play_trial, GameConfiguration, SimError, TrialOutcome, MIN_DOORS};
pub use report::{format_percent, ConfigurationReport, SimReport, SimulationResult};
pub use runner::{run, run_configuration, run_simulation};
