//! Trial loop and per-configuration driver.

use super::config::SimConfig;
use super::game::{play_trial, GameConfiguration, SimError};
use super::report::{ConfigurationReport, SimReport, SimulationResult};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Play `num_simulations` always-switch games and return the win/loss rates.
///
/// Inputs are validated before `rng` is touched, so a rejected call consumes
/// no randomness.
pub fn run(
    num_doors: usize,
    doors_to_reveal: usize,
    num_simulations: u32,
    rng: &mut impl Rng,
) -> Result<SimulationResult, SimError> {
    let config = GameConfiguration::new(num_doors, doors_to_reveal)?;
    run_configuration(&config, num_simulations, rng)
}

/// Same as [`run`] for an already validated configuration.
pub fn run_configuration(
    config: &GameConfiguration,
    num_simulations: u32,
    rng: &mut impl Rng,
) -> Result<SimulationResult, SimError> {
    if num_simulations == 0 {
        return Err(SimError::InvalidConfiguration(
            "num_simulations must be positive".to_string(),
        ));
    }

    let mut wins = 0u32;
    for _ in 0..num_simulations {
        if play_trial(config, rng).is_win() {
            wins += 1;
        }
    }

    Ok(SimulationResult::from_counts(wins, num_simulations))
}

/// Run every configuration in `config` and collect a report.
///
/// Every pair is validated before any trial runs. Each configuration gets a
/// private generator (`seed + index` when seeded) so results do not depend on
/// how rayon schedules the work.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, SimError> {
    if config.num_simulations == 0 {
        return Err(SimError::InvalidConfiguration(
            "num_simulations must be positive".to_string(),
        ));
    }

    let games = config
        .configurations
        .iter()
        .map(|&(num_doors, doors_to_reveal)| GameConfiguration::new(num_doors, doors_to_reveal))
        .collect::<Result<Vec<_>, _>>()?;

    let configurations = games
        .par_iter()
        .enumerate()
        .map(|(idx, game)| -> Result<ConfigurationReport, SimError> {
            let mut rng = match config.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(idx as u64)),
                None => ChaCha8Rng::from_entropy(),
            };

            debug!(
                "simulating {} ({} trials, seed {:?})",
                game.title(),
                config.num_simulations,
                config.seed.map(|seed| seed.wrapping_add(idx as u64))
            );

            let result = run_configuration(game, config.num_simulations, &mut rng)?;

            debug!(
                "{}: {} wins, win rate {:.4}",
                game.title(),
                result.wins,
                result.win_rate
            );

            Ok(ConfigurationReport {
                configuration: *game,
                result,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "simulated {} configurations x {} trials",
        configurations.len(),
        config.num_simulations
    );

    Ok(SimReport {
        num_simulations: config.num_simulations,
        seed: config.seed,
        configurations,
    })
}
