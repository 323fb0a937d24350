//! One play of the generalized Monty Hall game.
//!
//! The host opens `doors_to_reveal` goat doors, never the player's door and
//! never the car, and the player always switches to a random unopened door.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

/// Smallest game in which the host can leave a door to switch to.
pub const MIN_DOORS: usize = 3;

/// Errors raised before any trial is played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// A validated (doors, reveals) pair.
///
/// The host must leave the player's door and at least one other door closed,
/// so `doors_to_reveal <= num_doors - 2` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfiguration {
    num_doors: usize,
    doors_to_reveal: usize,
}

impl GameConfiguration {
    pub fn new(num_doors: usize, doors_to_reveal: usize) -> Result<Self, SimError> {
        if num_doors < MIN_DOORS {
            return Err(SimError::InvalidConfiguration(format!(
                "need at least {} doors, got {}",
                MIN_DOORS, num_doors
            )));
        }
        if doors_to_reveal > num_doors - 2 {
            return Err(SimError::InvalidConfiguration(format!(
                "cannot reveal {} of {} doors (at most {})",
                doors_to_reveal,
                num_doors,
                num_doors - 2
            )));
        }
        Ok(Self {
            num_doors,
            doors_to_reveal,
        })
    }

    pub fn num_doors(&self) -> usize {
        self.num_doors
    }

    pub fn doors_to_reveal(&self) -> usize {
        self.doors_to_reveal
    }

    /// Doors left closed after the reveal, excluding the player's own.
    pub fn remaining_doors(&self) -> usize {
        self.num_doors - 1 - self.doors_to_reveal
    }

    /// Panel title, e.g. "20 Doors, 18 Reveals".
    pub fn title(&self) -> String {
        format!("{} Doors, {} Reveals", self.num_doors, self.doors_to_reveal)
    }
}

/// Everything that happened in a single trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialOutcome {
    pub car_location: usize,
    pub player_choice: usize,
    pub revealed_doors: Vec<usize>,
    pub new_choice: usize,
}

impl TrialOutcome {
    pub fn is_win(&self) -> bool {
        self.new_choice == self.car_location
    }
}

/// Play one game with the always-switch strategy.
///
/// Draws from `rng` in a fixed order: car, first pick, host reveals, switch.
pub fn play_trial(config: &GameConfiguration, rng: &mut impl Rng) -> TrialOutcome {
    let num_doors = config.num_doors;
    let car_location = rng.gen_range(0..num_doors);
    let player_choice = rng.gen_range(0..num_doors);

    // One door larger when the player already picked the car.
    let eligible: Vec<usize> = (0..num_doors)
        .filter(|&door| door != player_choice && door != car_location)
        .collect();

    let revealed_doors: Vec<usize> = eligible
        .choose_multiple(rng, config.doors_to_reveal)
        .copied()
        .collect();

    let mut opened = vec![false; num_doors];
    for &door in &revealed_doors {
        opened[door] = true;
    }

    let remaining: Vec<usize> = (0..num_doors)
        .filter(|&door| door != player_choice && !opened[door])
        .collect();

    // Never empty: num_doors - 1 - doors_to_reveal >= 1.
    let new_choice = remaining[rng.gen_range(0..remaining.len())];

    TrialOutcome {
        car_location,
        player_choice,
        revealed_doors,
        new_choice,
    }
}
