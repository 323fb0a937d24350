//! Integration test: simulated win rates against the known always-switch odds
//!
//! With N doors and K reveals, switching wins whenever the first pick missed
//! and the random switch lands on the car: (N-1) / (N * (N-1-K)).

use montyhall::simulator::{play_trial, run, run_simulation, GameConfiguration, SimConfig};
use montyhall::SimError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const LARGE_TRIALS: u32 = 100_000;

fn switch_odds(num_doors: usize, doors_to_reveal: usize) -> f64 {
    let n = num_doors as f64;
    let k = doors_to_reveal as f64;
    (n - 1.0) / (n * (n - 1.0 - k))
}

/// Classic three-door game converges to 2/3
#[test]
fn test_classic_game_converges_to_two_thirds() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let result = run(3, 1, LARGE_TRIALS, &mut rng).unwrap();

    assert!(
        (result.win_rate - 2.0 / 3.0).abs() < 0.01,
        "win rate {} too far from 2/3",
        result.win_rate
    );
    assert_eq!(result.win_rate + result.loss_rate, 1.0);
}

/// Every default configuration lands near its closed-form odds
#[test]
fn test_large_games_match_switch_odds() {
    for (idx, &(doors, reveals)) in [(20, 18), (50, 48), (100, 98)].iter().enumerate() {
        let mut rng = ChaCha8Rng::seed_from_u64(500 + idx as u64);
        let result = run(doors, reveals, LARGE_TRIALS, &mut rng).unwrap();
        let expected = switch_odds(doors, reveals);

        assert!(
            (result.win_rate - expected).abs() < 0.02,
            "{} doors / {} reveals: got {}, expected {}",
            doors,
            reveals,
            result.win_rate,
            expected
        );
    }
}

/// Leaving several doors closed still follows the same odds
#[test]
fn test_partial_reveal_matches_switch_odds() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let result = run(10, 5, LARGE_TRIALS, &mut rng).unwrap();
    let expected = switch_odds(10, 5);

    assert!((result.win_rate - expected).abs() < 0.02);
}

/// Full default run: rates are probabilities and complementary
#[test]
fn test_default_report_rates_are_valid() {
    let report = run_simulation(&SimConfig::default().with_seed(7)).unwrap();

    assert_eq!(report.configurations.len(), 4);
    for entry in &report.configurations {
        let result = entry.result;
        assert!((0.0..=1.0).contains(&result.win_rate));
        assert_eq!(result.win_rate + result.loss_rate, 1.0);
        assert_eq!(result.trials, 10_000);
    }
}

/// Revealing all but one closed door is rejected without playing
#[test]
fn test_over_reveal_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for doors in 3..12 {
        let err = run(doors, doors - 1, 1_000, &mut rng).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration(_)));
        assert!(run(doors, doors, 1_000, &mut rng).is_err());
    }
}

/// Host and switch never touch doors they are not allowed to
#[test]
fn test_sampling_rules_hold_across_configurations() {
    let mut rng = ChaCha8Rng::seed_from_u64(404);

    for &(doors, reveals) in &[(3, 1), (3, 0), (20, 18), (50, 10), (100, 98)] {
        let config = GameConfiguration::new(doors, reveals).unwrap();
        for _ in 0..1_000 {
            let outcome = play_trial(&config, &mut rng);

            assert_eq!(outcome.revealed_doors.len(), reveals);
            assert!(!outcome.revealed_doors.contains(&outcome.player_choice));
            assert!(!outcome.revealed_doors.contains(&outcome.car_location));
            assert_ne!(outcome.new_choice, outcome.player_choice);
            assert!(!outcome.revealed_doors.contains(&outcome.new_choice));
        }
    }
}
