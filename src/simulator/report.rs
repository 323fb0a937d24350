//! Simulation report generation.

use super::game::GameConfiguration;
use serde::Serialize;

/// Width of the text-mode probability bars.
const BAR_WIDTH: usize = 40;

/// Aggregate outcome of all trials for one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    pub win_rate: f64,
    pub loss_rate: f64,
    pub wins: u32,
    pub trials: u32,
}

impl SimulationResult {
    /// Build rates from raw counts. `trials` must be non-zero.
    pub fn from_counts(wins: u32, trials: u32) -> Self {
        let win_rate = wins as f64 / trials as f64;
        Self {
            win_rate,
            loss_rate: 1.0 - win_rate,
            wins,
            trials,
        }
    }
}

/// One panel of the report.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationReport {
    pub configuration: GameConfiguration,
    pub result: SimulationResult,
}

impl ConfigurationReport {
    pub fn title(&self) -> String {
        self.configuration.title()
    }
}

/// Results for every configuration of a run, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_simulations: u32,
    pub seed: Option<u64>,
    pub configurations: Vec<ConfigurationReport>,
}

impl SimReport {
    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("             MONTY HALL PROBLEM SIMULATION\n");
        report.push_str("   Winning and Losing Probabilities with Always Switching\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        let seed = match self.seed {
            Some(seed) => seed.to_string(),
            None => "random".to_string(),
        };
        report.push_str(&format!(
            "Trials per configuration: {}, seed: {}\n\n",
            self.num_simulations, seed
        ));

        for entry in &self.configurations {
            let title = entry.title();
            let rule = "─".repeat(60usize.saturating_sub(title.len() + 4));
            report.push_str(&format!("── {} {}\n", title, rule));
            report.push_str(&format_row("Wins", entry.result.win_rate));
            report.push_str(&format_row("Losses", entry.result.loss_rate));
            report.push('\n');
        }

        report.push_str("═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn format_row(label: &str, rate: f64) -> String {
    let bar_len = (rate.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "  {:<7} {:>7} {}\n",
        label,
        format_percent(rate),
        "█".repeat(bar_len)
    )
}

/// Percentage with two decimals, e.g. `66.67%`.
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}
