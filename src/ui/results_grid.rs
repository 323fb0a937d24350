//! 2x2 grid of win/loss bar charts, one panel per configuration.

use crate::simulator::{format_percent, ConfigurationReport, SimReport};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

pub const SUPTITLE: &str =
    "Monty Hall Problem Simulation: Winning and Losing Probabilities with Always Switching";

/// Bars are scaled in basis points so the axis spans 0..1 exactly.
const BAR_SCALE: f64 = 10_000.0;

/// Draws the full results screen: suptitle, 2x2 panel grid, key hint.
pub fn draw_results_grid(frame: &mut Frame, report: &SimReport) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Suptitle
            Constraint::Min(8),    // Panels
            Constraint::Length(1), // Key hint
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        SUPTITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    for (i, entry) in report.configurations.iter().take(4).enumerate() {
        let (row, col) = (i / 2, i % 2);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);
        draw_panel(frame, cols[col], entry);
    }

    let hint = Paragraph::new(Line::from(Span::styled(
        format!(
            "{} trials per configuration  [q] quit",
            report.num_simulations
        ),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[2]);
}

fn draw_panel(frame: &mut Frame, area: Rect, entry: &ConfigurationReport) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", entry.title()))
        .title_alignment(Alignment::Center);

    let inner_width = area.width.saturating_sub(2);
    // Two bars with a gap, leaving some margin on either side.
    let bar_width = (inner_width / 4).clamp(3, 16);

    let bars = [
        probability_bar("Wins", entry.result.win_rate, Color::Blue),
        probability_bar("Losses", entry.result.loss_rate, Color::Red),
    ];

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_width / 2 + 1)
        .max(BAR_SCALE as u64);

    frame.render_widget(chart, area);
}

fn probability_bar(label: &'static str, rate: f64, color: Color) -> Bar<'static> {
    Bar::default()
        .label(Line::from(label))
        .value((rate.clamp(0.0, 1.0) * BAR_SCALE).round() as u64)
        .text_value(format_percent(rate))
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::White).bg(color).add_modifier(Modifier::BOLD))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::{run_simulation, SimConfig};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(report: &SimReport, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_results_grid(f, report)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_grid_shows_every_panel_title() {
        let report = run_simulation(&SimConfig::default().with_seed(9)).unwrap();
        let screen = render(&report, 120, 40);

        assert!(screen.contains(SUPTITLE));
        for entry in &report.configurations {
            assert!(screen.contains(&entry.title()), "missing {}", entry.title());
        }
        assert!(screen.contains("Wins"));
        assert!(screen.contains("Losses"));
    }

    #[test]
    fn test_grid_survives_tiny_terminal() {
        let report = run_simulation(&SimConfig::classic(100).with_seed(1)).unwrap();
        render(&report, 20, 6);
    }
}
