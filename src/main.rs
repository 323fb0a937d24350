use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::info;
use montyhall::build_info;
use montyhall::simulator::{run_simulation, SimConfig, SimReport};
use montyhall::ui::draw_results_grid;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::error::Error;
use std::io;
use std::time::Duration;

/// Monte Carlo estimate of always-switch win rates in the N-door Monty Hall game.
#[derive(Parser, Debug)]
#[command(name = "montyhall", about, disable_version_flag = true)]
struct Cli {
    /// Seed the random generators for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print a plain-text report instead of the chart grid
    #[arg(long, conflicts_with = "json")]
    text: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Show version information
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    let config = SimConfig {
        seed: cli.seed,
        ..Default::default()
    };

    // Errors surface here, before the terminal is touched.
    let report = run_simulation(&config)?;

    if cli.json {
        println!("{}", report.to_json());
    } else if cli.text {
        print!("{}", report.to_text());
    } else {
        show_grid(&report)?;
        info!("closed results grid");
    }

    Ok(())
}

/// Shows the chart grid until `q` or `Esc` is pressed.
fn show_grid(report: &SimReport) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = grid_loop(&mut terminal, report);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn grid_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    report: &SimReport,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw_results_grid(f, report))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    _ => {}
                }
            }
        }
    }
    Ok(())
}
