//! Terminal rendering of simulation results.

mod results_grid;

pub use results_grid::draw_results_grid;
