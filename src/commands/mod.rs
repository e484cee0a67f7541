//! Command implementations

pub mod assist;
pub mod play;
pub mod simulate;
pub mod solve;

pub use assist::run_assist;
pub use play::run_play;
pub use simulate::{SimulationStats, print_simulation_stats, simulate_all_games};
pub use solve::{SolveReport, SolveStep, solve_target};

use std::io::{self, Write};

/// Prompt on stdout and read one trimmed line from stdin.
pub(crate) fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
