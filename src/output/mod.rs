//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_solve_report, print_top_candidates};
pub use formatters::colored_row;
