//! Terminal output formatting
//!
//! Reply wording shared by every driver, plus pretty-printing for the
//! inspection commands.

pub mod display;
pub mod formatters;

pub use display::{print_corpus_stats, print_partition_report, print_simulation_stats};
pub use formatters::{describe_outcome, reply_lines, spaced_pattern, status_line};
