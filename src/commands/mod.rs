//! Command implementations

pub mod partition;
pub mod simple;
pub mod simulate;
pub mod stats;

pub use partition::{BucketSummary, PartitionReport, inspect_partition};
pub use simple::{run_session, run_simple};
pub use simulate::{GameRecord, LengthStats, SimulationStats, play_one, run_simulation};
pub use stats::{CorpusStats, corpus_stats};
