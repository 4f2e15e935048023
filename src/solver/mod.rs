//! The adversarial engine
//!
//! `partition` groups candidate words by the pattern a guess would produce,
//! `selection` picks the group that is worst for the guesser, and `guesser`
//! holds automatic players used to exercise the engine.

pub mod guesser;
pub mod partition;
pub mod selection;

pub use guesser::{AlphabetGuesser, FrequencyGuesser, Guesser, GuesserType, RandomGuesser};
pub use partition::{Bucket, Partition, candidates, consistent, partition, reveal};
pub use selection::{Selection, choose_bucket, select};
