//! Multiple sequence alignment by genetic algorithm.
//!
//! Each individual pads every input sequence with gaps to a common length;
//! the engine evolves a population of such individuals towards the lowest
//! adjacent-pairs mismatch score.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod types;

pub use error::{GenalignError, Result};
pub use types::{Individual, Sequence, GAP};
