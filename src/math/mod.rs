//! Mathematical utilities for the generation core

/// Injectable uniform random sources
pub mod random;

pub use random::{RandomSource, ScriptedRandom, SeededRandom};
