//! Evolves a chordal accompaniment for a monophonic melody.
//!
//! A genetic algorithm searches sequences of diatonic triads, one per time
//! slot, scoring each against the melody's notes: shared pitch classes earn a
//! small bonus and clashing intervals a heavy penalty. The fittest sequence
//! is rendered as a block-chord track.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod services;
pub mod types;

pub use error::{AccompanistError, Result};
