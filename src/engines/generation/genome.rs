use crate::types::Chord;
use serde::{Deserialize, Serialize};

/// Genome representation for chord-progression evolution
///
/// A genome is an ordered sequence of triads, one per time slot of the melody.
/// Slot `i` covers melody ticks `[i * slot_duration, (i + 1) * slot_duration)`.
///
/// The length is fixed for a whole run (derived once from the melody's
/// duration) and every genetic operator preserves it:
/// - **Crossover** swaps tails at a single split point
/// - **Mutation** replaces at most one chord in place
///
/// # Example
///
/// ```
/// use accompanist::engines::generation::Genome;
/// use accompanist::types::Chord;
///
/// // I - V in C major, root position
/// let genome: Genome = vec![Chord::new(36, 40, 43), Chord::new(43, 47, 50)];
/// assert_eq!(genome.len(), 2);
/// ```
pub type Genome = Vec<Chord>;

/// A generation of candidate accompaniments.
pub type Population = Vec<Genome>;

/// A genome paired with the fitness it scored in one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredGenome {
    pub genome: Genome,
    pub fitness: i64,
}

impl ScoredGenome {
    pub fn new(genome: Genome, fitness: i64) -> Self {
        Self { genome, fitness }
    }
}

/// Sort best-first. Stable, so equal scores keep their population order.
pub fn sort_descending(scored: &mut [ScoredGenome]) {
    scored.sort_by(|a, b| b.fitness.cmp(&a.fitness));
}
