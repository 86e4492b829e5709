use crate::engines::generation::chord_factory::generate_chord;
use crate::engines::generation::genome::{Genome, ScoredGenome};
use crate::engines::generation::key::KeyContext;
use crate::error::{AccompanistError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMethod {
    /// Fitness-proportionate. Negative scores are shifted so the worst is 0.
    #[default]
    Roulette,
    /// Linear rank weights: best gets n, worst gets 1.
    Rank,
}

/// Roulette weights for a set of scores.
///
/// Raw scores are used when none is negative; otherwise every score is
/// shifted up by the magnitude of the minimum.
pub fn roulette_weights(scores: &[i64]) -> Vec<u64> {
    let min = scores.iter().copied().min().unwrap_or(0);
    let offset = if min < 0 { -min } else { 0 };
    scores.iter().map(|&s| (s + offset) as u64).collect()
}

/// Rank weights for scores, independent of their magnitude.
///
/// Equal scores share the weight of their best rank.
pub fn rank_weights(scores: &[i64]) -> Vec<u64> {
    let n = scores.len() as u64;
    scores
        .iter()
        .map(|&s| n - scores.iter().filter(|&&other| other > s).count() as u64)
        .collect()
}

/// Draw one index with probability proportional to its weight.
///
/// Falls back to a uniform draw when every weight is zero.
fn spin<R: Rng + ?Sized>(weights: &[u64], rng: &mut R) -> usize {
    let total: u64 = weights.iter().sum();
    if total == 0 {
        return rng.gen_range(0..weights.len());
    }

    let mut ball = rng.gen_range(0..total);
    for (idx, &weight) in weights.iter().enumerate() {
        if ball < weight {
            return idx;
        }
        ball -= weight;
    }

    // Unreachable while ball < total
    weights.len() - 1
}

/// Pick two parents, with replacement, weighted by fitness.
pub fn select_pair<R: Rng + ?Sized>(
    population: &[ScoredGenome],
    method: SelectionMethod,
    rng: &mut R,
) -> Result<(Genome, Genome)> {
    if population.is_empty() {
        return Err(AccompanistError::InvalidArgument(
            "cannot select parents from an empty population".to_string(),
        ));
    }

    let scores: Vec<i64> = population.iter().map(|s| s.fitness).collect();
    let weights = match method {
        SelectionMethod::Roulette => roulette_weights(&scores),
        SelectionMethod::Rank => rank_weights(&scores),
    };

    let first = spin(&weights, rng);
    let second = spin(&weights, rng);
    Ok((
        population[first].genome.clone(),
        population[second].genome.clone(),
    ))
}

/// Single-point crossover at a known split point.
///
/// `point` must lie in `1..len` of the shorter parent.
pub fn crossover_at(parent1: &Genome, parent2: &Genome, point: usize) -> Result<(Genome, Genome)> {
    let len = parent1.len().min(parent2.len());
    if point == 0 || point >= len {
        return Err(AccompanistError::InvalidArgument(format!(
            "crossover point {} outside 1..{}",
            point, len
        )));
    }
    Ok(swap_tails(parent1, parent2, point))
}

fn swap_tails(parent1: &Genome, parent2: &Genome, point: usize) -> (Genome, Genome) {
    let mut child1 = parent1[..point].to_vec();
    child1.extend_from_slice(&parent2[point..]);
    let mut child2 = parent2[..point].to_vec();
    child2.extend_from_slice(&parent1[point..]);
    (child1, child2)
}

/// Single-point crossover: swap genome tails
///
/// Genomes shorter than two chords have no interior split point and are
/// returned unchanged.
pub fn crossover<R: Rng + ?Sized>(
    parent1: &Genome,
    parent2: &Genome,
    rng: &mut R,
) -> (Genome, Genome) {
    let len = parent1.len().min(parent2.len());
    if len < 2 {
        return (parent1.clone(), parent2.clone());
    }

    let point = rng.gen_range(1..len);
    swap_tails(parent1, parent2, point)
}

/// Mutation: maybe replace one chord with a freshly generated one
///
/// One locus is drawn up front; it is replaced when a uniform draw in
/// `[0, 1)` is at most `probability`. Returns the replaced index, if any.
pub fn mutate<R: Rng + ?Sized>(
    genome: &mut Genome,
    key: &KeyContext,
    probability: f64,
    rng: &mut R,
) -> Result<Option<usize>> {
    if genome.is_empty() {
        return Err(AccompanistError::InvalidArgument(
            "cannot mutate an empty genome".to_string(),
        ));
    }

    let index = rng.gen_range(0..genome.len());
    if rng.gen::<f64>() <= probability {
        genome[index] = generate_chord(key, rng);
        Ok(Some(index))
    } else {
        Ok(None)
    }
}
