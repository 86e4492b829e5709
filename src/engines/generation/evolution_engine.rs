use crate::config::evolution::EvolutionConfig;
use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::{
    cancellation::CancellationToken,
    chord_factory::generate_population,
    genome::{sort_descending, Genome, Population, ScoredGenome},
    key::KeyContext,
    operators::{crossover, mutate, select_pair, SelectionMethod},
};
use crate::error::{AccompanistError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Genomes carried unchanged from one generation to the next.
pub const ELITE_COUNT: usize = 2;

/// Parameters of a single evolution run.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub population_size: usize,
    pub generations: usize,
    pub genome_length: usize,
    pub mutation_probability: f64,
    pub selection_method: SelectionMethod,
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn from_settings(settings: &EvolutionConfig, genome_length: usize) -> Self {
        Self {
            population_size: settings.population_size,
            generations: settings.num_generations,
            genome_length,
            mutation_probability: settings.mutation_probability,
            selection_method: settings.selection_method,
            seed: settings.seed,
        }
    }
}

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: i64, mean_fitness: f64);
}

impl ProgressCallback for () {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, _generation: usize, _best: i64, _mean: f64) {}
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: i64, mean_fitness: f64) {
        (**self).on_generation_complete(generation, best_fitness, mean_fitness);
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum EvolutionOutcome {
    /// Final population, best first.
    Completed(Vec<ScoredGenome>),
    /// Cancelled at a generation boundary; nothing is surfaced.
    Aborted { completed_generations: usize },
}

impl EvolutionOutcome {
    pub fn best(&self) -> Option<&ScoredGenome> {
        match self {
            EvolutionOutcome::Completed(population) => population.first(),
            EvolutionOutcome::Aborted { .. } => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, EvolutionOutcome::Aborted { .. })
    }
}

pub struct EvolutionEngine<'a> {
    config: EngineConfig,
    key: KeyContext,
    evaluator: FitnessEvaluator<'a>,
    rng: StdRng,
}

impl<'a> EvolutionEngine<'a> {
    pub fn new(config: EngineConfig, key: KeyContext, evaluator: FitnessEvaluator<'a>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, key, evaluator, rng)
    }

    /// Use a caller-supplied random source instead of `config.seed`.
    pub fn with_rng(
        config: EngineConfig,
        key: KeyContext,
        evaluator: FitnessEvaluator<'a>,
        rng: StdRng,
    ) -> Self {
        Self {
            config,
            key,
            evaluator,
            rng,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the evolution process
    ///
    /// The cancellation token is checked before every generation and once more
    /// before the final ranking.
    pub fn run<C: ProgressCallback>(
        &mut self,
        mut callback: C,
        cancel: &CancellationToken,
    ) -> Result<EvolutionOutcome> {
        if self.config.population_size == 0 {
            return Err(AccompanistError::InvalidArgument(
                "population size must be at least 1".to_string(),
            ));
        }
        if self.config.genome_length == 0 {
            return Err(AccompanistError::InvalidArgument(
                "genome length must be at least 1".to_string(),
            ));
        }

        log::info!(
            "Evolving {} genomes of {} chords for {} generations",
            self.config.population_size,
            self.config.genome_length,
            self.config.generations
        );

        let mut population = self.initialize_population();

        for generation in 0..self.config.generations {
            if cancel.is_cancelled() {
                log::warn!("Evolution cancelled after {} generations", generation);
                return Ok(EvolutionOutcome::Aborted {
                    completed_generations: generation,
                });
            }

            callback.on_generation_start(generation);

            let evaluated = self.evaluate_population(population);
            let best_fitness = evaluated.first().map(|s| s.fitness).unwrap_or(0);
            let mean_fitness = mean_fitness(&evaluated);
            log::debug!(
                "Generation {}: best {}, mean {:.2}",
                generation + 1,
                best_fitness,
                mean_fitness
            );
            callback.on_generation_complete(generation, best_fitness, mean_fitness);

            population = self.create_next_generation(&evaluated)?;
        }

        if cancel.is_cancelled() {
            log::warn!("Evolution cancelled before final ranking");
            return Ok(EvolutionOutcome::Aborted {
                completed_generations: self.config.generations,
            });
        }

        let ranked = self.evaluate_population(population);
        if let Some(best) = ranked.first() {
            log::info!("Evolution complete. Best fitness: {}", best.fitness);
        }
        Ok(EvolutionOutcome::Completed(ranked))
    }

    fn initialize_population(&mut self) -> Population {
        generate_population(
            self.config.population_size,
            self.config.genome_length,
            &self.key,
            &mut self.rng,
        )
    }

    /// Score every genome once and rank best-first.
    fn evaluate_population(&self, population: Population) -> Vec<ScoredGenome> {
        let mut scored: Vec<ScoredGenome> = population
            .into_iter()
            .map(|genome| {
                let fitness = self.evaluator.evaluate(&genome);
                ScoredGenome::new(genome, fitness)
            })
            .collect();
        sort_descending(&mut scored);
        scored
    }

    /// Elitism plus bred offspring.
    ///
    /// Offspring come in pairs, `population_size / 2 - 1` of them, so an odd
    /// population shrinks by one each generation.
    fn create_next_generation(&mut self, ranked: &[ScoredGenome]) -> Result<Population> {
        let mut next_generation: Vec<Genome> = ranked
            .iter()
            .take(ELITE_COUNT)
            .map(|s| s.genome.clone())
            .collect();

        let pairs = (ranked.len() / 2).saturating_sub(1);
        for _ in 0..pairs {
            let (parent1, parent2) =
                select_pair(ranked, self.config.selection_method, &mut self.rng)?;
            let (mut child1, mut child2) = crossover(&parent1, &parent2, &mut self.rng);

            mutate(
                &mut child1,
                &self.key,
                self.config.mutation_probability,
                &mut self.rng,
            )?;
            mutate(
                &mut child2,
                &self.key,
                self.config.mutation_probability,
                &mut self.rng,
            )?;

            next_generation.push(child1);
            next_generation.push(child2);
        }

        Ok(next_generation)
    }
}

fn mean_fitness(scored: &[ScoredGenome]) -> f64 {
    if scored.is_empty() {
        return 0.0;
    }
    scored.iter().map(|s| s.fitness as f64).sum::<f64>() / scored.len() as f64
}
