use crate::config::AppConfig;
use crate::data::{Accompaniment, MelodyTrack};
use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::{
    CancellationToken, EngineConfig, EvolutionEngine, EvolutionOutcome, Key, KeyContext,
    ProgressCallback,
};
use crate::error::{AccompanistError, Result};

/// Result of harmonizing one melody.
#[derive(Debug, Clone, PartialEq)]
pub enum HarmonizeOutcome {
    Completed(Accompaniment),
    /// Cancelled between generations; there is nothing to write.
    Aborted { completed_generations: usize },
}

impl HarmonizeOutcome {
    pub fn accompaniment(&self) -> Option<&Accompaniment> {
        match self {
            HarmonizeOutcome::Completed(accompaniment) => Some(accompaniment),
            HarmonizeOutcome::Aborted { .. } => None,
        }
    }
}

/// Runs the full pipeline for one melody: timing, evolution, rendering.
#[derive(Debug, Clone)]
pub struct Harmonizer {
    config: AppConfig,
}

impl Harmonizer {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn harmonize<C: ProgressCallback>(
        &self,
        key: Key,
        melody: &MelodyTrack,
        callback: C,
        cancel: &CancellationToken,
    ) -> Result<HarmonizeOutcome> {
        if melody.ticks_per_beat == 0 {
            return Err(AccompanistError::Configuration(
                "melody ticks per beat must be positive".to_string(),
            ));
        }
        if melody.is_empty() {
            log::warn!("Melody has no events, every chord will score zero");
        }

        let slot_duration = melody.slot_duration(&self.config.timing);
        let genome_length = melody.genome_length(&self.config.timing);
        log::info!(
            "Harmonizing {} ticks in {:?} (tonic {}): {} slots of {} ticks",
            melody.total_ticks(),
            key.mode,
            key.tonic,
            genome_length,
            slot_duration
        );

        let evaluator = FitnessEvaluator::new(slot_duration, &melody.events);
        let engine_config = EngineConfig::from_settings(&self.config.evolution, genome_length);
        let mut engine = EvolutionEngine::new(engine_config, KeyContext::new(key), evaluator);

        match engine.run(callback, cancel)? {
            EvolutionOutcome::Completed(ranked) => {
                let best = ranked.into_iter().next().ok_or_else(|| {
                    AccompanistError::InvalidArgument(
                        "evolution produced an empty population".to_string(),
                    )
                })?;
                Ok(HarmonizeOutcome::Completed(Accompaniment::new(
                    best,
                    slot_duration,
                )))
            }
            EvolutionOutcome::Aborted {
                completed_generations,
            } => Ok(HarmonizeOutcome::Aborted {
                completed_generations,
            }),
        }
    }
}
