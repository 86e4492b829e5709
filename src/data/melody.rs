use crate::config::TimingConfig;
use crate::error::{AccompanistError, Result};
use crate::types::{MelodyEvent, Pitch};
use serde::{Deserialize, Serialize};

/// A single monophonic melody track, as handed over by the file reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MelodyTrack {
    pub ticks_per_beat: u32,
    pub events: Vec<MelodyEvent>,
}

impl MelodyTrack {
    pub fn new(ticks_per_beat: u32, events: Vec<MelodyEvent>) -> Result<Self> {
        if ticks_per_beat == 0 {
            return Err(AccompanistError::Configuration(
                "ticks per beat must be positive".to_string(),
            ));
        }
        Ok(Self {
            ticks_per_beat,
            events,
        })
    }

    /// Build a legato melody from `(pitch, duration_ticks)` pairs.
    pub fn from_notes(ticks_per_beat: u32, notes: &[(Pitch, u32)]) -> Result<Self> {
        let events = notes
            .iter()
            .flat_map(|&(pitch, duration)| {
                [
                    MelodyEvent::note_on(pitch, 0),
                    MelodyEvent::note_off(pitch, duration),
                ]
            })
            .collect();
        Self::new(ticks_per_beat, events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Length of the melody in ticks.
    pub fn total_ticks(&self) -> u64 {
        self.events.iter().map(|e| u64::from(e.delta_ticks)).sum()
    }

    pub fn slot_duration(&self, timing: &TimingConfig) -> u32 {
        timing.slot_duration(self.ticks_per_beat)
    }

    pub fn genome_length(&self, timing: &TimingConfig) -> usize {
        timing.genome_length(self.total_ticks(), self.ticks_per_beat)
    }
}
