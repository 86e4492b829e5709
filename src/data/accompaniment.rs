use crate::engines::generation::genome::ScoredGenome;
use crate::types::{Chord, NoteEvent};
use serde::{Deserialize, Serialize};

/// Render chords as a block-chord track.
///
/// Each chord strikes its three notes together and releases them together
/// `slot_duration` ticks later, so chord `i` sounds during slot `i`.
pub fn render_accompaniment(genome: &[Chord], slot_duration: u32) -> Vec<NoteEvent> {
    let mut events = Vec::with_capacity(genome.len() * 6);
    for chord in genome {
        events.extend(chord.notes().iter().map(|&pitch| NoteEvent::note_on(pitch, 0)));
        for (i, &pitch) in chord.notes().iter().enumerate() {
            let delta = if i == 0 { slot_duration } else { 0 };
            events.push(NoteEvent::note_off(pitch, delta));
        }
    }
    events
}

/// The chosen accompaniment, ready to be appended as a new track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accompaniment {
    pub best: ScoredGenome,
    pub slot_duration: u32,
    pub events: Vec<NoteEvent>,
}

impl Accompaniment {
    pub fn new(best: ScoredGenome, slot_duration: u32) -> Self {
        let events = render_accompaniment(&best.genome, slot_duration);
        Self {
            best,
            slot_duration,
            events,
        }
    }

    pub fn fitness(&self) -> i64 {
        self.best.fitness
    }

    pub fn chords(&self) -> &[Chord] {
        &self.best.genome
    }
}
