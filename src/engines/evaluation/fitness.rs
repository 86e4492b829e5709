use crate::engines::generation::genome::Genome;
use crate::types::{Chord, MelodyEvent, Pitch, OCTAVE};

/// Interval classes (mod 12) that clash against a held melody note.
pub const DISSONANT_INTERVALS: [Pitch; 5] = [1, 2, 6, 10, 11];

pub const DISSONANCE_PENALTY: i64 = 50;
pub const SHARED_PITCH_CLASS_BONUS: i64 = 5;

/// True when the two pitches are the same note in any octave.
pub fn same_pitch_class(a: Pitch, b: Pitch) -> bool {
    interval_class(a, b) == 0
}

/// Distance between two pitches reduced to a single octave.
pub fn interval_class(a: Pitch, b: Pitch) -> Pitch {
    (a - b).abs() % OCTAVE
}

/// True when any tone of the chord sits at a dissonant interval from `note`.
pub fn is_dissonant(chord: &Chord, note: Pitch) -> bool {
    chord
        .notes()
        .iter()
        .any(|&tone| DISSONANT_INTERVALS.contains(&interval_class(tone, note)))
}

pub fn shares_pitch_class(chord: &Chord, note: Pitch) -> bool {
    chord.notes().iter().any(|&tone| same_pitch_class(tone, note))
}

/// Score one melody note against the chord sounding under it.
fn score_note(chord: &Chord, note: Pitch) -> i64 {
    let mut score = 0;
    if is_dissonant(chord, note) {
        score -= DISSONANCE_PENALTY;
    }
    if shares_pitch_class(chord, note) {
        score += SHARED_PITCH_CLASS_BONUS;
    }
    score
}

/// Score a genome against the melody.
///
/// Walks the genome slot by slot while a cursor consumes melody events until
/// the melody clock reaches the end of the current slot. Each note-off
/// consumed is scored against that slot's chord. Slots left after the melody
/// runs out contribute nothing.
///
/// `slot_duration` must be the tick length the genome length was derived
/// from, or chords will be scored against the wrong notes.
pub fn fitness(genome: &[Chord], slot_duration: u32, melody: &[MelodyEvent]) -> i64 {
    let slot_duration = u64::from(slot_duration);
    let mut score = 0;
    let mut cursor = 0;
    let mut melody_time: u64 = 0;
    let mut slot_end: u64 = 0;

    for chord in genome {
        slot_end += slot_duration;
        while melody_time < slot_end {
            let Some(event) = melody.get(cursor) else {
                break;
            };
            melody_time += u64::from(event.delta_ticks);
            if event.is_note_off() {
                score += score_note(chord, event.pitch);
            }
            cursor += 1;
        }
    }

    score
}

/// Fitness function bound to one melody and slot length.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    slot_duration: u32,
    melody: &'a [MelodyEvent],
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(slot_duration: u32, melody: &'a [MelodyEvent]) -> Self {
        Self {
            slot_duration,
            melody,
        }
    }

    pub fn evaluate(&self, genome: &Genome) -> i64 {
        fitness(genome, self.slot_duration, self.melody)
    }

    pub fn slot_duration(&self) -> u32 {
        self.slot_duration
    }

    pub fn melody(&self) -> &'a [MelodyEvent] {
        self.melody
    }
}
