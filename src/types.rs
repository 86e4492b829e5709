use serde::{Deserialize, Serialize};

/// Absolute pitch as a MIDI-style note number (60 = middle C).
///
/// Signed so that octave drops below the key's anchor never underflow.
pub type Pitch = i32;

/// Semitones in one octave.
pub const OCTAVE: Pitch = 12;

/// Velocity used for every rendered accompaniment note.
pub const DEFAULT_VELOCITY: u8 = 64;

/// Tonality of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    NoteOn,
    NoteOff,
}

/// A timed note event on a single track.
///
/// `delta_ticks` is measured from the previous event in the same stream,
/// the way standard MIDI tracks store time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEvent {
    pub kind: EventKind,
    pub pitch: Pitch,
    pub velocity: u8,
    pub delta_ticks: u32,
}

/// Events of the melody being harmonized. Read-only input to fitness scoring.
pub type MelodyEvent = NoteEvent;

impl NoteEvent {
    pub fn note_on(pitch: Pitch, delta_ticks: u32) -> Self {
        Self {
            kind: EventKind::NoteOn,
            pitch,
            velocity: DEFAULT_VELOCITY,
            delta_ticks,
        }
    }

    pub fn note_off(pitch: Pitch, delta_ticks: u32) -> Self {
        Self {
            kind: EventKind::NoteOff,
            pitch,
            velocity: DEFAULT_VELOCITY,
            delta_ticks,
        }
    }

    pub fn is_note_off(&self) -> bool {
        self.kind == EventKind::NoteOff
    }
}

/// Triad quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Sus2,
    Sus4,
}

impl ChordQuality {
    /// Qualities drawn for any degree other than the diminished slot.
    pub const RANDOMIZED: [ChordQuality; 4] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Sus2,
        ChordQuality::Sus4,
    ];

    /// Interval in semitones from the root to the middle chord tone.
    pub fn characteristic_interval(self) -> Pitch {
        match self {
            ChordQuality::Major => 4,
            ChordQuality::Minor => 3,
            ChordQuality::Diminished => 3,
            ChordQuality::Sus2 => 2,
            ChordQuality::Sus4 => 5,
        }
    }

    /// Interval in semitones from the root to the top chord tone.
    pub fn fifth_interval(self) -> Pitch {
        match self {
            ChordQuality::Diminished => 6,
            _ => 7,
        }
    }
}

/// Which chord tone is voiced lowest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voicing {
    RootPosition,
    FirstInversion,
    SecondInversion,
}

impl Voicing {
    /// Map a roll of a ten-sided die (0..=9) to a voicing.
    ///
    /// 0-3 root position, 4-6 first inversion, 7-9 second inversion.
    pub fn from_die(roll: u8) -> Self {
        match roll {
            0..=3 => Voicing::RootPosition,
            4..=6 => Voicing::FirstInversion,
            _ => Voicing::SecondInversion,
        }
    }
}

/// Three pitches sounding together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Chord {
    pub notes: [Pitch; 3],
}

impl Chord {
    pub fn new(a: Pitch, b: Pitch, c: Pitch) -> Self {
        Self { notes: [a, b, c] }
    }

    pub fn notes(&self) -> &[Pitch; 3] {
        &self.notes
    }
}

impl From<(Pitch, Pitch, Pitch)> for Chord {
    fn from((a, b, c): (Pitch, Pitch, Pitch)) -> Self {
        Chord::new(a, b, c)
    }
}
