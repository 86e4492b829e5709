//! Diatonic key model
//!
//! A key is a tonic pitch plus a mode. From it we derive the *ladder*: the
//! seven absolute pitches of the scale starting at the tonic, obtained by
//! accumulating the mode's six step offsets.
//!
//! Major uses the Ionian steps (W W H W W W) and minor the Aeolian steps
//! (W H W W H W), so the ladder for C major is C D E F G A B and for
//! A minor is A B C D E F G.

use crate::error::{AccompanistError, Result};
use crate::types::{Mode, Pitch};
use serde::{Deserialize, Serialize};

pub const MAJOR_STEPS: [Pitch; 6] = [2, 2, 1, 2, 2, 2];
pub const MINOR_STEPS: [Pitch; 6] = [2, 1, 2, 2, 1, 2];

/// Pitch of C in the octave tonic names are resolved into (C3).
pub const TONIC_OCTAVE_BASE: Pitch = 48;

pub type Ladder = [Pitch; 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub tonic: Pitch,
    pub mode: Mode,
}

impl Key {
    pub fn new(tonic: Pitch, mode: Mode) -> Self {
        Self { tonic, mode }
    }

    /// Build a key from a tonic spelling such as `"F#"` or `"Bb"`.
    pub fn from_tonic_name(name: &str, mode: Mode) -> Result<Self> {
        Ok(Self::new(tonic_pitch(name)?, mode))
    }
}

/// Step offsets between consecutive ladder degrees for a mode.
pub fn mode_steps(mode: Mode) -> &'static [Pitch; 6] {
    match mode {
        Mode::Major => &MAJOR_STEPS,
        Mode::Minor => &MINOR_STEPS,
    }
}

/// Degree whose triad is diminished in the mode (vii° in major, ii° in minor).
pub fn diminished_degree(mode: Mode) -> usize {
    match mode {
        Mode::Major => 6,
        Mode::Minor => 1,
    }
}

pub fn build_ladder(root: Pitch, mode: Mode) -> Ladder {
    let mut ladder = [root; 7];
    let mut pitch = root;
    for (slot, step) in ladder.iter_mut().skip(1).zip(mode_steps(mode)) {
        pitch += step;
        *slot = pitch;
    }
    ladder
}

/// Resolve a tonic spelling to a pitch in the octave starting at C3.
///
/// Accepts a letter A-G (either case) followed by any number of `#` or `b`
/// accidentals. Spellings that cross the octave (`Cb`, `B#`) wrap within it.
pub fn tonic_pitch(name: &str) -> Result<Pitch> {
    let mut chars = name.trim().chars();
    let letter = chars
        .next()
        .ok_or_else(|| AccompanistError::InvalidArgument("empty tonic name".to_string()))?;

    let natural = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => {
            return Err(AccompanistError::InvalidArgument(format!(
                "unknown tonic name: {}",
                name
            )))
        }
    };

    let mut offset: Pitch = 0;
    for accidental in chars {
        match accidental {
            '#' | '♯' => offset += 1,
            'b' | '♭' | '-' => offset -= 1,
            _ => {
                return Err(AccompanistError::InvalidArgument(format!(
                    "unknown tonic name: {}",
                    name
                )))
            }
        }
    }

    Ok(TONIC_OCTAVE_BASE + (natural + offset).rem_euclid(12))
}

/// Immutable per-run key state shared by chord generation and mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyContext {
    key: Key,
    ladder: Ladder,
}

impl KeyContext {
    pub fn new(key: Key) -> Self {
        Self {
            ladder: build_ladder(key.tonic, key.mode),
            key,
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn mode(&self) -> Mode {
        self.key.mode
    }

    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    pub fn degree_pitch(&self, degree: usize) -> Result<Pitch> {
        self.ladder.get(degree).copied().ok_or_else(|| {
            AccompanistError::InvalidArgument(format!(
                "scale degree {} out of range 0..{}",
                degree,
                self.ladder.len()
            ))
        })
    }

    pub fn diminished_degree(&self) -> usize {
        diminished_degree(self.key.mode)
    }
}

impl From<Key> for KeyContext {
    fn from(key: Key) -> Self {
        KeyContext::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_ladder_is_ionian() {
        assert_eq!(build_ladder(48, Mode::Major), [48, 50, 52, 53, 55, 57, 59]);
    }

    #[test]
    fn test_minor_ladder_is_aeolian() {
        assert_eq!(build_ladder(57, Mode::Minor), [57, 59, 60, 62, 64, 65, 67]);
    }

    #[test]
    fn test_tonic_spellings() {
        assert_eq!(tonic_pitch("C").unwrap(), 48);
        assert_eq!(tonic_pitch("c#").unwrap(), 49);
        assert_eq!(tonic_pitch("Db").unwrap(), 49);
        assert_eq!(tonic_pitch("B").unwrap(), 59);
        assert_eq!(tonic_pitch("Cb").unwrap(), 59);
        assert_eq!(tonic_pitch("B#").unwrap(), 48);
        assert!(tonic_pitch("H").is_err());
        assert!(tonic_pitch("").is_err());
        assert!(tonic_pitch("C?").is_err());
    }

    #[test]
    fn test_degree_out_of_range() {
        let ctx = KeyContext::new(Key::new(48, Mode::Major));
        assert_eq!(ctx.degree_pitch(4).unwrap(), 55);
        assert!(ctx.degree_pitch(7).is_err());
    }
}
