use crate::engines::generation::genome::{Genome, Population};
use crate::engines::generation::key::KeyContext;
use crate::error::Result;
use crate::types::{Chord, ChordQuality, Pitch, Voicing, OCTAVE};
use rand::Rng;

/// Build the triad on `degree` of the key's ladder.
///
/// The chord is anchored one octave below the ladder pitch. Diminished
/// triads are always voiced in root position; `voicing` is ignored for them.
/// The inversions raise the root by an octave while the fifth stays put.
pub fn build_chord(
    key: &KeyContext,
    degree: usize,
    quality: ChordQuality,
    voicing: Voicing,
) -> Result<Chord> {
    let anchor = key.degree_pitch(degree)? - OCTAVE;
    Ok(voice(anchor, quality, voicing))
}

fn voice(anchor: Pitch, quality: ChordQuality, voicing: Voicing) -> Chord {
    let third = quality.characteristic_interval();
    let fifth = quality.fifth_interval();

    if quality == ChordQuality::Diminished {
        return Chord::new(anchor, anchor + third, anchor + fifth);
    }

    match voicing {
        Voicing::SecondInversion => {
            Chord::new(anchor + OCTAVE, anchor + OCTAVE + third, anchor + fifth)
        }
        Voicing::FirstInversion => Chord::new(anchor + OCTAVE, anchor + third, anchor + fifth),
        Voicing::RootPosition => Chord::new(anchor, anchor + third, anchor + fifth),
    }
}

/// Draw a random diatonic triad.
pub fn generate_chord<R: Rng + ?Sized>(key: &KeyContext, rng: &mut R) -> Chord {
    let ladder = key.ladder();
    let degree = rng.gen_range(0..ladder.len());

    let quality = if degree == key.diminished_degree() {
        ChordQuality::Diminished
    } else {
        ChordQuality::RANDOMIZED[rng.gen_range(0..ChordQuality::RANDOMIZED.len())]
    };

    let voicing = if quality == ChordQuality::Diminished {
        Voicing::RootPosition
    } else {
        Voicing::from_die(rng.gen_range(0..=9))
    };

    voice(ladder[degree] - OCTAVE, quality, voicing)
}

pub fn generate_genome<R: Rng + ?Sized>(length: usize, key: &KeyContext, rng: &mut R) -> Genome {
    (0..length).map(|_| generate_chord(key, rng)).collect()
}

pub fn generate_population<R: Rng + ?Sized>(
    size: usize,
    genome_length: usize,
    key: &KeyContext,
    rng: &mut R,
) -> Population {
    (0..size)
        .map(|_| generate_genome(genome_length, key, rng))
        .collect()
}
