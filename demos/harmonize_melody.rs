use accompanist::config::AppConfig;
use accompanist::data::MelodyTrack;
use accompanist::engines::generation::{CancellationToken, ConsoleProgressCallback, Key};
use accompanist::services::{HarmonizeOutcome, Harmonizer};
use accompanist::types::Mode;
use std::env;

const TICKS_PER_BEAT: u32 = 384;

/// "Twinkle, Twinkle, Little Star", first phrase, in C major.
fn twinkle() -> Vec<(i32, u32)> {
    let q = TICKS_PER_BEAT;
    let h = TICKS_PER_BEAT * 2;
    vec![
        (60, q), (60, q), (67, q), (67, q),
        (69, q), (69, q), (67, h),
        (65, q), (65, q), (64, q), (64, q),
        (62, q), (62, q), (60, h),
    ]
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional args: config path, then generations
    let args: Vec<String> = env::args().collect();
    let mut config = match args.get(1) {
        Some(path) => AppConfig::load_layered(path)?,
        None => AppConfig::default(),
    };
    if let Some(generations) = args.get(2).and_then(|s| s.parse().ok()) {
        config.evolution.num_generations = generations;
    }

    let melody = MelodyTrack::from_notes(TICKS_PER_BEAT, &twinkle())?;
    let key = Key::from_tonic_name("C", Mode::Major)?;
    let harmonizer = Harmonizer::new(config)?;

    let outcome = harmonizer.harmonize(
        key,
        &melody,
        ConsoleProgressCallback::default(),
        &CancellationToken::new(),
    )?;

    match outcome {
        HarmonizeOutcome::Completed(accompaniment) => {
            println!("Best fitness: {}", accompaniment.fitness());
            for (slot, chord) in accompaniment.chords().iter().enumerate() {
                println!("  slot {:>2}: {:?}", slot, chord.notes());
            }
            println!("{} accompaniment events rendered", accompaniment.events.len());
        }
        HarmonizeOutcome::Aborted {
            completed_generations,
        } => {
            println!("Aborted after {} generations", completed_generations);
        }
    }

    Ok(())
}
