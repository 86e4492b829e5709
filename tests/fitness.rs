use accompanist::engines::evaluation::{fitness, same_pitch_class, FitnessEvaluator};
use accompanist::types::{Chord, MelodyEvent};

fn two_note_melody() -> Vec<MelodyEvent> {
    vec![
        MelodyEvent::note_on(60, 0),
        MelodyEvent::note_off(60, 10),
        MelodyEvent::note_on(64, 0),
        MelodyEvent::note_off(64, 10),
    ]
}

#[test]
fn test_worked_example() {
    let genome = vec![Chord::new(48, 52, 55), Chord::new(50, 54, 57)];
    // Slot 1: C over C major, shared pitch class (+5)
    // Slot 2: E over D-F#-A, clashes (-50)
    assert_eq!(fitness(&genome, 10, &two_note_melody()), -45);
}

#[test]
fn test_evaluator_is_pure() {
    let melody = two_note_melody();
    let evaluator = FitnessEvaluator::new(10, &melody);
    let genome = vec![Chord::new(48, 52, 55), Chord::new(45, 48, 52)];

    let first = evaluator.evaluate(&genome);
    let second = evaluator.evaluate(&genome);
    assert_eq!(first, second);
    assert_eq!(first, fitness(&genome, 10, &melody));
    // E over A minor shares E, no clash
    assert_eq!(first, 10);
}

#[test]
fn test_slots_after_melody_score_zero() {
    let melody = two_note_melody();
    let short = vec![Chord::new(48, 52, 55), Chord::new(45, 48, 52)];
    let mut long = short.clone();
    long.extend([Chord::new(47, 50, 53); 4]);

    assert_eq!(fitness(&short, 10, &melody), fitness(&long, 10, &melody));
}

#[test]
fn test_long_slot_scores_every_note_against_one_chord() {
    let melody = two_note_melody();
    let genome = vec![Chord::new(48, 52, 55), Chord::new(47, 50, 53)];
    // One slot of 20 ticks holds both notes; the second chord hears nothing
    assert_eq!(fitness(&genome, 20, &melody), 10);
}

#[test]
fn test_empty_inputs() {
    assert_eq!(fitness(&[], 10, &two_note_melody()), 0);
    assert_eq!(fitness(&[Chord::new(48, 52, 55)], 10, &[]), 0);
}

#[test]
fn test_every_dissonant_interval_is_penalized_once() {
    for interval in [1, 2, 6, 10, 11] {
        let melody = vec![MelodyEvent::note_on(60 + interval, 0), MelodyEvent::note_off(60 + interval, 4)];
        // Unison-only "chord" so only the one interval is in play
        let genome = vec![Chord::new(48, 48, 48)];
        assert_eq!(fitness(&genome, 4, &melody), -50, "interval {}", interval);
    }
    for interval in [0, 3, 4, 5, 7, 8, 9] {
        let melody = vec![MelodyEvent::note_off(60 + interval, 4)];
        let genome = vec![Chord::new(48, 48, 48)];
        let expected = if interval == 0 { 5 } else { 0 };
        assert_eq!(fitness(&genome, 4, &melody), expected, "interval {}", interval);
    }
}

#[test]
fn test_pitch_class_equality_handles_negative_differences() {
    for a in -30..30 {
        for b in -30..30 {
            assert_eq!(same_pitch_class(a, b), (a - b).rem_euclid(12) == 0);
        }
    }
}

#[test]
fn test_several_clashing_tones_cost_one_penalty() {
    // C# against C, D and C an octave up: three dissonant tones, one note-off
    let melody = vec![MelodyEvent::note_on(61, 0), MelodyEvent::note_off(61, 4)];
    let genome = vec![Chord::new(60, 62, 72)];
    assert_eq!(fitness(&genome, 4, &melody), -50);

    // Clash and shared pitch class on the same note both fire, once each
    let genome = vec![Chord::new(49, 60, 62)];
    assert_eq!(fitness(&genome, 4, &melody), -45);
}
