use accompanist::engines::generation::chord_factory::generate_genome;
use accompanist::engines::generation::genome::{Genome, ScoredGenome};
use accompanist::engines::generation::key::{Key, KeyContext};
use accompanist::engines::generation::operators::{
    crossover, crossover_at, mutate, select_pair, SelectionMethod,
};
use accompanist::types::{Chord, Mode};
use accompanist::AccompanistError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn c_major() -> KeyContext {
    KeyContext::new(Key::new(48, Mode::Major))
}

/// Genome whose chords are distinguishable by their first note.
fn tagged(len: usize, base: i32) -> Genome {
    (0..len as i32)
        .map(|i| Chord::new(base + i, base + i + 4, base + i + 7))
        .collect()
}

#[test]
fn test_crossover_at_every_point() {
    let a = tagged(6, 0);
    let b = tagged(6, 100);
    for p in 1..6 {
        let (child1, child2) = crossover_at(&a, &b, p).unwrap();
        assert_eq!(child1, [&a[..p], &b[p..]].concat());
        assert_eq!(child2, [&b[..p], &a[p..]].concat());
    }
}

#[test]
fn test_random_crossover_uses_an_interior_point() {
    let a = tagged(5, 0);
    let b = tagged(5, 100);
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let (child1, child2) = crossover(&a, &b, &mut rng);
        let p = (1..5)
            .find(|&p| crossover_at(&a, &b, p).unwrap() == (child1.clone(), child2.clone()))
            .expect("children should match some split point in 1..len");
        assert!(p >= 1 && p < 5);
    }
}

#[test]
fn test_crossover_at_rejects_out_of_range_points() {
    let a = tagged(4, 0);
    let b = tagged(4, 100);
    for point in [0, 4, 9] {
        assert!(matches!(
            crossover_at(&a, &b, point),
            Err(AccompanistError::InvalidArgument(_))
        ));
    }

    let short = tagged(2, 200);
    assert!(crossover_at(&a, &short, 2).is_err());
    assert!(crossover_at(&a, &short, 1).is_ok());
}

#[test]
fn test_crossover_short_genomes_unchanged() {
    let mut rng = StdRng::seed_from_u64(1);
    let a = tagged(1, 0);
    let b = tagged(1, 100);
    assert_eq!(crossover(&a, &b, &mut rng), (a.clone(), b.clone()));

    let empty: Genome = Vec::new();
    assert_eq!(crossover(&empty, &empty, &mut rng), (Vec::new(), Vec::new()));
}

#[test]
fn test_mutation_touches_at_most_one_locus() {
    let key = c_major();
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..300 {
        let original = generate_genome(8, &key, &mut rng);
        let mut mutated = original.clone();
        let changed = mutate(&mut mutated, &key, 0.5, &mut rng).unwrap();

        assert_eq!(mutated.len(), original.len());
        let diffs: Vec<usize> = (0..8).filter(|&i| mutated[i] != original[i]).collect();
        assert!(diffs.len() <= 1);
        if let Some(&index) = diffs.first() {
            assert_eq!(changed, Some(index));
        }
    }
}

#[test]
fn test_mutation_always_fires_at_probability_one() {
    let key = c_major();
    let mut rng = StdRng::seed_from_u64(8);
    let mut genome = generate_genome(4, &key, &mut rng);
    for _ in 0..50 {
        assert!(mutate(&mut genome, &key, 1.0, &mut rng).unwrap().is_some());
    }
}

#[test]
fn test_mutation_of_empty_genome_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut genome: Genome = Vec::new();
    let result = mutate(&mut genome, &c_major(), 0.5, &mut rng);
    assert!(matches!(result, Err(AccompanistError::InvalidArgument(_))));
}

#[test]
fn test_select_pair_draws_from_population() {
    let population: Vec<ScoredGenome> = (0..6)
        .map(|i| ScoredGenome::new(tagged(3, i * 10), i64::from(i) * 7 - 20))
        .collect();
    let mut rng = StdRng::seed_from_u64(21);

    for method in [SelectionMethod::Roulette, SelectionMethod::Rank] {
        for _ in 0..200 {
            let (g1, g2) = select_pair(&population, method, &mut rng).unwrap();
            assert!(population.iter().any(|s| s.genome == g1));
            assert!(population.iter().any(|s| s.genome == g2));
        }
    }
}

#[test]
fn test_roulette_never_picks_the_worst_when_shifted() {
    let population = vec![
        ScoredGenome::new(tagged(2, 0), -50),
        ScoredGenome::new(tagged(2, 10), -50),
        ScoredGenome::new(tagged(2, 20), 10),
    ];
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..100 {
        let (g1, g2) = select_pair(&population, SelectionMethod::Roulette, &mut rng).unwrap();
        assert_eq!(g1, population[2].genome);
        assert_eq!(g2, population[2].genome);
    }
}

#[test]
fn test_roulette_uniform_when_all_weights_zero() {
    let population = vec![
        ScoredGenome::new(tagged(2, 0), 0),
        ScoredGenome::new(tagged(2, 10), 0),
    ];
    let mut rng = StdRng::seed_from_u64(6);
    let mut picked_first = false;
    let mut picked_second = false;
    for _ in 0..100 {
        let (g1, _) = select_pair(&population, SelectionMethod::Roulette, &mut rng).unwrap();
        picked_first |= g1 == population[0].genome;
        picked_second |= g1 == population[1].genome;
    }
    assert!(picked_first && picked_second);
}

#[test]
fn test_select_from_empty_population_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let result = select_pair(&[], SelectionMethod::Roulette, &mut rng);
    assert!(matches!(result, Err(AccompanistError::InvalidArgument(_))));
}
