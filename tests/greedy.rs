use greedy_cover::{cover_weight, is_cover, solve, solve_with, CoverError, GreedyConfig, IncidenceStore};
use greedy_cover::sorted::CoveredSet;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random instance over `0..n` that is guaranteed coverable: every element is put into at least one set.
fn random_instance(rng: &mut StdRng, n: usize, sets: usize) -> (IncidenceStore, Vec<f64>) {
    let mut raw: Vec<Vec<usize>> = vec![Vec::new(); sets];
    for e in 0..n {
        raw[rng.gen_range(0..sets)].push(e);
    }
    for s in raw.iter_mut() {
        let extra = rng.gen_range(0..=n / 2);
        for _ in 0..extra {
            s.push(rng.gen_range(0..n));
        }
    }
    // integer weights make ties likely
    let weights = (0..sets).map(|_| rng.gen_range(0..6) as f64).collect();
    (IncidenceStore::from_sets(raw), weights)
}

fn harmonic(k: usize) -> f64 {
    (1..=k).map(|i| 1.0 / i as f64).sum()
}

fn optimum(store: &IncidenceStore, weights: &[f64], n: usize) -> f64 {
    let j = store.set_count();
    let mut best = f64::INFINITY;
    for mask in 0u32..(1 << j) {
        let sel = (0..j).filter(|b| mask & (1 << b) != 0).collect_vec();
        if is_cover(store, n, &sel) {
            best = best.min(cover_weight(weights, &sel));
        }
    }
    best
}

#[test]
fn scenario_two_halves() {
    let store = IncidenceStore::new(vec![0, 1, 2, 2, 3, 4, 0, 1, 2, 3, 4], vec![0, 3, 6, 11]).unwrap();
    let weights = [3.0, 3.0, 10.0];
    let soln = solve(&store, &weights, 5).unwrap();
    assert_eq!(soln, vec![0, 1]);
    assert_eq!(cover_weight(&weights, &soln), 6.0);
}

#[test]
fn scenario_one_big_set() {
    let store = IncidenceStore::new(vec![0, 1, 2, 3, 0, 1, 2, 3], vec![0, 2, 4, 8]).unwrap();
    let weights = [1.0, 1.0, 1.0];
    let soln = solve(&store, &weights, 4).unwrap();
    assert_eq!(soln, vec![2]);
    assert_eq!(cover_weight(&weights, &soln), 1.0);
}

#[test]
fn scenario_missing_element() {
    let store = IncidenceStore::from_sets(vec![vec![0, 1], vec![1, 2, 3], vec![3]]);
    match solve(&store, &[1.0, 1.0, 1.0], 5) {
        Err(CoverError::Uncoverable { covered, n, partial }) => {
            assert_eq!((covered, n), (4, 5));
            assert!(!is_cover(&store, 5, &partial));
        }
        other => panic!("expected uncoverable, got {other:?}"),
    }
}

#[test]
fn random_covers_are_valid_and_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let n = rng.gen_range(0..60);
        let sets = rng.gen_range(1..40);
        let (store, weights) = random_instance(&mut rng, n, sets);
        let soln = solve_with(&store, &weights, n, &GreedyConfig::sequential()).unwrap();

        assert!(is_cover(&store, n, &soln));
        assert!(soln.iter().all(|&j| j < sets));
        assert!(soln.iter().all_unique());
        assert_eq!(soln, solve(&store, &weights, n).unwrap());

        // every selection strictly grows the covered elements
        let mut covered = CoveredSet::new();
        for &j in soln.iter() {
            let before = covered.len();
            covered.absorb(store.set(j));
            assert!(covered.len() > before);
        }
        assert_eq!(covered.as_slice(), (0..n).collect_vec().as_slice());
    }
}

#[test]
fn random_covers_respect_harmonic_bound() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let n = rng.gen_range(1..16);
        let sets = rng.gen_range(1..11);
        let (store, weights) = random_instance(&mut rng, n, sets);
        let soln = solve(&store, &weights, n).unwrap();
        let largest = store.iter().map(|s| s.len()).max().unwrap_or(0);
        let opt = optimum(&store, &weights, n);
        assert!(cover_weight(&weights, &soln) <= harmonic(largest) * opt + 1e-9);
    }
}

#[test]
fn random_uncoverable_universes_fail() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let n = rng.gen_range(2..40);
        let sets = rng.gen_range(1..20);
        let (store, weights) = random_instance(&mut rng, n, sets);
        // a universe one element larger than anything the sets reach
        match solve(&store, &weights, n + 1) {
            Err(CoverError::Uncoverable { covered, partial, .. }) => {
                assert_eq!(covered, n);
                assert!(is_cover(&store, n, &partial));
            }
            other => panic!("expected uncoverable, got {other:?}"),
        }
    }
}
