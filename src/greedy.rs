use crate::error::{CoverError, Result};
use crate::incidence::IncidenceStore;
use crate::sorted::CoveredSet;
use itertools::Itertools;
use std::cmp::Ordering;
use tracing::{debug, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Debug)]
pub struct GreedyConfig {
    pub parallel: bool,
    // rounds with fewer candidates are scored sequentially
    pub min_parallel_candidates: usize,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        GreedyConfig {
            parallel: cfg!(feature = "parallel"),
            min_parallel_candidates: 512,
        }
    }
}

impl GreedyConfig {
    pub fn sequential() -> Self {
        GreedyConfig { parallel: false, ..Default::default() }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

pub fn solve(store: &IncidenceStore, weights: &[f64], n: usize) -> Result<Vec<usize>> {
    solve_with(store, weights, n, &GreedyConfig::default())
}

/// Returns the ids of the selected sets in the order they were picked.
///
/// Each round scores every remaining candidate `j` by `weights[j] / marginal(j)`, where the
/// marginal gain is the number of elements of `j` not covered yet (a set without gain scores
/// `+inf`), and takes the first candidate with the minimum score. Selected sets leave the pool
/// for good. The loop runs until all `n` elements are covered.
///
/// # Errors
/// [`CoverError::InvalidInput`] if `weights` does not have one finite, non-negative entry per set or
/// the store references an element outside `0..n`. [`CoverError::Uncoverable`] if the pool runs dry,
/// or only zero-gain candidates remain, before the universe is covered.
pub fn solve_with(store: &IncidenceStore, weights: &[f64], n: usize, config: &GreedyConfig) -> Result<Vec<usize>> {
    check_input(store, weights, n)?;
    debug!(n, sets = store.set_count(), nnz = store.nnz(), parallel = config.parallel, "starting greedy set cover");

    let mut covered = CoveredSet::with_capacity(n.min(store.nnz()));
    let mut pool: Vec<usize> = (0..store.set_count()).collect();
    let mut soln: Vec<usize> = Vec::new();
    let mut scores: Vec<f64> = Vec::with_capacity(pool.len());

    while covered.len() < n {
        score_round(store, weights, &covered, &pool, config, &mut scores);
        let best = scores
            .iter()
            .position_min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .filter(|&pos| scores[pos].is_finite());
        let Some(pos) = best else {
            warn!(covered = covered.len(), n, selected = soln.len(), "universe cannot be covered by the remaining candidates");
            return Err(CoverError::Uncoverable { covered: covered.len(), n, partial: soln });
        };
        let j = pool.remove(pos);
        let gained = covered.absorb(store.set(j));
        trace!(set = j, score = scores[pos], gained, covered = covered.len(), "selected set");
        soln.push(j);
    }

    debug!(selected = soln.len(), weight = soln.iter().map(|&j| weights[j]).sum::<f64>(), "cover complete");
    Ok(soln)
}

fn check_input(store: &IncidenceStore, weights: &[f64], n: usize) -> Result<()> {
    if weights.len() != store.set_count() {
        return Err(CoverError::invalid(format!(
            "got {} weights for {} sets",
            weights.len(),
            store.set_count()
        )));
    }
    if let Some((j, w)) = weights.iter().enumerate().find(|(_, w)| !w.is_finite() || **w < 0.0) {
        return Err(CoverError::invalid(format!("weight of set {j} is {w}, expected finite and non-negative")));
    }
    match store.max_element() {
        Some(e) if e >= n => Err(CoverError::invalid(format!("element {e} lies outside the universe 0..{n}"))),
        _ => Ok(()),
    }
}

#[inline]
fn cost_effectiveness(store: &IncidenceStore, weights: &[f64], covered: &CoveredSet, j: usize) -> f64 {
    match covered.marginal(store.set(j)) {
        0 => f64::INFINITY,
        m => weights[j] / m as f64,
    }
}

// scores[i] always belongs to pool[i], however the round was computed
#[cfg(feature = "parallel")]
fn score_round(
    store: &IncidenceStore,
    weights: &[f64],
    covered: &CoveredSet,
    pool: &[usize],
    config: &GreedyConfig,
    scores: &mut Vec<f64>,
) {
    if config.parallel && pool.len() >= config.min_parallel_candidates {
        pool.par_iter()
            .map(|&j| cost_effectiveness(store, weights, covered, j))
            .collect_into_vec(scores);
    } else {
        score_sequential(store, weights, covered, pool, scores);
    }
}

#[cfg(not(feature = "parallel"))]
fn score_round(
    store: &IncidenceStore,
    weights: &[f64],
    covered: &CoveredSet,
    pool: &[usize],
    _config: &GreedyConfig,
    scores: &mut Vec<f64>,
) {
    score_sequential(store, weights, covered, pool, scores);
}

fn score_sequential(store: &IncidenceStore, weights: &[f64], covered: &CoveredSet, pool: &[usize], scores: &mut Vec<f64>) {
    scores.clear();
    scores.extend(pool.iter().map(|&j| cost_effectiveness(store, weights, covered, j)));
}
