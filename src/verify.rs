use crate::incidence::IncidenceStore;
use bit_set::BitSet;

/// Checks whether the sets in `selection` together cover exactly `0..n`.
///
/// Unknown set ids or elements outside the universe make the selection invalid.
pub fn is_cover(store: &IncidenceStore, n: usize, selection: &[usize]) -> bool {
    let mut hit = BitSet::with_capacity(store.max_element().map_or(0, |e| e + 1).min(n));
    for j in selection.iter().cloned() {
        let Some(s) = store.get(j) else { return false };
        for e in s.iter().cloned() {
            if e >= n {
                return false;
            }
            hit.insert(e);
        }
    }
    hit.len() == n
}

/// Sum of the weights of `selection`. Panics on a set id without a weight, like slice indexing.
pub fn cover_weight(weights: &[f64], selection: &[usize]) -> f64 {
    selection.iter().map(|&j| weights[j]).sum()
}
