use itertools::{EitherOrBoth, Itertools};
use std::cmp::Ordering;

// Below this ratio of |a| to |b| a merge scan beats binary searching b per element of a.
const GALLOP_RATIO: usize = 16;

pub fn is_strictly_increasing(s: &[usize]) -> bool {
    s.iter().tuple_windows().all(|(a, b)| a < b)
}

/// Number of elements of `a` that are not in `b`. Both slices must be sorted and duplicate free.
/// Nothing is allocated.
#[inline]
pub fn difference_len(a: &[usize], b: &[usize]) -> usize {
    if b.is_empty() {
        return a.len();
    }
    if a.len().saturating_mul(GALLOP_RATIO) < b.len() {
        let mut rest = b;
        let mut count = 0;
        for x in a.iter() {
            let i = rest.partition_point(|y| y < x);
            if i < rest.len() && rest[i] == *x {
                rest = &rest[i + 1..];
            } else {
                count += 1;
                rest = &rest[i..];
            }
        }
        return count;
    }
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() {
        if j == b.len() {
            return count + a.len() - i;
        }
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                count += 1;
                i += 1;
            }
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            Ordering::Greater => j += 1,
        }
    }
    count
}

pub fn difference(a: &[usize], b: &[usize]) -> Vec<usize> {
    a.iter()
        .merge_join_by(b.iter(), |x, y| x.cmp(y))
        .filter_map(|e| match e {
            EitherOrBoth::Left(x) => Some(*x),
            _ => None,
        })
        .collect()
}

/// The elements covered so far by a solve. Kept sorted and duplicate free.
#[derive(Clone, Debug, Default)]
pub struct CoveredSet {
    elems: Vec<usize>,
}

impl CoveredSet {
    pub fn new() -> CoveredSet {
        CoveredSet { elems: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> CoveredSet {
        CoveredSet { elems: Vec::with_capacity(n) }
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.elems
    }

    pub fn contains(&self, e: usize) -> bool {
        self.elems.binary_search(&e).is_ok()
    }

    #[inline]
    pub fn marginal(&self, s: &[usize]) -> usize {
        difference_len(s, &self.elems)
    }

    /// Adds the sorted slice `s` and returns the number of newly covered elements.
    pub fn absorb(&mut self, s: &[usize]) -> usize {
        let fresh = difference(s, &self.elems);
        if fresh.is_empty() {
            return 0;
        }
        let old = self.elems.len();
        self.elems.extend_from_slice(&fresh);
        let (mut i, mut j) = (old, fresh.len());
        let mut k = self.elems.len();
        // invariant: k == i + j
        while j > 0 {
            k -= 1;
            if i > 0 && self.elems[i - 1] > fresh[j - 1] {
                self.elems[k] = self.elems[i - 1];
                i -= 1;
            } else {
                self.elems[k] = fresh[j - 1];
                j -= 1;
            }
        }
        fresh.len()
    }
}
