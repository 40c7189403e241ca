use crate::error::{CoverError, Result};
use crate::sorted;

/// Compressed incidence of candidate sets over the universe.
///
/// Set `j` owns `indices[indptr[j]..indptr[j+1]]`, which is sorted ascending and duplicate free.
/// The store is validated once on construction and immutable afterwards.
#[derive(Clone, Debug)]
pub struct IncidenceStore {
    indices: Vec<usize>,
    indptr: Vec<usize>,
    max_element: Option<usize>,
}

impl IncidenceStore {
    /// Takes ownership of the flat element buffer and the `J+1` boundary offsets.
    ///
    /// Fails with [`CoverError::InvalidInput`] if the offsets are empty, do not start at 0, decrease,
    /// do not end at `indices.len()`, or if any set's slice is unsorted or contains duplicates.
    pub fn new(indices: Vec<usize>, indptr: Vec<usize>) -> Result<IncidenceStore> {
        match indptr.first() {
            None => return Err(CoverError::invalid("indptr must contain at least one offset")),
            Some(&first) if first != 0 => {
                return Err(CoverError::invalid(format!("indptr must start at 0, found {first}")))
            }
            _ => {}
        }
        let mut max_element: Option<usize> = None;
        for j in 0..indptr.len() - 1 {
            let (lo, hi) = (indptr[j], indptr[j + 1]);
            if hi < lo {
                return Err(CoverError::invalid(format!(
                    "indptr decreases at set {j}: {lo} > {hi}"
                )));
            }
            if hi > indices.len() {
                return Err(CoverError::invalid(format!(
                    "offset {hi} of set {j} exceeds element buffer length {}",
                    indices.len()
                )));
            }
            let s = &indices[lo..hi];
            if !sorted::is_strictly_increasing(s) {
                return Err(CoverError::invalid(format!(
                    "elements of set {j} are not sorted or contain duplicates"
                )));
            }
            if let Some(&last) = s.last() {
                max_element = max_element.max(Some(last));
            }
        }
        let end = indptr[indptr.len() - 1];
        if end != indices.len() {
            return Err(CoverError::invalid(format!(
                "last offset {end} does not match element buffer length {}",
                indices.len()
            )));
        }
        Ok(IncidenceStore { indices, indptr, max_element })
    }

    /// Packs a list of sets, sorting and deduplicating each one first.
    pub fn from_sets(sets: Vec<Vec<usize>>) -> IncidenceStore {
        let nnz = sets.iter().map(|s| s.len()).sum();
        let mut indices = Vec::with_capacity(nnz);
        let mut indptr = Vec::with_capacity(sets.len() + 1);
        let mut max_element = None;
        indptr.push(0);
        for mut s in sets {
            s.sort_unstable();
            s.dedup();
            max_element = max_element.max(s.last().copied());
            indices.extend_from_slice(&s);
            indptr.push(indices.len());
        }
        IncidenceStore { indices, indptr, max_element }
    }

    pub fn set_count(&self) -> usize {
        self.indptr.len() - 1
    }

    /// Sorted elements of set `j`. Panics if `j >= set_count()`.
    #[inline(always)]
    pub fn set(&self, j: usize) -> &[usize] {
        &self.indices[self.indptr[j]..self.indptr[j + 1]]
    }

    pub fn get(&self, j: usize) -> Option<&[usize]> {
        if j < self.set_count() {
            Some(self.set(j))
        } else {
            None
        }
    }

    pub fn set_len(&self, j: usize) -> usize {
        self.indptr[j + 1] - self.indptr[j]
    }

    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    // None if every set is empty
    pub fn max_element(&self) -> Option<usize> {
        self.max_element
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        (0..self.set_count()).map(move |j| self.set(j))
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn indptr(&self) -> &[usize] {
        &self.indptr
    }
}
