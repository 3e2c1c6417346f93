use crate::error::{Result, StoreError};
use ndarray::{Array2, ArrayView1};

/// Exact brute-force inner-product index.
///
/// Vectors are stored row-major in a dense matrix; a search scores every
/// stored row against the query. O(n * dim) per query, which is the right
/// trade for corpora this size — an approximate structure can replace this
/// behind the same add/search contract without touching callers.
pub struct FlatIndex {
    dim: usize,
    rows: Array2<f32>,
}

impl FlatIndex {
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            rows: Array2::zeros((0, dim)),
        }
    }

    /// Rebuild an index from a persisted row-major buffer.
    pub fn from_flat(dim: usize, data: Vec<f32>) -> Result<Self> {
        if dim == 0 || data.len() % dim != 0 {
            return Err(StoreError::Corrupt(format!(
                "index buffer of {} floats is not a whole number of {dim}-wide rows",
                data.len()
            )));
        }
        let count = data.len() / dim;
        let rows = Array2::from_shape_vec((count, dim), data)
            .map_err(|e| StoreError::Corrupt(format!("index buffer shape: {e}")))?;
        Ok(Self { dim, rows })
    }

    /// Append vectors in order. Every row must match the index dimension;
    /// the check runs over the whole batch before anything is appended.
    pub fn add_batch(&mut self, vectors: &[Vec<f32>]) -> Result<()> {
        for vector in vectors {
            if vector.len() != self.dim {
                return Err(StoreError::DimensionMismatch {
                    expected: self.dim,
                    actual: vector.len(),
                });
            }
        }
        for vector in vectors {
            self.rows
                .push_row(ArrayView1::from(vector.as_slice()))
                .map_err(|e| StoreError::Corrupt(format!("index append: {e}")))?;
        }
        Ok(())
    }

    /// Score every stored vector against `query` by inner product and return
    /// up to `k` `(row, score)` pairs, best first. Never pads.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(usize, f32)>> {
        if query.len() != self.dim {
            return Err(StoreError::DimensionMismatch {
                expected: self.dim,
                actual: query.len(),
            });
        }

        let query = ArrayView1::from(query);
        let scores = self.rows.dot(&query);

        let mut ranked: Vec<(usize, f32)> = scores.into_iter().enumerate().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(k);

        Ok(ranked)
    }

    /// Drop rows from the tail, back down to `len` rows.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len() {
            self.rows = self.rows.slice(ndarray::s![..len, ..]).to_owned();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.nrows()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// Row-major copy of the stored vectors, for persistence.
    #[must_use]
    pub fn to_flat(&self) -> Vec<f32> {
        self.rows.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_search_ranks_by_inner_product() {
        let mut index = FlatIndex::new(3);
        index
            .add_batch(&[
                vec![1.0, 0.0, 0.0],
                vec![0.9, 0.1, 0.0],
                vec![0.0, 1.0, 0.0],
            ])
            .unwrap();
        assert_eq!(index.len(), 3);

        let results = index.search(&[1.0, 0.0, 0.0], 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, 0);
        assert!((results[0].1 - 1.0).abs() < 1e-6);
        assert_eq!(results[1].0, 1);
        assert!((results[1].1 - 0.9).abs() < 1e-6);
    }

    #[test]
    fn k_beyond_len_returns_all_rows() {
        let mut index = FlatIndex::new(2);
        index
            .add_batch(&[vec![1.0, 0.0], vec![0.0, 1.0]])
            .unwrap();

        let results = index.search(&[1.0, 0.0], 5).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn rejects_wrong_width_rows_without_partial_append() {
        let mut index = FlatIndex::new(3);
        let result = index.add_batch(&[vec![1.0, 0.0, 0.0], vec![1.0, 0.0]]);
        assert!(matches!(
            result,
            Err(StoreError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
        // Whole-batch validation runs first, so nothing was appended.
        assert!(index.is_empty());

        let result = index.search(&[1.0, 0.0], 1);
        assert!(matches!(result, Err(StoreError::DimensionMismatch { .. })));
    }

    #[test]
    fn flat_round_trip_preserves_rows() {
        let mut index = FlatIndex::new(2);
        index
            .add_batch(&[vec![1.0, 2.0], vec![3.0, 4.0]])
            .unwrap();

        let rebuilt = FlatIndex::from_flat(2, index.to_flat()).unwrap();
        assert_eq!(rebuilt.len(), 2);
        assert_eq!(rebuilt.to_flat(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn from_flat_rejects_ragged_buffers() {
        assert!(FlatIndex::from_flat(3, vec![1.0, 2.0]).is_err());
        assert!(FlatIndex::from_flat(0, vec![]).is_err());
    }

    #[test]
    fn truncate_drops_tail_rows() {
        let mut index = FlatIndex::new(1);
        index
            .add_batch(&[vec![1.0], vec![2.0], vec![3.0]])
            .unwrap();
        index.truncate(1);
        assert_eq!(index.len(), 1);
        assert_eq!(index.to_flat(), vec![1.0]);
    }
}
