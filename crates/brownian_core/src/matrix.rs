//! Dense path matrices.
//!
//! # Memory Layout
//!
//! Values are stored in row-major order, one row per path:
//! `data[row * n_cols + col]`. For X and S, column 0 holds the initial
//! level and column `n_steps` the terminal one.

/// Row-major `n_rows × n_cols` matrix of `f64`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    data: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl PathMatrix {
    /// Creates a zero-filled matrix.
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            data: vec![0.0; n_rows * n_cols],
            n_rows,
            n_cols,
        }
    }

    /// Wraps row-major data.
    ///
    /// Returns `None` if `data.len() != n_rows * n_cols`.
    pub fn from_row_major(n_rows: usize, n_cols: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == n_rows * n_cols).then_some(Self {
            data,
            n_rows,
            n_cols,
        })
    }

    /// Returns the number of rows (paths).
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns (time points or steps).
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns `(n_rows, n_cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.n_rows && col < self.n_cols);
        self.data[row * self.n_cols + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.n_cols + col] = value;
    }

    /// Returns one row (one path) as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.n_cols;
        &self.data[start..start + self.n_cols]
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks_exact panics on zero; an empty matrix has no rows to yield
        self.data.chunks_exact(self.n_cols.max(1)).take(self.n_rows)
    }

    /// Copies one column (one time point across all paths).
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.n_rows).map(|row| self.get(row, col)).collect()
    }

    /// Copies the last column (terminal values).
    pub fn terminal(&self) -> Vec<f64> {
        match self.n_cols {
            0 => Vec::new(),
            n => self.column(n - 1),
        }
    }

    /// Returns the raw row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Applies `f` element-wise, producing a new matrix of the same shape.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            data: self.data.iter().map(|&v| f(v)).collect(),
            n_rows: self.n_rows,
            n_cols: self.n_cols,
        }
    }

    /// Returns the minimum and maximum over all elements.
    ///
    /// Returns `None` for an empty matrix.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PathMatrix {
        PathMatrix::from_row_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
    }

    #[test]
    fn test_shape_and_access() {
        let m = sample();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_columns() {
        let m = sample();
        assert_eq!(m.column(1), vec![2.0, 5.0]);
        assert_eq!(m.terminal(), vec![3.0, 6.0]);
    }

    #[test]
    fn test_rows_iterator() {
        let m = sample();
        let rows: Vec<&[f64]> = m.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_row_major_rejects_bad_length() {
        assert!(PathMatrix::from_row_major(2, 2, vec![1.0; 3]).is_none());
    }

    #[test]
    fn test_map_and_min_max() {
        let m = sample().map(|v| -v);
        assert_eq!(m.get(1, 2), -6.0);
        assert_eq!(m.min_max(), Some((-6.0, -1.0)));
        assert_eq!(PathMatrix::zeros(0, 0).min_max(), None);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds() {
        sample().get(2, 0);
    }
}
