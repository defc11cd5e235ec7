//! Matrix type for problem-by-solver numeric data.

use serde::{Deserialize, Serialize};

/// Dense row-major grid: one row per problem, one column per solver.
///
/// # Examples
///
/// ```
/// use perfprof::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 4.0, -1.0]).expect("2x2 data");
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.row(1), &[4.0, -1.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Wrap `data`, laid out problem by problem.
    ///
    /// # Errors
    ///
    /// Fails when `data` does not hold exactly `rows * cols` cells.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, &'static str> {
        match rows.checked_mul(cols) {
            Some(cells) if cells == data.len() => Ok(Self { data, rows, cols }),
            _ => Err("cell count does not match rows x cols"),
        }
    }

    /// Every cell set to `value`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// `(problems, solvers)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Problem count
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Solver count
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(col < self.cols, "column {col} out of {}", self.cols);
        row * self.cols + col
    }

    /// Cell of `row`, `col`. Panics outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.offset(row, col)]
    }

    /// Overwrite one cell. Panics outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let at = self.offset(row, col);
        self.data[at] = value;
    }

    /// All cells of one problem.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Problem rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    /// One solver's cells, copied out in problem order.
    #[must_use]
    pub fn column(&self, col: usize) -> Vec<T> {
        self.rows().map(|row| row[col]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        assert!(Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_row_and_column_access() {
        let m: Matrix<f64> = Matrix::from_vec(3, 2, vec![1.0, 2.0, 4.0, -1.0, 5.0, 5.0]).unwrap();
        assert_eq!(m.row(1), &[4.0, -1.0]);
        assert_eq!(m.column(1), vec![2.0, -1.0, 5.0]);
        assert!((m.get(2, 0) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rows_iterator_yields_every_row() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[i32]> = m.rows().collect();
        assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
    }

    #[test]
    fn test_filled_and_set() {
        let mut m = Matrix::filled(2, 2, 0usize);
        m.set(1, 0, 7);
        assert_eq!(m.row(0), &[0, 0]);
        assert_eq!(m.row(1), &[7, 0]);
    }
}
