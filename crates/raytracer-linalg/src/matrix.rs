use std::fmt;

use crate::{Error, Tuple};

mod ops;

/// A dense, row-major matrix of [`f64`] with `rows` rows and `columns` columns.
///
/// Unlike [`Tuple`], the dimensions of a [`Matrix`] are chosen at runtime. They are fixed at
/// construction and never change afterwards.
///
/// # Construction
///
/// - [`Matrix::zeros`] creates a matrix with every element set to 0.
/// - [`Matrix::from_rows`] fills a matrix from a literal array of rows.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::identity`] creates a square matrix with 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, col)` tuples. Indices are 0-based.
/// Indexing out of bounds panics, just like it does for slices.
///
/// ```
/// # use raytracer_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0.0, 1.0],
/// ]);
/// mat[(0, 0)] = 4.0;
/// assert_eq!(mat[(0, 0)], 4.0);
/// assert_eq!(mat[(0, 1)], 1.0);
/// ```
///
/// [`Matrix::get`] and [`Matrix::set`] perform checked access instead:
///
/// ```
/// # use raytracer_linalg::*;
/// let mut mat = Matrix::zeros(1, 2);
/// assert_eq!(mat.get(0, 1), Some(0.0));
/// assert_eq!(mat.get(0, 2), None);
/// assert!(mat.set(1, 0, 5.0).is_err());
/// ```
///
/// # Equality
///
/// Matrices of different dimensions are never equal. Matrices of the same dimensions are equal
/// when all of their elements are approximately equal (see [`approx_eq`]).
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`approx_eq`]: crate::approx::approx_eq
#[derive(Clone)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a `rows x columns` matrix with every element set to 0.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            data: vec![0.0; rows * columns],
        }
    }

    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [-3.0, 5.0, 0.0],
    ///     [1.0, -2.0, -7.0],
    /// ]);
    /// assert_eq!(mat.rows(), 2);
    /// assert_eq!(mat.columns(), 3);
    /// assert_eq!(mat[(1, 2)], -7.0);
    /// ```
    pub fn from_rows<const R: usize, const C: usize>(rows: [[f64; C]; R]) -> Self {
        Self {
            rows: R,
            columns: C,
            data: rows.into_iter().flatten().collect(),
        }
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_linalg::*;
    /// let mat = Matrix::from_fn(2, 3, |row, col| (row * 10 + col) as f64);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0.0,  1.0,  2.0],
    ///     [10.0, 11.0, 12.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(rows: usize, columns: usize, mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for col in 0..columns {
                data.push(cb(row, col));
            }
        }
        Self {
            rows,
            columns,
            data,
        }
    }

    /// Creates the `n x n` identity matrix.
    ///
    /// Multiplying any matrix or tuple with the identity matrix returns it unchanged.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |row, col| if row == col { 1.0 } else { 0.0 })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.columns).then(|| row * self.columns + col)
    }

    fn out_of_range(&self, row: usize, col: usize) -> Error {
        Error::IndexOutOfRange {
            row,
            col,
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Returns the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.offset(row, col).map(|i| self.data[i])
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        let i = self.offset(row, col)?;
        Some(&mut self.data[i])
    }

    /// Overwrites the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `(row, col)` lies outside of the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), Error> {
        let err = self.out_of_range(row, col);
        *self.get_mut(row, col).ok_or(err)? = value;
        Ok(())
    }

    /// Returns an iterator over the elements of row `row`.
    fn row(&self, row: usize) -> impl Iterator<Item = f64> + '_ {
        self.data[row * self.columns..][..self.columns].iter().copied()
    }

    /// Multiplies `self` with `rhs` (`self * rhs`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the number of columns in `self` is not equal to the
    /// number of rows in `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_linalg::*;
    /// let a = Matrix::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [2.0, 3.0, 4.0],
    /// ]);
    /// let b = Matrix::from_rows([
    ///     [0.0, 1.0],
    ///     [1.0, 2.0],
    ///     [2.0, 4.0],
    /// ]);
    /// assert_eq!(a.multiply(&b)?, Matrix::from_rows([
    ///     [8.0, 17.0],
    ///     [11.0, 24.0],
    /// ]));
    /// assert!(a.multiply(&a).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, Error> {
        if self.columns != rhs.rows {
            return Err(Error::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_columns: self.columns,
                rhs_rows: rhs.rows,
                rhs_columns: rhs.columns,
            });
        }

        Ok(Matrix::from_fn(self.rows, rhs.columns, |i, j| {
            (0..self.columns).fold(0.0, |acc, k| acc + self[(i, k)] * rhs[(k, j)])
        }))
    }

    /// Multiplies this matrix with `tuple`, treated as a column vector (`self * tuple`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless `self` is a 4x4 matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 2.0, 3.0, 4.0],
    ///     [2.0, 4.0, 4.0, 2.0],
    ///     [8.0, 6.0, 4.0, 1.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(mat.transform(point(1.0, 2.0, 3.0))?, point(18.0, 24.0, 33.0));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn transform(&self, tuple: Tuple) -> Result<Tuple, Error> {
        if self.rows != 4 || self.columns != 4 {
            return Err(Error::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_columns: self.columns,
                rhs_rows: 4,
                rhs_columns: 1,
            });
        }

        let row = |r| Tuple::from([0, 1, 2, 3].map(|c| self[(r, c)])).dot(tuple);
        Ok(Tuple::new(row(0), row(1), row(2), row(3)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0.0, 1.0, 2.0],
    ///     [3.0, 4.0, 5.0],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0.0, 3.0],
    ///     [1.0, 4.0],
    ///     [2.0, 5.0],
    /// ]));
    /// ```
    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.columns, self.rows, |row, col| self[(col, row)])
    }

    /// Returns a copy of this matrix with row `row` and column `col` removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `row` or `col` lies outside of the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 5.0, 0.0],
    ///     [-3.0, 2.0, 7.0],
    ///     [0.0, 6.0, -3.0],
    /// ]);
    /// assert_eq!(mat.submatrix(0, 2)?, Matrix::from_rows([
    ///     [-3.0, 2.0],
    ///     [0.0, 6.0],
    /// ]));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Matrix, Error> {
        if self.offset(row, col).is_none() {
            return Err(self.out_of_range(row, col));
        }

        let skip = |i, removed| if i < removed { i } else { i + 1 };
        Ok(Matrix::from_fn(self.rows - 1, self.columns - 1, |r, c| {
            self[(skip(r, row), skip(c, col))]
        }))
    }

    /// Returns the *minor* at `(row, col)`: the determinant of [`submatrix(row, col)`].
    ///
    /// [`submatrix(row, col)`]: Self::submatrix
    pub fn minor(&self, row: usize, col: usize) -> Result<f64, Error> {
        self.ensure_square()?;
        self.submatrix(row, col)?.determinant()
    }

    /// Returns the *cofactor* at `(row, col)`.
    ///
    /// This is the [minor](Self::minor), negated if `row + col` is odd.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [3.0, 5.0, 0.0],
    ///     [2.0, -1.0, -7.0],
    ///     [6.0, -1.0, 5.0],
    /// ]);
    /// assert_eq!(mat.minor(1, 0)?, 25.0);
    /// assert_eq!(mat.cofactor(1, 0)?, -25.0);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64, Error> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 1 { -minor } else { minor })
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// 2x2 matrices are computed directly. Larger matrices are expanded recursively along their
    /// first row, which takes `O(n!)` time and is only meant for small (up to 4x4) matrices.
    ///
    /// The determinant of a 1x1 matrix is its only element, and the empty matrix has a
    /// determinant of 1. This differs from a cofactor expansion that recurses all the way down to
    /// the empty matrix and treats its determinant as an empty sum: that algebra yields 0 for
    /// both, so every 1x1 matrix would be singular and its inverse NaN. Here `[[7]]` has
    /// determinant 7 and inverse `[[1/7]]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] if the matrix is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 5.0],
    ///     [-3.0, 2.0],
    /// ]);
    /// assert_eq!(mat.determinant()?, 17.0);
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> Result<f64, Error> {
        self.ensure_square()?;

        match self.rows {
            0 => Ok(1.0),
            1 => Ok(self[(0, 0)]),
            2 => Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]),
            _ => (0..self.columns).try_fold(0.0, |det, col| {
                Ok(det + self[(0, col)] * self.cofactor(0, col)?)
            }),
        }
    }

    /// Returns whether this matrix can be inverted.
    ///
    /// This compares the [determinant](Self::determinant) against exactly zero. Singular matrices
    /// whose determinant picks up a tiny non-zero rounding error are reported as invertible.
    pub fn is_invertible(&self) -> Result<bool, Error> {
        Ok(self.determinant()? != 0.0)
    }

    /// Computes the inverse of this matrix (the adjugate divided by the determinant).
    ///
    /// This does not check [`is_invertible`](Self::is_invertible) first. Inverting a singular
    /// matrix divides by zero and fills the result with infinities and NaNs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] if the matrix is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 0.0],
    ///     [0.0, 4.0],
    /// ]);
    /// assert_eq!(mat.inverse()?, Matrix::from_rows([
    ///     [0.5, 0.0],
    ///     [0.0, 0.25],
    /// ]));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn inverse(&self) -> Result<Matrix, Error> {
        let det = self.determinant()?;

        let mut inverse = Matrix::zeros(self.rows, self.columns);
        for row in 0..self.rows {
            for col in 0..self.columns {
                // Writing to `(col, row)` transposes the cofactor matrix.
                inverse[(col, row)] = self.cofactor(row, col)? / det;
            }
        }
        Ok(inverse)
    }

    fn ensure_square(&self) -> Result<(), Error> {
        if self.is_square() {
            Ok(())
        } else {
            Err(Error::NotSquare {
                rows: self.rows,
                columns: self.columns,
            })
        }
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a>(&'a Matrix, usize);
        impl fmt::Debug for FormatRow<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.row(self.1).enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..self.rows {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}
