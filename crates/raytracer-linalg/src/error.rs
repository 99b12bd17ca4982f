use thiserror::Error;

/// Errors returned by fallible [`Matrix`][crate::Matrix] operations.
///
/// These indicate a violated contract at the call site (wrong shapes or indices), not a transient
/// condition, so retrying with the same arguments will fail again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operands of a multiplication have incompatible shapes.
    #[error("cannot multiply a {lhs_rows}x{lhs_columns} matrix with a {rhs_rows}x{rhs_columns} operand")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_columns: usize,
        rhs_rows: usize,
        rhs_columns: usize,
    },
    /// The operation is only defined for square matrices.
    #[error("operation requires a square matrix, got {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },
    /// A row or column index lies outside of the matrix.
    #[error("index ({row}, {col}) is out of range for a {rows}x{columns} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },
}
