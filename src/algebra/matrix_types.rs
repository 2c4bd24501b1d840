// Flag types for the dense kernels.  Each replaces one of the
// single character arguments of the reference BLAS/LAPACK calling
// convention.  Conversions to and from those characters are provided
// for the reference-compatible entry points in `dense::blas::compat`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

/// Matrix shape marker for triangular matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatrixTriangle {
    /// Upper triangular matrix
    #[default]
    Triu,
    /// Lower triangular matrix
    Tril,
}

/// Side on which a triangular operand is applied
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatrixSide {
    /// op(A)*X = αB
    Left,
    /// X*op(A) = αB
    Right,
}

/// Diagonal marker for triangular matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatrixDiag {
    /// Diagonal entries are read from the matrix
    NonUnit,
    /// Diagonal entries are assumed to be one and never read
    Unit,
}

impl MatrixShape {
    pub fn as_blas_char(&self) -> u8 {
        match self {
            MatrixShape::N => b'N',
            MatrixShape::T => b'T',
        }
    }
    /// Parses a reference transpose character.  'C' is the
    /// conjugate transpose, which is a plain transpose for real data.
    pub fn from_blas_char(c: u8) -> Option<Self> {
        match c.to_ascii_uppercase() {
            b'N' => Some(MatrixShape::N),
            b'T' | b'C' => Some(MatrixShape::T),
            _ => None,
        }
    }
}

impl MatrixTriangle {
    pub fn as_blas_char(&self) -> u8 {
        match self {
            MatrixTriangle::Triu => b'U',
            MatrixTriangle::Tril => b'L',
        }
    }
    pub fn from_blas_char(c: u8) -> Option<Self> {
        match c.to_ascii_uppercase() {
            b'U' => Some(MatrixTriangle::Triu),
            b'L' => Some(MatrixTriangle::Tril),
            _ => None,
        }
    }
}

impl MatrixSide {
    pub fn as_blas_char(&self) -> u8 {
        match self {
            MatrixSide::Left => b'L',
            MatrixSide::Right => b'R',
        }
    }
    pub fn from_blas_char(c: u8) -> Option<Self> {
        match c.to_ascii_uppercase() {
            b'L' => Some(MatrixSide::Left),
            b'R' => Some(MatrixSide::Right),
            _ => None,
        }
    }
}

impl MatrixDiag {
    pub fn as_blas_char(&self) -> u8 {
        match self {
            MatrixDiag::NonUnit => b'N',
            MatrixDiag::Unit => b'U',
        }
    }
    pub fn from_blas_char(c: u8) -> Option<Self> {
        match c.to_ascii_uppercase() {
            b'N' => Some(MatrixDiag::NonUnit),
            b'U' => Some(MatrixDiag::Unit),
            _ => None,
        }
    }
}

#[test]
fn test_blas_char_parsing() {
    assert_eq!(MatrixTriangle::from_blas_char(b'u'), Some(MatrixTriangle::Triu));
    assert_eq!(MatrixTriangle::from_blas_char(b'L'), Some(MatrixTriangle::Tril));
    assert_eq!(MatrixTriangle::from_blas_char(b'X'), None);

    assert_eq!(MatrixShape::from_blas_char(b'c'), Some(MatrixShape::T));
    assert_eq!(MatrixShape::from_blas_char(b'n'), Some(MatrixShape::N));
    assert_eq!(MatrixShape::from_blas_char(b'U'), None);

    assert_eq!(MatrixSide::from_blas_char(b'r'), Some(MatrixSide::Right));
    assert_eq!(MatrixSide::from_blas_char(b'N'), None);

    assert_eq!(MatrixDiag::from_blas_char(b'u'), Some(MatrixDiag::Unit));
    assert_eq!(MatrixDiag::from_blas_char(b'T'), None);

    for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
        assert_eq!(MatrixTriangle::from_blas_char(uplo.as_blas_char()), Some(uplo));
    }
}
