use thiserror::Error;

/// Error type returned by the dense kernels and factorizations.
///
/// Argument errors carry the 1-based position of the offending
/// parameter in the reference calling sequence of the routine that
/// rejected it, so that [`info`](DenseFactorizationError::info) can
/// reproduce the reference integer status code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenseFactorizationError {
    /// Parameter at this (1-based) position had an illegal value
    #[error("Parameter number {0} had an illegal value")]
    InvalidArgument(i32),
    /// The leading minor of this order is not positive definite
    #[error("Leading minor of order {0} is not positive definite")]
    NotPositiveDefinite(usize),
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
}

impl DenseFactorizationError {
    /// Reference-style status code: `-i` for a bad parameter `i`,
    /// `+i` for a failed leading minor of order `i`.
    pub fn info(&self) -> i32 {
        match *self {
            DenseFactorizationError::InvalidArgument(pos) => -pos,
            DenseFactorizationError::NotPositiveDefinite(minor) => {
                i32::try_from(minor).unwrap_or(i32::MAX)
            }
            DenseFactorizationError::IncompatibleDimension => -1,
        }
    }

    /// Shifts a minor index reported by a trailing sub-block back
    /// into the numbering of the enclosing matrix.
    pub(crate) fn offset_minor(self, offset: usize) -> Self {
        match self {
            DenseFactorizationError::NotPositiveDefinite(minor) => {
                DenseFactorizationError::NotPositiveDefinite(minor + offset)
            }
            other => other,
        }
    }
}

/// Reference status code for a kernel result, with `0` meaning success.
pub fn info_code(result: Result<(), DenseFactorizationError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => e.info(),
    }
}

#[test]
fn test_info_codes() {
    assert_eq!(info_code(Ok(())), 0);
    assert_eq!(info_code(Err(DenseFactorizationError::InvalidArgument(4))), -4);
    assert_eq!(info_code(Err(DenseFactorizationError::NotPositiveDefinite(3))), 3);

    let e = DenseFactorizationError::NotPositiveDefinite(2).offset_minor(5);
    assert_eq!(e, DenseFactorizationError::NotPositiveDefinite(7));
    let e = DenseFactorizationError::InvalidArgument(2).offset_minor(5);
    assert_eq!(e, DenseFactorizationError::InvalidArgument(2));
}
