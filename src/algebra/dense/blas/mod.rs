// Native level-3 kernels and the recursive Cholesky factorization,
// operating on strided views.  Argument errors are reported through
// `xerbla`, which logs the offending routine and parameter position.

use crate::algebra::{DenseFactorizationError, FloatT};
use std::any::TypeId;

mod compat;
mod gemm;
mod potrf;
mod syrk;
mod trsm;

pub use compat::*;
pub use gemm::*;
pub use potrf::*;
pub use syrk::*;
pub use trsm::*;

// routine name with the reference precision prefix, e.g. STRSM for
// f32 and DTRSM for f64.  Other float types get no prefix.
fn routine_name<T: FloatT>(srname: &str) -> String {
    let prefix = if TypeId::of::<T>() == TypeId::of::<f32>() {
        "S"
    } else if TypeId::of::<T>() == TypeId::of::<f64>() {
        "D"
    } else {
        ""
    };
    format!("{prefix}{srname}")
}

/// Logs an illegal argument at position `pos` of routine `srname`
/// and returns the matching error.
pub(crate) fn xerbla<T: FloatT>(srname: &str, pos: i32) -> DenseFactorizationError {
    log::warn!(
        "On entry to {} parameter number {pos} had an illegal value",
        routine_name::<T>(srname)
    );
    DenseFactorizationError::InvalidArgument(pos)
}

#[test]
fn test_xerbla_precision_prefix() {
    assert_eq!(routine_name::<f32>("TRSM"), "STRSM");
    assert_eq!(routine_name::<f64>("POTRF2"), "DPOTRF2");

    assert_eq!(xerbla::<f32>("SYRK", 6), DenseFactorizationError::InvalidArgument(6));
    assert_eq!(xerbla::<f64>("GEMM", 9).info(), -9);
}
