//! __reclapack__ is a Rust implementation of the recursive Cholesky
//! factorization of dense symmetric positive definite matrices, together
//! with the level-3 kernels it is built from.
//!
//! For a symmetric positive definite `n x n` matrix `A`, the factorization
//! computes
//!
//! $$
//! A = U^\top U \quad \text{or} \quad A = L L^\top
//! $$
//!
//! with `U` upper or `L` lower triangular, overwriting the corresponding
//! triangle of `A`.  The matrix is split recursively into quadrants, with
//! the off diagonal block computed by a triangular solve (`trsm`) and the
//! trailing block downdated by a symmetric rank-k update (`syrk`).
//!
//! ## Features
//!
//! * __In place__: all kernels work on strided views into column major
//!   storage with an arbitrary leading dimension, so sub-blocks of larger
//!   arrays can be factored without copying.
//!
//! * __Typed arguments__: flags are enums ([`MatrixTriangle`](algebra::MatrixTriangle),
//!   [`MatrixShape`](algebra::MatrixShape), [`MatrixSide`](algebra::MatrixSide),
//!   [`MatrixDiag`](algebra::MatrixDiag)) and errors are a single
//!   [`DenseFactorizationError`](algebra::DenseFactorizationError) type.
//!
//! * __Reference compatible__: the `x`-prefixed entry points
//!   ([`XpotrfScalar`](algebra::XpotrfScalar) and friends) accept the
//!   character flags, integer dimensions and `info` status code of the
//!   reference LAPACK/BLAS routines.
//!
//! # Example
//!
//! ```
//! use reclapack::algebra::*;
//!
//! let A = Matrix::<f64>::from_rows(&[
//!     [4., 12., -16.],
//!     [12., 37., -43.],
//!     [-16., -43., 98.],
//! ]);
//!
//! let mut eng = CholeskyEngine::<f64>::new(3);
//! eng.factor(&A).unwrap();
//! assert_eq!(eng.L[(2, 2)], 3.0);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

pub mod algebra;
