//! Dense linear algebra types and kernels.
//!
//! Matrices are stored in column major format, either as an owned
//! [`Matrix`] or as a borrowed [`StridedMatrix`] / [`StridedMatrixMut`]
//! window into existing storage.  The native kernels in [`blas`] work
//! on borrowed views, so that the recursive factorizations can operate
//! on sub-blocks in place.

mod error_types;
mod floats;
mod matrix_traits;
mod matrix_types;
mod traits;
mod vecmath;

pub use error_types::*;
pub use floats::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub use traits::*;

mod dense;
pub use dense::*;
