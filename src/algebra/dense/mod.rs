mod borrowed;
pub use borrowed::*;
mod core;
mod types;
pub use self::types::*;

mod blaslike_traits;
pub use blaslike_traits::*;
pub mod blas;
pub use self::blas::*;
mod cholesky;
pub use cholesky::*;
mod settings;
pub use settings::*;

mod gemm;
mod syrk;
mod trsm;
