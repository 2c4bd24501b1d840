// Vector operations used by the dense kernels.  These are implemented
// on slices so that kernels can work directly on matrix columns.

/// Vector operations on slices of [FloatT](crate::algebra::FloatT)
pub trait VectorMath {
    type T;

    /// Apply an elementwise operation on a vector.
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// Set all elements to a constant value.
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// Infinity norm
    fn norm_inf(&self) -> Self::T;

    /// Infinity norm of the difference between `self` and `b`
    fn norm_inf_diff(&self, b: &Self) -> Self::T;

    /// BLAS-like shift in place.  Produces `self = a*x+self`
    fn axpy(&mut self, a: Self::T, x: &Self) -> &mut Self;
}
