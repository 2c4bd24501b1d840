use super::{FloatT, VectorMath};
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;
    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.scalarop(|_x| c)
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    // Returns infinity norm, or NaN if any entry is NaN
    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for v in self.iter().map(|v| v.abs()) {
            if v.is_nan() {
                return T::nan();
            }
            out = if v > out { v } else { out };
        }
        out
    }

    // max absolute difference (used for unit testing)
    fn norm_inf_diff(&self, b: &[T]) -> T {
        assert_eq!(self.len(), b.len());
        zip(self, b).fold(T::zero(), |acc, (x, y)| T::max(acc, T::abs(*x - *y)))
    }

    fn axpy(&mut self, a: T, x: &[T]) -> &mut Self {
        assert_eq!(self.len(), x.len());
        zip(&mut *self, x).for_each(|(y, x)| *y += a * (*x));
        self
    }
}

#[test]
fn test_set_and_scale() {
    let mut x = vec![1.0, 2.0, 3.0];
    x.scale(2.0);
    assert_eq!(x, vec![2.0, 4.0, 6.0]);
    x.set(-1.0);
    assert_eq!(x, vec![-1.0, -1.0, -1.0]);
}

#[test]
fn test_norm_inf() {
    let x = [-3., 4., -12.];
    assert_eq!(x.norm_inf(), 12.);
    assert!([1., f64::NAN].norm_inf().is_nan());
    assert_eq!(x.norm_inf_diff(&[-3., 4., -10.]), 2.);
}

#[test]
fn test_axpy() {
    let x = vec![1., 2., 3.];
    let mut y = vec![4., 5., 6.];
    y.axpy(-2., &x);
    assert_eq!(y, vec![2., 1., 0.]);
}
