#![allow(non_snake_case)]

use crate::algebra::*;

/// Dense Cholesky factorization engine with a reusable factor workspace.
///
/// Factors symmetric positive definite matrices as `A = LLᵀ` using the
/// blocked recursive [`potrf`] driver.
pub struct CholeskyEngine<T> {
    /// lower triangular factor (stored as square dense)
    pub L: Matrix<T>,
    /// factorization settings
    pub settings: CholeskySettings,
}

impl<T> CholeskyEngine<T>
where
    T: FloatT,
{
    pub fn new(n: usize) -> Self {
        Self::with_settings(n, CholeskySettings::default())
    }

    pub fn with_settings(n: usize, settings: CholeskySettings) -> Self {
        let L = Matrix::<T>::zeros((n, n));
        Self { L, settings }
    }

    pub fn resize(&mut self, n: usize) {
        self.L.resize((n, n));
    }
}

impl<T> FactorCholesky for CholeskyEngine<T>
where
    T: FloatT,
{
    type T = T;

    fn factor(&mut self, A: &Matrix<T>) -> Result<(), DenseFactorizationError> {
        if A.size() != self.L.size() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }
        A.check_format()?;
        self.L.check_format()?;

        // potrf factors in place, so first copy A onto our internal
        // factor matrix L.  Whichever triangle of A is referenced, it
        // goes into tril of L so that the result is always LLᵀ
        self.L.data_mut().set(T::zero());
        let n = self.L.nrows();
        for j in 0..n {
            for i in j..n {
                self.L[(i, j)] = match self.settings.uplo {
                    MatrixTriangle::Triu => A[(j, i)],
                    MatrixTriangle::Tril => A[(i, j)],
                };
            }
        }

        potrf(MatrixTriangle::Tril, self.L.try_view_mut()?, self.settings.block_size)
    }

    fn solve(&self, B: &mut Matrix<T>) -> Result<(), DenseFactorizationError> {
        if B.nrows() != self.L.nrows() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }

        // potrs equivalent : L*Y = B, then Lᵀ*X = Y
        let one = T::one();
        let L = self.L.try_view()?;
        #[rustfmt::skip]
        trsm(MatrixSide::Left, MatrixTriangle::Tril, MatrixShape::N, MatrixDiag::NonUnit, one, L, B.try_view_mut()?)?;
        #[rustfmt::skip]
        trsm(MatrixSide::Left, MatrixTriangle::Tril, MatrixShape::T, MatrixDiag::NonUnit, one, L, B.try_view_mut()?)?;

        Ok(())
    }

    fn logdet(&self) -> T {
        let n = self.L.nrows();
        let mut ld = T::zero();
        for &d in self.L.data().iter().step_by(n + 1).take(n) {
            ld += T::ln(d);
        }
        ld + ld
    }
}

macro_rules! generate_test_cholesky {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        fn $test_name() {
            #[rustfmt::skip]
            let S = Matrix::<$fxx>::from_rows(
            &[[ 8., -2., 4.],
              [-2., 12., 2.],
              [ 4.,  2., 6.]]);

            let Scopy = S.clone();

            for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
                let settings = CholeskySettingsBuilder::default().uplo(uplo).build().unwrap();
                let mut eng = CholeskyEngine::<$fxx>::with_settings(3, settings);
                assert!(eng.factor(&S).is_ok());

                // input is left intact
                assert_eq!(S, Scopy);

                let mut M = Matrix::<$fxx>::zeros((3, 3));
                M.mul(&eng.L, &eng.L.t(), 1.0, 0.0).unwrap();

                assert!(M.data().norm_inf_diff(Scopy.data()) < (1e-8 as $fxx).$tolfn());

                // now try to solve with multiple RHS
                let X = Matrix::<$fxx>::from_rows(&[
                    [1., 2.], //
                    [3., 4.], //
                    [5., 6.],
                ]);
                let mut B = Matrix::<$fxx>::from_rows(&[
                    [22., 32.], //
                    [44., 56.], //
                    [40., 52.],
                ]);

                eng.solve(&mut B).unwrap();

                assert!(B.data.norm_inf_diff(X.data()) <= (1e-12 as $fxx).$tolfn());
            }
        }
    };
}

generate_test_cholesky!(f32, test_cholesky_f32, sqrt);
generate_test_cholesky!(f64, test_cholesky_f64, abs);

macro_rules! generate_test_cholesky_logdet {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        #[allow(clippy::excessive_precision)]
        fn $test_name() {
            #[rustfmt::skip]
            let S = Matrix::<$fxx>::from_rows(
            &[[ 8., -2., 4.],
              [-2., 12., 2.],
              [ 4.,  2., 6.]]);

            let mut eng = CholeskyEngine::<$fxx>::new(3);
            assert!(eng.factor(&S).is_ok());
            let expected = 5.69035945432406 as $fxx;
            assert!((eng.logdet() - expected).abs() < (1e-10 as $fxx).$tolfn());
        }
    };
}

generate_test_cholesky_logdet!(f32, test_cholesky_logdet_f32, sqrt);
generate_test_cholesky_logdet!(f64, test_cholesky_logdet_f64, abs);

#[test]
fn test_cholesky_failures() {
    #[rustfmt::skip]
    let S = Matrix::<f64>::from_rows(
        &[[ 1., 2.],
          [ 2., 1.]]);

    let mut eng = CholeskyEngine::<f64>::new(2);
    assert_eq!(eng.factor(&S), Err(DenseFactorizationError::NotPositiveDefinite(2)));

    let S = Matrix::<f64>::identity(3);
    assert_eq!(eng.factor(&S), Err(DenseFactorizationError::IncompatibleDimension));

    // resizing the engine makes it usable for the new size
    eng.resize(3);
    assert!(eng.factor(&S).is_ok());
    assert_eq!(eng.logdet(), 0.0);

    let mut B = Matrix::<f64>::zeros((2, 1));
    assert_eq!(eng.solve(&mut B), Err(DenseFactorizationError::IncompatibleDimension));
}

#[test]
fn test_cholesky_bad_format() {
    // data length disagrees with the stated dimensions
    let bad = Matrix::<f64>::new((2, 2), vec![4., 0., 4.]);

    let mut eng = CholeskyEngine::<f64>::new(2);
    assert_eq!(eng.factor(&bad), Err(DenseFactorizationError::IncompatibleDimension));

    let S = Matrix::<f64>::from_rows(&[[4., 0.], [0., 9.]]);
    eng.factor(&S).unwrap();
    let mut B = bad.clone();
    assert_eq!(eng.solve(&mut B), Err(DenseFactorizationError::IncompatibleDimension));
    assert_eq!(B.data, vec![4., 0., 4.]);

    // a corrupted factor is caught as well
    eng.L.data.pop();
    assert_eq!(eng.factor(&S), Err(DenseFactorizationError::IncompatibleDimension));
    let mut B = Matrix::<f64>::zeros((2, 1));
    assert_eq!(eng.solve(&mut B), Err(DenseFactorizationError::IncompatibleDimension));
}

#[test]
fn test_cholesky_blocked_settings() {
    // the engine factor does not depend on the block size
    let n = 20;
    let mut S = Matrix::<f64>::zeros((n, n));
    for j in 0..n {
        for i in 0..n {
            S[(i, j)] = 1.0 / ((i + j + 1) as f64);
        }
        S[(j, j)] += 1.0;
    }

    let mut eng = CholeskyEngine::<f64>::new(n);
    eng.factor(&S).unwrap();

    for block_size in [1, 3, 8] {
        let settings = CholeskySettingsBuilder::default().block_size(block_size).build().unwrap();
        let mut eng2 = CholeskyEngine::<f64>::with_settings(n, settings);
        eng2.factor(&S).unwrap();
        assert!(eng.L.data().norm_inf_diff(eng2.L.data()) < 1e-12);
    }
}
