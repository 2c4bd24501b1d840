#![allow(non_snake_case)]

use super::core::storage_view;
use crate::algebra::*;

impl<T> MultiplyGEMM for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    // implements self = C = αA*B + βC
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: T, β: T) -> Result<&Self, DenseFactorizationError>
    where
        MATA: DenseMatrix<T = T>,
        MATB: DenseMatrix<T = T>,
    {
        if A.ncols() != B.nrows() || self.nrows() != A.nrows() || self.ncols() != B.ncols() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }

        let (Aview, transA) = storage_view(A)?;
        let (Bview, transB) = storage_view(B)?;
        gemm(transA, transB, α, Aview, Bview, β, self.try_view_mut()?)?;
        Ok(self)
    }
}

#[test]
fn test_gemm() {
    let (m, n, k) = (2, 4, 3);
    let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let b = vec![
        1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 3.0, 7.0, 11.0, 4.0, 8.0, 12.0,
    ];
    let c = vec![2.0, 7.0, 6.0, 2.0, 0.0, 7.0, 4.0, 2.0];

    let mut A = Matrix::zeros((m, k));
    let mut B = Matrix::zeros((k, n));
    let mut C = Matrix::<f64>::zeros((m, n));
    A.copy_from_slice(&a);
    B.copy_from_slice(&b);
    C.copy_from_slice(&c);
    C.mul(&A, &B, 1.0, 1.0).unwrap();

    assert!(C.data() == vec![40.0, 90.0, 50.0, 100.0, 50.0, 120.0, 60.0, 130.0]);

    // new from slice and transposed multiply
    let A = Matrix::new_from_slice((m, k), &a);
    let B = Matrix::new_from_slice((k, n), &b);
    let mut C = Matrix::<f64>::zeros((n, m));
    C.mul(&B.t(), &A.t(), 1.0, 0.0).unwrap();

    assert!(C.data() == vec![38.0, 44.0, 50.0, 56.0, 83.0, 98.0, 113.0, 128.0]);

    // inner dimensions disagree
    let mut C = Matrix::<f64>::zeros((m, n));
    assert_eq!(
        C.mul(&A, &A, 1.0, 0.0).err(),
        Some(DenseFactorizationError::IncompatibleDimension)
    );
}

#[test]
fn test_gemm_bad_format() {
    let A = Matrix::<f64>::identity(2);
    let bad = Matrix::<f64>::new((2, 2), vec![1., 0., 1.]);

    let mut C = bad.clone();
    assert_eq!(
        C.mul(&A, &A, 1.0, 0.0).err(),
        Some(DenseFactorizationError::IncompatibleDimension)
    );

    let mut C = Matrix::<f64>::zeros((2, 2));
    assert_eq!(
        C.mul(&A, &bad, 1.0, 0.0).err(),
        Some(DenseFactorizationError::IncompatibleDimension)
    );
}
