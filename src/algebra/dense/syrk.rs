#![allow(non_snake_case)]

use super::core::storage_view;
use crate::algebra::*;

impl<T> MultiplySYRK for Matrix<T>
where
    T: FloatT,
{
    type T = T;

    // implements self = C = αA*A' + βC
    fn syrk<MATA>(&mut self, A: &MATA, α: T, β: T) -> Result<&Self, DenseFactorizationError>
    where
        MATA: DenseMatrix<T = T>,
    {
        if self.nrows() != A.nrows() || self.ncols() != A.nrows() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }

        let (Aview, transA) = storage_view(A)?;
        syrk(MatrixTriangle::Triu, transA, α, Aview, β, self.try_view_mut()?)?;
        Ok(self)
    }
}

#[test]
fn test_syrk() {
    let (m, n) = (2, 3);
    let A = Matrix::from_rows(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);

    let mut AAt = Matrix::<f64>::zeros((m, m));
    AAt.syrk(&A, 1.0, 0.0).unwrap();

    //NB: writes to upper triangle only
    let AAt_test = Matrix::from_rows(&[
        [14., 32.], //
        [0., 77.],  //
    ]);

    assert_eq!(AAt, AAt_test);

    let mut AtA = Matrix::<f64>::zeros((n, n));
    AtA.data_mut().fill(1.0);
    AtA.syrk(&A.t(), 2.0, 1.0).unwrap();

    //NB: writes to upper triangle only
    let AtA_test = Matrix::from_rows(&[
        [35., 45., 55.], //
        [1., 59., 73.],  //
        [1., 1., 91.],   //
    ]);

    assert_eq!(AtA, AtA_test);

    // wrong output size
    let mut C = Matrix::<f64>::zeros((n, n));
    assert_eq!(
        C.syrk(&A, 1.0, 0.0).err(),
        Some(DenseFactorizationError::IncompatibleDimension)
    );
}

#[test]
fn test_syrk_bad_format() {
    let A = Matrix::<f64>::identity(2);
    let bad = Matrix::<f64>::new((2, 2), vec![1., 0., 1.]);

    let mut C = bad.clone();
    assert_eq!(
        C.syrk(&A, 1.0, 0.0).err(),
        Some(DenseFactorizationError::IncompatibleDimension)
    );

    let mut C = Matrix::<f64>::zeros((2, 2));
    assert_eq!(
        C.syrk(&bad.t(), 1.0, 0.0).err(),
        Some(DenseFactorizationError::IncompatibleDimension)
    );
}
