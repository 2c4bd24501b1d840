#![allow(non_snake_case)]

use crate::algebra::*;

impl<T> SolveTriangular for Matrix<T>
where
    T: FloatT,
{
    type T = T;

    // implements self = B := α op(A)⁻¹ B  or  α B op(A)⁻¹
    fn trsm(
        &mut self,
        side: MatrixSide,
        uplo: MatrixTriangle,
        trans: MatrixShape,
        diag: MatrixDiag,
        α: T,
        A: &Matrix<T>,
    ) -> Result<&Self, DenseFactorizationError> {
        let order = match side {
            MatrixSide::Left => self.nrows(),
            MatrixSide::Right => self.ncols(),
        };
        if A.size() != (order, order) {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }

        trsm(side, uplo, trans, diag, α, A.try_view()?, self.try_view_mut()?)?;
        Ok(self)
    }
}

#[test]
fn test_solve_triangular() {
    #[rustfmt::skip]
    let L = Matrix::<f64>::from_rows(&[
        [2., 0., 0.],
        [1., 3., 0.],
        [-1., 2., 4.]]);

    let X = Matrix::<f64>::from_rows(&[
        [1., 0., 2.], //
        [-1., 3., 1.], //
    ]);

    // B = X*Lᵀ, so solving from the right recovers X
    let mut B = Matrix::<f64>::zeros((2, 3));
    B.mul(&X, &L.t(), 1.0, 0.0).unwrap();
    B.trsm(
        MatrixSide::Right,
        MatrixTriangle::Tril,
        MatrixShape::T,
        MatrixDiag::NonUnit,
        1.0,
        &L,
    )
    .unwrap();
    assert!(B.data().norm_inf_diff(X.data()) < 1e-14);

    // A must match the side being solved on
    let res = B.trsm(
        MatrixSide::Left,
        MatrixTriangle::Tril,
        MatrixShape::N,
        MatrixDiag::NonUnit,
        1.0,
        &L,
    );
    assert_eq!(res.err(), Some(DenseFactorizationError::IncompatibleDimension));
}

#[test]
fn test_solve_triangular_bad_format() {
    let L = Matrix::<f64>::identity(2);
    let bad = Matrix::<f64>::new((2, 2), vec![1., 0., 1.]);

    let mut B = Matrix::<f64>::from_rows(&[[1.], [2.]]);
    #[rustfmt::skip]
    let res = B.trsm(MatrixSide::Left, MatrixTriangle::Triu, MatrixShape::N, MatrixDiag::NonUnit, 1.0, &bad);
    assert_eq!(res.err(), Some(DenseFactorizationError::IncompatibleDimension));
    assert_eq!(B.data, vec![1., 2.]);

    let mut B = bad.clone();
    #[rustfmt::skip]
    let res = B.trsm(MatrixSide::Left, MatrixTriangle::Triu, MatrixShape::N, MatrixDiag::NonUnit, 1.0, &L);
    assert_eq!(res.err(), Some(DenseFactorizationError::IncompatibleDimension));
}
