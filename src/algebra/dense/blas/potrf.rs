#![allow(non_snake_case)]

use super::{gemm, syrk, trsm, xerbla};
use crate::algebra::*;

/// Default panel width for the blocked Cholesky driver
pub const DEFAULT_BLOCK_SIZE: usize = 64;

/// Recursive Cholesky factorization of a symmetric positive definite matrix.
///
/// Computes `A = UᵀU` (`uplo = Triu`) or `A = LLᵀ` (`uplo = Tril`),
/// overwriting the `uplo` triangle of `A` with the factor.  The opposite
/// triangle is not referenced.
///
/// The matrix is split as
/// ```text
///     [ A11  A12 ]
/// A = [ A21  A22 ]
/// ```
/// with `A11` of order `n/2`.  `A11` is factored recursively, the off
/// diagonal block is solved against it with [`trsm`], `A22` is
/// downdated with [`syrk`] and then factored recursively in turn.
///
/// Returns [`NotPositiveDefinite(i)`](DenseFactorizationError::NotPositiveDefinite)
/// if the leading minor of order `i` is not positive definite, in which
/// case the factorization is incomplete and the contents of `A` are
/// unspecified.
pub fn potrf2<T>(uplo: MatrixTriangle, A: StridedMatrixMut<'_, T>) -> Result<(), DenseFactorizationError>
where
    T: FloatT,
{
    if !A.is_square() {
        return Err(xerbla::<T>("POTRF2", 3));
    }
    potrf2_recursive(uplo, A)
}

fn potrf2_recursive<T>(uplo: MatrixTriangle, mut A: StridedMatrixMut<'_, T>) -> Result<(), DenseFactorizationError>
where
    T: FloatT,
{
    let n = A.nrows();

    if n == 0 {
        return Ok(());
    }

    if n == 1 {
        let a11 = A[(0, 0)];
        if a11 <= T::zero() || a11.is_nan() {
            log::debug!("non-positive pivot {:e} in 1x1 block", a11);
            return Err(DenseFactorizationError::NotPositiveDefinite(1));
        }
        A[(0, 0)] = a11.sqrt();
        return Ok(());
    }

    let n1 = n / 2;
    let one = T::one();

    let (mut A11, A12, A21, mut A22) = A.split_at_mut(n1, n1);

    potrf2_recursive(uplo, A11.rb_mut())?;
    let A11 = A11.into_const();

    match uplo {
        MatrixTriangle::Triu => {
            // A12 := A11⁻ᵀ*A12, then A22 -= A12ᵀ*A12
            let mut A12 = A12;
            #[rustfmt::skip]
            trsm(MatrixSide::Left, MatrixTriangle::Triu, MatrixShape::T, MatrixDiag::NonUnit, one, A11, A12.rb_mut())?;
            syrk(MatrixTriangle::Triu, MatrixShape::T, -one, A12.into_const(), one, A22.rb_mut())?;
        }
        MatrixTriangle::Tril => {
            // A21 := A21*A11⁻ᵀ, then A22 -= A21*A21ᵀ
            let mut A21 = A21;
            #[rustfmt::skip]
            trsm(MatrixSide::Right, MatrixTriangle::Tril, MatrixShape::T, MatrixDiag::NonUnit, one, A11, A21.rb_mut())?;
            syrk(MatrixTriangle::Tril, MatrixShape::N, -one, A21.into_const(), one, A22.rb_mut())?;
        }
    }

    potrf2_recursive(uplo, A22).map_err(|e| e.offset_minor(n1))
}

/// Blocked Cholesky factorization of a symmetric positive definite matrix.
///
/// Same contract as [`potrf2`].  The diagonal is processed in panels of
/// width `block_size`: each diagonal block is downdated by the panels
/// already factored, factored with [`potrf2`], and the trailing off
/// diagonal panel is then updated with [`gemm`] and solved with [`trsm`].
/// When `block_size <= 1` or `block_size >= n` this is exactly [`potrf2`].
pub fn potrf<T>(
    uplo: MatrixTriangle,
    A: StridedMatrixMut<'_, T>,
    block_size: usize,
) -> Result<(), DenseFactorizationError>
where
    T: FloatT,
{
    if !A.is_square() {
        return Err(xerbla::<T>("POTRF", 3));
    }
    let n = A.nrows();

    if n == 0 {
        return Ok(());
    }

    if block_size <= 1 || block_size >= n {
        log::trace!("potrf: unblocked factorization, n = {n}");
        return potrf2_recursive(uplo, A);
    }

    log::trace!("potrf: blocked factorization, n = {n}, block size = {block_size}");

    let mut A = A;
    let one = T::one();

    for j in (0..n).step_by(block_size) {
        let jb = usize::min(block_size, n - j);
        let panel = A.rb_mut();

        match uplo {
            MatrixTriangle::Triu => {
                // factored rows above the panel, and everything right of it
                let (_, above, _, trailing) = panel.split_at_mut(j, j);
                let (A_1j, A_1r, _, _) = above.into_const().split_at(j, jb);
                let (mut A_jj, mut A_jr, _, _) = trailing.split_at_mut(jb, jb);

                syrk(MatrixTriangle::Triu, MatrixShape::T, -one, A_1j, one, A_jj.rb_mut())?;
                potrf2_recursive(MatrixTriangle::Triu, A_jj.rb_mut()).map_err(|e| e.offset_minor(j))?;

                if j + jb < n {
                    gemm(MatrixShape::T, MatrixShape::N, -one, A_1j, A_1r, one, A_jr.rb_mut())?;
                    #[rustfmt::skip]
                    trsm(MatrixSide::Left, MatrixTriangle::Triu, MatrixShape::T, MatrixDiag::NonUnit, one, A_jj.into_const(), A_jr)?;
                }
            }
            MatrixTriangle::Tril => {
                // factored columns left of the panel, and everything below it
                let (_, _, left, trailing) = panel.split_at_mut(j, j);
                let (A_j1, _, A_r1, _) = left.into_const().split_at(jb, j);
                let (mut A_jj, _, mut A_rj, _) = trailing.split_at_mut(jb, jb);

                syrk(MatrixTriangle::Tril, MatrixShape::N, -one, A_j1, one, A_jj.rb_mut())?;
                potrf2_recursive(MatrixTriangle::Tril, A_jj.rb_mut()).map_err(|e| e.offset_minor(j))?;

                if j + jb < n {
                    gemm(MatrixShape::N, MatrixShape::T, -one, A_r1, A_j1, one, A_rj.rb_mut())?;
                    #[rustfmt::skip]
                    trsm(MatrixSide::Right, MatrixTriangle::Tril, MatrixShape::T, MatrixDiag::NonUnit, one, A_jj.into_const(), A_rj)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    fn test_matrix() -> Matrix<f64> {
        Matrix::from_rows(&[
            [ 4., 12., -16.],
            [12., 37., -43.],
            [-16., -43., 98.]])
    }

    #[test]
    fn test_potrf2_upper() {
        let mut A = test_matrix();
        potrf2(MatrixTriangle::Triu, A.view_mut()).unwrap();

        // upper triangle holds U, lower triangle untouched
        #[rustfmt::skip]
        let U = Matrix::<f64>::from_rows(&[
            [ 2.,   6., -8.],
            [12.,   1.,  5.],
            [-16., -43., 3.]]);
        assert!(A.data.norm_inf_diff(&U.data) < 1e-12);
    }

    #[test]
    fn test_potrf2_lower() {
        let mut A = test_matrix();
        potrf2(MatrixTriangle::Tril, A.view_mut()).unwrap();

        #[rustfmt::skip]
        let L = Matrix::<f64>::from_rows(&[
            [ 2., 12., -16.],
            [ 6.,  1., -43.],
            [-8.,  5.,   3.]]);
        assert!(A.data.norm_inf_diff(&L.data) < 1e-12);
    }

    #[test]
    fn test_potrf2_trivial_sizes() {
        let mut A = Matrix::<f64>::zeros((0, 0));
        assert!(potrf2(MatrixTriangle::Triu, A.view_mut()).is_ok());

        let mut A = Matrix::new((1, 1), vec![9.0]);
        assert!(potrf2(MatrixTriangle::Tril, A.view_mut()).is_ok());
        assert_eq!(A.data, vec![3.0]);

        for bad in [0.0, -1.0, f64::NAN] {
            let mut A = Matrix::new((1, 1), vec![bad]);
            let res = potrf2(MatrixTriangle::Triu, A.view_mut());
            assert_eq!(res, Err(DenseFactorizationError::NotPositiveDefinite(1)));
        }
    }

    #[test]
    fn test_potrf2_minor_offsets() {
        // diagonal matrix with a single bad entry at each position,
        // so that failures come from every level of the recursion
        let n = 7;
        for bad in 0..n {
            for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
                let mut A = Matrix::<f64>::identity(n);
                A[(bad, bad)] = -1.0;
                let res = potrf2(uplo, A.view_mut());
                assert_eq!(res, Err(DenseFactorizationError::NotPositiveDefinite(bad + 1)));
            }
        }
    }

    #[test]
    fn test_potrf_blocked_matches_unblocked() {
        let n = 11;
        // diagonally dominant symmetric matrix
        let mut A = Matrix::<f64>::zeros((n, n));
        for j in 0..n {
            for i in 0..n {
                A[(i, j)] = 1.0 / ((i + j + 1) as f64);
            }
            A[(j, j)] += n as f64;
        }

        for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
            let mut A1 = A.clone();
            potrf2(uplo, A1.view_mut()).unwrap();

            for nb in [1, 2, 3, 4, 10, 11, 64] {
                let mut A2 = A.clone();
                potrf(uplo, A2.view_mut(), nb).unwrap();
                assert!(A1.data.norm_inf_diff(&A2.data) < 1e-12);
            }
        }
    }

    #[test]
    fn test_potrf_blocked_minor_offsets() {
        let n = 9;
        for bad in 0..n {
            for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
                let mut A = Matrix::<f64>::identity(n);
                A[(bad, bad)] = 0.0;
                let res = potrf(uplo, A.view_mut(), 4);
                assert_eq!(res, Err(DenseFactorizationError::NotPositiveDefinite(bad + 1)));
            }
        }
    }

    #[test]
    fn test_potrf_on_submatrix() {
        // factor the trailing 3x3 block of a 5x5 array in place,
        // leaving everything outside of it untouched
        let mut data = vec![-7.0_f64; 25];
        let B = test_matrix();
        for j in 0..3 {
            for i in 0..3 {
                data[(i + 2) + (j + 2) * 5] = B[(i, j)];
            }
        }
        let view = StridedMatrixMut::from_slice_mut(&mut data, 5, 5, 5).unwrap();
        let (_, _, _, A22) = view.split_at_mut(2, 2);
        potrf2(MatrixTriangle::Triu, A22).unwrap();

        assert_eq!(data[2 + 2 * 5], 2.0);
        assert!((data[3 + 4 * 5] - 5.0).abs() < 1e-12);
        assert_eq!(data[4 + 2 * 5], -16.0);
        for j in 0..5 {
            for i in 0..5 {
                if i < 2 || j < 2 {
                    assert_eq!(data[i + j * 5], -7.0);
                }
            }
        }
    }
}
