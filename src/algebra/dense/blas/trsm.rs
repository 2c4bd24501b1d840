#![allow(non_snake_case)]

use super::xerbla;
use crate::algebra::*;

/// Triangular solve with multiple right hand sides.
///
/// Solves `op(A)*X = αB` (`side = Left`) or `X*op(A) = αB` (`side = Right`)
/// where `A` is triangular and `op(A)` is `A` or `Aᵀ`.  `B` is overwritten
/// with `X`.  Only the `uplo` triangle of `A` is read, and its diagonal is
/// not read at all when `diag = Unit`.  When `α = 0` the result is zero and
/// `A` is never referenced.
///
/// `A` must be square, of order `m` for a left solve and `n` for a right
/// solve, where `B` is `m x n`.
pub fn trsm<T>(
    side: MatrixSide,
    uplo: MatrixTriangle,
    trans: MatrixShape,
    diag: MatrixDiag,
    α: T,
    A: StridedMatrix<'_, T>,
    mut B: StridedMatrixMut<'_, T>,
) -> Result<(), DenseFactorizationError>
where
    T: FloatT,
{
    let (m, n) = B.size();
    let nrowa = match side {
        MatrixSide::Left => m,
        MatrixSide::Right => n,
    };
    if A.size() != (nrowa, nrowa) {
        return Err(xerbla::<T>("TRSM", 8));
    }

    if m == 0 || n == 0 {
        return Ok(());
    }

    if α == T::zero() {
        B.fill(T::zero());
        return Ok(());
    }

    let nounit = diag == MatrixDiag::NonUnit;

    #[rustfmt::skip]
    match (side, trans, uplo) {
        (MatrixSide::Left,  MatrixShape::N, MatrixTriangle::Triu) => left_n_upper(α, &A, &mut B, nounit),
        (MatrixSide::Left,  MatrixShape::N, MatrixTriangle::Tril) => left_n_lower(α, &A, &mut B, nounit),
        (MatrixSide::Left,  MatrixShape::T, MatrixTriangle::Triu) => left_t_upper(α, &A, &mut B, nounit),
        (MatrixSide::Left,  MatrixShape::T, MatrixTriangle::Tril) => left_t_lower(α, &A, &mut B, nounit),
        (MatrixSide::Right, MatrixShape::N, MatrixTriangle::Triu) => right_n_upper(α, &A, &mut B, nounit),
        (MatrixSide::Right, MatrixShape::N, MatrixTriangle::Tril) => right_n_lower(α, &A, &mut B, nounit),
        (MatrixSide::Right, MatrixShape::T, MatrixTriangle::Triu) => right_t_upper(α, &A, &mut B, nounit),
        (MatrixSide::Right, MatrixShape::T, MatrixTriangle::Tril) => right_t_lower(α, &A, &mut B, nounit),
    };

    Ok(())
}

// ---------------------------------------------
// left side : each column of B is an independent
// forward or backward substitution
// ---------------------------------------------

// B := α*inv(A)*B, A upper triangular
fn left_n_upper<T: FloatT>(α: T, A: &StridedMatrix<T>, B: &mut StridedMatrixMut<T>, nounit: bool) {
    let (m, n) = B.size();
    for j in 0..n {
        let bj = B.col_mut(j);
        if α != T::one() {
            bj.scale(α);
        }
        for k in (0..m).rev() {
            if bj[k] != T::zero() {
                let ak = A.col(k);
                if nounit {
                    bj[k] /= ak[k];
                }
                let t = bj[k];
                bj[..k].axpy(-t, &ak[..k]);
            }
        }
    }
}

// B := α*inv(A)*B, A lower triangular
fn left_n_lower<T: FloatT>(α: T, A: &StridedMatrix<T>, B: &mut StridedMatrixMut<T>, nounit: bool) {
    let (m, n) = B.size();
    for j in 0..n {
        let bj = B.col_mut(j);
        if α != T::one() {
            bj.scale(α);
        }
        for k in 0..m {
            if bj[k] != T::zero() {
                let ak = A.col(k);
                if nounit {
                    bj[k] /= ak[k];
                }
                let t = bj[k];
                bj[(k + 1)..].axpy(-t, &ak[(k + 1)..]);
            }
        }
    }
}

// B := α*inv(Aᵀ)*B, A upper triangular
fn left_t_upper<T: FloatT>(α: T, A: &StridedMatrix<T>, B: &mut StridedMatrixMut<T>, nounit: bool) {
    let (m, n) = B.size();
    for j in 0..n {
        let bj = B.col_mut(j);
        for i in 0..m {
            let ai = A.col(i);
            let mut temp = α * bj[i];
            for k in 0..i {
                temp -= ai[k] * bj[k];
            }
            if nounit {
                temp /= ai[i];
            }
            bj[i] = temp;
        }
    }
}

// B := α*inv(Aᵀ)*B, A lower triangular
fn left_t_lower<T: FloatT>(α: T, A: &StridedMatrix<T>, B: &mut StridedMatrixMut<T>, nounit: bool) {
    let (m, n) = B.size();
    for j in 0..n {
        let bj = B.col_mut(j);
        for i in (0..m).rev() {
            let ai = A.col(i);
            let mut temp = α * bj[i];
            for k in (i + 1)..m {
                temp -= ai[k] * bj[k];
            }
            if nounit {
                temp /= ai[i];
            }
            bj[i] = temp;
        }
    }
}

// ---------------------------------------------
// right side : columns of B are combined with
// each other, so work through column pairs
// ---------------------------------------------

// B := α*B*inv(A), A upper triangular
fn right_n_upper<T: FloatT>(α: T, A: &StridedMatrix<T>, B: &mut StridedMatrixMut<T>, nounit: bool) {
    let n = B.ncols();
    for j in 0..n {
        let aj = A.col(j);
        if α != T::one() {
            B.col_mut(j).scale(α);
        }
        for k in 0..j {
            if aj[k] != T::zero() {
                let (bj, bk) = B.two_cols_mut(j, k);
                bj.axpy(-aj[k], bk);
            }
        }
        if nounit {
            B.col_mut(j).scale(T::one() / aj[j]);
        }
    }
}

// B := α*B*inv(A), A lower triangular
fn right_n_lower<T: FloatT>(α: T, A: &StridedMatrix<T>, B: &mut StridedMatrixMut<T>, nounit: bool) {
    let n = B.ncols();
    for j in (0..n).rev() {
        let aj = A.col(j);
        if α != T::one() {
            B.col_mut(j).scale(α);
        }
        for k in (j + 1)..n {
            if aj[k] != T::zero() {
                let (bj, bk) = B.two_cols_mut(j, k);
                bj.axpy(-aj[k], bk);
            }
        }
        if nounit {
            B.col_mut(j).scale(T::one() / aj[j]);
        }
    }
}

// B := α*B*inv(Aᵀ), A upper triangular
fn right_t_upper<T: FloatT>(α: T, A: &StridedMatrix<T>, B: &mut StridedMatrixMut<T>, nounit: bool) {
    let n = B.ncols();
    for k in (0..n).rev() {
        let ak = A.col(k);
        if nounit {
            B.col_mut(k).scale(T::one() / ak[k]);
        }
        for j in 0..k {
            if ak[j] != T::zero() {
                let (bj, bk) = B.two_cols_mut(j, k);
                bj.axpy(-ak[j], bk);
            }
        }
        if α != T::one() {
            B.col_mut(k).scale(α);
        }
    }
}

// B := α*B*inv(Aᵀ), A lower triangular
fn right_t_lower<T: FloatT>(α: T, A: &StridedMatrix<T>, B: &mut StridedMatrixMut<T>, nounit: bool) {
    let n = B.ncols();
    for k in 0..n {
        let ak = A.col(k);
        if nounit {
            B.col_mut(k).scale(T::one() / ak[k]);
        }
        for j in (k + 1)..n {
            if ak[j] != T::zero() {
                let (bj, bk) = B.two_cols_mut(j, k);
                bj.axpy(-ak[j], bk);
            }
        }
        if α != T::one() {
            B.col_mut(k).scale(α);
        }
    }
}

macro_rules! generate_test_trsm {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        fn $test_name() {
            // upper triangular A, with garbage in the lower part
            // that must never be read
            #[rustfmt::skip]
            let A = Matrix::<$fxx>::from_rows(&[
                [2., 1., -1.],
                [<$fxx>::NAN, 4., 2.],
                [<$fxx>::NAN, <$fxx>::NAN, 5.]]);

            let X = Matrix::<$fxx>::from_rows(&[
                [1., -2.], //
                [3., 0.5], //
                [-1., 2.], //
            ]);

            // B = A*X / α with α = 2
            let mut B = Matrix::<$fxx>::from_rows(&[
                [3.0, -2.75], //
                [5.0, 3.0],   //
                [-2.5, 5.0],  //
            ]);

            trsm(
                MatrixSide::Left,
                MatrixTriangle::Triu,
                MatrixShape::N,
                MatrixDiag::NonUnit,
                2.0,
                A.view(),
                B.view_mut(),
            )
            .unwrap();

            assert!(B.data.norm_inf_diff(&X.data) < (1e-12 as $fxx).$tolfn());

            // right solve with the transpose : X*Aᵀ = B
            // where X is 2 x 3
            let X = Matrix::<$fxx>::from_rows(&[
                [1., 3., -1.], //
                [-2., 0.5, 2.], //
            ]);
            let mut B = Matrix::<$fxx>::from_rows(&[
                [6., 10., -5.], //
                [-5.5, 6., 10.], //
            ]);
            trsm(
                MatrixSide::Right,
                MatrixTriangle::Triu,
                MatrixShape::T,
                MatrixDiag::NonUnit,
                1.0,
                A.view(),
                B.view_mut(),
            )
            .unwrap();

            assert!(B.data.norm_inf_diff(&X.data) < (1e-12 as $fxx).$tolfn());
        }
    };
}

generate_test_trsm!(f32, test_trsm_f32, sqrt);
generate_test_trsm!(f64, test_trsm_f64, abs);

#[test]
fn test_trsm_unit_diagonal_not_read() {
    #[rustfmt::skip]
    let A = Matrix::<f64>::from_rows(&[
        [f64::NAN, 0., 0.],
        [2., f64::NAN, 0.],
        [-1., 3., f64::NAN]]);

    // (I + strict lower of A) * X = B
    let mut B = Matrix::<f64>::from_rows(&[[1.], [4.], [5.]]);
    trsm(
        MatrixSide::Left,
        MatrixTriangle::Tril,
        MatrixShape::N,
        MatrixDiag::Unit,
        1.0,
        A.view(),
        B.view_mut(),
    )
    .unwrap();

    // x0 = 1, x1 = 4 - 2 = 2, x2 = 5 + 1 - 6 = 0
    assert_eq!(B.data, vec![1., 2., 0.]);
}

#[test]
fn test_trsm_zero_alpha_ignores_A() {
    let A = Matrix::<f64>::new((2, 2), vec![f64::NAN, f64::INFINITY, f64::NAN, 0.0]);
    let mut B = Matrix::<f64>::new((2, 3), vec![1., f64::NAN, 3., 4., 5., 6.]);

    trsm(
        MatrixSide::Left,
        MatrixTriangle::Triu,
        MatrixShape::N,
        MatrixDiag::NonUnit,
        0.0,
        A.view(),
        B.view_mut(),
    )
    .unwrap();

    assert!(B.data.iter().all(|&x| x == 0.0));
}

#[test]
fn test_trsm_shape_mismatch() {
    let A = Matrix::<f64>::identity(3);
    let mut B = Matrix::<f64>::zeros((2, 3));

    // left solve needs A to be 2 x 2
    let res = trsm(
        MatrixSide::Left,
        MatrixTriangle::Triu,
        MatrixShape::N,
        MatrixDiag::NonUnit,
        1.0,
        A.view(),
        B.view_mut(),
    );
    assert_eq!(res, Err(DenseFactorizationError::InvalidArgument(8)));

    // but it is fine for a right solve
    let res = trsm(
        MatrixSide::Right,
        MatrixTriangle::Triu,
        MatrixShape::N,
        MatrixDiag::NonUnit,
        1.0,
        A.view(),
        B.view_mut(),
    );
    assert!(res.is_ok());
}
