#![allow(non_snake_case)]

use super::xerbla;
use crate::algebra::*;
use std::ops::Range;

/// Symmetric rank-k update.
///
/// Computes `C := αA*Aᵀ + βC` (`trans = N`, `A` is `n x k`) or
/// `C := αAᵀ*A + βC` (`trans = T`, `A` is `k x n`) for an `n x n`
/// symmetric `C` of which only the `uplo` triangle is referenced.  The
/// opposite triangle of `C` is never read or written.
///
/// When `β = 0`, `C` need not be initialized on entry.  When `α = 0`,
/// `A` is not read.
pub fn syrk<T>(
    uplo: MatrixTriangle,
    trans: MatrixShape,
    α: T,
    A: StridedMatrix<'_, T>,
    β: T,
    mut C: StridedMatrixMut<'_, T>,
) -> Result<(), DenseFactorizationError>
where
    T: FloatT,
{
    if !C.is_square() {
        return Err(xerbla::<T>("SYRK", 9));
    }
    let n = C.nrows();
    let (nrowa, k) = match trans {
        MatrixShape::N => (A.nrows(), A.ncols()),
        MatrixShape::T => (A.ncols(), A.nrows()),
    };
    if nrowa != n {
        return Err(xerbla::<T>("SYRK", 6));
    }

    // NB: same quick return condition as the reference.  A zero
    // update with β ≠ 1 still scales C below.
    if n == 0 || ((α == T::zero() || k == 0) && β == T::one()) {
        return Ok(());
    }

    if α == T::zero() {
        for j in 0..n {
            let cj = &mut C.col_mut(j)[triangle_rows(uplo, j, n)];
            if β == T::zero() {
                cj.set(T::zero());
            } else {
                cj.scale(β);
            }
        }
        return Ok(());
    }

    match trans {
        MatrixShape::N => syrk_n(uplo, α, &A, β, &mut C),
        MatrixShape::T => syrk_t(uplo, α, &A, β, &mut C),
    }

    Ok(())
}

// rows of column j of an n x n matrix that lie inside the
// referenced triangle, i.e. 0..=j for triu and j..n for tril
fn triangle_rows(uplo: MatrixTriangle, j: usize, n: usize) -> Range<usize> {
    match uplo {
        MatrixTriangle::Triu => 0..(j + 1),
        MatrixTriangle::Tril => j..n,
    }
}

// C := α*A*Aᵀ + β*C
fn syrk_n<T: FloatT>(uplo: MatrixTriangle, α: T, A: &StridedMatrix<T>, β: T, C: &mut StridedMatrixMut<T>) {
    let n = C.nrows();
    let k = A.ncols();

    for j in 0..n {
        let rows = triangle_rows(uplo, j, n);
        let cj = &mut C.col_mut(j)[rows.clone()];

        if β == T::zero() {
            cj.set(T::zero());
        } else if β != T::one() {
            cj.scale(β);
        }

        for l in 0..k {
            let al = A.col(l);
            if al[j] != T::zero() {
                cj.axpy(α * al[j], &al[rows.clone()]);
            }
        }
    }
}

// C := α*Aᵀ*A + β*C
fn syrk_t<T: FloatT>(uplo: MatrixTriangle, α: T, A: &StridedMatrix<T>, β: T, C: &mut StridedMatrixMut<T>) {
    let n = C.nrows();

    for j in 0..n {
        let aj = A.col(j);
        let cj = C.col_mut(j);
        for i in triangle_rows(uplo, j, n) {
            let ai = A.col(i);
            let mut temp = T::zero();
            for (&x, &y) in ai.iter().zip(aj) {
                temp += x * y;
            }
            if β == T::zero() {
                cj[i] = α * temp;
            } else {
                cj[i] = α * temp + β * cj[i];
            }
        }
    }
}

macro_rules! generate_test_syrk {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let A = Matrix::<$fxx>::from_rows(&[
                [1., 2., 3.], //
                [4., 5., 6.], //
            ]);

            // C = A*Aᵀ into an uninitialized upper triangle
            let mut AAt = Matrix::<$fxx>::zeros((2, 2));
            AAt[(0, 0)] = <$fxx>::NAN;
            syrk(MatrixTriangle::Triu, MatrixShape::N, 1.0, A.view(), 0.0, AAt.view_mut()).unwrap();

            //NB: writes to upper triangle only
            let AAt_test = Matrix::<$fxx>::from_rows(&[
                [14., 32.], //
                [0., 77.],  //
            ]);
            assert_eq!(AAt, AAt_test);

            // C = 2*Aᵀ*A + C into the lower triangle
            let mut AtA = Matrix::<$fxx>::zeros((3, 3));
            AtA.data_mut().fill(1.0);
            syrk(MatrixTriangle::Tril, MatrixShape::T, 2.0, A.view(), 1.0, AtA.view_mut()).unwrap();

            //NB: writes to lower triangle only
            let AtA_test = Matrix::<$fxx>::from_rows(&[
                [35., 1., 1.],   //
                [45., 59., 1.],  //
                [55., 73., 91.], //
            ]);
            assert_eq!(AtA, AtA_test);
        }
    };
}

generate_test_syrk!(f32, test_syrk_f32);
generate_test_syrk!(f64, test_syrk_f64);

#[test]
fn test_syrk_zero_alpha_scales_without_reading_A() {
    let A = Matrix::<f64>::new((2, 1), vec![f64::NAN, f64::INFINITY]);
    let mut C = Matrix::<f64>::from_rows(&[
        [1., 2.], //
        [3., 4.], //
    ]);

    syrk(MatrixTriangle::Triu, MatrixShape::N, 0.0, A.view(), 3.0, C.view_mut()).unwrap();
    assert_eq!(C.data, vec![3., 3., 6., 12.]);

    syrk(MatrixTriangle::Tril, MatrixShape::N, 0.0, A.view(), 0.0, C.view_mut()).unwrap();
    assert_eq!(C.data, vec![0., 0., 6., 0.]);
}

#[test]
fn test_syrk_empty_inner_dimension() {
    let A = Matrix::<f64>::zeros((2, 0));
    let mut C = Matrix::<f64>::from_rows(&[
        [1., 2.], //
        [3., 4.], //
    ]);

    // k = 0 with β = 1 is a no-op
    syrk(MatrixTriangle::Triu, MatrixShape::N, 1.0, A.view(), 1.0, C.view_mut()).unwrap();
    assert_eq!(C.data, vec![1., 3., 2., 4.]);

    // k = 0 with β ≠ 1 still scales the triangle
    syrk(MatrixTriangle::Triu, MatrixShape::N, 1.0, A.view(), 2.0, C.view_mut()).unwrap();
    assert_eq!(C.data, vec![2., 3., 4., 8.]);
}

#[test]
fn test_syrk_shape_mismatch() {
    let A = Matrix::<f64>::zeros((3, 2));
    let mut C = Matrix::<f64>::zeros((2, 2));

    let res = syrk(MatrixTriangle::Triu, MatrixShape::N, 1.0, A.view(), 0.0, C.view_mut());
    assert_eq!(res, Err(DenseFactorizationError::InvalidArgument(6)));

    let mut C = Matrix::<f64>::zeros((2, 3));
    let res = syrk(MatrixTriangle::Triu, MatrixShape::T, 1.0, A.view(), 0.0, C.view_mut());
    assert_eq!(res, Err(DenseFactorizationError::InvalidArgument(9)));
}

#[test]
fn test_syrk_orientations_share_triangle() {
    assert_eq!(triangle_rows(MatrixTriangle::Triu, 2, 4), 0..3);
    assert_eq!(triangle_rows(MatrixTriangle::Tril, 2, 4), 2..4);

    // A*Aᵀ computed from A and from its stored transpose must touch
    // exactly the same entries of C
    #[rustfmt::skip]
    let A = Matrix::<f64>::from_rows(&[
        [1., 2.],
        [3., -1.],
        [0., 4.]]);
    let mut At = Matrix::<f64>::zeros((2, 3));
    for i in 0..3 {
        for j in 0..2 {
            At[(j, i)] = A[(i, j)];
        }
    }

    for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
        let mut C1 = Matrix::<f64>::zeros((3, 3));
        C1.data_mut().fill(f64::NAN);
        let mut C2 = C1.clone();
        syrk(uplo, MatrixShape::N, 1.0, A.view(), 0.0, C1.view_mut()).unwrap();
        syrk(uplo, MatrixShape::T, 1.0, At.view(), 0.0, C2.view_mut()).unwrap();

        for j in 0..3 {
            for i in 0..3 {
                let inside = triangle_rows(uplo, j, 3).contains(&i);
                assert_eq!(C1[(i, j)].is_nan(), !inside);
                assert_eq!(C2[(i, j)].is_nan(), !inside);
                if inside {
                    assert_eq!(C1[(i, j)], C2[(i, j)]);
                }
            }
        }
    }
}
