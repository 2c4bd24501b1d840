#![allow(non_snake_case)]

use super::xerbla;
use crate::algebra::*;

/// General matrix-matrix multiply.
///
/// Computes `C := α*op(A)*op(B) + βC` with `op(A)` of size `m x k`, `op(B)`
/// of size `k x n` and `C` of size `m x n`.  When `α = 0` neither `A` nor
/// `B` is read, and when `β = 0` `C` need not be initialized on entry.
pub fn gemm<T>(
    transa: MatrixShape,
    transb: MatrixShape,
    α: T,
    A: StridedMatrix<'_, T>,
    B: StridedMatrix<'_, T>,
    β: T,
    mut C: StridedMatrixMut<'_, T>,
) -> Result<(), DenseFactorizationError>
where
    T: FloatT,
{
    let (m, n) = C.size();
    let (nrowa, k) = match transa {
        MatrixShape::N => (A.nrows(), A.ncols()),
        MatrixShape::T => (A.ncols(), A.nrows()),
    };
    if nrowa != m {
        return Err(xerbla::<T>("GEMM", 7));
    }
    let opb = match transb {
        MatrixShape::N => B.size(),
        MatrixShape::T => (B.ncols(), B.nrows()),
    };
    if opb != (k, n) {
        return Err(xerbla::<T>("GEMM", 9));
    }

    if m == 0 || n == 0 || ((α == T::zero() || k == 0) && β == T::one()) {
        return Ok(());
    }

    if α == T::zero() {
        for j in 0..n {
            scale_col(C.col_mut(j), β);
        }
        return Ok(());
    }

    for j in 0..n {
        let cj = C.col_mut(j);
        match (transa, transb) {
            // C(:,j) += α * B(l,j) * A(:,l)
            (MatrixShape::N, _) => {
                scale_col(cj, β);
                for l in 0..k {
                    let blj = match transb {
                        MatrixShape::N => B.col(j)[l],
                        MatrixShape::T => B.col(l)[j],
                    };
                    if blj != T::zero() {
                        cj.axpy(α * blj, A.col(l));
                    }
                }
            }
            // C(i,j) = α * A(:,i)ᵀ * op(B)(:,j) + β * C(i,j)
            (MatrixShape::T, _) => {
                for (i, cij) in cj.iter_mut().enumerate() {
                    let ai = A.col(i);
                    let mut temp = T::zero();
                    for (l, &ali) in ai.iter().enumerate() {
                        let blj = match transb {
                            MatrixShape::N => B.col(j)[l],
                            MatrixShape::T => B.col(l)[j],
                        };
                        temp += ali * blj;
                    }
                    if β == T::zero() {
                        *cij = α * temp;
                    } else {
                        *cij = α * temp + β * (*cij);
                    }
                }
            }
        }
    }

    Ok(())
}

fn scale_col<T: FloatT>(c: &mut [T], β: T) {
    if β == T::zero() {
        c.set(T::zero());
    } else if β != T::one() {
        c.scale(β);
    }
}

macro_rules! generate_test_gemm {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let (m, n, k) = (2, 4, 3);
            let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
            let b = vec![
                1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 3.0, 7.0, 11.0, 4.0, 8.0, 12.0,
            ];
            let c = vec![2.0, 7.0, 6.0, 2.0, 0.0, 7.0, 4.0, 2.0];

            let A = Matrix::<$fxx>::new_from_slice((m, k), &a);
            let B = Matrix::<$fxx>::new_from_slice((k, n), &b);
            let mut C = Matrix::<$fxx>::new_from_slice((m, n), &c);
            gemm(MatrixShape::N, MatrixShape::N, 1.0, A.view(), B.view(), 1.0, C.view_mut()).unwrap();

            assert!(C.data() == vec![40.0, 90.0, 50.0, 100.0, 50.0, 120.0, 60.0, 130.0]);

            // transposed multiply, Bᵀ*Aᵀ
            let mut C = Matrix::<$fxx>::zeros((n, m));
            gemm(MatrixShape::T, MatrixShape::T, 1.0, B.view(), A.view(), 0.0, C.view_mut()).unwrap();

            assert!(C.data() == vec![38.0, 44.0, 50.0, 56.0, 83.0, 98.0, 113.0, 128.0]);

            // mixed orientations, Aᵀ*A and A*Aᵀ
            let mut AtA = Matrix::<$fxx>::zeros((k, k));
            gemm(MatrixShape::T, MatrixShape::N, 1.0, A.view(), A.view(), 0.0, AtA.view_mut()).unwrap();
            assert!(AtA.data() == vec![17.0, 22.0, 27.0, 22.0, 29.0, 36.0, 27.0, 36.0, 45.0]);

            let mut AAt = Matrix::<$fxx>::zeros((m, m));
            gemm(MatrixShape::N, MatrixShape::T, 2.0, A.view(), A.view(), 0.0, AAt.view_mut()).unwrap();
            assert!(AAt.data() == vec![28.0, 64.0, 64.0, 154.0]);
        }
    };
}

generate_test_gemm!(f32, test_gemm_f32);
generate_test_gemm!(f64, test_gemm_f64);

#[test]
fn test_gemm_shape_mismatch() {
    let A = Matrix::<f64>::zeros((2, 3));
    let B = Matrix::<f64>::zeros((2, 3));
    let mut C = Matrix::<f64>::zeros((2, 3));

    let res = gemm(MatrixShape::N, MatrixShape::N, 1.0, A.view(), B.view(), 0.0, C.view_mut());
    assert_eq!(res, Err(DenseFactorizationError::InvalidArgument(9)));

    let res = gemm(MatrixShape::T, MatrixShape::N, 1.0, A.view(), B.view(), 0.0, C.view_mut());
    assert_eq!(res, Err(DenseFactorizationError::InvalidArgument(7)));
}
