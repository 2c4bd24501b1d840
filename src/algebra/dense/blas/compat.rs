#![allow(non_snake_case)]
#![allow(clippy::too_many_arguments)]

// Entry points following the reference BLAS/LAPACK calling convention:
// single character flags, i32 dimensions and leading dimensions, and an
// integer `info` status in place of a Result.  Arguments are checked in
// the reference order and the first bad one is reported as `-position`.
// Slices too short for the declared shape are reported at the position
// of the array argument itself.

use super::{gemm, potrf, potrf2, syrk, trsm, xerbla, DEFAULT_BLOCK_SIZE};
use crate::algebra::*;

// --------------------------------------
// argument conversion helpers
// --------------------------------------

fn flag<F>(c: u8, parse: impl Fn(u8) -> Option<F>, pos: i32) -> Result<F, i32> {
    parse(c).ok_or(pos)
}

fn dim(x: i32, pos: i32) -> Result<usize, i32> {
    usize::try_from(x).map_err(|_| pos)
}

fn stride(ld: i32, rows: usize, pos: i32) -> Result<usize, i32> {
    usize::try_from(ld)
        .ok()
        .filter(|&ld| ld >= usize::max(1, rows))
        .ok_or(pos)
}

fn view<T>(a: &[T], m: usize, n: usize, ld: usize, pos: i32) -> Result<StridedMatrix<'_, T>, i32> {
    StridedMatrix::from_slice(a, m, n, ld).map_err(|_| pos)
}

fn view_mut<T>(a: &mut [T], m: usize, n: usize, ld: usize, pos: i32) -> Result<StridedMatrixMut<'_, T>, i32> {
    StridedMatrixMut::from_slice_mut(a, m, n, ld).map_err(|_| pos)
}

// --------------------------------------
// ?potrf : Cholesky decomposition
// --------------------------------------

pub trait XpotrfScalar: Sized {
    /// Blocked Cholesky factorization, see [`potrf`](crate::algebra::potrf)
    fn xpotrf(uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32);
    /// Recursive Cholesky factorization, see [`potrf2`](crate::algebra::potrf2)
    fn xpotrf2(uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32);
}

fn check_potrf<T>(
    uplo: u8, n: i32, a: &mut [T], lda: i32,
) -> Result<(MatrixTriangle, StridedMatrixMut<'_, T>), i32> {
    let uplo = flag(uplo, MatrixTriangle::from_blas_char, 1)?;
    let n = dim(n, 2)?;
    let lda = stride(lda, n, 4)?;
    let A = view_mut(a, n, n, lda, 3)?;
    Ok((uplo, A))
}

impl<T: FloatT> XpotrfScalar for T {
    fn xpotrf(uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32) {
        *info = match check_potrf(uplo, n, a, lda) {
            Ok((uplo, A)) => info_code(potrf(uplo, A, DEFAULT_BLOCK_SIZE)),
            Err(pos) => xerbla::<T>("POTRF", pos).info(),
        };
    }

    fn xpotrf2(uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32) {
        *info = match check_potrf(uplo, n, a, lda) {
            Ok((uplo, A)) => info_code(potrf2(uplo, A)),
            Err(pos) => xerbla::<T>("POTRF2", pos).info(),
        };
    }
}

// --------------------------------------
// ?trsm : triangular solve
// --------------------------------------

pub trait XtrsmScalar: Sized {
    /// Triangular solve, see [`trsm`](crate::algebra::trsm)
    fn xtrsm(
        side: u8, uplo: u8, transa: u8, diag: u8, m: i32, n: i32, alpha: Self,
        a: &[Self], lda: i32, b: &mut [Self], ldb: i32, info: &mut i32,
    );
}

type TrsmArgs<'a, 'b, T> = (
    MatrixSide, MatrixTriangle, MatrixShape, MatrixDiag,
    StridedMatrix<'a, T>, StridedMatrixMut<'b, T>,
);

fn check_trsm<'a, 'b, T>(
    side: u8, uplo: u8, transa: u8, diag: u8, m: i32, n: i32,
    a: &'a [T], lda: i32, b: &'b mut [T], ldb: i32,
) -> Result<TrsmArgs<'a, 'b, T>, i32> {
    let side = flag(side, MatrixSide::from_blas_char, 1)?;
    let uplo = flag(uplo, MatrixTriangle::from_blas_char, 2)?;
    let trans = flag(transa, MatrixShape::from_blas_char, 3)?;
    let diag = flag(diag, MatrixDiag::from_blas_char, 4)?;
    let m = dim(m, 5)?;
    let n = dim(n, 6)?;
    let nrowa = match side {
        MatrixSide::Left => m,
        MatrixSide::Right => n,
    };
    let lda = stride(lda, nrowa, 9)?;
    let ldb = stride(ldb, m, 11)?;
    let A = view(a, nrowa, nrowa, lda, 8)?;
    let B = view_mut(b, m, n, ldb, 10)?;
    Ok((side, uplo, trans, diag, A, B))
}

impl<T: FloatT> XtrsmScalar for T {
    fn xtrsm(
        side: u8, uplo: u8, transa: u8, diag: u8, m: i32, n: i32, alpha: Self,
        a: &[Self], lda: i32, b: &mut [Self], ldb: i32, info: &mut i32,
    ) {
        *info = match check_trsm(side, uplo, transa, diag, m, n, a, lda, b, ldb) {
            Ok((side, uplo, trans, diag, A, B)) => info_code(trsm(side, uplo, trans, diag, alpha, A, B)),
            Err(pos) => xerbla::<T>("TRSM", pos).info(),
        };
    }
}

// --------------------------------------
// ?syrk : symmetric rank-k update
// --------------------------------------

pub trait XsyrkScalar: Sized {
    /// Symmetric rank-k update, see [`syrk`](crate::algebra::syrk)
    fn xsyrk(
        uplo: u8, trans: u8, n: i32, k: i32, alpha: Self, a: &[Self], lda: i32,
        beta: Self, c: &mut [Self], ldc: i32, info: &mut i32,
    );
}

type SyrkArgs<'a, 'b, T> = (MatrixTriangle, MatrixShape, StridedMatrix<'a, T>, StridedMatrixMut<'b, T>);

fn check_syrk<'a, 'b, T>(
    uplo: u8, trans: u8, n: i32, k: i32, a: &'a [T], lda: i32, c: &'b mut [T], ldc: i32,
) -> Result<SyrkArgs<'a, 'b, T>, i32> {
    let uplo = flag(uplo, MatrixTriangle::from_blas_char, 1)?;
    let trans = flag(trans, MatrixShape::from_blas_char, 2)?;
    let n = dim(n, 3)?;
    let k = dim(k, 4)?;
    let (nrowa, ncola) = match trans {
        MatrixShape::N => (n, k),
        MatrixShape::T => (k, n),
    };
    let lda = stride(lda, nrowa, 7)?;
    let ldc = stride(ldc, n, 10)?;
    let A = view(a, nrowa, ncola, lda, 6)?;
    let C = view_mut(c, n, n, ldc, 9)?;
    Ok((uplo, trans, A, C))
}

impl<T: FloatT> XsyrkScalar for T {
    fn xsyrk(
        uplo: u8, trans: u8, n: i32, k: i32, alpha: Self, a: &[Self], lda: i32,
        beta: Self, c: &mut [Self], ldc: i32, info: &mut i32,
    ) {
        *info = match check_syrk(uplo, trans, n, k, a, lda, c, ldc) {
            Ok((uplo, trans, A, C)) => info_code(syrk(uplo, trans, alpha, A, beta, C)),
            Err(pos) => xerbla::<T>("SYRK", pos).info(),
        };
    }
}

// --------------------------------------
// ?gemm : matrix matrix multiply
// --------------------------------------

pub trait XgemmScalar: Sized {
    /// General matrix multiply, see [`gemm`](crate::algebra::gemm)
    fn xgemm(
        transa: u8, transb: u8, m: i32, n: i32, k: i32, alpha: Self, a: &[Self],
        lda: i32, b: &[Self], ldb: i32, beta: Self, c: &mut [Self], ldc: i32, info: &mut i32,
    );
}

type GemmArgs<'a, 'b, T> = (
    MatrixShape, MatrixShape,
    StridedMatrix<'a, T>, StridedMatrix<'a, T>, StridedMatrixMut<'b, T>,
);

fn check_gemm<'a, 'b, T>(
    transa: u8, transb: u8, m: i32, n: i32, k: i32,
    a: &'a [T], lda: i32, b: &'a [T], ldb: i32, c: &'b mut [T], ldc: i32,
) -> Result<GemmArgs<'a, 'b, T>, i32> {
    let transa = flag(transa, MatrixShape::from_blas_char, 1)?;
    let transb = flag(transb, MatrixShape::from_blas_char, 2)?;
    let m = dim(m, 3)?;
    let n = dim(n, 4)?;
    let k = dim(k, 5)?;
    let (nrowa, ncola) = match transa {
        MatrixShape::N => (m, k),
        MatrixShape::T => (k, m),
    };
    let (nrowb, ncolb) = match transb {
        MatrixShape::N => (k, n),
        MatrixShape::T => (n, k),
    };
    let lda = stride(lda, nrowa, 8)?;
    let ldb = stride(ldb, nrowb, 10)?;
    let ldc = stride(ldc, m, 13)?;
    let A = view(a, nrowa, ncola, lda, 7)?;
    let B = view(b, nrowb, ncolb, ldb, 9)?;
    let C = view_mut(c, m, n, ldc, 12)?;
    Ok((transa, transb, A, B, C))
}

impl<T: FloatT> XgemmScalar for T {
    fn xgemm(
        transa: u8, transb: u8, m: i32, n: i32, k: i32, alpha: Self, a: &[Self],
        lda: i32, b: &[Self], ldb: i32, beta: Self, c: &mut [Self], ldc: i32, info: &mut i32,
    ) {
        *info = match check_gemm(transa, transb, m, n, k, a, lda, b, ldb, c, ldc) {
            Ok((transa, transb, A, B, C)) => info_code(gemm(transa, transb, alpha, A, B, beta, C)),
            Err(pos) => xerbla::<T>("GEMM", pos).info(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xpotrf_success_and_failure() {
        #[rustfmt::skip]
        let mut a = vec![
            4., 12., -16.,
            12., 37., -43.,
            -16., -43., 98.,
        ];
        let mut info = -99;
        f64::xpotrf(b'L', 3, &mut a, 3, &mut info);
        assert_eq!(info, 0);
        assert_eq!(a[0], 2.0);

        // second minor fails
        let mut a = vec![1., 2., 2., 1.];
        f64::xpotrf2(b'U', 2, &mut a, 2, &mut info);
        assert_eq!(info, 2);
    }

    #[test]
    fn test_xpotrf_bad_arguments() {
        let mut a = vec![1.0_f64; 9];
        let mut info = 0;

        f64::xpotrf(b'X', 3, &mut a, 3, &mut info);
        assert_eq!(info, -1);
        f64::xpotrf(b'U', -1, &mut a, 3, &mut info);
        assert_eq!(info, -2);
        f64::xpotrf(b'U', 3, &mut a, 2, &mut info);
        assert_eq!(info, -4);
        f64::xpotrf2(b'L', 3, &mut a[..8], 3, &mut info);
        assert_eq!(info, -3);
        f64::xpotrf2(b'L', 0, &mut a, 0, &mut info);
        assert_eq!(info, -4);
        f64::xpotrf2(b'L', 0, &mut a, 1, &mut info);
        assert_eq!(info, 0);
    }

    #[test]
    fn test_xtrsm_bad_arguments() {
        let a = vec![1.0_f64; 9];
        let mut b = vec![1.0_f64; 6];
        let mut info = 0;

        #[rustfmt::skip]
        let cases : [(u8,u8,u8,u8,i32,i32,i32,i32,i32); 9] = [
            (b'X', b'U', b'N', b'N',  3,  2, 3, 3,  -1),
            (b'L', b'X', b'N', b'N',  3,  2, 3, 3,  -2),
            (b'L', b'U', b'X', b'N',  3,  2, 3, 3,  -3),
            (b'L', b'U', b'N', b'X',  3,  2, 3, 3,  -4),
            (b'L', b'U', b'N', b'N', -1,  2, 3, 3,  -5),
            (b'L', b'U', b'N', b'N',  3, -2, 3, 3,  -6),
            (b'L', b'U', b'N', b'N',  3,  2, 2, 3,  -9),
            (b'L', b'U', b'N', b'N',  3,  2, 3, 2, -11),
            (b'R', b'U', b'N', b'N',  3,  2, 1, 3,  -9),
        ];

        for (side, uplo, transa, diag, m, n, lda, ldb, expected) in cases {
            f64::xtrsm(side, uplo, transa, diag, m, n, 1.0, &a, lda, &mut b, ldb, &mut info);
            assert_eq!(info, expected);
        }

        // arrays too short for the declared shapes
        f64::xtrsm(b'L', b'U', b'N', b'N', 3, 2, 1.0, &a[..8], 3, &mut b, 3, &mut info);
        assert_eq!(info, -8);
        f64::xtrsm(b'L', b'U', b'N', b'N', 3, 2, 1.0, &a, 3, &mut b[..5], 3, &mut info);
        assert_eq!(info, -10);

        // quick return on empty right hand side
        f64::xtrsm(b'L', b'U', b'N', b'N', 0, 2, 1.0, &a, 1, &mut b, 1, &mut info);
        assert_eq!(info, 0);
    }

    #[test]
    fn test_xsyrk_bad_arguments() {
        let a = vec![1.0_f64; 6];
        let mut c = vec![0.0_f64; 9];
        let mut info = 0;

        #[rustfmt::skip]
        let cases : [(u8,u8,i32,i32,i32,i32,i32); 7] = [
            (b'X', b'N',  3,  2, 3, 3,  -1),
            (b'U', b'X',  3,  2, 3, 3,  -2),
            (b'U', b'N', -3,  2, 3, 3,  -3),
            (b'U', b'N',  3, -2, 3, 3,  -4),
            (b'U', b'N',  3,  2, 2, 3,  -7),
            (b'U', b'T',  3,  2, 1, 3,  -7),
            (b'L', b'N',  3,  2, 3, 2, -10),
        ];

        for (uplo, trans, n, k, lda, ldc, expected) in cases {
            f64::xsyrk(uplo, trans, n, k, 1.0, &a, lda, 0.0, &mut c, ldc, &mut info);
            assert_eq!(info, expected);
        }

        f64::xsyrk(b'U', b'T', 3, 2, 1.0, &a, 2, 0.0, &mut c, 3, &mut info);
        assert_eq!(info, 0);
        assert_eq!(c, vec![2., 0., 0., 2., 2., 0., 2., 2., 2.]);
    }

    #[test]
    fn test_xgemm_bad_arguments() {
        let a = vec![1.0_f64; 6];
        let b = vec![1.0_f64; 6];
        let mut c = vec![0.0_f64; 4];
        let mut info = 0;

        #[rustfmt::skip]
        let cases : [(u8,u8,i32,i32,i32,i32,i32,i32,i32); 8] = [
            (b'X', b'N',  2,  2,  3, 2, 3, 2,  -1),
            (b'N', b'X',  2,  2,  3, 2, 3, 2,  -2),
            (b'N', b'N', -2,  2,  3, 2, 3, 2,  -3),
            (b'N', b'N',  2, -2,  3, 2, 3, 2,  -4),
            (b'N', b'N',  2,  2, -3, 2, 3, 2,  -5),
            (b'N', b'N',  2,  2,  3, 1, 3, 2,  -8),
            (b'N', b'N',  2,  2,  3, 2, 2, 2, -10),
            (b'N', b'N',  2,  2,  3, 2, 3, 1, -13),
        ];

        for (transa, transb, m, n, k, lda, ldb, ldc, expected) in cases {
            f64::xgemm(transa, transb, m, n, k, 1.0, &a, lda, &b, ldb, 0.0, &mut c, ldc, &mut info);
            assert_eq!(info, expected);
        }

        f64::xgemm(b'N', b'N', 2, 2, 3, 1.0, &a, 2, &b, 3, 0.0, &mut c, 2, &mut info);
        assert_eq!(info, 0);
        assert_eq!(c, vec![3.0; 4]);
    }
}
