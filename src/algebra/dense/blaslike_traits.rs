#![allow(non_snake_case)]
use crate::algebra::{
    DenseFactorizationError, DenseMatrix, Matrix, MatrixDiag, MatrixShape, MatrixSide,
    MatrixTriangle,
};

pub trait FactorCholesky {
    type T;
    // computes the Cholesky decomposition.  Only the triangle
    // of A selected in the engine settings is referenced, and
    // A itself is not modified.  The lower triangular factor
    // is stored in self.L
    fn factor(&mut self, A: &Matrix<Self::T>) -> Result<(), DenseFactorizationError>;

    // Solve AX = B, where B is matrix with (possibly) multiple columns.
    // Uses previously computed factor from the `factor` function.
    // B is modified in place and stores X after call.
    fn solve(&self, B: &mut Matrix<Self::T>) -> Result<(), DenseFactorizationError>;

    // computes log(det(X)) for the matrix X = LL^T
    fn logdet(&self) -> Self::T;
}

pub trait MultiplySYRK {
    type T;
    fn syrk<MATA>(&mut self, A: &MATA, α: Self::T, β: Self::T) -> Result<&Self, DenseFactorizationError>
    where
        MATA: DenseMatrix<T = Self::T>;
}

pub trait MultiplyGEMM {
    type T;
    fn mul<MATA, MATB>(
        &mut self,
        A: &MATA,
        B: &MATB,
        α: Self::T,
        β: Self::T,
    ) -> Result<&Self, DenseFactorizationError>
    where
        MATB: DenseMatrix<T = Self::T>,
        MATA: DenseMatrix<T = Self::T>;
}

// Solve op(A)X = αB or Xop(A) = αB for triangular A.
// B is overwritten with the solution X.
pub trait SolveTriangular {
    type T;
    fn trsm(
        &mut self,
        side: MatrixSide,
        uplo: MatrixTriangle,
        trans: MatrixShape,
        diag: MatrixDiag,
        α: Self::T,
        A: &Matrix<Self::T>,
    ) -> Result<&Self, DenseFactorizationError>;
}
