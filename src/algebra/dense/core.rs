use crate::algebra::{
    Adjoint, DenseFactorizationError, DenseMatrix, FloatT, Matrix, MatrixShape, ShapedMatrix,
    StridedMatrix, StridedMatrixMut, VectorMath,
};
use std::ops::{Index, IndexMut};

impl<T> DenseMatrix for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }
    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<'a, T> DenseMatrix for Adjoint<'a, Matrix<T>>
where
    T: FloatT,
{
    type T = T;
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        self.src.index_linear((idx.1, idx.0))
    }
    fn data(&self) -> &[T] {
        &self.src.data
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn new(size: (usize, usize), data: Vec<T>) -> Self {
        let (m, n) = size;
        Self { m, n, data }
    }

    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    pub fn set_identity(&mut self) {
        assert!(self.m == self.n);
        self.data_mut().set(T::zero());
        for i in 0..self.n {
            self[(i, i)] = T::one();
        }
    }

    /// Builds a matrix from rows given as arrays, i.e. in
    /// the order in which they would be written out.
    pub fn from_rows<const N: usize>(rows: &[[T; N]]) -> Self {
        let m = rows.len();
        let mut mat = Matrix::zeros((m, N));
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                mat[(i, j)] = v;
            }
        }
        mat
    }

    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        Self {
            m,
            n,
            data: src.to_vec(),
        }
    }

    /// Checks that the data length agrees with the dimensions.
    pub fn check_format(&self) -> Result<(), DenseFactorizationError> {
        if self.data.len() != self.m * self.n {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }
        Ok(())
    }

    pub fn resize(&mut self, size: (usize, usize)) {
        let (m, n) = size;
        self.data.resize(m * n, T::zero());
        self.m = m;
        self.n = n;
    }

    pub fn copy_from_slice(&mut self, src: &[T]) -> &mut Self {
        self.data.copy_from_slice(src);
        self
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// Strided view of the whole matrix with leading dimension `m`.
    ///
    /// Fails with `IncompatibleDimension` if the data length does
    /// not agree with the dimensions.
    pub fn try_view(&self) -> Result<StridedMatrix<'_, T>, DenseFactorizationError> {
        StridedMatrix::from_slice(&self.data, self.m, self.n, usize::max(1, self.m))
    }

    /// Mutable counterpart of [`try_view`](Self::try_view).
    pub fn try_view_mut(&mut self) -> Result<StridedMatrixMut<'_, T>, DenseFactorizationError> {
        let ld = usize::max(1, self.m);
        StridedMatrixMut::from_slice_mut(&mut self.data, self.m, self.n, ld)
    }

    /// # Panics
    /// Panics if the data length does not agree with the dimensions.
    pub fn view(&self) -> StridedMatrix<'_, T> {
        self.try_view()
            .expect("matrix data length does not match its dimensions")
    }

    /// # Panics
    /// Panics if the data length does not agree with the dimensions.
    pub fn view_mut(&mut self) -> StridedMatrixMut<'_, T> {
        self.try_view_mut()
            .expect("matrix data length does not match its dimensions")
    }

    /// Zeros the strict lower triangle.
    pub fn triu_mut(&mut self) -> &mut Self {
        for c in 0..self.ncols() {
            for r in (c + 1)..self.nrows() {
                self[(r, c)] = T::zero();
            }
        }
        self
    }

    /// Zeros the strict upper triangle.
    pub fn tril_mut(&mut self) -> &mut Self {
        for c in 0..self.ncols() {
            for r in 0..usize::min(c, self.nrows()) {
                self[(r, c)] = T::zero();
            }
        }
        self
    }
}

// view onto the storage behind a dense matrix or its adjoint, plus
// the orientation that recovers the logical matrix from it
pub(crate) fn storage_view<M>(
    mat: &M,
) -> Result<(StridedMatrix<'_, M::T>, MatrixShape), DenseFactorizationError>
where
    M: DenseMatrix,
{
    let shape = mat.shape();
    let (m, n) = match shape {
        MatrixShape::N => (mat.nrows(), mat.ncols()),
        MatrixShape::T => (mat.ncols(), mat.nrows()),
    };
    let view = StridedMatrix::from_slice(mat.data(), m, n, usize::max(1, m))?;
    Ok((view, shape))
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data()[self.index_linear(idx)]
    }
}

impl<T> Index<(usize, usize)> for Adjoint<'_, Matrix<T>>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data()[self.index_linear(idx)]
    }
}

impl<T> ShapedMatrix for Matrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

fn display_matrix<M>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    M: DenseMatrix,
    M::T: FloatT,
{
    writeln!(f)?;
    for i in 0..m.nrows() {
        write!(f, "[ ")?;
        for j in 0..m.ncols() {
            write!(f, " {:?}", m[(i, j)])?;
        }
        writeln!(f, "]")?;
    }
    writeln!(f)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_indexing_matrix() -> Matrix<f64> {
        // [ 1.0  4.0  7.0 ]
        // [ 2.0  5.0  8.0 ]
        // [ 3.0  6.0  9.0 ]
        Matrix::from_rows(&[[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]])
    }

    #[test]
    fn test_matrix_indexing() {
        let matrix = create_indexing_matrix();

        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(2, 0)], 3.0);
        assert_eq!(matrix[(0, 1)], 4.0);
        assert_eq!(matrix[(1, 2)], 8.0);
        assert_eq!(matrix.index_linear((2, 1)), 5);
        assert_eq!(matrix.data, vec![1., 2., 3., 4., 5., 6., 7., 8., 9.]);
    }

    #[test]
    fn test_adjoint_indexing() {
        let matrix = create_indexing_matrix();
        let adjoint = matrix.t();

        assert_eq!(adjoint.size(), (3, 3));
        assert_eq!(adjoint[(0, 1)], 2.0);
        assert_eq!(adjoint[(2, 0)], 7.0);
        assert_eq!(adjoint.index_linear((0, 2)), 2);
    }

    #[test]
    fn test_view_matches_matrix() {
        let mut matrix = create_indexing_matrix();
        assert_eq!(matrix.view()[(1, 2)], 8.0);

        matrix.view_mut()[(2, 2)] = 0.0;
        assert_eq!(matrix[(2, 2)], 0.0);
    }

    #[test]
    fn test_triangle_masks() {
        let mut matrix = create_indexing_matrix();
        matrix.triu_mut();
        assert_eq!(matrix.data, vec![1., 0., 0., 4., 5., 0., 7., 8., 9.]);

        let mut matrix = create_indexing_matrix();
        matrix.tril_mut();
        assert_eq!(matrix[(2, 0)], 3.0);
        assert_eq!(matrix[(0, 2)], 0.0);
        assert_eq!(matrix.data, vec![1., 2., 3., 0., 5., 6., 0., 0., 9.]);
    }

    #[test]
    fn test_try_view_bad_format() {
        let mut matrix = Matrix::<f64>::new((2, 2), vec![1., 0., 1.]);
        assert!(matrix.check_format().is_err());
        assert_eq!(
            matrix.try_view().err(),
            Some(DenseFactorizationError::IncompatibleDimension)
        );
        assert_eq!(
            matrix.try_view_mut().err(),
            Some(DenseFactorizationError::IncompatibleDimension)
        );

        let mut matrix = create_indexing_matrix();
        assert_eq!(matrix.try_view().unwrap()[(1, 2)], 8.0);
        assert!(matrix.try_view_mut().is_ok());
    }
}
