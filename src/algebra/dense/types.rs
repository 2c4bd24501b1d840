/// Dense matrix in column major format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```
/// use reclapack::algebra::Matrix;
///
/// let A : Matrix<f64> = Matrix::new(
///    (3, 3),  //size as tuple
///    vec![1., 2., 0., 3., 0., 4., 5., 6., 7.]
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
///
/// ```
///
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    ///number of columns
    pub n: usize,
    /// vector of data in column major format
    pub data: Vec<T>,
}
