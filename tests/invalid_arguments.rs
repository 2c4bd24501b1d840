#![allow(non_snake_case)]
use reclapack::algebra::*;

// a collection of tests to ensure that bad arguments are
// rejected with the reference parameter position, and that
// nothing is written when they are

#[test]
fn test_flag_characters() {
    let a = vec![2.0_f64, 0.0, 0.0, 2.0];
    let mut info = -1;

    // lower case and 'C' (conjugate transpose, i.e. transpose
    // for real data) are accepted
    let mut b = vec![4.0_f64, 8.0];
    f64::xtrsm(b'l', b'u', b'c', b'n', 2, 1, 1.0, &a, 2, &mut b, 2, &mut info);
    assert_eq!(info, 0);
    assert_eq!(b, vec![2.0, 4.0]);

    for (side, uplo, transa, diag, pos) in [
        (b'?', b'U', b'N', b'N', -1),
        (b'L', b'?', b'N', b'N', -2),
        (b'L', b'U', b'?', b'N', -3),
        (b'L', b'U', b'N', b'?', -4),
    ] {
        let mut b = vec![4.0_f64, 8.0];
        f64::xtrsm(side, uplo, transa, diag, 2, 1, 1.0, &a, 2, &mut b, 2, &mut info);
        assert_eq!(info, pos);
        assert_eq!(b, vec![4.0, 8.0]);
    }
}

#[test]
fn test_first_bad_argument_wins() {
    let mut a = vec![1.0_f64; 4];
    let mut info = 0;

    // both uplo and n are bad, uplo comes first
    f64::xpotrf(b'Q', -2, &mut a, 0, &mut info);
    assert_eq!(info, -1);

    // n and lda are bad, n comes first
    f64::xpotrf(b'L', -2, &mut a, 0, &mut info);
    assert_eq!(info, -2);

    let c_before = vec![3.0_f64; 4];
    let mut c = c_before.clone();
    f64::xsyrk(b'U', b'N', 2, -1, 1.0, &a, 0, 0.0, &mut c, 1, &mut info);
    assert_eq!(info, -4);
    assert_eq!(c, c_before);
}

#[test]
fn test_short_arrays() {
    let a = vec![1.0_f64; 3];
    let mut c = vec![0.0_f64; 4];
    let mut info = 0;

    // a is declared 2 x 2 but only has 3 entries
    f64::xsyrk(b'L', b'N', 2, 2, 1.0, &a, 2, 0.0, &mut c, 2, &mut info);
    assert_eq!(info, -6);

    f64::xgemm(b'N', b'N', 2, 2, 2, 1.0, &a, 2, &a[..2], 2, 0.0, &mut c, 2, &mut info);
    assert_eq!(info, -7);

    let b = vec![1.0_f64; 4];
    f64::xgemm(b'N', b'N', 2, 2, 2, 1.0, &b, 2, &b, 2, 0.0, &mut c[..3], 2, &mut info);
    assert_eq!(info, -12);
}

#[test]
fn test_typed_shape_errors() {
    let mut A = Matrix::<f64>::zeros((3, 2));
    assert_eq!(
        potrf2(MatrixTriangle::Triu, A.view_mut()),
        Err(DenseFactorizationError::InvalidArgument(3))
    );
    assert_eq!(
        potrf(MatrixTriangle::Tril, A.view_mut(), 2),
        Err(DenseFactorizationError::InvalidArgument(3))
    );

    // views must fit the storage they borrow
    let data = vec![0.0_f64; 5];
    assert_eq!(
        StridedMatrix::from_slice(&data, 2, 3, 2).err(),
        Some(DenseFactorizationError::IncompatibleDimension)
    );
    assert_eq!(
        StridedMatrix::from_slice(&data, 3, 1, 2).err(),
        Some(DenseFactorizationError::IncompatibleDimension)
    );

    let err = DenseFactorizationError::InvalidArgument(9);
    assert_eq!(err.to_string(), "Parameter number 9 had an illegal value");
    assert_eq!(err.info(), -9);
}
