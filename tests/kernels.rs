#![allow(non_snake_case)]
use itertools::iproduct;
use rand::{rngs::StdRng, Rng, SeedableRng};
use reclapack::algebra::*;

fn random_matrix(rng: &mut StdRng, m: usize, n: usize) -> Matrix<f64> {
    let mut A = Matrix::<f64>::zeros((m, n));
    A.data_mut().iter_mut().for_each(|x| *x = rng.gen_range(-1.0..1.0));
    A
}

// well conditioned triangular matrix, stored as a dense matrix with
// garbage in the triangle that must not be referenced
fn random_triangular(rng: &mut StdRng, n: usize, uplo: MatrixTriangle) -> Matrix<f64> {
    let mut A = random_matrix(rng, n, n);
    for j in 0..n {
        A[(j, j)] = 2.0 + A[(j, j)].abs();
        for i in 0..n {
            let outside = match uplo {
                MatrixTriangle::Triu => i > j,
                MatrixTriangle::Tril => i < j,
            };
            if outside {
                A[(i, j)] = f64::NAN;
            }
        }
    }
    A
}

// the matrix that a solve with (uplo, diag) actually sees
fn effective_triangle(A: &Matrix<f64>, uplo: MatrixTriangle, diag: MatrixDiag) -> Matrix<f64> {
    let n = A.nrows();
    let mut E = Matrix::<f64>::zeros((n, n));
    for j in 0..n {
        for i in 0..n {
            let inside = match uplo {
                MatrixTriangle::Triu => i <= j,
                MatrixTriangle::Tril => i >= j,
            };
            if inside {
                E[(i, j)] = A[(i, j)];
            }
        }
        if diag == MatrixDiag::Unit {
            E[(j, j)] = 1.0;
        }
    }
    E
}

#[test]
fn test_trsm_all_cases() {
    let mut rng = StdRng::seed_from_u64(16);
    let (m, n) = (7, 5);

    let sides = [MatrixSide::Left, MatrixSide::Right];
    let uplos = [MatrixTriangle::Triu, MatrixTriangle::Tril];
    let transes = [MatrixShape::N, MatrixShape::T];
    let diags = [MatrixDiag::NonUnit, MatrixDiag::Unit];

    for (side, uplo, trans, diag) in iproduct!(sides, uplos, transes, diags) {
        let order = match side {
            MatrixSide::Left => m,
            MatrixSide::Right => n,
        };
        let mut A = random_triangular(&mut rng, order, uplo);
        if diag == MatrixDiag::Unit {
            for j in 0..order {
                A[(j, j)] = f64::NAN;
            }
        }
        let E = effective_triangle(&A, uplo, diag);
        let X = random_matrix(&mut rng, m, n);

        // B = op(A)*X/α or X*op(A)/α, with α = 2
        let α = 2.0;
        let mut B = Matrix::<f64>::zeros((m, n));
        match (side, trans) {
            (MatrixSide::Left, MatrixShape::N) => B.mul(&E, &X, 0.5, 0.0),
            (MatrixSide::Left, MatrixShape::T) => B.mul(&E.t(), &X, 0.5, 0.0),
            (MatrixSide::Right, MatrixShape::N) => B.mul(&X, &E, 0.5, 0.0),
            (MatrixSide::Right, MatrixShape::T) => B.mul(&X, &E.t(), 0.5, 0.0),
        }
        .unwrap();

        trsm(side, uplo, trans, diag, α, A.view(), B.view_mut()).unwrap();

        let err = B.data().norm_inf_diff(X.data());
        assert!(
            err < 1e-10,
            "trsm {:?} {:?} {:?} {:?} error {:e}",
            side,
            uplo,
            trans,
            diag,
            err
        );
    }
}

#[test]
fn test_trsm_zero_alpha_with_non_finite_A() {
    let A = Matrix::<f64>::new((3, 3), vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0., 0., 0., 1., f64::NAN, 0.]);

    for (side, uplo) in iproduct!(
        [MatrixSide::Left, MatrixSide::Right],
        [MatrixTriangle::Triu, MatrixTriangle::Tril]
    ) {
        let mut B = Matrix::<f64>::new((3, 3), vec![1., f64::NAN, 3., 4., f64::INFINITY, 6., 7., 8., 9.]);
        trsm(side, uplo, MatrixShape::N, MatrixDiag::NonUnit, 0.0, A.view(), B.view_mut()).unwrap();
        assert!(B.data().iter().all(|&x| x == 0.0));
    }
}

#[test]
fn test_trsm_on_blocks_of_a_larger_array() {
    // solve with the top left block of an array against the
    // bottom left block of the same array
    let mut rng = StdRng::seed_from_u64(3);
    let n = 4;
    let mut data = random_matrix(&mut rng, 2 * n, n);
    for j in 0..n {
        data[(j, j)] = 4.0;
    }
    let original = data.clone();

    let (top, _, bottom, _) = data.view_mut().split_at_mut(n, n);
    #[rustfmt::skip]
    trsm(MatrixSide::Right, MatrixTriangle::Tril, MatrixShape::T, MatrixDiag::NonUnit, 1.0, top.into_const(), bottom).unwrap();

    // top block unchanged, bottom block times Lᵀ recovers the original
    let mut L = Matrix::<f64>::zeros((n, n));
    let mut X = Matrix::<f64>::zeros((n, n));
    let mut B = Matrix::<f64>::zeros((n, n));
    for j in 0..n {
        for i in 0..n {
            assert_eq!(data[(i, j)].to_bits(), original[(i, j)].to_bits());
            if i >= j {
                L[(i, j)] = data[(i, j)];
            }
            X[(i, j)] = data[(i + n, j)];
            B[(i, j)] = original[(i + n, j)];
        }
    }
    let mut R = Matrix::<f64>::zeros((n, n));
    R.mul(&X, &L.t(), 1.0, 0.0).unwrap();
    assert!(R.data().norm_inf_diff(B.data()) < 1e-12);
}

#[test]
fn test_syrk_triangle_isolation() {
    let mut rng = StdRng::seed_from_u64(99);
    let (n, k) = (6, 4);

    let uplos = [MatrixTriangle::Triu, MatrixTriangle::Tril];
    let transes = [MatrixShape::N, MatrixShape::T];
    let betas = [0.0, 1.0, 0.5];

    for (uplo, trans, β) in iproduct!(uplos, transes, betas) {
        let A = match trans {
            MatrixShape::N => random_matrix(&mut rng, n, k),
            MatrixShape::T => random_matrix(&mut rng, k, n),
        };
        let C0 = random_matrix(&mut rng, n, n);
        let α = -1.5;

        // full product for reference
        let mut Cfull = C0.clone();
        match trans {
            MatrixShape::N => Cfull.mul(&A, &A.t(), α, β),
            MatrixShape::T => Cfull.mul(&A.t(), &A, α, β),
        }
        .unwrap();

        let mut C = C0.clone();
        syrk(uplo, trans, α, A.view(), β, C.view_mut()).unwrap();

        for j in 0..n {
            for i in 0..n {
                let inside = match uplo {
                    MatrixTriangle::Triu => i <= j,
                    MatrixTriangle::Tril => i >= j,
                };
                if inside {
                    assert!((C[(i, j)] - Cfull[(i, j)]).abs() < 1e-12);
                } else {
                    assert_eq!(C[(i, j)].to_bits(), C0[(i, j)].to_bits());
                }
            }
        }
    }
}

#[test]
fn test_syrk_beta_zero_ignores_C() {
    let A = Matrix::<f64>::from_rows(&[[1., 2.], [3., 4.]]);
    let mut C = Matrix::<f64>::new((2, 2), vec![f64::NAN; 4]);

    syrk(MatrixTriangle::Tril, MatrixShape::N, 1.0, A.view(), 0.0, C.view_mut()).unwrap();

    assert_eq!(C[(0, 0)], 5.0);
    assert_eq!(C[(1, 0)], 11.0);
    assert_eq!(C[(1, 1)], 25.0);
    assert!(C[(0, 1)].is_nan());
}

#[test]
fn test_gemm_against_convenience() {
    // the reference entry point and the owned matrix product agree
    let mut rng = StdRng::seed_from_u64(5);
    let (m, n, k) = (5, 3, 4);
    let A = random_matrix(&mut rng, k, m);
    let B = random_matrix(&mut rng, n, k);

    let mut C1 = Matrix::<f64>::zeros((m, n));
    C1.mul(&A.t(), &B.t(), 1.0, 0.0).unwrap();

    let mut c2 = vec![0.0; m * n];
    let mut info = -1;
    f64::xgemm(b'T', b'T', m as i32, n as i32, k as i32, 1.0, A.data(), k as i32, B.data(), n as i32, 0.0, &mut c2, m as i32, &mut info);
    assert_eq!(info, 0);
    assert!(C1.data().norm_inf_diff(&c2) < 1e-14);
}
