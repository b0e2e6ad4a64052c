#![allow(non_snake_case)]

use ndarray as nd;
use num_complex::Complex64 as C64;
use musr_sim::{
    consts::{ D_MU_F, GAMMA_F19, GAMMA_MU, HBAR },
    hamiltonian::dipolar_constant,
    tensor::adjoint,
    HBuilderDipolar,
    Model,
    ModelError,
};

/// Coupling energy scale `C ħ^2 / 4` expressed as an angular frequency.
fn kappa() -> f64 {
    dipolar_constant(GAMMA_F19, GAMMA_MU, D_MU_F) * HBAR / 4.0
}

fn muon_fluorine() -> Model {
    HBuilderDipolar::muon_fluorine(D_MU_F, None).model().unwrap()
}

#[test]
fn eigenvectors_diagonalize_hamiltonian() {
    let H = HBuilderDipolar::muon_fluorine(D_MU_F, Some(0.125)).build().unwrap();
    let model = Model::new(H.clone(), 3).unwrap();
    let M = model.eigenvectors();
    let Mdag = adjoint(M);

    let eye: nd::Array2<C64> = nd::Array2::eye(8);
    let overlap = Mdag.dot(M);
    let err = (&overlap - &eye).iter().map(|z| z.norm()).fold(0.0, f64::max);
    assert!(err < 1e-10, "max |M†M - I| = {}", err);

    let D = Mdag.dot(&H).dot(M) / C64::from(HBAR);
    let E = model.energies() / HBAR;
    let scale = E.iter().map(|e| e.abs()).fold(0.0, f64::max);
    for ((i, j), dij) in D.indexed_iter() {
        let expected = if i == j { E[i] } else { 0.0 };
        assert!(
            (*dij - expected).norm() < 1e-9 * scale,
            "(M†HM)[{}, {}] = {}; expected {}", i, j, dij, expected,
        );
    }
    assert!(E.iter().zip(E.iter().skip(1)).all(|(a, b)| a <= b));
}

#[test]
fn isolated_pair_splitting() {
    let c = dipolar_constant(GAMMA_F19, GAMMA_MU, D_MU_F);
    let model = HBuilderDipolar::isolated_pair(c).model().unwrap();
    assert_eq!(model.dim(), 4);
    let k = kappa();
    let E = model.energies() / HBAR;
    for (e, expected) in E.iter().zip([-2.0, -2.0, 0.0, 4.0]) {
        assert!((e - expected * k).abs() < 1e-9 * k, "E/ħ = {}", E);
    }

    // energies scale linearly with the coupling
    let doubled = HBuilderDipolar::isolated_pair(2.0 * c).model().unwrap();
    let E2 = doubled.energies() / HBAR;
    for (e, e2) in E.iter().zip(E2.iter()) {
        assert!((2.0 * e - e2).abs() < 1e-9 * k);
    }
}

#[test]
fn muon_fluorine_spectrum() {
    let model = muon_fluorine();
    assert_eq!(model.particles(), 3);
    assert_eq!(model.energies().len(), 8);
    let k = kappa();
    let r3 = 3.0_f64.sqrt();
    let expected = [
        -4.0, -4.0,
        2.0 - 2.0 * r3, 2.0 - 2.0 * r3,
        0.0, 0.0,
        2.0 + 2.0 * r3, 2.0 + 2.0 * r3,
    ];
    let E = model.energies() / HBAR;
    for (e, x) in E.iter().zip(expected) {
        assert!((e - x * k).abs() < 1e-9 * k, "E/ħ = {}", E);
    }
    assert_eq!(
        model.rounded_frequencies().to_vec(),
        vec![
            -1415973, -1415973,
            -518282, -518282,
            0, 0,
            1934255, 1934255,
        ],
    );
    assert!(
        model.rounded_frequencies().iter()
            .filter(|f| **f != 0)
            .all(|f| (1e4..1e7).contains(&(f.abs() as f64)))
    );
}

#[test]
fn amplitudes_symmetric_and_nonnegative() {
    for model in [
        muon_fluorine(),
        HBuilderDipolar::muon_fluorine(D_MU_F, Some(0.125)).model().unwrap(),
    ] {
        let A = model.amplitudes();
        assert_eq!(A.dim(), (8, 8));
        assert!(A.iter().all(|a| *a >= 0.0));
        assert_eq!(A, &A.t().to_owned());
        assert!((A.sum() - 1.0).abs() < 1e-10, "sum A = {}", A.sum());
    }
}

#[test]
fn rebuild_is_deterministic() {
    let a = muon_fluorine();
    let b = muon_fluorine();
    let k = kappa();
    for (ea, eb) in a.energies().iter().zip(b.energies().iter()) {
        assert!((ea - eb).abs() / HBAR < 1e-12 * k);
    }
    assert_eq!(a.rounded_frequencies(), b.rounded_frequencies());
    for (aa, ab) in a.amplitudes().iter().zip(b.amplitudes().iter()) {
        assert!((aa - ab).abs() < 1e-12);
    }
}

#[test]
fn particle_count_is_inferred() {
    let H = HBuilderDipolar::muon_fluorine(D_MU_F, None).build().unwrap();
    let model = Model::from_hamiltonian(H).unwrap();
    assert_eq!(model.particles(), 3);
    assert_eq!(model.dim(), 8);
}

#[test]
fn invalid_hamiltonians_are_rejected() {
    let rect: nd::Array2<C64> = nd::Array2::zeros((2, 4));
    assert!(matches!(
        Model::new(rect.clone(), 1),
        Err(ModelError::NotSquare { rows: 2, cols: 4 }),
    ));
    assert!(matches!(
        Model::from_hamiltonian(rect),
        Err(ModelError::NotSquare { .. }),
    ));

    let upper = nd::array![
        [C64::new(0.0, 0.0), C64::new(1.0, 0.0)],
        [C64::new(0.0, 0.0), C64::new(0.0, 0.0)],
    ];
    assert!(matches!(
        Model::new(upper, 1),
        Err(ModelError::NotHermitian { .. }),
    ));

    let imag_diag = nd::array![
        [C64::new(1.0, 0.5), C64::new(0.0, 0.0)],
        [C64::new(0.0, 0.0), C64::new(1.0, 0.0)],
    ];
    assert!(matches!(
        Model::new(imag_diag, 1),
        Err(ModelError::NotHermitian { .. }),
    ));

    // only the lower triangle reaches the eigensolver
    let nan_upper = nd::array![
        [C64::new(0.0, 0.0), C64::new(f64::NAN, 0.0)],
        [C64::new(0.0, 0.0), C64::new(0.0, 0.0)],
    ];
    assert!(matches!(
        Model::new(nan_upper, 1),
        Err(ModelError::NonFinite { row: 0, col: 1 }),
    ));
    let nan_diag = nd::array![
        [C64::new(1.0, 0.0), C64::new(0.0, 0.0)],
        [C64::new(0.0, 0.0), C64::new(0.0, f64::NAN)],
    ];
    assert!(matches!(
        Model::new(nan_diag, 1),
        Err(ModelError::NonFinite { row: 1, col: 1 }),
    ));
    let inf_lower = nd::array![
        [C64::new(0.0, 0.0), C64::new(0.0, 0.0)],
        [C64::new(f64::INFINITY, 0.0), C64::new(0.0, 0.0)],
    ];
    assert!(matches!(
        Model::new(inf_lower, 1),
        Err(ModelError::NonFinite { row: 1, col: 0 }),
    ));
    let inf_diag = nd::array![
        [C64::new(f64::NEG_INFINITY, 0.0), C64::new(0.0, 0.0)],
        [C64::new(0.0, 0.0), C64::new(0.0, 0.0)],
    ];
    assert!(matches!(
        Model::from_hamiltonian(inf_diag),
        Err(ModelError::NonFinite { row: 0, col: 0 }),
    ));

    let eye4: nd::Array2<C64> = nd::Array2::eye(4);
    assert!(matches!(
        Model::new(eye4.clone(), 3),
        Err(ModelError::DimensionMismatch { dim: 4, particles: 3 }),
    ));
    assert!(matches!(Model::new(eye4, 0), Err(ModelError::NoParticles)));

    let eye3: nd::Array2<C64> = nd::Array2::eye(3);
    assert!(matches!(
        Model::from_hamiltonian(eye3),
        Err(ModelError::NotPowerOfTwo(3)),
    ));
}
