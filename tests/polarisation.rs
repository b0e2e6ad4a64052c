#![allow(non_snake_case)]

use ndarray as nd;
use musr_sim::{
    consts::{ D_MU_F, GAMMA_F19, GAMMA_MU, HBAR },
    hamiltonian::dipolar_constant,
    polarisation::{ polarisation, polarisation_at, polarisation_par, time_grid },
    HBuilderDipolar,
};

#[test]
fn initial_polarisation_is_amplitude_sum() {
    for weight in [None, Some(0.125)] {
        let model = HBuilderDipolar::muon_fluorine(D_MU_F, weight).model().unwrap();
        let d0 = polarisation_at(&model, 0.0);
        assert!((d0 - model.amplitudes().sum()).abs() < 1e-12);
        assert!((d0 - 1.0).abs() < 1e-10, "D(0) = {}", d0);
    }
}

#[test]
fn polarisation_is_even_in_time() {
    let model = HBuilderDipolar::muon_fluorine(D_MU_F, None).model().unwrap();
    let t = time_grid(0.0, 1e-5, 1e-7);
    let fwd = polarisation(&model, &t);
    let bwd = polarisation(&model, &t.mapv(|tk| -tk));
    for (a, b) in fwd.iter().zip(bwd.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn empty_time_sequence() {
    let model = HBuilderDipolar::muon_fluorine(D_MU_F, None).model().unwrap();
    let t: nd::Array1<f64> = nd::Array1::zeros(0);
    assert_eq!(polarisation(&model, &t).len(), 0);
    assert_eq!(polarisation_par(&model, &t).len(), 0);
}

#[test]
fn parallel_matches_serial() {
    let model = HBuilderDipolar::muon_fluorine(D_MU_F, Some(0.125)).model().unwrap();
    let t = time_grid(0.0, 1e-5, 1e-8);
    let serial = polarisation(&model, &t);
    let parallel = polarisation_par(&model, &t);
    assert_eq!(serial.len(), 1000);
    assert_eq!(serial, parallel);
    for (tk, dk) in t.iter().zip(serial.iter()).step_by(97) {
        assert_eq!(*dk, polarisation_at(&model, *tk));
    }
}

#[test]
fn isolated_pair_closed_form() {
    // eigenstates |↑↑⟩, |↓↓⟩ at -2κ, singlet at 0, triplet m = 0 at 4κ
    let c = dipolar_constant(GAMMA_F19, GAMMA_MU, D_MU_F);
    let k = c * HBAR / 4.0;
    let model = HBuilderDipolar::isolated_pair(c).model().unwrap();
    let t = time_grid(0.0, 2e-5, 3.7e-8);
    let D = polarisation(&model, &t);
    for (tk, dk) in t.iter().zip(D.iter()) {
        let expected
            = 1.0 / 6.0
            + (2.0 * k * tk).cos() / 3.0
            + (4.0 * k * tk).cos() / 6.0
            + (6.0 * k * tk).cos() / 3.0;
        assert!((dk - expected).abs() < 1e-8, "D({}) = {}; expected {}", tk, dk, expected);
    }
}
