#![allow(non_snake_case)]

//! Exact diagonalization of small dipolar-coupled spin-1/2 clusters and the
//! resulting zero-field muon spin polarisation.
//!
//! A [`HBuilderDipolar`][hamiltonian::HBuilderDipolar] assembles the
//! Hamiltonian from [spin operators][spin] via [tensor products][tensor]; a
//! [`Model`][model::Model] diagonalizes it and computes transition amplitudes,
//! which are consumed by [`polarisation`] and [`diagnostics`].

pub mod consts;
pub mod error;
pub mod tensor;
pub mod spin;
pub mod hilbert;
pub mod hamiltonian;
pub mod model;
pub mod polarisation;
pub mod diagnostics;
pub mod config;
pub mod utils;

pub use error::{ ModelError, ModelResult };
pub use hamiltonian::HBuilderDipolar;
pub use model::Model;
