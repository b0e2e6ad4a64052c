//! Error types for model construction.

use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when a Hamiltonian or spectral model cannot be constructed.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("tensor product requires at least one operand")]
    EmptyProduct,

    #[error("particle count must be at least 1")]
    NoParticles,

    #[error("particle index {index} out of range for {particles} particles")]
    ParticleIndex { index: usize, particles: usize },

    #[error("dipolar pair couples particle {0} to itself")]
    SelfCoupling(usize),

    #[error("Hamiltonian term has dimension {found}; expected {expected}")]
    TermArity { expected: usize, found: usize },

    #[error("Hamiltonian has a non-finite element at ({row}, {col})")]
    NonFinite { row: usize, col: usize },

    #[error("Hamiltonian must be square; got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Hamiltonian is not Hermitian: max |H - H†| = {deviation:e} exceeds {tolerance:e}")]
    NotHermitian { deviation: f64, tolerance: f64 },

    #[error("Hamiltonian dimension {dim} is inconsistent with {particles} spin-1/2 particles")]
    DimensionMismatch { dim: usize, particles: usize },

    #[error("Hamiltonian dimension {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("diagonalization failed: {0}")]
    Eigh(#[from] LinalgError),
}

pub type ModelResult<T> = Result<T, ModelError>;
