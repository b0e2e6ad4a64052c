//! Exact diagonalization of a spin Hamiltonian and the derived quantities
//! needed to compute muon spin polarisation.

use ndarray as nd;
use ndarray_linalg::{ EighInto, UPLO };
use num_complex::Complex64 as C64;
use tracing::debug;
use crate::{
    consts::HBAR,
    error::{ ModelError, ModelResult },
    spin,
    tensor::{ adjoint, embed, hermitian_deviation },
};

/// Relative tolerance, against the largest matrix element, allowed for
/// `|H - H†|` when validating a Hamiltonian.
pub const HERMITIAN_RTOL: f64 = 1e-10;

/// Round half-way cases to even, matching the usual array-library convention.
pub(crate) fn round_freq(f: f64) -> i64 { f.round_ties_even() as i64 }

/// Spectrum and transition amplitudes of a system of spin-1/2 particles,
/// where the first particle (tensor factor 0) is the muon whose polarisation
/// is observed.
///
/// A `Model` is constructed once from a Hamiltonian and is read-only
/// thereafter.
#[derive(Clone, Debug)]
pub struct Model {
    pub(crate) n: usize,
    pub(crate) energies: nd::Array1<f64>,
    pub(crate) M: nd::Array2<C64>,
    pub(crate) amplitudes: nd::Array2<f64>,
    pub(crate) rounded_frequencies: nd::Array1<i64>,
}

impl Model {
    /// Diagonalize the Hamiltonian `H` for `particles` spin-1/2 particles.
    ///
    /// `H` must be square with dimension `2^particles`, contain only finite
    /// elements, and be Hermitian to within [`HERMITIAN_RTOL`] of its largest
    /// element.
    ///
    /// The transition amplitude matrix is
    /// ```math
    /// A_{ij} = \frac{
    ///     2 |\langle i | \sigma_\mu^x | j \rangle|^2
    ///     + |\langle i | \sigma_\mu^z | j \rangle|^2
    /// }{3 \cdot 2^n}
    /// ```
    /// where `|i⟩` are the energy eigenstates and `σ_μ` acts on particle 0.
    pub fn new(H: nd::Array2<C64>, particles: usize) -> ModelResult<Self> {
        let (rows, cols) = H.dim();
        if rows != cols {
            return Err(ModelError::NotSquare { rows, cols });
        }
        if particles == 0 { return Err(ModelError::NoParticles); }
        if particles >= usize::BITS as usize || rows != 1 << particles {
            return Err(ModelError::DimensionMismatch { dim: rows, particles });
        }
        if let Some(((row, col), _))
            = H.indexed_iter().find(|(_, z)| !z.is_finite())
        {
            return Err(ModelError::NonFinite { row, col });
        }
        let scale = H.iter().map(|z| z.norm()).fold(0.0, f64::max);
        let tolerance = HERMITIAN_RTOL * scale;
        let deviation = hermitian_deviation(&H);
        if deviation > tolerance {
            return Err(ModelError::NotHermitian { deviation, tolerance });
        }

        let (energies, M) = H.eigh_into(UPLO::Lower)?;
        let Mdag = adjoint(&M);
        let sx = embed(particles, 0, &spin::sigma_x())?;
        let sz = embed(particles, 0, &spin::sigma_z())?;
        let sx_eig = Mdag.dot(&sx).dot(&M);
        let sz_eig = Mdag.dot(&sz).dot(&M);
        let norm = 3.0 * (rows as f64);
        let A: nd::Array2<f64>
            = nd::Zip::from(&sx_eig).and(&sz_eig)
            .map_collect(|x, z| (2.0 * x.norm_sqr() + z.norm_sqr()) / norm);
        let amplitudes = (&A + &A.t()) / 2.0;
        let rounded_frequencies = energies.mapv(|e| round_freq(e / HBAR));

        debug!(
            particles,
            dim = rows,
            e_min = energies[0] / HBAR,
            e_max = energies[rows - 1] / HBAR,
            "diagonalized Hamiltonian"
        );
        Ok(Self { n: particles, energies, M, amplitudes, rounded_frequencies })
    }

    /// Like [`Self::new`], but infer the particle count from the dimension of
    /// `H`, which must be a power of two.
    pub fn from_hamiltonian(H: nd::Array2<C64>) -> ModelResult<Self> {
        let (rows, cols) = H.dim();
        if rows != cols {
            return Err(ModelError::NotSquare { rows, cols });
        }
        if !rows.is_power_of_two() {
            return Err(ModelError::NotPowerOfTwo(rows));
        }
        let particles = rows.trailing_zeros() as usize;
        Self::new(H, particles)
    }

    /// Number of particles.
    pub fn particles(&self) -> usize { self.n }

    /// Dimension of the Hilbert space, `2^n`.
    pub fn dim(&self) -> usize { self.energies.len() }

    /// Energy eigenvalues in ascending order, in J.
    pub fn energies(&self) -> &nd::Array1<f64> { &self.energies }

    /// Eigenvectors as the columns of a unitary matrix, ordered to match
    /// [`Self::energies`].
    pub fn eigenvectors(&self) -> &nd::Array2<C64> { &self.M }

    /// Return the `k`-th eigenvector.
    pub fn eigenvector(&self, k: usize) -> nd::ArrayView1<C64> {
        self.M.column(k)
    }

    /// Transition amplitude matrix; symmetric with non-negative entries.
    pub fn amplitudes(&self) -> &nd::Array2<f64> { &self.amplitudes }

    /// Eigenenergies divided by ħ and rounded to the nearest integer.
    pub fn rounded_frequencies(&self) -> &nd::Array1<i64> {
        &self.rounded_frequencies
    }

    /// Angular frequencies `|E_i - E_j| / ħ` of every eigenstate pair.
    pub fn frequency_matrix(&self) -> nd::Array2<f64> {
        let N = self.dim();
        nd::Array2::from_shape_fn(
            (N, N),
            |(i, j)| (self.energies[i] - self.energies[j]).abs() / HBAR,
        )
    }
}
