//! Hamiltonian builder for spin-1/2 particles with pairwise dipolar couplings.

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use tracing::debug;
use crate::{
    consts::{ GAMMA_F19, GAMMA_MU, MU_0 },
    error::{ ModelError, ModelResult },
    model::Model,
    spin::{ self, Axis },
    tensor::tensor_product,
};

/// Dipolar coupling constant `μ0 γ1 γ2 / (2 d^3)` for two spins separated by
/// a distance `d` (in meters).
pub fn dipolar_constant(gamma1: f64, gamma2: f64, d: f64) -> f64 {
    MU_0 * gamma1 * gamma2 / (2.0 * d.powi(3))
}

/// Coupling constant `μ0 γ^2 / (4π d^3)` for two like spins separated by a
/// distance `d` (in meters).
pub fn partner_constant(gamma: f64, d: f64) -> f64 {
    MU_0 * gamma * gamma / (4.0 * PI * d.powi(3))
}

/// Compute the two-particle operator
/// ```math
/// \sum_{\alpha \in \{x, y, z\}} S_a^\alpha S_b^\alpha - 3 S_a^z S_b^z
/// ```
/// for particles `a` and `b` in a system of `n` spin-1/2 particles, where
/// particle `k` occupies the `k`-th tensor factor.
///
/// This is the dipolar interaction tensor contracted against an internuclear
/// axis fixed along *z*. The result is Hermitian.
pub fn dipolar_term(n: usize, a: usize, b: usize) -> ModelResult<nd::Array2<C64>> {
    if n == 0 { return Err(ModelError::NoParticles); }
    if a >= n { return Err(ModelError::ParticleIndex { index: a, particles: n }); }
    if b >= n { return Err(ModelError::ParticleIndex { index: b, particles: n }); }
    if a == b { return Err(ModelError::SelfCoupling(a)); }
    let eye = spin::eye();
    let pair_product = |axis: Axis| -> ModelResult<nd::Array2<C64>> {
        let s = spin::spin_op(axis);
        tensor_product(
            (0..n).map(|k| if k == a || k == b { s.view() } else { eye.view() })
        )
    };
    let dim = 1_usize << n;
    let mut term: nd::Array2<C64> = nd::Array2::zeros((dim, dim));
    for axis in Axis::ALL {
        term += &pair_product(axis)?;
    }
    term.scaled_add(C64::from(-3.0), &pair_product(Axis::Z)?);
    Ok(term)
}

/// Compute `Σ c_k T_k` over weighted terms for a system of `n` spin-1/2
/// particles.
///
/// Every term is checked to be `2^n × 2^n` before any are summed.
pub fn sum_terms<'a, I>(n: usize, terms: I) -> ModelResult<nd::Array2<C64>>
where I: IntoIterator<Item = (f64, &'a nd::Array2<C64>)>
{
    if n == 0 { return Err(ModelError::NoParticles); }
    let dim = 1_usize << n;
    let terms: Vec<(f64, &nd::Array2<C64>)> = terms.into_iter().collect();
    if let Some((_, t))
        = terms.iter().find(|(_, t)| t.dim() != (dim, dim))
    {
        let found = if t.nrows() != dim { t.nrows() } else { t.ncols() };
        return Err(ModelError::TermArity { expected: dim, found });
    }
    let mut H: nd::Array2<C64> = nd::Array2::zeros((dim, dim));
    for (c, t) in terms.into_iter() {
        H.scaled_add(C64::from(c), t);
    }
    Ok(H)
}

/// A single dipolar coupling between two particles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DipolarPair {
    /// First particle index.
    pub a: usize,
    /// Second particle index.
    pub b: usize,
    /// Coupling constant multiplying the [dipolar term][dipolar_term].
    pub coupling: f64,
}

/// Hamiltonian builder for `n` spin-1/2 particles with an arbitrary set of
/// pairwise dipolar couplings.
///
/// The total Hamiltonian is
/// ```math
/// H = \sum_{(a, b)} C_{ab} \left[
///     \sum_\alpha S_a^\alpha S_b^\alpha - 3 S_a^z S_b^z
/// \right]
/// ```
/// and is Hermitian by construction since every coupling is real.
#[derive(Clone, Debug, PartialEq)]
pub struct HBuilderDipolar {
    pub(crate) n: usize,
    pub(crate) pairs: Vec<DipolarPair>,
}

impl HBuilderDipolar {
    /// Create a new builder for `n` particles with no couplings.
    pub fn new(n: usize) -> Self { Self { n, pairs: Vec::new() } }

    /// Add a coupling between particles `a` and `b`.
    pub fn add_pair(&mut self, a: usize, b: usize, coupling: f64) -> &mut Self {
        self.pairs.push(DipolarPair { a, b, coupling });
        self
    }

    /// Return `self` with an additional coupling between `a` and `b`.
    pub fn with_pair(mut self, a: usize, b: usize, coupling: f64) -> Self {
        self.add_pair(a, b, coupling);
        self
    }

    /// Two particles (muon first) coupled with strength `c`.
    pub fn isolated_pair(c: f64) -> Self { Self::new(2).with_pair(0, 1, c) }

    /// Linear F-μ-F complex: a muon (particle 0) coupled to two fluorine-19
    /// nuclei (particles 1 and 2) at distance `distance`.
    ///
    /// If `partner_weight` is `Some(w)`, the two fluorine nuclei are also
    /// coupled to each other with strength `w` times
    /// [`partner_constant`]`(γ_F, distance)`.
    pub fn muon_fluorine(distance: f64, partner_weight: Option<f64>) -> Self {
        let c = dipolar_constant(GAMMA_F19, GAMMA_MU, distance);
        let mut builder = Self::new(3).with_pair(0, 1, c).with_pair(0, 2, c);
        if let Some(w) = partner_weight {
            builder.add_pair(1, 2, w * partner_constant(GAMMA_F19, distance));
        }
        builder
    }

    /// Number of particles.
    pub fn particles(&self) -> usize { self.n }

    /// Registered couplings.
    pub fn pairs(&self) -> &[DipolarPair] { &self.pairs }

    /// Build the Hamiltonian matrix.
    pub fn build(&self) -> ModelResult<nd::Array2<C64>> {
        let terms: Vec<(f64, nd::Array2<C64>)>
            = self.pairs.iter()
            .map(|p| dipolar_term(self.n, p.a, p.b).map(|t| (p.coupling, t)))
            .collect::<ModelResult<_>>()?;
        let H = sum_terms(self.n, terms.iter().map(|(c, t)| (*c, t)))?;
        debug!(particles = self.n, terms = terms.len(), "built dipolar Hamiltonian");
        Ok(H)
    }

    /// Build and diagonalize the Hamiltonian.
    pub fn model(&self) -> ModelResult<Model> {
        Model::new(self.build()?, self.n)
    }
}
