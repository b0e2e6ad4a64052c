//! Plain-data summaries of a [`Model`] for display.
//!
//! Nothing here is used to compute the polarisation itself; these are
//! groupings of the spectrum by rounded frequency and descriptive labels for
//! the energy eigenstates.

use indexmap::IndexMap;
use itertools::Itertools;
use ndarray as nd;
use num_complex::Complex64 as C64;
use rustc_hash::FxHashSet as HashSet;
use crate::{
    consts::{ HBAR, SIGNIFICANCE },
    error::ModelResult,
    hilbert::{ computational_basis, ProdState },
    model::{ round_freq, Model },
    spin::{ self, Axis, SpinProj, SpinTotal },
    tensor::embed,
};

/// Distinct rounded eigenfrequencies, in ascending order.
pub fn frequency_levels(model: &Model) -> Vec<i64> {
    model.rounded_frequencies().iter().copied()
        .sorted_unstable()
        .dedup()
        .collect()
}

/// Pairs `(a, b)` with `a < b` of rounded eigenfrequencies between which at
/// least one transition has amplitude above [`SIGNIFICANCE`], in ascending
/// order.
pub fn transitions(model: &Model) -> Vec<(i64, i64)> {
    let f = model.rounded_frequencies();
    let A = model.amplitudes();
    let N = model.dim();
    let mut pairs: HashSet<(i64, i64)> = HashSet::default();
    for (i, j) in (0..N).cartesian_product(0..N) {
        if A[[i, j]] <= SIGNIFICANCE { continue; }
        let (a, b) = (f[i].min(f[j]), f[i].max(f[j]));
        if a != b { pairs.insert((a, b)); }
    }
    pairs.into_iter().sorted_unstable().collect()
}

/// Total transition amplitude at each rounded transition frequency
/// `|E_i - E_j| / ħ`, in ascending order of frequency.
///
/// Every ordered pair `(i, j)` contributes, including `i = j` at zero
/// frequency, so the values sum to the polarisation at `t = 0`. Buckets whose
/// total does not exceed [`SIGNIFICANCE`] are dropped.
pub fn amplitude_histogram(model: &Model) -> IndexMap<i64, f64> {
    let W = model.frequency_matrix();
    let mut hist: IndexMap<i64, f64> = IndexMap::new();
    for (w, a) in W.iter().zip(model.amplitudes().iter()) {
        *hist.entry(round_freq(*w)).or_insert(0.0) += a;
    }
    hist.retain(|_, a| *a > SIGNIFICANCE);
    hist.sort_keys();
    hist
}

/// Sign of a single eigenvector component in the computational basis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Pos,
    Neg,
    Zero,
}

impl Sign {
    /// Classify the real part of `z` against [`SIGNIFICANCE`].
    pub fn of(z: C64) -> Self {
        if z.re > SIGNIFICANCE {
            Self::Pos
        } else if z.re < -SIGNIFICANCE {
            Self::Neg
        } else {
            Self::Zero
        }
    }

    /// `+`, `-`, or a space.
    pub fn symbol(&self) -> char {
        match *self {
            Self::Pos => '+',
            Self::Neg => '-',
            Self::Zero => ' ',
        }
    }
}

/// Descriptive labels for a single energy eigenstate.
#[derive(Clone, Debug, PartialEq)]
pub struct EigenstateLabel {
    /// Sign of each component, indexed like [`basis_labels`].
    pub signs: Vec<Sign>,
    /// `⟨J^2⟩ = j(j + 1)` for total angular momentum `J = Σ_k S_k / ħ`.
    pub j_squared: f64,
    /// `⟨J_z⟩`.
    pub j_z: f64,
    /// Nearest total-spin quantum number to `j_squared`.
    pub total: SpinTotal,
    /// Nearest projection quantum number to `j_z`.
    pub proj: SpinProj,
    /// Rounded eigenfrequency.
    pub frequency: i64,
}

impl EigenstateLabel {
    /// Render [`Self::signs`] as a string of `+`, `-`, and spaces.
    pub fn sign_string(&self) -> String {
        self.signs.iter().map(Sign::symbol).collect()
    }
}

/// Computational-basis states of the model, in index order.
pub fn basis_labels(model: &Model) -> Vec<ProdState> {
    computational_basis(model.particles()).collect()
}

/// Total angular momentum operators `(J_x, J_y, J_z)`, with
/// `J = Σ_k S_k / ħ`, for `n` spin-1/2 particles.
pub fn total_angular_momentum(n: usize) -> ModelResult<[nd::Array2<C64>; 3]> {
    let dim = 1_usize << n;
    let mut J: [nd::Array2<C64>; 3]
        = std::array::from_fn(|_| nd::Array2::zeros((dim, dim)));
    for (Jk, axis) in J.iter_mut().zip(Axis::ALL) {
        let s = spin::spin_op(axis) / C64::from(HBAR);
        for k in 0..n {
            *Jk += &embed(n, k, &s)?;
        }
    }
    Ok(J)
}

fn expectation(op: &nd::Array2<C64>, v: nd::ArrayView1<C64>) -> f64 {
    v.mapv(|z| z.conj()).dot(&op.dot(&v)).re
}

/// Sign patterns and angular momentum expectation values of every energy
/// eigenstate, ordered to match [`Model::energies`].
///
/// States within a degenerate subspace are whatever combination the
/// eigensolver returned, so `j_squared` and `j_z` need not be sharp there.
pub fn eigenstate_labels(model: &Model) -> ModelResult<Vec<EigenstateLabel>> {
    let [Jx, Jy, Jz] = total_angular_momentum(model.particles())?;
    let J2 = Jx.dot(&Jx) + Jy.dot(&Jy) + Jz.dot(&Jz);
    let labels
        = (0..model.dim())
        .map(|k| {
            let v = model.eigenvector(k);
            let j_squared = expectation(&J2, v);
            let j_z = expectation(&Jz, v);
            EigenstateLabel {
                signs: v.iter().copied().map(Sign::of).collect(),
                j_squared,
                j_z,
                total: SpinTotal::from_j_squared(j_squared),
                proj: SpinProj::from_f64(j_z),
                frequency: model.rounded_frequencies()[k],
            }
        })
        .collect();
    Ok(labels)
}
