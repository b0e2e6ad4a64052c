//! Computational-basis states of `n` spin-1/2 particles.

use std::fmt;

/// Simple representation of a spin-1/2 system.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HSpin {
    /// Spin-up state with spin J = 1/2, mJ = +1/2
    Up,
    /// Spin-down state with spin J = 1/2, mJ = -1/2
    Dn,
}

impl HSpin {
    /// Return appropriate `σ_z` eigenvalue.
    pub fn sz(&self) -> f64 {
        match *self {
            Self::Up =>  1.0,
            Self::Dn => -1.0,
        }
    }

    /// Arrow glyph for the state.
    pub fn arrow(&self) -> char {
        match *self {
            Self::Up => '\u{2191}',
            Self::Dn => '\u{2193}',
        }
    }
}

/// A product state of `n` spin-1/2 particles, particle 0 first.
///
/// The tensor-product ordering used throughout the crate places particle 0 in
/// the most significant bit of a computational-basis index, with a cleared
/// bit meaning [`HSpin::Up`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProdState(Vec<HSpin>);

impl ProdState {
    /// Decode the computational-basis index `index` of an `n`-particle space.
    ///
    /// *Panics* if `index >= 2^n`.
    pub fn from_index(n: usize, index: usize) -> Self {
        if index >> n != 0 {
            panic!("ProdState::from_index: index {index} out of range for {n} particles");
        }
        let spins
            = (0..n).rev()
            .map(|bit| if index & (1 << bit) == 0 { HSpin::Up } else { HSpin::Dn })
            .collect();
        Self(spins)
    }

    /// Return the computational-basis index of `self`.
    pub fn index(&self) -> usize {
        self.0.iter()
            .fold(0, |acc, s| (acc << 1) | usize::from(*s == HSpin::Dn))
    }

    /// Return the individual particle states.
    pub fn spins(&self) -> &[HSpin] { &self.0 }

    /// Total `σ_z` eigenvalue, summed over all particles.
    pub fn sz(&self) -> f64 { self.0.iter().map(HSpin::sz).sum() }
}

impl fmt::Display for ProdState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|s| write!(f, "{}", s.arrow()))
    }
}

/// Iterate over all `2^n` computational-basis states in index order.
pub fn computational_basis(n: usize) -> impl Iterator<Item = ProdState> {
    (0..1_usize << n).map(move |k| ProdState::from_index(n, k))
}
