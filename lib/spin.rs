//! Single-particle spin-1/2 operators and angular momentum quantum numbers.
//!
//! All matrices are expressed in the `σ_z` eigenbasis ordered as `(↑, ↓)`,
//! i.e. index 0 is the `+1` eigenstate of `σ_z`.

use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::{ One, Zero };
use crate::consts::HBAR;

/// A Cartesian axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in `(x, y, z)` order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// 2x2 identity.
pub fn eye() -> nd::Array2<C64> { nd::Array2::eye(2) }

/// Pauli `σ_x`.
pub fn sigma_x() -> nd::Array2<C64> {
    nd::array![
        [C64::zero(), C64::one() ],
        [C64::one(),  C64::zero()],
    ]
}

/// Pauli `σ_y`.
pub fn sigma_y() -> nd::Array2<C64> {
    nd::array![
        [C64::zero(), -C64::i()  ],
        [C64::i(),    C64::zero()],
    ]
}

/// Pauli `σ_z`.
pub fn sigma_z() -> nd::Array2<C64> {
    nd::array![
        [C64::one(),  C64::zero()],
        [C64::zero(), -C64::one()],
    ]
}

/// Pauli matrix along a given axis.
pub fn pauli(axis: Axis) -> nd::Array2<C64> {
    match axis {
        Axis::X => sigma_x(),
        Axis::Y => sigma_y(),
        Axis::Z => sigma_z(),
    }
}

/// Spin-1/2 angular momentum operator `S = (ħ/2) σ` along a given axis, in
/// units of J s.
pub fn spin_op(axis: Axis) -> nd::Array2<C64> {
    pauli(axis) * C64::from(HBAR / 2.0)
}

/// The spin vector operator `(S_x, S_y, S_z)`.
pub fn spin_vector() -> [nd::Array2<C64>; 3] {
    Axis::ALL.map(spin_op)
}

/// A single spin-projection quantum number.
///
/// This type is backed by a single `i32` representing the number of halves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpinProj(i32);

impl SpinProj {
    /// Create a new spin projection from a number of halves.
    pub fn new(m: i32) -> Self { Self(m) }

    /// Return `self` as a bare number of halves.
    pub fn halves(self) -> i32 { self.0 }

    /// Return `self` as an `f64`.
    pub fn f(self) -> f64 { f64::from(self.0) / 2.0 }

    /// Create a new spin-projection quantum number from a `f64` value, rounding
    /// to the nearest half-integer.
    pub fn from_f64(f: f64) -> Self { Self((2.0 * f).round() as i32) }
}

impl From<SpinProj> for f64 {
    fn from(m: SpinProj) -> Self { m.f() }
}

/// A single total-spin quantum number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpinTotal(u32);

impl SpinTotal {
    /// Create a new total spin from a number of halves.
    pub fn new(j: u32) -> Self { Self(j) }

    /// Return `self` as a bare number of halves.
    pub fn halves(self) -> u32 { self.0 }

    /// Return `self` as an `f64`.
    pub fn f(self) -> f64 { f64::from(self.0) / 2.0 }

    /// Create a new total-spin quantum number from a `f64` value, rounding
    /// to the nearest half-integer.
    ///
    /// Negative inputs are passed through [`f64::abs`] before rounding.
    pub fn from_f64(f: f64) -> Self { Self((2.0 * f.abs()).round() as u32) }

    /// Recover the total-spin quantum number `j` from an eigenvalue (or
    /// expectation value) `j(j + 1)` of the squared angular momentum operator,
    /// rounding to the nearest half-integer.
    pub fn from_j_squared(jj: f64) -> Self {
        Self::from_f64((-1.0 + (1.0 + 4.0 * jj.max(0.0)).sqrt()) / 2.0)
    }
}

impl From<SpinTotal> for f64 {
    fn from(j: SpinTotal) -> Self { j.f() }
}
