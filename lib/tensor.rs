//! Kronecker products and related operations on complex matrices.

use ndarray::{ self as nd, linalg::kron };
use num_complex::Complex64 as C64;
use crate::error::{ ModelError, ModelResult };

/// Compute the left-to-right iterated Kronecker product of a sequence of
/// matrices.
///
/// Operand order is significant: the `k`-th operand acts on the `k`-th tensor
/// factor of the result, so callers building multi-particle operators must
/// assign particles to positions consistently. Row and column dimensions of
/// the result are the products of the operands' row and column dimensions,
/// respectively.
///
/// Fails with [`ModelError::EmptyProduct`] if no operands are given.
pub fn tensor_product<'a, I>(ops: I) -> ModelResult<nd::Array2<C64>>
where I: IntoIterator<Item = nd::ArrayView2<'a, C64>>
{
    let mut iter = ops.into_iter();
    let first = iter.next().ok_or(ModelError::EmptyProduct)?;
    Ok(iter.fold(first.to_owned(), |acc, op| kron(&acc, &op)))
}

/// Return the conjugate transpose of a matrix.
pub fn adjoint<S>(a: &nd::ArrayBase<S, nd::Ix2>) -> nd::Array2<C64>
where S: nd::Data<Elem = C64>
{
    a.t().mapv(|z| z.conj())
}

/// Embed a single-particle operator acting on particle `k` into the space of
/// `n` spin-1/2 particles, placing identities on every other tensor factor.
pub fn embed(n: usize, k: usize, op: &nd::Array2<C64>)
    -> ModelResult<nd::Array2<C64>>
{
    if k >= n {
        return Err(ModelError::ParticleIndex { index: k, particles: n });
    }
    let eye: nd::Array2<C64> = nd::Array2::eye(2);
    tensor_product(
        (0..n).map(|j| if j == k { op.view() } else { eye.view() })
    )
}

/// Return the largest elementwise modulus of `a - a†`.
///
/// NaN is returned if any element is NaN.
pub fn hermitian_deviation<S>(a: &nd::ArrayBase<S, nd::Ix2>) -> f64
where S: nd::Data<Elem = C64>
{
    a.iter().zip(a.t().iter())
        .map(|(aij, aji)| (*aij - aji.conj()).norm())
        .fold(0.0, |acc, d| if d > acc || d.is_nan() { d } else { acc })
}
