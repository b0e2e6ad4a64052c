//! Time-domain muon spin polarisation.
//!
//! The polarisation is a superposition of cosines at every eigenstate
//! transition frequency:
//! ```math
//! D(t) = \sum_{i, j} A_{ij} \cos(\omega_{ij} t),
//! \quad \omega_{ij} = |E_i - E_j| / \hbar
//! ```
//! where the sum runs over all ordered pairs, including `i = j`.

use ndarray as nd;
use rayon::iter::{ IntoParallelIterator, ParallelIterator };
use crate::model::Model;

/// Evaluate the polarisation at a single time.
pub fn polarisation_at(model: &Model, t: f64) -> f64 {
    eval(model.amplitudes(), &model.frequency_matrix(), t)
}

fn eval(A: &nd::Array2<f64>, W: &nd::Array2<f64>, t: f64) -> f64 {
    A.iter().zip(W.iter())
        .map(|(a, w)| a * (w * t).cos())
        .sum()
}

/// Evaluate the polarisation over an array of times.
pub fn polarisation(model: &Model, time: &nd::Array1<f64>) -> nd::Array1<f64> {
    let A = model.amplitudes();
    let W = model.frequency_matrix();
    time.mapv(|t| eval(A, &W, t))
}

/// Like [`polarisation`], but with time samples evaluated in parallel.
pub fn polarisation_par(model: &Model, time: &nd::Array1<f64>)
    -> nd::Array1<f64>
{
    let A = model.amplitudes();
    let W = model.frequency_matrix();
    let t: Vec<f64> = time.to_vec();
    t.into_par_iter()
        .map(|tk| eval(A, &W, tk))
        .collect::<Vec<f64>>()
        .into()
}

/// Generate evenly spaced times over the half-open interval `[start, stop)`.
///
/// Unlike `arange`, a sample that lands on or past `stop` through rounding in
/// `(stop - start) / step` is dropped, so `time_grid(0.0, 1e-5, 1e-8)` has
/// exactly 1000 points rather than 1001.
///
/// Returns an empty array if `step` is not positive or `stop <= start`.
pub fn time_grid(start: f64, stop: f64, step: f64) -> nd::Array1<f64> {
    if !(step > 0.0) || !(stop > start) {
        return nd::Array1::zeros(0);
    }
    let count = ((stop - start) / step).ceil() as usize;
    (0..count)
        .map(|k| start + (k as f64) * step)
        .take_while(|t| *t < stop)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_half_open() {
        let t = time_grid(0.0, 1e-5, 1e-8);
        assert_eq!(t.len(), 1000);
        assert_eq!(t[0], 0.0);
        assert!(t[999] < 1e-5);
        // 1e-5 / 1e-8 rounds up past 1000
        assert!((1e-5_f64 / 1e-8).ceil() as usize > t.len());
        assert_eq!(time_grid(0.0, 1.0, 0.3).len(), 4);
        assert_eq!(time_grid(0.0, 1.0, 0.25).to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(time_grid(1.0, 0.0, 0.1).len(), 0);
        assert_eq!(time_grid(0.0, 1.0, 0.0).len(), 0);
    }
}
