//! Physical constants for dipolar spin systems.

// reduced Planck constant [J s]
pub const HBAR: f64 = 1.054571817e-34;

// vacuum permeability [N / A^2]
pub const MU_0: f64 = 1.25663706212e-6;

// gyromagnetic ratios [rad / s / T]
pub const GAMMA_F19: f64 = 251.662e6;
pub const GAMMA_MU: f64 = 136e6; // tabulated as γ/2π; used as-is in the coupling

/// Muon-fluorine separation in a linear F-μ-F complex [m].
pub const D_MU_F: f64 = 2.34e-10 / 2.0;

/// Magnitude below which amplitudes and eigenvector components are treated
/// as zero when deriving diagnostics.
pub const SIGNIFICANCE: f64 = 1e-8;
