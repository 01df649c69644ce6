//! Shared cylindrical finite-difference stencil.
//!
//! Both the heat and drug diffusion equations reduce to the same radial
//! operator in cylindrical coordinates:
//!
//!   dF/dt = D (d²F/dr² + (1/r) dF/dr) - k F + S
//!
//! Discretized with a second-order central difference for the Laplacian
//! and a first-order central difference for the 1/r divergence term,
//! explicit (forward Euler) in time. Each field keeps its own boundary
//! policy; only the interior update is shared.

use ndarray::Array1;

/// Advance one interior node by one explicit time step.
///
/// `field`: values at the previous time step
/// `i`: interior node index, 1 <= i <= M-1 (r_i must be > 0)
/// `diffusivity`: D-like coefficient (thermal or mass diffusivity)
/// `decay`: first-order sink rate k (0 for the heat equation)
/// `source`: volumetric source term S at this node (0 for pure diffusion)
///
/// Stability is the caller's responsibility: the explicit scheme diverges
/// once `diffusivity * dt / h²` exceeds its threshold, and the resulting
/// NaN/Inf values propagate silently.
#[inline(always)]
pub fn interior_update(
    field: &Array1<f64>,
    i: usize,
    r_i: f64,
    h: f64,
    dt: f64,
    diffusivity: f64,
    decay: f64,
    source: f64,
) -> f64 {
    let laplacian = (field[i + 1] - 2.0 * field[i] + field[i - 1]) / (h * h);
    let divergence = (field[i + 1] - field[i - 1]) / (2.0 * r_i * h);
    field[i] + dt * diffusivity * laplacian + dt * (diffusivity * divergence + source)
        - decay * dt * field[i]
}
