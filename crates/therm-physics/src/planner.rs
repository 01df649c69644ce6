// ─────────────────────────────────────────────────────────────────────
// SCPN Thermia — Treatment Planner
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! End-to-end laser power planning: objective plus minimizer in one call.

use crate::objective::TreatmentObjective;
use crate::optimizer::{minimize_scalar, ScalarMinimizeConfig};
use therm_types::config::TreatmentConfig;
use therm_types::constants::Q_REFERENCE;
use therm_types::error::ThermResult;

/// Converged (or best-effort) laser power recommendation.
#[derive(Debug, Clone)]
pub struct PowerOptimum {
    /// Non-dimensional control value.
    pub q_nondim: f64,
    /// Redimensionalized laser power (W/m³).
    pub q_w_m3: f64,
    /// Objective value at the recommendation.
    pub objective: f64,
    /// Whether the minimizer met its tolerance. A `false` here is
    /// informational; the recommendation is still the best point seen.
    pub converged: bool,
    pub iterations: usize,
    pub evaluations: usize,
}

/// Search for the laser power that best balances cancer death against
/// healthy-tissue survival, starting from `initial_guess` (in units of
/// the reference power).
pub fn optimize_laser_power(
    config: &TreatmentConfig,
    initial_guess: f64,
    opt: &ScalarMinimizeConfig,
) -> ThermResult<PowerOptimum> {
    let objective = TreatmentObjective::new(config.clone())?;
    let result = minimize_scalar(|q| objective.evaluate(q), initial_guess, opt)?;
    log::info!(
        "power search finished: q_nondim={:.4}, objective={:.6}, converged={}",
        result.x_min,
        result.f_min,
        result.converged
    );
    Ok(PowerOptimum {
        q_nondim: result.x_min,
        q_w_m3: Q_REFERENCE * result.x_min,
        objective: result.f_min,
        converged: result.converged,
        iterations: result.iterations,
        evaluations: result.evaluations,
    })
}
