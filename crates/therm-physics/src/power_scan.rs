// ─────────────────────────────────────────────────────────────────────
// SCPN Thermia — Power Scan
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Deterministic sweep over the non-dimensional laser power range.
//!
//! Useful for mapping the objective landscape before (or instead of)
//! running the minimizer, and for picking its initial guess.

use crate::objective::{ObjectiveBreakdown, TreatmentObjective};
use therm_types::config::TreatmentConfig;
use therm_types::constants::Q_REFERENCE;
use therm_types::error::{ThermError, ThermResult};

/// One evaluated point of the sweep.
#[derive(Debug, Clone)]
pub struct PowerScanPoint {
    pub q_nondim: f64,
    /// Redimensionalized laser power (W/m³).
    pub q_w_m3: f64,
    pub objective: f64,
    pub cancer_average: f64,
    pub healthy_penalty: f64,
}

impl From<ObjectiveBreakdown> for PowerScanPoint {
    fn from(b: ObjectiveBreakdown) -> Self {
        PowerScanPoint {
            q_nondim: b.q_nondim,
            q_w_m3: Q_REFERENCE * b.q_nondim,
            objective: b.objective,
            cancer_average: b.cancer_average,
            healthy_penalty: b.healthy_penalty,
        }
    }
}

/// Evaluate the objective on `samples` equally spaced powers in
/// [q_lo, q_hi], inclusive on both ends.
pub fn scan_power(
    config: &TreatmentConfig,
    q_lo: f64,
    q_hi: f64,
    samples: usize,
) -> ThermResult<Vec<PowerScanPoint>> {
    if samples < 2 {
        return Err(ThermError::ConfigError(
            "power scan requires at least 2 samples".to_string(),
        ));
    }
    if !q_lo.is_finite() || !q_hi.is_finite() || q_hi <= q_lo {
        return Err(ThermError::ConfigError(format!(
            "power scan requires finite q_hi > q_lo, got [{q_lo}, {q_hi}]"
        )));
    }

    let objective = TreatmentObjective::new(config.clone())?;
    let mut points = Vec::with_capacity(samples);
    for k in 0..samples {
        let q = q_lo + (q_hi - q_lo) * (k as f64) / (samples as f64 - 1.0);
        points.push(objective.evaluate_detailed(q)?.into());
    }
    Ok(points)
}

/// The scan point with the lowest objective, if any.
pub fn best_point(points: &[PowerScanPoint]) -> Option<&PowerScanPoint> {
    points
        .iter()
        .min_by(|a, b| a.objective.total_cmp(&b.objective))
}
