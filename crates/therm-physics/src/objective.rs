// ─────────────────────────────────────────────────────────────────────
// SCPN Thermia — Treatment Objective
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Scalar treatment penalty for the laser power search.
//!
//! Each evaluation redimensionalizes the control variable, runs one full
//! simulation, and scores the final fraction-dead profile by spatial
//! zone: surviving cancer cells and dead healthy cells are both
//! penalized, combined with a fixed Lagrange weight.

use therm_core::runner::TreatmentSimulation;
use therm_types::config::TreatmentConfig;
use therm_types::constants::Q_REFERENCE;
use therm_types::error::{ThermError, ThermResult};

/// Fixed multiplier standing in for a constraint multiplier; weights
/// cancer survival 25x against healthy-tissue damage.
const LAGRANGE_WEIGHT: f64 = 25.0;

/// Penalty weights for the five nodes immediately outside the cancer
/// zone. Steeper than linear: damage far from the tumor margin costs
/// much more than damage next to it.
const HEALTHY_WEIGHTS: [f64; 5] = [1.0, 2.0, 4.0, 16.0, 64.0];

/// Sum of HEALTHY_WEIGHTS, the normalization of the healthy penalty.
const HEALTHY_WEIGHT_SUM: f64 = 87.0;

/// Per-evaluation score breakdown.
#[derive(Debug, Clone)]
pub struct ObjectiveBreakdown {
    /// The non-dimensional control input.
    pub q_nondim: f64,
    /// Combined penalty in ~[0, 1]; lower is better.
    pub objective: f64,
    /// Mean fraction dead over the cancer nodes at the final time.
    pub cancer_average: f64,
    /// 1 - cancer_average (penalizes cancer survival).
    pub cancer_penalty: f64,
    /// Weighted, normalized fraction dead over the healthy band.
    pub healthy_penalty: f64,
}

/// The black-box objective handed to the scalar minimizer.
///
/// Stateless across evaluations: every call constructs fresh field
/// solvers and matrices, so equal inputs give bit-identical outputs.
#[derive(Debug)]
pub struct TreatmentObjective {
    config: TreatmentConfig,
    cancer_nodes: usize,
}

impl TreatmentObjective {
    /// Fix the scoring geometry. Fails if the cancer region leaves no
    /// room for the five-node healthy band on the grid.
    pub fn new(config: TreatmentConfig) -> ThermResult<Self> {
        config.validate()?;
        let m = config.sample.radial_intervals;
        let cancer_nodes = ((m + 1) as f64 * config.sample.cancer_edge / config.sample.edge)
            .round() as usize;
        if cancer_nodes + HEALTHY_WEIGHTS.len() > m {
            return Err(ThermError::ConfigError(format!(
                "cancer region spans {} of {} nodes, leaving no room for the \
                 {}-node healthy scoring band",
                cancer_nodes + 1,
                m + 1,
                HEALTHY_WEIGHTS.len()
            )));
        }
        Ok(TreatmentObjective {
            config,
            cancer_nodes,
        })
    }

    /// Highest node index counted as cancerous.
    pub fn cancer_nodes(&self) -> usize {
        self.cancer_nodes
    }

    /// Evaluate the combined penalty at one control input.
    ///
    /// The input is intentionally NOT clamped to [0, 1]; the minimizer
    /// may probe outside the nominal non-dimensional range.
    pub fn evaluate(&self, q_nondim: f64) -> ThermResult<f64> {
        Ok(self.evaluate_detailed(q_nondim)?.objective)
    }

    /// Evaluate and return the full zone breakdown.
    pub fn evaluate_detailed(&self, q_nondim: f64) -> ThermResult<ObjectiveBreakdown> {
        let mut config = self.config.clone();
        config.thermal.laser_energy_density = Q_REFERENCE * q_nondim;

        let fields = TreatmentSimulation::new(config)?.run()?;
        let final_column = fields.fraction_dead.ncols() - 1;
        let final_fd = fields.fraction_dead.column(final_column);

        let cancer_average = final_fd
            .iter()
            .take(self.cancer_nodes + 1)
            .sum::<f64>()
            / (self.cancer_nodes + 1) as f64;
        let cancer_penalty = 1.0 - cancer_average;

        let healthy_penalty = HEALTHY_WEIGHTS
            .iter()
            .enumerate()
            .map(|(k, weight)| weight * final_fd[self.cancer_nodes + k + 1])
            .sum::<f64>()
            / HEALTHY_WEIGHT_SUM;

        let objective =
            (healthy_penalty + LAGRANGE_WEIGHT * cancer_penalty) / (1.0 + LAGRANGE_WEIGHT);

        Ok(ObjectiveBreakdown {
            q_nondim,
            objective,
            cancer_average,
            cancer_penalty,
            healthy_penalty,
        })
    }
}
