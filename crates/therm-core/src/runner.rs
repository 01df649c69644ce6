// ─────────────────────────────────────────────────────────────────────
// SCPN Thermia — Treatment Simulation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Coupled time-stepping driver.
//!
//! Runs the three field models over one configuration:
//! heat feeds the injury integral; drug diffusion runs independently
//! (no temperature feedback in the current coupling). Column j of every
//! matrix is derived strictly from column j-1, and the injury integral
//! consumes the freshly computed temperature column.

use crate::diffusion::DiffusionSolver;
use crate::heat::HeatSolver;
use crate::injury::InjuryIntegrator;
use ndarray::Array2;
use therm_types::config::TreatmentConfig;
use therm_types::constants::BODY_TEMPERATURE_C;
use therm_types::error::ThermResult;
use therm_types::state::{RadialGrid, TimeAxis, TreatmentFields};

/// One fully configured simulation run.
///
/// Owns nothing mutable between runs: every `run()` call builds fresh
/// solvers, a fresh injury accumulator, and fresh matrices, so repeated
/// runs with the same configuration are bit-for-bit identical.
pub struct TreatmentSimulation {
    config: TreatmentConfig,
    grid: RadialGrid,
    time: TimeAxis,
}

impl TreatmentSimulation {
    /// Validate the configuration and fix the grid and time axis.
    pub fn new(config: TreatmentConfig) -> ThermResult<Self> {
        config.validate()?;
        let grid = config.create_grid()?;
        let time = config.create_time_axis()?;
        Ok(TreatmentSimulation { config, grid, time })
    }

    pub fn grid(&self) -> &RadialGrid {
        &self.grid
    }

    pub fn time_axis(&self) -> &TimeAxis {
        &self.time
    }

    pub fn config(&self) -> &TreatmentConfig {
        &self.config
    }

    /// Integrate the coupled system over the full time window.
    ///
    /// NaN/Inf values produced by an unstable discretization are not
    /// detected; they propagate silently through later columns.
    pub fn run(&self) -> ThermResult<TreatmentFields> {
        let heat = HeatSolver::new(self.grid.clone(), &self.config.thermal)?;
        let diffusion = DiffusionSolver::new(self.grid.clone(), &self.config.drug)?;
        let mut injury = InjuryIntegrator::new(self.grid.node_count());

        let nodes = self.grid.node_count();
        let n = self.time.n;
        let dt = self.time.dt;

        let mut temperature = Array2::zeros((nodes, n + 1));
        temperature.column_mut(0).fill(BODY_TEMPERATURE_C);
        let mut concentration = Array2::zeros((nodes, n + 1));
        concentration.column_mut(0).assign(&diffusion.initial_profile());
        let mut fraction_dead = Array2::zeros((nodes, n + 1));

        for j in 1..=n {
            let time = j as f64 * dt;

            let new_t = heat.time_step(&temperature.column(j - 1).to_owned(), time, dt);
            let new_c = diffusion.time_step(&concentration.column(j - 1).to_owned(), dt);

            injury.integrate(&new_t, dt);
            fraction_dead.column_mut(j).assign(&injury.fraction_dead());

            temperature.column_mut(j).assign(&new_t);
            concentration.column_mut(j).assign(&new_c);
        }

        Ok(TreatmentFields {
            r: self.grid.r.clone(),
            t: self.time.t.clone(),
            temperature,
            concentration,
            fraction_dead,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_config() -> TreatmentConfig {
        TreatmentConfig::default()
    }

    #[test]
    fn test_matrix_shapes_and_initial_columns() {
        let sim = TreatmentSimulation::new(reference_config()).unwrap();
        let fields = sim.run().unwrap();

        assert_eq!(fields.temperature.shape(), &[21, 2001]);
        assert_eq!(fields.concentration.shape(), &[21, 2001]);
        assert_eq!(fields.fraction_dead.shape(), &[21, 2001]);

        for i in 0..21 {
            assert!(
                (fields.temperature[[i, 0]] - BODY_TEMPERATURE_C).abs() < 1e-15,
                "temperature must start at body temperature"
            );
            assert!(
                fields.fraction_dead[[i, 0]] == 0.0,
                "no injury before the first step"
            );
        }
        // Coupon nodes start at unit concentration, the rest empty.
        assert!((fields.concentration[[0, 0]] - 1.0).abs() < 1e-15);
        assert!(fields.concentration[[15, 0]].abs() < 1e-15);
    }

    #[test]
    fn test_boundary_conditions_hold_at_every_step() {
        let sim = TreatmentSimulation::new(reference_config()).unwrap();
        let fields = sim.run().unwrap();

        for j in 1..=2000 {
            assert!(
                (fields.temperature[[20, j]] - BODY_TEMPERATURE_C).abs() < 1e-15,
                "temperature edge must be exactly {BODY_TEMPERATURE_C} at column {j}"
            );
            assert!(
                fields.concentration[[20, j]].abs() < 1e-15,
                "concentration edge must be exactly 0 at column {j}"
            );
        }
    }

    #[test]
    fn test_repeated_runs_are_bit_identical() {
        let sim = TreatmentSimulation::new(reference_config()).unwrap();
        let first = sim.run().unwrap();
        let second = sim.run().unwrap();

        assert_eq!(first.temperature, second.temperature);
        assert_eq!(first.concentration, second.concentration);
        assert_eq!(first.fraction_dead, second.fraction_dead);
    }

    #[test]
    fn test_fraction_dead_monotone_in_time() {
        let sim = TreatmentSimulation::new(reference_config()).unwrap();
        let fields = sim.run().unwrap();

        for i in 0..21 {
            for j in 1..=2000 {
                assert!(
                    fields.fraction_dead[[i, j]] >= fields.fraction_dead[[i, j - 1]],
                    "fraction dead must never decrease: node {i}, column {j}"
                );
                // The lased core saturates to exactly 1.0 in double
                // precision once kt passes ~37, so the bound here is
                // inclusive.
                assert!(
                    (0.0..=1.0).contains(&fields.fraction_dead[[i, j]]),
                    "fraction dead must stay within [0, 1]"
                );
            }
        }
    }

    #[test]
    fn test_treatment_kills_the_heated_core() {
        let sim = TreatmentSimulation::new(reference_config()).unwrap();
        let fields = sim.run().unwrap();

        let center_fd = fields.fraction_dead[[0, 2000]];
        let edge_fd = fields.fraction_dead[[20, 2000]];
        assert!(
            center_fd > edge_fd,
            "the lased core must accumulate more death than the edge: {center_fd} vs {edge_fd}"
        );
        assert!(
            fields.temperature.iter().all(|v| v.is_finite()),
            "reference parameters sit inside the stability region"
        );
    }
}
