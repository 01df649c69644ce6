// ─────────────────────────────────────────────────────────────────────
// SCPN Thermia — Heat Transfer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radial heat equation with a localized laser source term.
//!
//! Explicit second-order finite differences on the cylindrical grid. The
//! laser deposits volumetric power inside its beam radius until the
//! shutoff time; the sample edge is pinned to body temperature.
//!
//! The scheme is conditionally stable: once `diffusivity * dt / h²`
//! exceeds the explicit threshold the solution oscillates and blows up.
//! That regime is not detected here; callers choose M, N, and the
//! diffusivity inside the stability region.

use crate::stencil;
use ndarray::Array1;
use therm_types::config::ThermalConfig;
use therm_types::constants::{BODY_TEMPERATURE_C, TISSUE_DENSITY, TISSUE_HEAT_CAPACITY};
use therm_types::error::{ThermError, ThermResult};
use therm_types::state::RadialGrid;

/// Heat solver for one treatment run.
#[derive(Debug)]
pub struct HeatSolver {
    grid: RadialGrid,
    diffusivity: f64,
    laser_energy_density: f64,
    optical_density: f64,
    laser_radius: f64,
    laser_shutoff: f64,
}

impl HeatSolver {
    /// Create a heat solver over `grid`. Fails if the laser beam extends
    /// beyond the tissue sample.
    pub fn new(grid: RadialGrid, thermal: &ThermalConfig) -> ThermResult<Self> {
        if thermal.laser_radius > grid.edge {
            return Err(ThermError::ConfigError(format!(
                "laser radius {} must not extend beyond the sample edge {}",
                thermal.laser_radius, grid.edge
            )));
        }
        Ok(HeatSolver {
            grid,
            diffusivity: thermal.diffusivity,
            laser_energy_density: thermal.laser_energy_density,
            optical_density: thermal.optical_density,
            laser_radius: thermal.laser_radius,
            laser_shutoff: thermal.laser_shutoff,
        })
    }

    /// Volumetric heating rate delivered by the laser (K/s), from the
    /// absorbed fraction 1 - 10^(-OD) over the tissue heat capacity.
    fn laser_heating_rate(&self) -> f64 {
        self.laser_energy_density * (1.0 - 10f64.powf(-self.optical_density))
            / (TISSUE_DENSITY * TISSUE_HEAT_CAPACITY)
    }

    /// Advance the temperature field by one explicit time step.
    ///
    /// `time` is the absolute simulation time of the NEW column; the laser
    /// term is active at nodes inside the beam while `time <= laser_shutoff`.
    pub fn time_step(&self, old_t: &Array1<f64>, time: f64, dt: f64) -> Array1<f64> {
        let m = self.grid.m;
        let h = self.grid.h;
        let mut new_t = Array1::zeros(m + 1);
        let heating = self.laser_heating_rate();

        for i in 1..m {
            let laser = if self.grid.r[i] <= self.laser_radius && time <= self.laser_shutoff {
                heating
            } else {
                0.0
            };
            new_t[i] = stencil::interior_update(
                old_t,
                i,
                self.grid.r[i],
                h,
                dt,
                self.diffusivity,
                0.0,
                laser,
            );
        }

        // Center node: the symmetry condition through the r = 0 singularity
        // doubles the outward neighbor contribution. The beam always covers
        // the axis, so only the shutoff gates the source here.
        new_t[0] = old_t[0] + dt * self.diffusivity * (2.0 * old_t[1] - 2.0 * old_t[0]) / (h * h);
        if time <= self.laser_shutoff {
            new_t[0] += dt * heating;
        }

        // The sample edge is held at normal body temperature.
        new_t[m] = BODY_TEMPERATURE_C;
        new_t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use therm_types::config::TreatmentConfig;

    fn solver_with(q: f64) -> HeatSolver {
        let cfg = TreatmentConfig::default();
        let grid = cfg.create_grid().unwrap();
        let mut thermal = cfg.thermal.clone();
        thermal.laser_energy_density = q;
        HeatSolver::new(grid, &thermal).unwrap()
    }

    fn body_temperature_field(nodes: usize) -> Array1<f64> {
        Array1::from_elem(nodes, BODY_TEMPERATURE_C)
    }

    #[test]
    fn test_rejects_laser_wider_than_sample() {
        let cfg = TreatmentConfig::default();
        let grid = cfg.create_grid().unwrap();
        let mut thermal = cfg.thermal.clone();
        thermal.laser_radius = 0.05;
        let err = HeatSolver::new(grid, &thermal).expect_err("oversized beam must fail");
        match err {
            ThermError::ConfigError(msg) => assert!(msg.contains("laser")),
            other => panic!("Unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn test_edge_pinned_to_body_temperature() {
        let solver = solver_with(9e6);
        let mut t = body_temperature_field(21);
        for j in 1..=50 {
            t = solver.time_step(&t, j as f64 * 0.1, 0.1);
            assert!(
                (t[20] - BODY_TEMPERATURE_C).abs() < 1e-15,
                "edge must stay at {BODY_TEMPERATURE_C} at step {j}"
            );
        }
    }

    #[test]
    fn test_laser_heats_beam_interior() {
        let solver = solver_with(9e6);
        let t0 = body_temperature_field(21);
        let t1 = solver.time_step(&t0, 0.1, 0.1);
        // r = 0.01 lies inside the default 0.02 m beam
        assert!(
            t1[5] > BODY_TEMPERATURE_C,
            "in-beam node should heat: {}",
            t1[5]
        );
        // r = 0.03 lies outside the beam and starts at equilibrium
        assert!(
            (t1[15] - BODY_TEMPERATURE_C).abs() < 1e-12,
            "out-of-beam node should hold: {}",
            t1[15]
        );
    }

    #[test]
    fn test_center_heats_fastest() {
        let solver = solver_with(9e6);
        let mut t = body_temperature_field(21);
        for j in 1..=100 {
            t = solver.time_step(&t, j as f64 * 0.1, 0.1);
        }
        let max = t.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(
            (t[0] - max).abs() < 1e-9,
            "axis node should be the hottest: center={} max={max}",
            t[0]
        );
    }

    #[test]
    fn test_laser_shutoff_stops_heating() {
        let solver = solver_with(9e6);
        let t = body_temperature_field(21);
        // Past the 30 s shutoff an equilibrium field must stay put.
        let after = solver.time_step(&t, 31.0, 0.1);
        for (i, v) in after.iter().enumerate() {
            assert!(
                (v - BODY_TEMPERATURE_C).abs() < 1e-12,
                "node {i} should not heat after shutoff: {v}"
            );
        }
    }

    #[test]
    fn test_zero_power_never_exceeds_baseline() {
        let solver = solver_with(0.0);
        let mut t = body_temperature_field(21);
        for j in 1..=200 {
            t = solver.time_step(&t, j as f64 * 0.1, 0.1);
        }
        for (i, v) in t.iter().enumerate() {
            assert!(
                *v <= BODY_TEMPERATURE_C + 1e-9,
                "node {i} rose above baseline with the laser off: {v}"
            );
        }
    }
}
