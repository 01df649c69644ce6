// ─────────────────────────────────────────────────────────────────────
// SCPN Thermia — Drug Diffusion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radial drug diffusion with first-order binding.
//!
//! Same cylindrical stencil as the heat equation, with the mass diffusion
//! coefficient in place of the thermal diffusivity and a linear binding
//! sink. Temperature dependence of the diffusion coefficient is not
//! modelled.

use crate::stencil;
use ndarray::Array1;
use therm_types::config::DrugConfig;
use therm_types::error::{ThermError, ThermResult};
use therm_types::state::RadialGrid;

/// Initial dimensionless concentration inside the drug coupon.
const INITIAL_CONCENTRATION: f64 = 1.0;

/// Drug transport solver for one treatment run.
#[derive(Debug)]
pub struct DiffusionSolver {
    grid: RadialGrid,
    diffusion_coefficient: f64,
    binding_rate: f64,
    coupon_radius: f64,
}

impl DiffusionSolver {
    /// Create a diffusion solver over `grid`. Fails if the drug coupon
    /// extends beyond the tissue sample.
    pub fn new(grid: RadialGrid, drug: &DrugConfig) -> ThermResult<Self> {
        if drug.coupon_radius > grid.edge {
            return Err(ThermError::ConfigError(format!(
                "drug coupon radius {} must not extend beyond the sample edge {}",
                drug.coupon_radius, grid.edge
            )));
        }
        Ok(DiffusionSolver {
            grid,
            diffusion_coefficient: drug.diffusion_coefficient,
            binding_rate: drug.binding_rate,
            coupon_radius: drug.coupon_radius,
        })
    }

    /// Initial condition: unit concentration at nodes strictly inside the
    /// coupon, zero elsewhere.
    pub fn initial_profile(&self) -> Array1<f64> {
        let mut c = Array1::zeros(self.grid.node_count());
        for i in 0..self.grid.node_count() {
            if self.grid.r[i] < self.coupon_radius {
                c[i] = INITIAL_CONCENTRATION;
            }
        }
        c
    }

    /// Advance the concentration field by one explicit time step.
    pub fn time_step(&self, old_c: &Array1<f64>, dt: f64) -> Array1<f64> {
        let m = self.grid.m;
        let h = self.grid.h;
        let mut new_c = Array1::zeros(m + 1);

        for i in 1..m {
            new_c[i] = stencil::interior_update(
                old_c,
                i,
                self.grid.r[i],
                h,
                dt,
                self.diffusion_coefficient,
                self.binding_rate,
                0.0,
            );
        }

        // dC/dr = 0 at the axis: the center copies the freshly computed
        // first interior node. The sample edge is a perfect sink.
        new_c[0] = new_c[1];
        new_c[m] = 0.0;
        new_c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use therm_types::config::TreatmentConfig;

    fn default_solver() -> DiffusionSolver {
        let cfg = TreatmentConfig::default();
        DiffusionSolver::new(cfg.create_grid().unwrap(), &cfg.drug).unwrap()
    }

    #[test]
    fn test_rejects_coupon_wider_than_sample() {
        let cfg = TreatmentConfig::default();
        let grid = cfg.create_grid().unwrap();
        let mut drug = cfg.drug.clone();
        drug.coupon_radius = 0.05;
        let err = DiffusionSolver::new(grid, &drug).expect_err("oversized coupon must fail");
        match err {
            ThermError::ConfigError(msg) => assert!(msg.contains("coupon")),
            other => panic!("Unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn test_initial_profile_fills_coupon() {
        let solver = default_solver();
        let c0 = solver.initial_profile();
        // With edge=0.04 and M=20, nodes 0..=9 sit strictly inside the
        // 0.02 m coupon; node 10 sits exactly on its rim and stays empty.
        for i in 0..10 {
            assert!((c0[i] - 1.0).abs() < 1e-15, "node {i} should start at 1");
        }
        for i in 10..21 {
            assert!(c0[i].abs() < 1e-15, "node {i} should start empty");
        }
    }

    #[test]
    fn test_edge_is_a_sink() {
        let solver = default_solver();
        let mut c = solver.initial_profile();
        for _ in 0..100 {
            c = solver.time_step(&c, 0.1);
            assert!(c[20].abs() < 1e-15, "edge concentration must stay 0");
        }
    }

    #[test]
    fn test_center_tracks_first_interior_node() {
        let solver = default_solver();
        let mut c = solver.initial_profile();
        for _ in 0..50 {
            c = solver.time_step(&c, 0.1);
            assert!(
                (c[0] - c[1]).abs() < 1e-15,
                "zero-flux center must equal the first interior node"
            );
        }
    }

    #[test]
    fn test_binding_drains_total_mass() {
        let solver = default_solver();
        let c0 = solver.initial_profile();
        let mut c = c0.clone();
        for _ in 0..200 {
            c = solver.time_step(&c, 0.1);
        }
        assert!(
            c.sum() < c0.sum(),
            "binding plus the edge sink must lose mass: {} vs {}",
            c.sum(),
            c0.sum()
        );
        assert!(
            c.iter().all(|v| v.is_finite()),
            "concentration must stay finite in the stable regime"
        );
    }
}
