// ─────────────────────────────────────────────────────────────────────
// SCPN Thermia — Thermal Injury
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Arrhenius thermal injury accumulator.
//!
//! Integrates a temperature-dependent death rate over time at every node.
//! The accumulator persists across time steps within one run and is
//! created fresh per run, so separate runs never share injury state.
//! Dependence of the death parameters on drug concentration is not
//! modelled.

use ndarray::Array1;
use therm_types::constants::{CELSIUS_TO_KELVIN, R_GAS};

/// Arrhenius pre-exponential factor (1/s).
const ARRHENIUS_PREFACTOR: f64 = 6e29;

/// Arrhenius activation energy (J/mol). Not yet tuned to a specific
/// cell line.
const ACTIVATION_ENERGY: f64 = 200_000.0;

/// Cumulative injury integral, one scalar per radial node.
pub struct InjuryIntegrator {
    kt: Array1<f64>,
}

impl InjuryIntegrator {
    pub fn new(node_count: usize) -> Self {
        InjuryIntegrator {
            kt: Array1::zeros(node_count),
        }
    }

    /// Accumulate one time step of injury from a temperature profile (°C).
    ///
    /// kt[i] += dt * A * exp(-Ea / (R * T_kelvin)). The Celsius-to-Kelvin
    /// conversion is mandatory; the increment is non-negative for any
    /// temperature above absolute zero, so kt never decreases.
    pub fn integrate(&mut self, temperature: &Array1<f64>, dt: f64) -> &Array1<f64> {
        for i in 0..self.kt.len() {
            self.kt[i] += dt
                * ARRHENIUS_PREFACTOR
                * (-ACTIVATION_ENERGY / (R_GAS * (temperature[i] + CELSIUS_TO_KELVIN))).exp();
        }
        &self.kt
    }

    /// Fraction of dead cells implied by the accumulated injury:
    /// fd[i] = 1 - exp(-kt[i]), in [0, 1) for finite non-negative kt.
    pub fn fraction_dead(&self) -> Array1<f64> {
        self.kt.mapv(|k| 1.0 - (-k).exp())
    }

    pub fn kt(&self) -> &Array1<f64> {
        &self.kt
    }
}
