// ─────────────────────────────────────────────────────────────────────
// SCPN Thermia — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{ThermError, ThermResult};
use ndarray::{Array1, Array2};

/// 1-D radial grid over a cylindrical tissue sample.
///
/// Nodes run from the symmetry axis (r = 0) to the sample edge, with
/// uniform spacing `h`. Created once per simulation run and immutable
/// thereafter.
#[derive(Debug, Clone)]
pub struct RadialGrid {
    /// Number of radial intervals (M). Node count is M + 1.
    pub m: usize,
    /// Sample edge radius (m).
    pub edge: f64,
    /// Node coordinates [M + 1] - linspace(0, edge, M + 1).
    pub r: Array1<f64>,
    /// Node spacing (m).
    pub h: f64,
}

impl RadialGrid {
    pub fn new(edge: f64, intervals: usize) -> ThermResult<Self> {
        if !edge.is_finite() || edge <= 0.0 {
            return Err(ThermError::ConfigError(format!(
                "sample edge radius must be finite and > 0, got {edge}"
            )));
        }
        if intervals < 1 {
            return Err(ThermError::ConfigError(
                "radial grid requires at least 1 interval".to_string(),
            ));
        }
        let r = Array1::linspace(0.0, edge, intervals + 1);
        let h = r[1] - r[0];
        Ok(RadialGrid {
            m: intervals,
            edge,
            r,
            h,
        })
    }

    pub fn node_count(&self) -> usize {
        self.m + 1
    }
}

/// Uniform time axis for the explicit integration loop.
#[derive(Debug, Clone)]
pub struct TimeAxis {
    /// Number of time steps (N). Point count is N + 1.
    pub n: usize,
    pub start: f64,
    pub stop: f64,
    /// Time points [N + 1] - linspace(start, stop, N + 1).
    pub t: Array1<f64>,
    /// Step size (s).
    pub dt: f64,
}

impl TimeAxis {
    pub fn new(start: f64, stop: f64, steps: usize) -> ThermResult<Self> {
        if !start.is_finite() || !stop.is_finite() || stop <= start {
            return Err(ThermError::ConfigError(format!(
                "time axis requires finite stop > start, got start={start}, stop={stop}"
            )));
        }
        if steps < 1 {
            return Err(ThermError::ConfigError(
                "time axis requires at least 1 step".to_string(),
            ));
        }
        let t = Array1::linspace(start, stop, steps + 1);
        let dt = t[1] - t[0];
        Ok(TimeAxis {
            n: steps,
            start,
            stop,
            t,
            dt,
        })
    }
}

/// Full space-time output of one treatment simulation.
///
/// Each matrix is indexed [spatial node, time step], shape (M+1, N+1).
/// Column 0 holds the initial condition; column j is derived from column
/// j-1 by the owning solver. Exclusively owned by the run that produced it.
#[derive(Debug, Clone)]
pub struct TreatmentFields {
    /// Radial node coordinates [M + 1].
    pub r: Array1<f64>,
    /// Time points [N + 1].
    pub t: Array1<f64>,
    /// Temperature (°C).
    pub temperature: Array2<f64>,
    /// Dimensionless drug concentration.
    pub concentration: Array2<f64>,
    /// Fraction of cells dead, in [0, 1).
    pub fraction_dead: Array2<f64>,
}
