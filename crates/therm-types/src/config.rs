// ─────────────────────────────────────────────────────────────────────
// SCPN Thermia — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{ThermError, ThermResult};
use crate::state::{RadialGrid, TimeAxis};
use serde::{Deserialize, Serialize};

/// Top-level treatment configuration.
///
/// One consolidated parameter set shared by the simulation runner and the
/// power objective, so driver entry points cannot drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentConfig {
    pub treatment_name: String,
    pub sample: SampleConfig,
    pub time: TimeConfig,
    pub thermal: ThermalConfig,
    pub drug: DrugConfig,
}

/// Geometry of the cylindrical tissue sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Sample edge radius (m). Typical values: 0.03 to 0.04.
    pub edge: f64,
    /// Radial intervals M. The explicit scheme becomes unstable above ~175.
    pub radial_intervals: usize,
    /// Radius of the cancerous region (m).
    pub cancer_edge: f64,
}

/// Simulated time window. The stop time ends the model, not the laser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
    pub start: f64,
    pub stop: f64,
    pub steps: usize,
}

/// Heat transfer and laser parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThermalConfig {
    /// Tissue thermal diffusivity with nanorods, k/(density·heat capacity) (m²/s).
    pub diffusivity: f64,
    /// Laser volumetric power Q (W/m³). Range: 8.0e6 to 3.0e7.
    pub laser_energy_density: f64,
    /// Optical density of the laser path. Range: [0.0, 0.5]. Unitless.
    pub optical_density: f64,
    /// Time the laser is switched off (s, default: 30.0).
    #[serde(default = "default_laser_shutoff")]
    pub laser_shutoff: f64,
    /// Laser beam radius (m, default: 0.02). Must not exceed the sample edge.
    #[serde(default = "default_laser_radius")]
    pub laser_radius: f64,
}

/// Drug diffusion and binding parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugConfig {
    /// Diffusion coefficient D (m²/s).
    pub diffusion_coefficient: f64,
    /// First-order binding/decay rate k (1/s, default: 1e-4).
    #[serde(default = "default_binding_rate")]
    pub binding_rate: f64,
    /// Radius of the drug coupon (m, default: 0.02). Must not exceed the
    /// sample edge.
    #[serde(default = "default_coupon_radius")]
    pub coupon_radius: f64,
}

fn default_laser_shutoff() -> f64 {
    30.0
}
fn default_laser_radius() -> f64 {
    0.02
}
fn default_binding_rate() -> f64 {
    1e-4
}
fn default_coupon_radius() -> f64 {
    0.02
}

impl Default for TreatmentConfig {
    fn default() -> Self {
        TreatmentConfig {
            treatment_name: "GNR-Hyperthermia-Default".to_string(),
            sample: SampleConfig {
                edge: 0.04,
                radial_intervals: 20,
                cancer_edge: 0.02,
            },
            time: TimeConfig {
                start: 0.0,
                stop: 200.0,
                steps: 2000,
            },
            thermal: ThermalConfig {
                diffusivity: 3e-7,
                laser_energy_density: 9e6,
                optical_density: 0.5,
                laser_shutoff: default_laser_shutoff(),
                laser_radius: default_laser_radius(),
            },
            drug: DrugConfig {
                diffusion_coefficient: 1e-6,
                binding_rate: default_binding_rate(),
                coupon_radius: default_coupon_radius(),
            },
        }
    }
}

impl TreatmentConfig {
    /// Load from a JSON config file.
    pub fn from_file(path: &str) -> ThermResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        log::info!("Loaded treatment config from {path}");
        Ok(config)
    }

    /// Create the radial grid from this config's sample geometry.
    pub fn create_grid(&self) -> ThermResult<RadialGrid> {
        RadialGrid::new(self.sample.edge, self.sample.radial_intervals)
    }

    /// Create the time axis from this config's time window.
    pub fn create_time_axis(&self) -> ThermResult<TimeAxis> {
        TimeAxis::new(self.time.start, self.time.stop, self.time.steps)
    }

    /// Check every fatal configuration constraint before a simulation starts.
    ///
    /// Numerical stability of the explicit scheme is not checked here;
    /// choosing M, N, and the diffusivities inside the stability region
    /// is a caller responsibility.
    pub fn validate(&self) -> ThermResult<()> {
        self.create_grid()?;
        self.create_time_axis()?;
        if self.thermal.laser_radius > self.sample.edge {
            return Err(ThermError::ConfigError(format!(
                "laser radius {} must not extend beyond the sample edge {}",
                self.thermal.laser_radius, self.sample.edge
            )));
        }
        if self.drug.coupon_radius > self.sample.edge {
            return Err(ThermError::ConfigError(format!(
                "drug coupon radius {} must not extend beyond the sample edge {}",
                self.drug.coupon_radius, self.sample.edge
            )));
        }
        if self.sample.cancer_edge > self.sample.edge {
            return Err(ThermError::ConfigError(format!(
                "cancer region radius {} must not extend beyond the sample edge {}",
                self.sample.cancer_edge, self.sample.edge
            )));
        }
        Ok(())
    }
}
