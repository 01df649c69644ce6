// ─────────────────────────────────────────────────────────────────────
// SCPN Thermia — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Normal body temperature (°C). Initial condition everywhere and the
/// Dirichlet value clamped onto the sample edge at every step.
pub const BODY_TEMPERATURE_C: f64 = 38.0;

/// Celsius to Kelvin offset. The Arrhenius rate is evaluated in Kelvin.
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Universal gas constant (J/(mol·K)).
pub const R_GAS: f64 = 8.3144598;

/// Tissue density (kg/m³).
pub const TISSUE_DENSITY: f64 = 1000.0;

/// Tissue specific heat capacity (J/(kg·K)).
pub const TISSUE_HEAT_CAPACITY: f64 = 3400.0;

/// Reference laser volumetric power used to non-dimensionalize the
/// optimizer control variable (W/m³). Physical laser powers span roughly
/// 8.0e6 to 3.0e7 W/m³.
pub const Q_REFERENCE: f64 = 8.0e6;
