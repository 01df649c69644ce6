// ─────────────────────────────────────────────────────────────────────
// SCPN Thermia — Export
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Result matrix handoff for external visualization.
//!
//! The plotting collaborator works from the raw matrices; nothing in the
//! solvers depends on it. Plot scripts conventionally sample every 20th
//! time column against the radial grid.

use ndarray::{s, Array2};
use ndarray_npy::NpzWriter;
use std::fs::File;
use therm_types::error::{ThermError, ThermResult};
use therm_types::state::TreatmentFields;

/// Keep every `stride`-th time column of a space-time matrix.
pub fn sample_columns(matrix: &Array2<f64>, stride: usize) -> Array2<f64> {
    let stride = stride.max(1);
    matrix.slice(s![.., ..;stride]).to_owned()
}

/// Write the axes and the three field matrices into one `.npz` archive.
pub fn save_npz(fields: &TreatmentFields, path: &str) -> ThermResult<()> {
    let mut npz = NpzWriter::new(File::create(path)?);
    npz.add_array("r", &fields.r).map_err(export_err)?;
    npz.add_array("t", &fields.t).map_err(export_err)?;
    npz.add_array("temperature", &fields.temperature)
        .map_err(export_err)?;
    npz.add_array("concentration", &fields.concentration)
        .map_err(export_err)?;
    npz.add_array("fraction_dead", &fields.fraction_dead)
        .map_err(export_err)?;
    npz.finish().map_err(export_err)?;
    log::info!("Saved treatment fields to {path}");
    Ok(())
}

fn export_err(e: ndarray_npy::WriteNpzError) -> ThermError {
    ThermError::Export(e.to_string())
}
