//! Coupled hyperthermia solvers on a 1-D radial grid.
//!
//! Explicit finite-difference integration of three interacting fields:
//! temperature (laser-heated), drug concentration (diffusing and binding),
//! and accumulated Arrhenius thermal injury.

pub mod diffusion;
pub mod export;
pub mod heat;
pub mod injury;
pub mod runner;
pub mod stencil;
