// ─────────────────────────────────────────────────────────────────────
// SCPN Thermia — Scalar Minimizer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Derivative-free single-variable minimization.
//!
//! Brackets a minimum by golden-ratio expansion from an initial guess,
//! then shrinks the bracket by golden-section search until the interval
//! width falls under the tolerance. Non-convergence is informational,
//! never an error: the best evaluated point is always returned.

use therm_types::error::{ThermError, ThermResult};

/// Interior golden-section ratio, (sqrt(5) - 1) / 2.
const INV_GOLDEN: f64 = 0.618_033_988_749_894_9;

/// Bracket expansion ratio.
const GOLDEN_GROWTH: f64 = 1.618_033_988_749_895;

#[derive(Debug, Clone)]
pub struct ScalarMinimizeConfig {
    /// Cap on golden-section iterations.
    pub max_iterations: usize,
    /// Absolute bracket-width convergence tolerance.
    pub tolerance: f64,
    /// First bracketing step taken from the initial guess.
    pub initial_step: f64,
    /// Cap on downhill bracket expansions before giving up.
    pub max_bracket_expansions: usize,
}

impl Default for ScalarMinimizeConfig {
    fn default() -> Self {
        Self {
            max_iterations: 80,
            tolerance: 1e-4,
            initial_step: 0.1,
            max_bracket_expansions: 40,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScalarMinimizeResult {
    /// Best control input found.
    pub x_min: f64,
    /// Objective value at `x_min`.
    pub f_min: f64,
    /// Whether the bracket shrank below the tolerance.
    pub converged: bool,
    /// Golden-section iterations performed.
    pub iterations: usize,
    /// Total objective evaluations.
    pub evaluations: usize,
    /// Best objective value after each golden-section iteration.
    pub history: Vec<f64>,
}

/// Minimize `f` starting from `x0`.
///
/// The objective may fail (e.g. a configuration error surfaced by a
/// simulation); such errors propagate immediately. An exhausted bracket
/// search or iteration cap returns `converged: false` with the best
/// point seen so far.
pub fn minimize_scalar<F>(
    mut f: F,
    x0: f64,
    cfg: &ScalarMinimizeConfig,
) -> ThermResult<ScalarMinimizeResult>
where
    F: FnMut(f64) -> ThermResult<f64>,
{
    if !cfg.tolerance.is_finite() || cfg.tolerance <= 0.0 {
        return Err(ThermError::ConfigError(format!(
            "minimizer tolerance must be finite and > 0, got {}",
            cfg.tolerance
        )));
    }
    if !cfg.initial_step.is_finite() || cfg.initial_step == 0.0 {
        return Err(ThermError::ConfigError(format!(
            "minimizer initial step must be finite and non-zero, got {}",
            cfg.initial_step
        )));
    }
    if cfg.max_iterations < 1 {
        return Err(ThermError::ConfigError(
            "minimizer requires at least 1 iteration".to_string(),
        ));
    }

    let mut evaluations = 0usize;

    // Bracket the minimum: walk downhill from the initial guess with
    // golden-ratio growth until the objective turns back up.
    let mut a = x0;
    let mut b = x0 + cfg.initial_step;
    let fa = f(a)?;
    let mut fb = f(b)?;
    evaluations += 2;
    if fb > fa {
        std::mem::swap(&mut a, &mut b);
        fb = fa;
    }

    let mut c = b + GOLDEN_GROWTH * (b - a);
    let mut fc = f(c)?;
    evaluations += 1;
    let mut expansions = 0usize;
    while fc < fb {
        if expansions >= cfg.max_bracket_expansions {
            log::debug!("bracket expansion exhausted at x={c}, f={fc}");
            return Ok(ScalarMinimizeResult {
                x_min: c,
                f_min: fc,
                converged: false,
                iterations: 0,
                evaluations,
                history: Vec::new(),
            });
        }
        a = b;
        b = c;
        fb = fc;
        c = b + GOLDEN_GROWTH * (b - a);
        fc = f(c)?;
        evaluations += 1;
        expansions += 1;
    }

    // Golden-section reduction on the bracket [a, c] around b.
    let mut lo = a.min(c);
    let mut hi = a.max(c);
    let mut x1 = hi - INV_GOLDEN * (hi - lo);
    let mut x2 = lo + INV_GOLDEN * (hi - lo);
    let mut f1 = f(x1)?;
    let mut f2 = f(x2)?;
    evaluations += 2;

    let mut history = Vec::new();
    let mut iterations = 0usize;
    let mut converged = false;
    for _ in 0..cfg.max_iterations {
        iterations += 1;
        if f1 < f2 {
            hi = x2;
            x2 = x1;
            f2 = f1;
            x1 = hi - INV_GOLDEN * (hi - lo);
            f1 = f(x1)?;
        } else {
            lo = x1;
            x1 = x2;
            f1 = f2;
            x2 = lo + INV_GOLDEN * (hi - lo);
            f2 = f(x2)?;
        }
        evaluations += 1;
        history.push(f1.min(f2));
        if hi - lo < cfg.tolerance {
            converged = true;
            break;
        }
    }

    let (x_min, f_min) = if f1 < f2 { (x1, f1) } else { (x2, f2) };
    Ok(ScalarMinimizeResult {
        x_min,
        f_min,
        converged,
        iterations,
        evaluations,
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadratic(center: f64) -> impl FnMut(f64) -> ThermResult<f64> {
        move |x: f64| Ok((x - center) * (x - center))
    }

    #[test]
    fn test_finds_quadratic_minimum() {
        let result =
            minimize_scalar(quadratic(1.3), 0.0, &ScalarMinimizeConfig::default()).unwrap();
        assert!(result.converged, "quadratic search should converge");
        assert!(
            (result.x_min - 1.3).abs() < 1e-3,
            "minimum should land near 1.3: {}",
            result.x_min
        );
        assert!(result.f_min < 1e-6, "objective at minimum: {}", result.f_min);
    }

    #[test]
    fn test_finds_minimum_behind_the_guess() {
        // The minimum sits below the initial guess, so the first step
        // points uphill and the direction must flip.
        let result =
            minimize_scalar(quadratic(-2.0), 1.0, &ScalarMinimizeConfig::default()).unwrap();
        assert!(result.converged);
        assert!(
            (result.x_min + 2.0).abs() < 1e-3,
            "minimum should land near -2: {}",
            result.x_min
        );
    }

    #[test]
    fn test_nonsmooth_objective() {
        let result = minimize_scalar(
            |x| Ok((x - 0.5).abs()),
            0.0,
            &ScalarMinimizeConfig::default(),
        )
        .unwrap();
        assert!(result.converged);
        assert!(
            (result.x_min - 0.5).abs() < 1e-3,
            "kink minimum should be found: {}",
            result.x_min
        );
    }

    #[test]
    fn test_monotone_objective_reports_nonconvergence() {
        let cfg = ScalarMinimizeConfig {
            max_bracket_expansions: 10,
            ..Default::default()
        };
        let result = minimize_scalar(|x| Ok(-x), 0.0, &cfg).unwrap();
        assert!(!result.converged, "a monotone objective cannot bracket");
        assert!(
            result.x_min > 0.0,
            "the best point should lie far downhill: {}",
            result.x_min
        );
    }

    #[test]
    fn test_history_is_nonincreasing() {
        let result =
            minimize_scalar(quadratic(0.4), 0.0, &ScalarMinimizeConfig::default()).unwrap();
        for w in result.history.windows(2) {
            assert!(
                w[1] <= w[0] + 1e-15,
                "best-so-far must not get worse: {} -> {}",
                w[0],
                w[1]
            );
        }
        assert_eq!(result.iterations, result.history.len());
    }

    #[test]
    fn test_objective_errors_propagate() {
        let result = minimize_scalar(
            |_| -> ThermResult<f64> {
                Err(ThermError::ConfigError("boom".to_string()))
            },
            0.0,
            &ScalarMinimizeConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let bad_tol = ScalarMinimizeConfig {
            tolerance: 0.0,
            ..Default::default()
        };
        assert!(minimize_scalar(quadratic(0.0), 0.0, &bad_tol).is_err());

        let bad_step = ScalarMinimizeConfig {
            initial_step: 0.0,
            ..Default::default()
        };
        assert!(minimize_scalar(quadratic(0.0), 0.0, &bad_step).is_err());
    }
}
