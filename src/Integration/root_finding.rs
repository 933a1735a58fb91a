//! Zero-crossing detection for the fixed-form equation: a coarse scan over
//! the domain followed by bisection refinement of every bracket found.
//! The orchestrator uses the resulting crossings as segment boundaries.

use super::equation::{Equation, IntegrationError};

/// Refines a bracketing interval to a zero of the equation by bisection.
///
/// Precondition: the caller has established a sign change (or a near-zero
/// value) between `f(x_ini)` and `f(x_fin)`. When no sign change exists the
/// loop still terminates, but the returned value is not guaranteed to be a
/// root — a known weakness of the reference procedure, kept as is.
///
/// The interval halves each iteration; the loop ends when
/// `(x_fin - x_ini) / 2 <= tolerance` or an exact zero is hit. The returned
/// value is the last midpoint computed (`x_ini` when the initial interval is
/// already within tolerance).
pub fn bisection(
    eq: &Equation,
    x_ini: f64,
    x_fin: f64,
    tolerance: f64,
) -> Result<f64, IntegrationError> {
    let mut a = x_ini;
    let mut b = x_fin;
    let mut f_a = eq.eval(a)?;
    let mut mid = a;
    while (b - a) / 2.0 > tolerance {
        mid = (a + b) / 2.0;
        let f_mid = eq.eval(mid)?;
        if f_mid == 0.0 {
            break;
        } else if f_a * f_mid < 0.0 {
            b = mid;
        } else {
            a = mid;
            f_a = f_mid;
        }
    }
    Ok(mid)
}

/// Scans `[x_ini, x_fin)` in `scan_steps` equal increments and refines every
/// bracket where `f(x) * f(x + step) <= 0` with [`bisection`].
///
/// The crossings come out in ascending order. Adjacent steps straddling the
/// same sign-change region each contribute an entry; nothing is deduplicated.
/// A singular sample point fails the whole scan with the evaluator's error,
/// it is not caught or skipped.
pub fn find_crossings(
    eq: &Equation,
    x_ini: f64,
    x_fin: f64,
    tolerance: f64,
    scan_steps: usize,
) -> Result<Vec<f64>, IntegrationError> {
    if scan_steps == 0 {
        return Err(IntegrationError::InvalidArgument(
            "scan step count must be positive".to_string(),
        ));
    }
    let step = (x_fin - x_ini) / scan_steps as f64;
    let mut crossings = Vec::new();
    for i in 0..scan_steps {
        let x = x_ini + i as f64 * step;
        if x >= x_fin {
            break;
        }
        let f_a = eq.eval(x)?;
        let f_b = eq.eval(x + step)?;
        if f_a * f_b <= 0.0 {
            crossings.push(bisection(eq, x, x + step, tolerance)?);
        }
    }
    Ok(crossings)
}
