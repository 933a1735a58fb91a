//! # Quadrature Module
//!
//! ## Purpose
//! Four independent quadrature methods over one sub-interval of the domain:
//! trapezoid rule, left Riemann sum, Simpson rule and 2-point Gauss-Legendre.
//! Callers compare or average their outputs, so each method is selectable on
//! its own, either as a free function or through the [`QuadCalculator`]
//! dispatch enum.
//!
//! ## Main Data Structures and Logic
//! - free functions `trapezoid_rule`, `riemann_sum`, `simpson_rule`,
//!   `gauss_legendre` with the reference node placement and weights
//! - `QuadCalculator` trait dispatched over [`QuadMethod`] so the four
//!   methods can be iterated uniformly
//! - `create_quad` / `all_methods` factories
//!
//! All methods propagate [`IntegrationError::DivisionByZero`] from the
//! equation evaluator without modification. A resolution of zero intervals is
//! rejected; Simpson additionally requires an even count.
//!
//! ## Usage
//! ```
//! use QuadSeg::Integration::equation::Equation;
//! use QuadSeg::Integration::quadrature_api::{QuadCalculator, all_methods, simpson_rule};
//!
//! // f(x) = x^3, integrated over [0, 1]
//! let eq = Equation::new(&[0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0]).unwrap();
//! let area = simpson_rule(&eq, 0.0, 1.0, 100).unwrap();
//! assert!((area - 0.25).abs() < 1e-10);
//! for method in all_methods() {
//!     let a = method.integrate(&eq, 0.0, 1.0, 100).unwrap();
//!     assert!((a - 0.25).abs() < 1e-2);
//! }
//! ```

use super::equation::{Equation, IntegrationError};
use enum_dispatch::enum_dispatch;

fn check_intervals(intervals: usize) -> Result<(), IntegrationError> {
    if intervals == 0 {
        return Err(IntegrationError::InvalidArgument(
            "interval count must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Trapezoid rule: endpoints weighted 1/2, interior nodes weighted 1,
/// the accumulated sum multiplied by the step.
pub fn trapezoid_rule(
    eq: &Equation,
    x_ini: f64,
    x_fin: f64,
    intervals: usize,
) -> Result<f64, IntegrationError> {
    check_intervals(intervals)?;
    let h = (x_fin - x_ini) / intervals as f64;
    let mut acc = 0.5 * (eq.eval(x_ini)? + eq.eval(x_fin)?);
    for i in 1..intervals {
        acc += eq.eval(x_ini + i as f64 * h)?;
    }
    Ok(acc * h)
}

/// Left Riemann sum: nodes at the left edge of each sub-interval, every
/// term multiplied by the step as it is accumulated.
pub fn riemann_sum(
    eq: &Equation,
    x_ini: f64,
    x_fin: f64,
    intervals: usize,
) -> Result<f64, IntegrationError> {
    check_intervals(intervals)?;
    let h = (x_fin - x_ini) / intervals as f64;
    let mut acc = 0.0;
    for i in 0..intervals {
        acc += eq.eval(x_ini + i as f64 * h)? * h;
    }
    Ok(acc)
}

/// Simpson rule: interior nodes alternate weights 4 (odd index) and
/// 2 (even index), endpoints weighted 1, result `(h/3) * acc`.
/// The interval count must be even.
pub fn simpson_rule(
    eq: &Equation,
    x_ini: f64,
    x_fin: f64,
    intervals: usize,
) -> Result<f64, IntegrationError> {
    check_intervals(intervals)?;
    if intervals % 2 != 0 {
        return Err(IntegrationError::InvalidArgument(
            "interval count must be even".to_string(),
        ));
    }
    let h = (x_fin - x_ini) / intervals as f64;
    let mut acc = eq.eval(x_ini)? + eq.eval(x_fin)?;
    for i in 1..intervals {
        let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
        acc += weight * eq.eval(x_ini + i as f64 * h)?;
    }
    Ok((h / 3.0) * acc)
}

/// 2-point Gauss-Legendre quadrature: fixed nodes `±1/sqrt(3)` with unit
/// weights on `[-1, 1]`, mapped to `[x_ini, x_fin]` with `c1 = (b-a)/2`,
/// `c2 = (b+a)/2`. Exact for polynomials up to degree 3.
pub fn gauss_legendre(eq: &Equation, x_ini: f64, x_fin: f64) -> Result<f64, IntegrationError> {
    let nodes = [-1.0 / 3.0_f64.sqrt(), 1.0 / 3.0_f64.sqrt()];
    let weights = [1.0, 1.0];
    let c1 = (x_fin - x_ini) / 2.0;
    let c2 = (x_fin + x_ini) / 2.0;
    let mut acc = 0.0;
    for (node, weight) in nodes.iter().zip(weights.iter()) {
        acc += weight * eq.eval(c1 * node + c2)?;
    }
    Ok(c1 * acc)
}

/// Uniform interface over the four quadrature methods. The Gauss-Legendre
/// implementation ignores `intervals` (fixed 2-point rule).
#[enum_dispatch]
pub trait QuadCalculator {
    fn integrate(
        &self,
        eq: &Equation,
        x_ini: f64,
        x_fin: f64,
        intervals: usize,
    ) -> Result<f64, IntegrationError>;
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TrapezoidRule;
#[derive(Debug, Clone, Copy, Default)]
pub struct RiemannSum;
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpsonRule;
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussLegendre;

impl QuadCalculator for TrapezoidRule {
    fn integrate(
        &self,
        eq: &Equation,
        x_ini: f64,
        x_fin: f64,
        intervals: usize,
    ) -> Result<f64, IntegrationError> {
        trapezoid_rule(eq, x_ini, x_fin, intervals)
    }
    fn name(&self) -> &'static str {
        "Trapezoid"
    }
}

impl QuadCalculator for RiemannSum {
    fn integrate(
        &self,
        eq: &Equation,
        x_ini: f64,
        x_fin: f64,
        intervals: usize,
    ) -> Result<f64, IntegrationError> {
        riemann_sum(eq, x_ini, x_fin, intervals)
    }
    fn name(&self) -> &'static str {
        "Riemann"
    }
}

impl QuadCalculator for SimpsonRule {
    fn integrate(
        &self,
        eq: &Equation,
        x_ini: f64,
        x_fin: f64,
        intervals: usize,
    ) -> Result<f64, IntegrationError> {
        simpson_rule(eq, x_ini, x_fin, intervals)
    }
    fn name(&self) -> &'static str {
        "Simpson"
    }
}

impl QuadCalculator for GaussLegendre {
    fn integrate(
        &self,
        eq: &Equation,
        x_ini: f64,
        x_fin: f64,
        _intervals: usize,
    ) -> Result<f64, IntegrationError> {
        gauss_legendre(eq, x_ini, x_fin)
    }
    fn name(&self) -> &'static str {
        "Gauss-Legendre"
    }
}

#[derive(Debug, Clone, Copy)]
#[enum_dispatch(QuadCalculator)]
pub enum QuadMethod {
    Trapezoid(TrapezoidRule),
    Riemann(RiemannSum),
    Simpson(SimpsonRule),
    Gauss(GaussLegendre),
}

pub enum QuadType {
    Trapezoid,
    Riemann,
    Simpson,
    Gauss,
}

pub fn create_quad(quad_type: QuadType) -> QuadMethod {
    match quad_type {
        QuadType::Trapezoid => QuadMethod::Trapezoid(TrapezoidRule),
        QuadType::Riemann => QuadMethod::Riemann(RiemannSum),
        QuadType::Simpson => QuadMethod::Simpson(SimpsonRule),
        QuadType::Gauss => QuadMethod::Gauss(GaussLegendre),
    }
}

/// All four methods in the order the reference reports them.
pub fn all_methods() -> [QuadMethod; 4] {
    [
        QuadMethod::Gauss(GaussLegendre),
        QuadMethod::Trapezoid(TrapezoidRule),
        QuadMethod::Riemann(RiemannSum),
        QuadMethod::Simpson(SimpsonRule),
    ]
}
