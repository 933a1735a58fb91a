//! # Equation Module
//!
//! ## Purpose
//! Evaluation of the fixed-form equation the whole crate integrates:
//!
//! ```text
//! f(x) = a0*sin(x) + a1*cos(x) + a2*x^2/(a3 + sqrt(|x|)) + a4*x^3 + a5*x^4 + a6
//! ```
//!
//! The rational term has a singular denominator wherever `a3 + sqrt(|x|)`
//! vanishes. The check is exact equality against zero, matching the reference
//! behavior of this equation family; no epsilon guard is applied.
//!
//! ## Usage
//! ```
//! use QuadSeg::Integration::equation::Equation;
//! let eq = Equation::new(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
//! let y = eq.eval(std::f64::consts::FRAC_PI_2).unwrap();
//! assert!((y - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of coefficients of the fixed equation form.
pub const NUM_COEFFS: usize = 7;

/// Error type shared by the whole numerical core: equation evaluation,
/// quadrature methods, root finding and the segment orchestrator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntegrationError {
    #[error("division by zero while evaluating the equation at x = {x}")]
    DivisionByZero { x: f64 },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// The 7-coefficient equation. Coefficients are immutable for the duration
/// of one computation; construct a new instance to change them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Equation {
    pub coeff: [f64; NUM_COEFFS],
}

impl Equation {
    /// Builds an equation from a coefficient slice. Exactly 7 coefficients
    /// `[a0..a6]` are required.
    pub fn new(coeff: &[f64]) -> Result<Self, IntegrationError> {
        if coeff.len() != NUM_COEFFS {
            return Err(IntegrationError::InvalidArgument(format!(
                "expected {} coefficients, got {}",
                NUM_COEFFS,
                coeff.len()
            )));
        }
        let mut c = [0.0; NUM_COEFFS];
        c.copy_from_slice(coeff);
        Ok(Self { coeff: c })
    }

    /// Evaluates the equation at `x`.
    ///
    /// Fails with [`IntegrationError::DivisionByZero`] when
    /// `a3 + sqrt(|x|) == 0.0` (exact comparison). No side effects.
    pub fn eval(&self, x: f64) -> Result<f64, IntegrationError> {
        let c = &self.coeff;
        let denom = c[3] + x.abs().sqrt();
        if denom == 0.0 {
            return Err(IntegrationError::DivisionByZero { x });
        }
        Ok(c[0] * x.sin()
            + c[1] * x.cos()
            + (c[2] * x.powi(2)) / denom
            + c[4] * x.powi(3)
            + c[5] * x.powi(4)
            + c[6])
    }
}

impl From<[f64; NUM_COEFFS]> for Equation {
    fn from(coeff: [f64; NUM_COEFFS]) -> Self {
        Self { coeff }
    }
}
