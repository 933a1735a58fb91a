//! # Segment Integrator Module
//!
//! ## Purpose
//! Orchestrates a full computation: scans the domain for zero crossings,
//! splits it into sign-consistent segments at those crossings, integrates the
//! absolute value of the equation over every segment with all four quadrature
//! methods, averages them, and folds per-segment results into totals.
//!
//! ## Main Data Structures and Logic
//! - [`QuadBundle`]: the four areas, their average and the elapsed wall time
//!   for one sub-interval. Produced by [`quadrature_bundle`], the single
//!   implementation shared with the in-process peer.
//! - [`SegmentResult`]: one row per segment, appended left to right.
//! - [`AreaReport`]: the segment sequence plus total area and total time,
//!   produced by a local fold (no process-wide accumulation).
//! - [`SegmentIntegrator`]: equation + settings, with `compute_total_area`
//!   as the main entry point.
//!
//! ## Error Behavior
//! By default one singular point anywhere in the scanned domain aborts the
//! whole computation — the reference behavior, preserved. With
//! `QuadSettings::isolate_segment_failures` set, a failing segment is
//! recorded with an empty area and the computation continues; crossing-scan
//! failures still abort since without boundaries there is nothing to isolate.
//!
//! ## Usage
//! ```
//! use QuadSeg::Integration::equation::Equation;
//! use QuadSeg::Integration::segment_integrator::SegmentIntegrator;
//!
//! // f(x) = sin(x) over [0, pi]
//! let eq = Equation::new(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
//! let report = SegmentIntegrator::new(eq)
//!     .compute_total_area(0.0, std::f64::consts::PI)
//!     .unwrap();
//! assert!(report.total_area > 0.0 && report.total_area.is_finite());
//! ```

use super::equation::{Equation, IntegrationError};
use super::quadrature_api::{gauss_legendre, riemann_sum, simpson_rule, trapezoid_rule};
use super::root_finding::find_crossings;
use crate::settings::QuadSettings;
use log::{info, warn};
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// The four absolute areas of one sub-interval, their average and the wall
/// time the four evaluations took. This is also the payload the peer
/// interface reports per segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuadBundle {
    pub gauss: f64,
    pub trapezoid: f64,
    pub riemann: f64,
    pub simpson: f64,
    pub average: f64,
    pub elapsed_ms: f64,
}

/// Runs all four quadrature methods over `[x_ini, x_fin]`, takes the
/// absolute value of each area and averages them. The elapsed time covers
/// exactly the four method invocations.
pub fn quadrature_bundle(
    eq: &Equation,
    x_ini: f64,
    x_fin: f64,
    intervals: usize,
) -> Result<QuadBundle, IntegrationError> {
    let start = Instant::now();
    let gauss = gauss_legendre(eq, x_ini, x_fin)?.abs();
    let trapezoid = trapezoid_rule(eq, x_ini, x_fin, intervals)?.abs();
    let riemann = riemann_sum(eq, x_ini, x_fin, intervals)?.abs();
    let simpson = simpson_rule(eq, x_ini, x_fin, intervals)?.abs();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok(QuadBundle {
        gauss,
        trapezoid,
        riemann,
        simpson,
        average: (gauss + trapezoid + riemann + simpson) / 4.0,
        elapsed_ms,
    })
}

/// One sign-consistent segment of the domain. `area` is the average of the
/// four absolute areas; it is `None` only when the segment failed in
/// isolation mode, in which case `error` holds the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentResult {
    pub x_start: f64,
    pub x_end: f64,
    pub area: Option<f64>,
    pub elapsed_ms: f64,
    pub error: Option<String>,
}

/// All segments of one computation plus the folded totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaReport {
    pub segments: Vec<SegmentResult>,
    pub total_area: f64,
    pub total_elapsed_ms: f64,
}

impl AreaReport {
    fn empty() -> Self {
        Self {
            segments: Vec::new(),
            total_area: 0.0,
            total_elapsed_ms: 0.0,
        }
    }

    /// Prints the per-segment table with a totals row, one line per segment.
    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Start"),
            Cell::new("End"),
            Cell::new("Area"),
            Cell::new("Time, ms"),
        ]));
        for seg in &self.segments {
            let area = match seg.area {
                Some(a) => format!("{:.4}", a),
                None => "failed".to_string(),
            };
            table.add_row(Row::new(vec![
                Cell::new(&format!("{:.4}", seg.x_start)),
                Cell::new(&format!("{:.4}", seg.x_end)),
                Cell::new(&area),
                Cell::new(&format!("{:.2}", seg.elapsed_ms)),
            ]));
        }
        table.add_row(Row::new(vec![
            Cell::new("Total"),
            Cell::new(""),
            Cell::new(&format!("{:.4}", self.total_area)),
            Cell::new(&format!("{:.2}", self.total_elapsed_ms)),
        ]));
        table.printstd();
    }
}

/// The orchestrator: one equation plus the computation settings.
#[derive(Debug, Clone)]
pub struct SegmentIntegrator {
    pub equation: Equation,
    pub settings: QuadSettings,
}

impl SegmentIntegrator {
    pub fn new(equation: Equation) -> Self {
        Self {
            equation,
            settings: QuadSettings::default(),
        }
    }

    pub fn with_settings(equation: Equation, settings: QuadSettings) -> Self {
        Self { equation, settings }
    }

    /// Splits `[x_ini, x_fin]` into sign-consistent segments. The boundary
    /// sequence always ends at `x_fin`: when the scan finds no crossing
    /// there (or none at all), `x_fin` is appended as the final boundary.
    pub fn segment_bounds(
        &self,
        x_ini: f64,
        x_fin: f64,
    ) -> Result<Vec<(f64, f64)>, IntegrationError> {
        let mut boundaries = find_crossings(
            &self.equation,
            x_ini,
            x_fin,
            self.settings.root_tolerance,
            self.settings.scan_steps,
        )?;
        info!(
            "found {} zero crossings in [{}, {}]",
            boundaries.len(),
            x_ini,
            x_fin
        );
        if boundaries.last() != Some(&x_fin) {
            boundaries.push(x_fin);
        }
        let mut segments = Vec::with_capacity(boundaries.len());
        let mut prev = x_ini;
        for b in boundaries {
            segments.push((prev, b));
            prev = b;
        }
        Ok(segments)
    }

    /// The four-method bundle for one segment, at the configured resolution.
    pub fn quadrature_bundle(
        &self,
        x_ini: f64,
        x_fin: f64,
    ) -> Result<QuadBundle, IntegrationError> {
        quadrature_bundle(&self.equation, x_ini, x_fin, self.settings.quad_intervals)
    }

    /// Computes the total absolute area of the equation over `[x_ini, x_fin]`.
    ///
    /// An inverted interval (`x_ini > x_fin`) produces an empty report, the
    /// observed behavior of the reference rather than a hard precondition.
    pub fn compute_total_area(
        &self,
        x_ini: f64,
        x_fin: f64,
    ) -> Result<AreaReport, IntegrationError> {
        if x_ini > x_fin {
            warn!("inverted interval [{}, {}], nothing to integrate", x_ini, x_fin);
            return Ok(AreaReport::empty());
        }
        let bounds = self.segment_bounds(x_ini, x_fin)?;
        let mut segments = Vec::with_capacity(bounds.len());
        for (a, b) in bounds {
            let segment = match self.quadrature_bundle(a, b) {
                Ok(bundle) => SegmentResult {
                    x_start: a,
                    x_end: b,
                    area: Some(bundle.average),
                    elapsed_ms: bundle.elapsed_ms,
                    error: None,
                },
                Err(e) if self.settings.isolate_segment_failures => {
                    warn!("segment [{}, {}] failed: {}", a, b, e);
                    SegmentResult {
                        x_start: a,
                        x_end: b,
                        area: None,
                        elapsed_ms: 0.0,
                        error: Some(e.to_string()),
                    }
                }
                Err(e) => return Err(e),
            };
            segments.push(segment);
        }
        let (total_area, total_elapsed_ms) = segments.iter().fold((0.0, 0.0), |(area, ms), s| {
            (area + s.area.unwrap_or(0.0), ms + s.elapsed_ms)
        });
        info!(
            "integrated {} segments, total area {:.6}",
            segments.len(),
            total_area
        );
        Ok(AreaReport {
            segments,
            total_area,
            total_elapsed_ms,
        })
    }
}
