//! Side-by-side cross-validation of the local core against a peer: every
//! sign-consistent segment is integrated locally and by the peer, and both
//! areas and timings land in one table with a totals row, the way the
//! reference system presented its two implementations.

use super::peer_api::{AreaPeer, PeerError, PeerRequest};
use crate::Integration::segment_integrator::SegmentIntegrator;
use log::info;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

/// Local and peer result for one segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SegmentComparison {
    pub x_start: f64,
    pub x_end: f64,
    pub local_area: f64,
    pub local_ms: f64,
    pub peer_area: f64,
    pub peer_ms: f64,
}

/// All compared segments plus the folded totals of both sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub rows: Vec<SegmentComparison>,
    pub total_local_area: f64,
    pub total_local_ms: f64,
    pub total_peer_area: f64,
    pub total_peer_ms: f64,
}

impl ComparisonReport {
    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Start"),
            Cell::new("End"),
            Cell::new("Local area"),
            Cell::new("Local, ms"),
            Cell::new("Peer area"),
            Cell::new("Peer, ms"),
        ]));
        for row in &self.rows {
            table.add_row(Row::new(vec![
                Cell::new(&format!("{:.4}", row.x_start)),
                Cell::new(&format!("{:.4}", row.x_end)),
                Cell::new(&format!("{:.4}", row.local_area)),
                Cell::new(&format!("{:.2}", row.local_ms)),
                Cell::new(&format!("{:.4}", row.peer_area)),
                Cell::new(&format!("{:.2}", row.peer_ms)),
            ]));
        }
        table.add_row(Row::new(vec![
            Cell::new("Total"),
            Cell::new(""),
            Cell::new(&format!("{:.4}", self.total_local_area)),
            Cell::new(&format!("{:.2}", self.total_local_ms)),
            Cell::new(&format!("{:.4}", self.total_peer_area)),
            Cell::new(&format!("{:.2}", self.total_peer_ms)),
        ]));
        table.printstd();
    }
}

/// Integrates every segment of `[x_ini, x_fin]` locally and through `peer`,
/// folding both sides into one report. The peer is consulted once per
/// segment, synchronously, after the local computation of that segment.
pub fn compare_with_peer<P: AreaPeer>(
    integrator: &SegmentIntegrator,
    peer: &P,
    x_ini: f64,
    x_fin: f64,
) -> Result<ComparisonReport, PeerError> {
    let mut report = ComparisonReport {
        rows: Vec::new(),
        total_local_area: 0.0,
        total_local_ms: 0.0,
        total_peer_area: 0.0,
        total_peer_ms: 0.0,
    };
    if x_ini > x_fin {
        return Ok(report);
    }
    let bounds = integrator.segment_bounds(x_ini, x_fin)?;
    for (a, b) in bounds {
        let local = integrator.quadrature_bundle(a, b)?;
        let request = PeerRequest::new(
            &integrator.equation,
            a,
            b,
            integrator.settings.quad_intervals,
        );
        let remote = peer.integrate_segment(&request)?;
        report.rows.push(SegmentComparison {
            x_start: a,
            x_end: b,
            local_area: local.average,
            local_ms: local.elapsed_ms,
            peer_area: remote.area_average,
            peer_ms: remote.elapsed_ms,
        });
        report.total_local_area += local.average;
        report.total_local_ms += local.elapsed_ms;
        report.total_peer_area += remote.area_average;
        report.total_peer_ms += remote.elapsed_ms;
    }
    info!(
        "compared {} segments: local {:.6} vs peer {:.6}",
        report.rows.len(),
        report.total_local_area,
        report.total_peer_area
    );
    Ok(report)
}
