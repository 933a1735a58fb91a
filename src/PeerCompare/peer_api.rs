//! # Peer API Module
//!
//! ## Purpose
//! The reference system recomputed every segment on a remote peer and showed
//! both results side by side. Here that peer is a trait consumed once per
//! segment: [`LocalPeer`] answers in-process through the exact same core the
//! orchestrator uses (nothing algorithmic is implemented twice), and
//! `HttpPeer` (see `http_peer`) speaks the original JSON wire contract over
//! HTTP.
//!
//! ## Wire Contract
//! Given `(coef, xIni, xFin, intervalos)` the peer returns the four absolute
//! areas, their average and the elapsed milliseconds. Field names on the wire
//! are camelCase, as in the reference.

use crate::Integration::equation::{Equation, IntegrationError};
use crate::Integration::segment_integrator::{QuadBundle, quadrature_bundle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PeerError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
    #[error("malformed peer reply: {0}")]
    BadReply(#[from] serde_json::Error),
    #[error(transparent)]
    Integration(#[from] IntegrationError),
}

/// One segment of work for a peer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeerRequest {
    pub coef: Vec<f64>,
    pub x_ini: f64,
    pub x_fin: f64,
    pub intervals: usize,
}

impl PeerRequest {
    pub fn new(eq: &Equation, x_ini: f64, x_fin: f64, intervals: usize) -> Self {
        Self {
            coef: eq.coeff.to_vec(),
            x_ini,
            x_fin,
            intervals,
        }
    }
}

/// A peer's answer for one segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeerReply {
    pub area_gauss: f64,
    pub area_trapezoid: f64,
    pub area_riemann: f64,
    pub area_simpson: f64,
    pub area_average: f64,
    pub elapsed_ms: f64,
}

impl From<QuadBundle> for PeerReply {
    fn from(b: QuadBundle) -> Self {
        Self {
            area_gauss: b.gauss,
            area_trapezoid: b.trapezoid,
            area_riemann: b.riemann,
            area_simpson: b.simpson,
            area_average: b.average,
            elapsed_ms: b.elapsed_ms,
        }
    }
}

/// Anything able to integrate one segment with the four methods: the local
/// core or a remote implementation behind a transport.
pub trait AreaPeer {
    fn integrate_segment(&self, request: &PeerRequest) -> Result<PeerReply, PeerError>;
}

/// In-process peer. Useful as the comparison baseline and wherever the
/// remote round trip is not wanted; the computation is a plain synchronous
/// call into the same quadrature core the orchestrator runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPeer;

impl AreaPeer for LocalPeer {
    fn integrate_segment(&self, request: &PeerRequest) -> Result<PeerReply, PeerError> {
        let eq = Equation::new(&request.coef)?;
        let bundle = quadrature_bundle(&eq, request.x_ini, request.x_fin, request.intervals)?;
        Ok(PeerReply::from(bundle))
    }
}
