//! # Peer Comparison Module
//!
//! Cross-validation of the numerical core against an independent peer. The
//! peer contract mirrors the core: given a segment and a resolution it
//! returns the four areas, their average and the elapsed milliseconds.
//! [`peer_api::LocalPeer`] answers in-process through the same core;
//! [`http_peer::HttpPeer`] reaches a remote implementation over HTTP+JSON.

/// wire contract, the `AreaPeer` trait and the in-process peer
pub mod peer_api;
/// blocking HTTP transport with an injectable client
pub mod http_peer;
/// per-segment local-vs-peer comparison reports
pub mod comparison;
