//! HTTP transport for the peer contract: POSTs the segment request as JSON
//! and parses the JSON reply. The HTTP client is injected through a trait so
//! tests can run against a canned transport.

use super::peer_api::{AreaPeer, PeerError, PeerReply, PeerRequest};
use reqwest::blocking::Client;
use url::Url;

/// HTTP client trait for dependency injection.
pub trait HttpClient {
    fn post_json(&self, url: &str, body: &str) -> Result<String, reqwest::Error>;
}

// Implementation for the real reqwest client
impl HttpClient for Client {
    fn post_json(&self, url: &str, body: &str) -> Result<String, reqwest::Error> {
        self.post(url)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()?
            .text()
    }
}

/// A remote peer reached over HTTP. The endpoint is validated once at
/// construction time.
pub struct HttpPeer<C: HttpClient = Client> {
    client: C,
    endpoint: Url,
}

impl HttpPeer<Client> {
    pub fn new(endpoint: &str) -> Result<Self, PeerError> {
        Ok(Self {
            client: Client::new(),
            endpoint: Url::parse(endpoint)?,
        })
    }
}

impl<C: HttpClient> HttpPeer<C> {
    /// Builds a peer with an injected client (tests use a mock transport).
    pub fn with_client(endpoint: &str, client: C) -> Result<Self, PeerError> {
        Ok(Self {
            client,
            endpoint: Url::parse(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C: HttpClient> AreaPeer for HttpPeer<C> {
    fn integrate_segment(&self, request: &PeerRequest) -> Result<PeerReply, PeerError> {
        let body = serde_json::to_string(request)?;
        let reply = self.client.post_json(self.endpoint.as_str(), &body)?;
        let reply: PeerReply = serde_json::from_str(&reply)?;
        Ok(reply)
    }
}
