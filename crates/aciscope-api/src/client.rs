// APIC HTTP client
//
// Wraps `reqwest::Client` with APIC URL construction, `imdata` envelope
// unwrapping, and session-token injection. Endpoint groups (session,
// fabric inventory) are inherent methods in separate files to keep this
// module focused on transport mechanics.

use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{ImData, ManagedObject};
use crate::transport::TransportConfig;

/// Cookie name APIC uses for the session token.
const TOKEN_COOKIE: &str = "APIC-cookie";

/// Raw HTTP client for the APIC REST API.
///
/// Handles the `{ totalCount, imdata: [] }` envelope and pod-scoped
/// topology paths. Query methods return typed managed objects; the
/// envelope is stripped before the caller sees it.
pub struct ApicClient {
    http: reqwest::Client,
    base_url: Url,
    pod: u16,
    /// Session token from `aaaLogin`, sent as the `APIC-cookie` cookie.
    token: RwLock<Option<String>>,
}

impl ApicClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the APIC root (e.g. `https://apic1.example.net`);
    /// `pod` scopes every topology path (`topology/pod-{pod}/...`).
    pub fn new(base_url: Url, pod: u16, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url, pod))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, pod: u16) -> Self {
        Self {
            http,
            base_url,
            pod,
            token: RwLock::new(None),
        }
    }

    /// Whether a session token is currently held.
    pub fn has_session(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    // ── Session token ───────────────────────────────────────────────

    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    fn apply_token(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let guard = self.token.read().unwrap_or_else(PoisonError::into_inner);
        match guard.as_deref() {
            Some(token) => {
                builder.header(reqwest::header::COOKIE, format!("{TOKEN_COOKIE}={token}"))
            }
            None => builder,
        }
    }

    // ── URL builders ────────────────────────────────────────────────

    /// Build a full URL for an API path, e.g. `node/class/fabricNode.json`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/api/{path}"))?)
    }

    /// Build a URL for a pod-scoped node path:
    /// `{base}/api/node/{kind}/topology/pod-{pod}/node-{node}/{path}`.
    pub(crate) fn node_url(&self, kind: &str, node: &str, path: &str) -> Result<Url, Error> {
        self.api_url(&format!(
            "node/{kind}/topology/pod-{}/node-{node}/{path}",
            self.pod
        ))
    }

    // ── Request helpers ─────────────────────────────────────────────

    /// Send a GET request and return every `T` object in the envelope.
    pub(crate) async fn get<T: ManagedObject>(&self, url: Url) -> Result<Vec<T>, Error> {
        debug!("GET {}", url);

        let resp = self
            .apply_token(self.http.get(url))
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::parse_imdata(resp).await?.objects()
    }

    /// Send a POST request with a JSON body and return the raw envelope.
    pub(crate) async fn post(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<ImData, Error> {
        debug!("POST {}", url);

        let resp = self
            .apply_token(self.http.post(url).json(body))
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::parse_imdata(resp).await
    }

    /// Parse the `imdata` envelope, or turn a non-success status into
    /// `Error::Apic` carrying the APIC error text and the raw body.
    async fn parse_imdata(resp: reqwest::Response) -> Result<ImData, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            let message = ImData::parse(&body)
                .ok()
                .and_then(|env| env.error_text())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").into());
            return Err(Error::Apic {
                status: status.as_u16(),
                message,
                body,
            });
        }

        ImData::parse(&body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApicClient {
        ApicClient::with_client(reqwest::Client::new(), Url::parse(base).unwrap(), 1)
    }

    #[test]
    fn api_url_strips_trailing_slash() {
        let c = client("https://apic1.example.net/");
        let url = c.api_url("node/class/fabricNode.json").unwrap();
        assert_eq!(
            url.as_str(),
            "https://apic1.example.net/api/node/class/fabricNode.json"
        );
    }

    #[test]
    fn node_url_keeps_interface_brackets() {
        let c = client("https://apic1.example.net");
        let url = c
            .node_url("mo", "101", "sys/phys-[eth1/1]/phys.json")
            .unwrap();
        assert_eq!(
            url.path(),
            "/api/node/mo/topology/pod-1/node-101/sys/phys-[eth1/1]/phys.json"
        );
    }

    #[test]
    fn token_starts_empty() {
        let c = client("https://apic1.example.net");
        assert!(!c.has_session());
        c.set_token(Some("abc".into()));
        assert!(c.has_session());
    }
}
