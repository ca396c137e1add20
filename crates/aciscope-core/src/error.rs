// ── Core error types ──
//
// User-facing errors from aciscope-core. Stage failures keep the raw
// APIC response body so the CLI can show it under the diagnostic.

use serde::Serialize;
use strum::Display;
use thiserror::Error;

/// The pipeline step a query belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    #[strum(serialize = "switch list")]
    Nodes,
    #[strum(serialize = "interface list")]
    Interfaces,
    #[strum(serialize = "optic data")]
    Optics,
    #[strum(serialize = "LLDP neighbor data")]
    Neighbors,
}

/// One failed fabric query, scoped to the unit of work it was for.
#[derive(Debug, Clone, Error, Serialize)]
#[error("Could not collect {stage} {scope}: {reason}")]
pub struct QueryFailure {
    pub stage: Stage,
    /// Human-readable target, e.g. `for switch 101 interface eth1/1`.
    pub scope: String,
    pub reason: String,
    pub status: Option<u16>,
    /// Raw response body, when the controller sent one.
    pub body: Option<String>,
}

impl QueryFailure {
    pub fn new(stage: Stage, scope: impl Into<String>, err: &aciscope_api::Error) -> Self {
        let reason = match err {
            aciscope_api::Error::Apic { message, .. } => message.clone(),
            other => other.to_string(),
        };
        Self {
            stage,
            scope: scope.into(),
            reason,
            status: err.status(),
            body: err.response_body().map(str::to_owned),
        }
    }

    /// Whether the controller rejected the session token.
    pub fn is_auth_rejected(&self) -> bool {
        matches!(self.status, Some(401 | 403))
    }
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Controller connection timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Pipeline errors ──────────────────────────────────────────────
    #[error(transparent)]
    Query(#[from] QueryFailure),

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<aciscope_api::Error> for CoreError {
    fn from(err: aciscope_api::Error) -> Self {
        match err {
            aciscope_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            aciscope_api::Error::Transport(ref e) => {
                if e.is_connect() || e.is_timeout() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Internal(e.to_string())
                }
            }
            aciscope_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            aciscope_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            aciscope_api::Error::Apic {
                status, message, ..
            } => CoreError::Internal(format!("APIC error (HTTP {status}): {message}")),
            aciscope_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
