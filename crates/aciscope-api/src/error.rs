use thiserror::Error;

/// Top-level error type for the `aciscope-api` crate.
///
/// Covers authentication, transport, and APIC-reported failures.
/// `aciscope-core` maps these into stage-scoped diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// `aaaLogin` rejected the credentials, or returned no token.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── APIC ────────────────────────────────────────────────────────
    /// Non-success HTTP response. `message` is the APIC error text when
    /// the body carries one; `body` is the raw response text.
    #[error("APIC error (HTTP {status}): {message}")]
    Apic {
        status: u16,
        message: String,
        body: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the APIC rejected the session token.
    ///
    /// APIC answers `403` once a token times out, `401` when none was sent.
    pub fn is_auth_expired(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::Apic { status: 401 | 403, .. }
        )
    }

    /// The HTTP status that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Apic { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The raw response body attached to this error, if any.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Apic { body, .. } | Self::Deserialization { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_timeout_counts_as_expired() {
        let err = Error::Apic {
            status: 403,
            message: "Token was invalid (Error: Token timeout)".into(),
            body: String::new(),
        };
        assert!(err.is_auth_expired());
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn bad_request_keeps_body() {
        let err = Error::Apic {
            status: 400,
            message: "Unable to process the query".into(),
            body: "{\"imdata\":[]}".into(),
        };
        assert!(!err.is_auth_expired());
        assert_eq!(err.response_body(), Some("{\"imdata\":[]}"));
    }
}
