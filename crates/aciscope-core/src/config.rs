// ── Runtime connection configuration ──
//
// These types describe *how* to connect to an APIC. They carry credential
// data and connection tuning, but never touch disk. The CLI builds a
// `ControllerConfig` and hands it to `FabricSession::connect`.

use std::path::PathBuf;
use std::time::Duration;

use aciscope_api::TlsMode;
use secrecy::SecretString;
use url::Url;

/// Local APIC user credentials for `aaaLogin`.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification. APICs ship with self-signed certificates.
    #[default]
    DangerAcceptInvalid,
}

impl From<&TlsVerification> for TlsMode {
    fn from(tls: &TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        }
    }
}

/// Configuration for connecting to a single APIC cluster.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// APIC URL (e.g., `https://apic1.example.net`).
    pub url: Url,
    pub credentials: Credentials,
    /// Pod every topology path is scoped to.
    pub pod: u16,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Pod used when neither profile nor flags name one.
pub const DEFAULT_POD: u16 = 1;
