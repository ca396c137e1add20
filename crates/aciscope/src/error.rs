//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use aciscope_config::ConfigError;
use aciscope_core::{CoreError, QueryFailure};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to APIC at {url}")]
    #[diagnostic(
        code(aciscope::connection_failed),
        help(
            "{reason}\n\
             Check that the APIC is reachable from this host.\n\
             Self-signed certificate? Try: aciscope optics --insecure"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(aciscope::timeout),
        help("Increase timeout with --timeout or check APIC responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(aciscope::auth_failed),
        help(
            "Verify the APIC username and password for profile '{profile}'.\n\
             Run: aciscope config set-password --profile {profile}"
        )
    )]
    AuthFailed { message: String, profile: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(aciscope::no_credentials),
        help(
            "Configure credentials with: aciscope config init\n\
             Or set ACISCOPE_USERNAME and ACISCOPE_PASSWORD."
        )
    )]
    NoCredentials { profile: String },

    // ── Inventory ────────────────────────────────────────────────────
    /// A fabric query failed. The APIC response body, when there is one,
    /// is shown as help.
    #[error("{failure}")]
    #[diagnostic(code(aciscope::query_failed))]
    QueryFailed {
        failure: QueryFailure,
        #[help]
        response: Option<String>,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(aciscope::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(aciscope::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: aciscope config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No APIC configured")]
    #[diagnostic(
        code(aciscope::no_config),
        help(
            "Create a profile with: aciscope config init\n\
             Expected at: {path}\n\
             Or pass --controller, --username and --password."
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(
        code(aciscope::config),
        help("Fix the file shown by `aciscope config path`; it was left untouched.")
    )]
    Config(ConfigError),

    // ── Internal / IO ────────────────────────────────────────────────
    #[error("Internal error: {0}")]
    #[diagnostic(code(aciscope::internal))]
    Internal(String),

    #[error("Could not render output: {0}")]
    #[diagnostic(code(aciscope::render))]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::QueryFailed { failure, .. } if failure.is_auth_rejected() => exit_code::AUTH,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Attach the active profile name to an authentication failure.
    pub fn with_profile(self, name: &str) -> Self {
        match self {
            Self::AuthFailed { message, .. } => Self::AuthFailed {
                message,
                profile: name.into(),
            },
            Self::NoCredentials { .. } => Self::NoCredentials {
                profile: name.into(),
            },
            other => other,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed {
                message,
                profile: "default".into(),
            },

            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            CoreError::Query(failure) => CliError::QueryFailed {
                response: failure.body.clone().filter(|b| !b.trim().is_empty()),
                failure,
            },

            CoreError::Config { message } => CliError::Validation {
                field: "controller".into(),
                reason: message,
            },

            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoPassword { profile } => CliError::NoCredentials { profile },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(other),
        }
    }
}
