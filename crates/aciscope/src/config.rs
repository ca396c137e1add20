//! CLI-side configuration: flag overrides on top of `aciscope-config`.
//!
//! Core never sees these types. It receives a pre-built `ControllerConfig`.

use std::time::Duration;

use secrecy::SecretString;

use aciscope_config::Profile;
use aciscope_core::{ControllerConfig, Credentials, DEFAULT_POD, TlsVerification};

pub use aciscope_config::{Config, config_path, load_config, save_config};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Profile resolution ───────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `ControllerConfig` from the config file, profile, and flags.
///
/// Without a matching profile, `--controller`, `--username` and
/// `--password` (or their env vars) must all be given.
pub fn build_controller_config(
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<ControllerConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, global, cfg)
            .map_err(|e| e.with_profile(&profile_name));
    }

    // An explicitly requested profile must exist.
    if let Some(ref name) = global.profile {
        return Err(CliError::ProfileNotFound {
            name: name.clone(),
            available: available_profiles(cfg),
        });
    }

    let url_str = global.controller.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;
    let url = aciscope_config::parse_controller_url(url_str)?;

    let (Some(username), Some(password)) = (&global.username, &global.password) else {
        return Err(CliError::NoCredentials {
            profile: profile_name,
        });
    };

    let tls = if global.insecure || cfg.defaults.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(ControllerConfig {
        url,
        credentials: Credentials {
            username: username.clone(),
            password: SecretString::from(password.clone()),
        },
        pod: global.pod.unwrap_or(DEFAULT_POD),
        tls,
        timeout: Duration::from_secs(global.timeout.unwrap_or(cfg.defaults.timeout)),
    })
}

/// Translate a profile + global flags into a `ControllerConfig`.
///
/// Each field is taken from the flag when given, otherwise the profile,
/// otherwise `[defaults]`.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<ControllerConfig, CliError> {
    // 1. Controller URL
    let url_str = global.controller.as_deref().unwrap_or(&profile.controller);
    let url = aciscope_config::parse_controller_url(url_str)?;

    // 2. Credentials
    let Some(username) = global.username.clone().or_else(|| profile.username.clone()) else {
        return Err(CliError::NoCredentials {
            profile: profile_name.into(),
        });
    };
    let password = match global.password {
        Some(ref pw) => SecretString::from(pw.clone()),
        None => aciscope_config::resolve_password(profile, profile_name)?,
    };

    // 3. TLS verification
    let tls = if global.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        aciscope_config::profile_tls(profile, &cfg.defaults)
    };

    // 4. Pod and timeout
    let pod = global.pod.or(profile.pod).unwrap_or(DEFAULT_POD);
    let timeout = global
        .timeout
        .or(profile.timeout)
        .unwrap_or(cfg.defaults.timeout);

    Ok(ControllerConfig {
        url,
        credentials: Credentials { username, password },
        pod,
        tls,
        timeout: Duration::from_secs(timeout),
    })
}

/// Comma-separated profile names for diagnostics.
pub fn available_profiles(cfg: &Config) -> String {
    let mut names: Vec<_> = cfg.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}
