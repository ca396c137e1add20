// APIC session authentication
//
// `aaaLogin` returns a token that APIC also sets as the `APIC-cookie`
// cookie; the client keeps it and sends it on every later request.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::ApicClient;
use crate::error::Error;
use crate::models::AaaLogin;

impl ApicClient {
    /// Authenticate with username/password.
    ///
    /// `POST /api/aaaLogin.json`. On success the session token is stored
    /// and used for all subsequent requests.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<AaaLogin, Error> {
        let url = self.api_url("aaaLogin.json")?;
        debug!(username, "logging in at {}", url);

        let body = json!({
            "aaaUser": {
                "attributes": {
                    "name": username,
                    "pwd": password.expose_secret(),
                }
            }
        });

        let envelope = self.post(url, &body).await.map_err(|e| match e {
            Error::Apic {
                status, message, ..
            } => Error::Authentication {
                message: format!("login failed (HTTP {status}): {message}"),
            },
            other => other,
        })?;

        let session = envelope
            .objects::<AaaLogin>()?
            .into_iter()
            .next()
            .filter(|s| !s.token.is_empty())
            .ok_or_else(|| Error::Authentication {
                message: "login response carried no session token".into(),
            })?;

        self.set_token(Some(session.token.clone()));
        debug!(
            refresh_timeout = %session.refresh_timeout_seconds,
            "login successful"
        );
        Ok(session)
    }

    /// End the current session.
    ///
    /// `POST /api/aaaLogout.json`. The stored token is dropped even if the
    /// request fails.
    pub async fn logout(&self, username: &str) -> Result<(), Error> {
        let url = self.api_url("aaaLogout.json")?;
        debug!("logging out at {}", url);

        let body = json!({ "aaaUser": { "attributes": { "name": username } } });
        let result = self.post(url, &body).await;
        self.set_token(None);
        result?;

        debug!("logout complete");
        Ok(())
    }
}
