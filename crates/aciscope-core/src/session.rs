// ── Authenticated APIC session ──
//
// One `FabricSession` per run. It is passed by reference into every
// pipeline stage; nothing holds it globally.

use aciscope_api::{ApicClient, Error, TransportConfig};
use tracing::{debug, info};

use crate::config::ControllerConfig;
use crate::error::CoreError;
use crate::model::{DeviceId, InterfaceName, InterfacePair, NeighborRecord, NodeRole, OpticRecord};
use crate::source::FabricSource;

/// A logged-in APIC client scoped to one pod.
pub struct FabricSession {
    client: ApicClient,
    username: String,
}

impl FabricSession {
    /// Build the HTTP client and log in.
    pub async fn connect(config: &ControllerConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: (&config.tls).into(),
            timeout: config.timeout,
        };
        let client = ApicClient::new(config.url.clone(), config.pod, &transport)?;

        let username = config.credentials.username.clone();
        client
            .login(&username, &config.credentials.password)
            .await
            .map_err(|e| connect_error(e, config))?;

        info!(controller = %config.url, pod = config.pod, "logged in to APIC");
        Ok(Self { client, username })
    }

    /// The underlying API client.
    pub fn client(&self) -> &ApicClient {
        &self.client
    }

    /// Log out. Failure only costs the controller an idle session, so it
    /// is logged and otherwise ignored.
    pub async fn close(self) {
        if let Err(e) = self.client.logout(&self.username).await {
            debug!(error = %e, "logout failed");
        }
    }
}

fn connect_error(err: Error, config: &ControllerConfig) -> CoreError {
    match &err {
        Error::Transport(e) if e.is_timeout() => CoreError::Timeout {
            timeout_secs: config.timeout.as_secs(),
        },
        Error::Transport(e) if e.is_connect() => CoreError::ConnectionFailed {
            url: config.url.to_string(),
            reason: e.to_string(),
        },
        _ => err.into(),
    }
}

impl FabricSource for FabricSession {
    async fn node_ids(&self, roles: &[NodeRole]) -> Result<Vec<DeviceId>, Error> {
        let roles: Vec<&str> = roles.iter().map(AsRef::as_ref).collect();
        let nodes = self.client.list_fabric_nodes(&roles).await?;
        Ok(nodes.into_iter().map(DeviceId::from).collect())
    }

    async fn interface_names(&self, device: &DeviceId) -> Result<Vec<InterfaceName>, Error> {
        let intfs = self.client.list_physical_interfaces(device.as_str()).await?;
        Ok(intfs.into_iter().map(InterfaceName::from).collect())
    }

    async fn optics(&self, pair: &InterfacePair) -> Result<Vec<OpticRecord>, Error> {
        let fcots = self
            .client
            .list_transceivers(pair.device.as_str(), pair.interface.as_str())
            .await?;
        Ok(fcots.into_iter().map(OpticRecord::from).collect())
    }

    async fn neighbors(&self, pair: &InterfacePair) -> Result<Vec<NeighborRecord>, Error> {
        let adjs = self
            .client
            .list_lldp_adjacencies(pair.device.as_str(), pair.interface.as_str())
            .await?;
        Ok(adjs.into_iter().map(NeighborRecord::from).collect())
    }
}
