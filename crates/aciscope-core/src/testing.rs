// In-memory fabric for pipeline tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use aciscope_api::Error;

use crate::model::{DeviceId, InterfaceName, InterfacePair, NeighborRecord, NodeRole, OpticRecord};
use crate::source::FabricSource;

/// Canned fabric contents keyed the same way calls are recorded:
/// `nodes:leaf,spine`, `interfaces:101`, `optics:101:eth1/1`,
/// `neighbors:101:eth1/1`. Keys listed via [`FakeFabric::failing`] answer
/// with an HTTP 500. Unknown keys answer with an empty collection.
#[derive(Debug, Default)]
pub(crate) struct FakeFabric {
    nodes: Vec<DeviceId>,
    interfaces: HashMap<String, Vec<InterfaceName>>,
    optics: HashMap<String, Vec<OpticRecord>>,
    neighbors: HashMap<String, Vec<NeighborRecord>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeFabric {
    pub(crate) fn with_nodes(mut self, ids: &[&str]) -> Self {
        self.nodes = ids.iter().map(|id| DeviceId::from(*id)).collect();
        self
    }

    pub(crate) fn with_interfaces(mut self, device: &str, names: &[&str]) -> Self {
        self.interfaces.insert(
            format!("interfaces:{device}"),
            names.iter().map(|n| InterfaceName::from(*n)).collect(),
        );
        self
    }

    pub(crate) fn with_optics(mut self, device: &str, intf: &str, types: &[&str]) -> Self {
        self.optics.insert(
            format!("optics:{device}:{intf}"),
            types
                .iter()
                .map(|t| OpticRecord {
                    type_name: (*t).to_owned(),
                })
                .collect(),
        );
        self
    }

    pub(crate) fn with_neighbors(mut self, device: &str, intf: &str, adjs: &[(&str, &str)]) -> Self {
        self.neighbors.insert(
            format!("neighbors:{device}:{intf}"),
            adjs.iter()
                .map(|(name, port)| NeighborRecord {
                    sys_name: (*name).to_owned(),
                    port_id: (*port).to_owned(),
                })
                .collect(),
        );
        self
    }

    pub(crate) fn failing(mut self, key: &str) -> Self {
        self.failing.insert(key.to_owned());
        self
    }

    /// Every query issued so far, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn record(&self, key: &str) -> Result<(), Error> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(key.to_owned());
        if self.failing.contains(key) {
            return Err(Error::Apic {
                status: 500,
                message: format!("fake failure for {key}"),
                body: format!(r#"{{"imdata":[{{"error":{{"attributes":{{"text":"{key}"}}}}}}]}}"#),
            });
        }
        Ok(())
    }
}

fn pair_key(kind: &str, pair: &InterfacePair) -> String {
    format!("{kind}:{}:{}", pair.device, pair.interface)
}

impl FabricSource for FakeFabric {
    async fn node_ids(&self, roles: &[NodeRole]) -> Result<Vec<DeviceId>, Error> {
        let roles: Vec<&str> = roles.iter().map(AsRef::as_ref).collect();
        self.record(&format!("nodes:{}", roles.join(",")))?;
        Ok(self.nodes.clone())
    }

    async fn interface_names(&self, device: &DeviceId) -> Result<Vec<InterfaceName>, Error> {
        let key = format!("interfaces:{device}");
        self.record(&key)?;
        Ok(self.interfaces.get(&key).cloned().unwrap_or_default())
    }

    async fn optics(&self, pair: &InterfacePair) -> Result<Vec<OpticRecord>, Error> {
        let key = pair_key("optics", pair);
        self.record(&key)?;
        Ok(self.optics.get(&key).cloned().unwrap_or_default())
    }

    async fn neighbors(&self, pair: &InterfacePair) -> Result<Vec<NeighborRecord>, Error> {
        let key = pair_key("neighbors", pair);
        self.record(&key)?;
        Ok(self.neighbors.get(&key).cloned().unwrap_or_default())
    }
}
