// ── Inventory records ──

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use super::ids::{DeviceId, InterfaceName, InterfacePair};

/// Shown in place of an attribute the controller reported as empty.
pub const PLACEHOLDER: &str = "--";

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_owned()
    } else {
        value.to_owned()
    }
}

/// Fabric role of a node (`fabricNode.role`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Leaf,
    Spine,
}

impl NodeRole {
    /// Roles the inventory targets when no switch is named.
    pub const SWITCHES: [NodeRole; 2] = [NodeRole::Leaf, NodeRole::Spine];
}

/// Transceiver installed in one interface (`ethpmFcot`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpticRecord {
    /// Model name; empty when nothing is inserted or it is unknown.
    pub type_name: String,
}

/// LLDP neighbor seen on one interface (`lldpAdjEp`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborRecord {
    pub sys_name: String,
    pub port_id: String,
}

/// One line of the report: a single optic × neighbor pairing.
///
/// Text fields never hold an empty string; see [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub switch: DeviceId,
    pub interface: InterfaceName,
    pub optic: String,
    pub neighbor: String,
    pub neighbor_interface: String,
}

impl ReportRow {
    pub fn new(pair: &InterfacePair, optic: &OpticRecord, neighbor: &NeighborRecord) -> Self {
        Self {
            switch: pair.device.clone(),
            interface: pair.interface.clone(),
            optic: or_placeholder(&optic.type_name),
            neighbor: or_placeholder(&neighbor.sys_name),
            neighbor_interface: or_placeholder(&neighbor.port_id),
        }
    }
}
