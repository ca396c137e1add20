// ── API-to-domain type conversions ──
//
// Bridges raw `aciscope_api` managed objects into the inventory model.
// Values are copied as-is; placeholder substitution happens when a
// ReportRow is built.

use aciscope_api::{EthpmFcot, FabricNode, L1PhysIf, LldpAdjEp};

use crate::model::{DeviceId, InterfaceName, NeighborRecord, OpticRecord};

impl From<FabricNode> for DeviceId {
    fn from(node: FabricNode) -> Self {
        DeviceId::from(node.id)
    }
}

impl From<L1PhysIf> for InterfaceName {
    fn from(intf: L1PhysIf) -> Self {
        InterfaceName::from(intf.id)
    }
}

impl From<EthpmFcot> for OpticRecord {
    fn from(fcot: EthpmFcot) -> Self {
        Self {
            type_name: fcot.type_name,
        }
    }
}

impl From<LldpAdjEp> for NeighborRecord {
    fn from(adj: LldpAdjEp) -> Self {
        Self {
            sys_name: adj.sys_name,
            port_id: adj.port_id_v,
        }
    }
}
