// ── Fabric query seam ──
//
// The pipeline stages only ever talk to a `FabricSource`. The live
// implementation is `FabricSession`; tests use an in-memory fabric.

use std::future::Future;

use aciscope_api::Error;

use crate::model::{DeviceId, InterfaceName, InterfacePair, NeighborRecord, NodeRole, OpticRecord};

/// Read-only access to the four collections the inventory joins.
///
/// Each method is one request; implementations must not retry.
pub trait FabricSource {
    /// Identifiers of every fabric node holding one of `roles`, in
    /// controller order.
    fn node_ids(&self, roles: &[NodeRole]) -> impl Future<Output = Result<Vec<DeviceId>, Error>>;

    /// Physical interfaces of one node, in controller order.
    fn interface_names(
        &self,
        device: &DeviceId,
    ) -> impl Future<Output = Result<Vec<InterfaceName>, Error>>;

    /// Transceiver entries under one interface.
    fn optics(&self, pair: &InterfacePair)
    -> impl Future<Output = Result<Vec<OpticRecord>, Error>>;

    /// LLDP adjacency entries under one interface.
    fn neighbors(
        &self,
        pair: &InterfacePair,
    ) -> impl Future<Output = Result<Vec<NeighborRecord>, Error>>;
}
