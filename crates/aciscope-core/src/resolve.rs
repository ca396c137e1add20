// ── Target resolution ──
//
// Stage one picks the switches, stage two the interfaces on each. The full
// list of interface pairs exists before any per-interface query is sent.

use tracing::{debug, info};

use crate::error::{CoreError, QueryFailure, Stage};
use crate::model::{DeviceId, InterfaceName, InterfacePair, NodeRole};
use crate::policy::FailureLog;
use crate::source::FabricSource;

/// Resolve the switches to inventory.
///
/// An explicit `switch` is returned as-is, with no query and no existence
/// check. Otherwise every leaf and spine is fetched in one query. A failed
/// query is always fatal.
pub async fn resolve_nodes<S: FabricSource>(
    source: &S,
    switch: Option<&DeviceId>,
) -> Result<Vec<DeviceId>, CoreError> {
    if let Some(id) = switch {
        debug!(switch = %id, "using explicit switch");
        return Ok(vec![id.clone()]);
    }

    let nodes = source
        .node_ids(&NodeRole::SWITCHES)
        .await
        .map_err(|e| QueryFailure::new(Stage::Nodes, "from APIC", &e))?;

    info!(count = nodes.len(), "resolved fabric switches");
    Ok(nodes)
}

/// Resolve the `(switch, interface)` pairs to inspect, switch-major.
///
/// An explicit `interface` is paired with every switch without asking the
/// controller. Otherwise each switch's physical interfaces are listed in
/// controller order. A failed listing is handed to `log`, which either
/// aborts the resolution or skips that switch.
pub async fn resolve_interfaces<S: FabricSource>(
    source: &S,
    devices: &[DeviceId],
    interface: Option<&InterfaceName>,
    log: &mut FailureLog,
) -> Result<Vec<InterfacePair>, CoreError> {
    if let Some(intf) = interface {
        debug!(interface = %intf, "using explicit interface on every switch");
        return Ok(devices
            .iter()
            .map(|device| InterfacePair::new(device.clone(), intf.clone()))
            .collect());
    }

    let mut pairs = Vec::new();
    for device in devices {
        match source.interface_names(device).await {
            Ok(names) => {
                debug!(switch = %device, count = names.len(), "listed interfaces");
                pairs.extend(
                    names
                        .into_iter()
                        .map(|name| InterfacePair::new(device.clone(), name)),
                );
            }
            Err(e) => {
                log.absorb(QueryFailure::new(
                    Stage::Interfaces,
                    format!("for switch {device}"),
                    &e,
                ))?;
            }
        }
    }

    info!(count = pairs.len(), "resolved interfaces");
    Ok(pairs)
}
