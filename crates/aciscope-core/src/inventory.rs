// ── Inventory driver ──

use serde::Serialize;
use tracing::info;

use crate::correlate::correlate;
use crate::error::{CoreError, QueryFailure};
use crate::model::{DeviceId, InterfaceName, ReportRow};
use crate::policy::{ErrorPolicy, FailureLog};
use crate::resolve::{resolve_interfaces, resolve_nodes};
use crate::source::FabricSource;

/// Scope of one inventory run.
#[derive(Debug, Clone, Default)]
pub struct InventoryRequest {
    /// Restrict to one switch. The id is trusted, not validated.
    pub switch: Option<DeviceId>,
    /// Restrict to one interface name on every selected switch.
    pub interface: Option<InterfaceName>,
    pub policy: ErrorPolicy,
}

/// Result of a completed run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InventoryReport {
    pub rows: Vec<ReportRow>,
    /// Units dropped under [`ErrorPolicy::BestEffort`]. Always empty
    /// under fail-fast, which returns an error instead.
    pub skipped: Vec<QueryFailure>,
}

/// Run node resolution, interface resolution and correlation in order.
pub async fn gather<S: FabricSource>(
    source: &S,
    request: &InventoryRequest,
) -> Result<InventoryReport, CoreError> {
    let mut log = FailureLog::new(request.policy);

    let devices = resolve_nodes(source, request.switch.as_ref()).await?;
    let pairs =
        resolve_interfaces(source, &devices, request.interface.as_ref(), &mut log).await?;
    let rows = correlate(source, &pairs, &mut log).await?;

    let skipped = log.into_failures();
    info!(
        switches = devices.len(),
        interfaces = pairs.len(),
        rows = rows.len(),
        skipped = skipped.len(),
        "inventory complete"
    );
    Ok(InventoryReport { rows, skipped })
}
