// ── Domain model ──
//
// Identifiers and the records joined into the report. All of them are
// transient: built during one run, never persisted.

mod ids;
mod records;

pub use ids::{DeviceId, InterfaceName, InterfacePair};
pub use records::{NeighborRecord, NodeRole, OpticRecord, PLACEHOLDER, ReportRow};
