//! Inventory pipeline between `aciscope-api` and the CLI.
//!
//! A run is three strictly sequential stages over one authenticated
//! [`FabricSession`]:
//!
//! - **Node resolution** ([`resolve::resolve_nodes`]): the explicit switch,
//!   or every leaf and spine registered in the fabric.
//! - **Interface resolution** ([`resolve::resolve_interfaces`]): the
//!   explicit interface on every switch, or each switch's physical
//!   interfaces in controller order.
//! - **Correlation** ([`correlate::correlate`]): per interface, the
//!   transceiver and LLDP adjacency collections joined into
//!   [`ReportRow`]s.
//!
//! [`inventory::gather`] drives all three. Every stage talks to the fabric
//! through the [`FabricSource`] trait so it can run against an in-memory
//! fabric in tests. Failures of independent units follow the configured
//! [`ErrorPolicy`].

pub mod config;
pub mod convert;
pub mod correlate;
pub mod error;
pub mod inventory;
pub mod model;
pub mod policy;
pub mod resolve;
pub mod session;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ControllerConfig, Credentials, DEFAULT_POD, TlsVerification};
pub use error::{CoreError, QueryFailure, Stage};
pub use inventory::{InventoryReport, InventoryRequest, gather};
pub use model::{
    DeviceId, InterfaceName, InterfacePair, NeighborRecord, NodeRole, OpticRecord, PLACEHOLDER,
    ReportRow,
};
pub use policy::{ErrorPolicy, FailureLog};
pub use session::FabricSession;
pub use source::FabricSource;
