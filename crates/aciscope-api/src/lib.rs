// aciscope-api: Async Rust client for the Cisco APIC REST API

pub mod auth;
pub mod client;
pub mod error;
pub mod fabric;
pub mod models;
pub mod transport;

pub use client::ApicClient;
pub use error::Error;
pub use models::{
    AaaLogin, ApicErrorObject, EthpmFcot, FabricNode, ImData, L1PhysIf, LldpAdjEp, ManagedObject,
};
pub use transport::{TlsMode, TransportConfig};
