// ── Identity types ──
//
// DeviceId and InterfaceName are both plain strings on the wire; distinct
// types keep a node id from being passed where an interface is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── DeviceId ────────────────────────────────────────────────────────

/// Fabric node identifier (`fabricNode.id`, e.g. `101`).
///
/// Opaque: an explicit override is used verbatim, without checking that
/// the node exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DeviceId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for DeviceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ── InterfaceName ───────────────────────────────────────────────────

/// Physical interface identifier (`l1PhysIf.id`, e.g. `eth1/1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterfaceName(String);

impl InterfaceName {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InterfaceName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for InterfaceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for InterfaceName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ── InterfacePair ───────────────────────────────────────────────────

/// One physical interface scoped to one device: the unit of correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfacePair {
    pub device: DeviceId,
    pub interface: InterfaceName,
}

impl InterfacePair {
    pub fn new(device: DeviceId, interface: InterfaceName) -> Self {
        Self { device, interface }
    }
}

impl fmt::Display for InterfacePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "switch {} interface {}", self.device, self.interface)
    }
}
