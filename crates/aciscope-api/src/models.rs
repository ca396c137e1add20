// APIC managed-object models
//
// Every APIC response is an `imdata` envelope whose items are single-key
// maps: `{ "<className>": { "attributes": { ... } } }`. Attribute values are
// always strings on the wire; missing keys decode as empty strings.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::Error;

/// A typed APIC managed-object class.
pub trait ManagedObject: DeserializeOwned {
    /// The APIC class name keying this object inside an `imdata` item.
    const CLASS: &'static str;
}

/// The `{ totalCount, imdata }` envelope. Items stay untyped until the
/// caller picks the class it wants.
#[derive(Debug, Deserialize)]
pub struct ImData {
    #[serde(default)]
    pub imdata: Vec<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct Wrapped<T> {
    attributes: T,
}

impl ImData {
    /// Parse an envelope from a raw response body.
    pub fn parse(body: &str) -> Result<Self, Error> {
        serde_json::from_str(body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.to_owned(),
            }
        })
    }

    /// Extract the attributes of every item of class `T::CLASS`, in order.
    ///
    /// Items of any other class are skipped.
    pub fn objects<T: ManagedObject>(&self) -> Result<Vec<T>, Error> {
        let mut out = Vec::with_capacity(self.imdata.len());
        for item in &self.imdata {
            let Some(obj) = item.get(T::CLASS) else {
                trace!(class = T::CLASS, "skipping imdata item of another class");
                continue;
            };
            let wrapped: Wrapped<T> =
                serde_json::from_value(obj.clone()).map_err(|e| Error::Deserialization {
                    message: format!("malformed {} object: {e}", T::CLASS),
                    body: obj.to_string(),
                })?;
            out.push(wrapped.attributes);
        }
        Ok(out)
    }

    /// The `text` of the first APIC `error` object, if the envelope has one.
    pub fn error_text(&self) -> Option<String> {
        self.objects::<ApicErrorObject>()
            .ok()?
            .into_iter()
            .next()
            .map(|e| e.text)
    }
}

// ── Session ─────────────────────────────────────────────────────────

/// `aaaLogin`: the session object returned by `/api/aaaLogin.json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AaaLogin {
    pub token: String,
    pub refresh_timeout_seconds: String,
    pub user_name: String,
}

impl ManagedObject for AaaLogin {
    const CLASS: &'static str = "aaaLogin";
}

/// `error`: the object APIC puts in `imdata` for a failed request.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ApicErrorObject {
    pub code: String,
    pub text: String,
}

impl ManagedObject for ApicErrorObject {
    const CLASS: &'static str = "error";
}

// ── Inventory classes ───────────────────────────────────────────────

/// `fabricNode`: a node registered in the fabric.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FabricNode {
    pub id: String,
    pub role: String,
    pub name: String,
    pub model: String,
    pub serial: String,
    pub fabric_st: String,
    pub dn: String,
}

impl ManagedObject for FabricNode {
    const CLASS: &'static str = "fabricNode";
}

/// `l1PhysIf`: a layer-1 physical interface on a switch.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct L1PhysIf {
    pub id: String,
    pub admin_st: String,
    pub descr: String,
    pub speed: String,
    pub dn: String,
}

impl ManagedObject for L1PhysIf {
    const CLASS: &'static str = "l1PhysIf";
}

/// `ethpmFcot`: the transceiver state of one physical interface.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EthpmFcot {
    pub type_name: String,
    pub state: String,
    pub gui_name: String,
    #[serde(rename = "guiPN")]
    pub gui_pn: String,
    #[serde(rename = "guiSN")]
    pub gui_sn: String,
    pub dn: String,
}

impl ManagedObject for EthpmFcot {
    const CLASS: &'static str = "ethpmFcot";
}

/// `lldpAdjEp`: an LLDP adjacency learned on one interface.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LldpAdjEp {
    pub sys_name: String,
    pub port_id_v: String,
    pub chassis_id_v: String,
    pub mgmt_ip: String,
    pub sys_desc: String,
    pub dn: String,
}

impl ManagedObject for LldpAdjEp {
    const CLASS: &'static str = "lldpAdjEp";
}
