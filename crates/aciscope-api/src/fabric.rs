// Fabric inventory endpoints
//
// Class queries for fabric nodes and physical interfaces, and
// child-object queries for per-interface transceiver and LLDP state.

use tracing::debug;

use crate::client::ApicClient;
use crate::error::Error;
use crate::models::{EthpmFcot, FabricNode, L1PhysIf, LldpAdjEp};

/// Build a `query-target-filter` matching `fabricNode` objects of any of
/// the given roles: `eq(...)` for one role, `or(eq(...),eq(...))` for more.
pub fn role_filter(roles: &[&str]) -> String {
    let terms: Vec<String> = roles
        .iter()
        .map(|role| format!("eq(fabricNode.role,\"{role}\")"))
        .collect();
    match terms.as_slice() {
        [single] => single.clone(),
        _ => format!("or({})", terms.join(",")),
    }
}

impl ApicClient {
    /// List fabric nodes holding any of the given roles.
    ///
    /// `GET /api/node/class/fabricNode.json?query-target-filter=or(eq(fabricNode.role,"leaf"),...)`
    pub async fn list_fabric_nodes(&self, roles: &[&str]) -> Result<Vec<FabricNode>, Error> {
        let mut url = self.api_url("node/class/fabricNode.json")?;
        url.query_pairs_mut()
            .append_pair("query-target-filter", &role_filter(roles));
        debug!(?roles, "listing fabric nodes");
        self.get(url).await
    }

    /// List the physical interfaces of one node.
    ///
    /// `GET /api/node/class/topology/pod-{pod}/node-{node}/l1PhysIf.json?rsp-subtree=children&rsp-subtree-class=ethpmPhysIf`
    pub async fn list_physical_interfaces(&self, node: &str) -> Result<Vec<L1PhysIf>, Error> {
        let mut url = self.node_url("class", node, "l1PhysIf.json")?;
        url.query_pairs_mut()
            .append_pair("rsp-subtree", "children")
            .append_pair("rsp-subtree-class", "ethpmPhysIf");
        debug!(node, "listing physical interfaces");
        self.get(url).await
    }

    /// Transceiver state under one interface's `phys` object.
    ///
    /// `GET /api/node/mo/topology/pod-{pod}/node-{node}/sys/phys-[{intf}]/phys.json?query-target=children&target-subtree-class=ethpmFcot&subscription=yes`
    pub async fn list_transceivers(&self, node: &str, intf: &str) -> Result<Vec<EthpmFcot>, Error> {
        let mut url = self.node_url("mo", node, &format!("sys/phys-[{intf}]/phys.json"))?;
        url.query_pairs_mut()
            .append_pair("query-target", "children")
            .append_pair("target-subtree-class", "ethpmFcot")
            .append_pair("subscription", "yes");
        debug!(node, intf, "fetching transceiver state");
        self.get(url).await
    }

    /// LLDP adjacencies under one interface's LLDP instance.
    ///
    /// `GET /api/node/mo/topology/pod-{pod}/node-{node}/sys/lldp/inst/if-[{intf}].json?query-target=children&target-subtree-class=lldpAdjEp`
    pub async fn list_lldp_adjacencies(
        &self,
        node: &str,
        intf: &str,
    ) -> Result<Vec<LldpAdjEp>, Error> {
        let mut url = self.node_url("mo", node, &format!("sys/lldp/inst/if-[{intf}].json"))?;
        url.query_pairs_mut()
            .append_pair("query-target", "children")
            .append_pair("target-subtree-class", "lldpAdjEp");
        debug!(node, intf, "fetching LLDP adjacencies");
        self.get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_spine_filter_matches_inventory_query() {
        assert_eq!(
            role_filter(&["leaf", "spine"]),
            r#"or(eq(fabricNode.role,"leaf"),eq(fabricNode.role,"spine"))"#
        );
    }

    #[test]
    fn single_role_skips_or() {
        assert_eq!(role_filter(&["leaf"]), r#"eq(fabricNode.role,"leaf")"#);
    }
}
