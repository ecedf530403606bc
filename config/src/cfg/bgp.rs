// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Cisco-IOS-XR-ipv4-bgp-cfg: BGP instances, neighbors and VRFs

use crate::datatypes::{AsPair, BgpAddressFamily};
use crate::yang::{Empty, YangEntity, YangModule, entries};
use serde::{Deserialize, Serialize};

/// Root of the BGP configuration. Instances are a bare list under it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Bgp {
    #[serde(rename = "instance", default, skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<Instance>,
}

/// The BGP configuration module, which also augments the VRF address families
#[derive(Clone, Copy, Debug)]
pub struct BgpCfg;

impl YangModule for BgpCfg {
    const URI: &'static str = "http://cisco.com/ns/yang/Cisco-IOS-XR-ipv4-bgp-cfg";
}

impl YangEntity for Bgp {
    const NAME: &'static str = "bgp";
    const NAMESPACE: &'static str = BgpCfg::URI;
}

impl Bgp {
    /// Builds the usual `default` instance holding a single AS.
    #[must_use]
    pub fn with_as(asn: AsPair, four_byte_as: FourByteAs) -> Self {
        let four_byte_as = FourByteAs {
            as_: asn.as_yy,
            ..four_byte_as
        };
        Self {
            instances: vec![Instance {
                instance_name: "default".to_owned(),
                instance_as: vec![InstanceAs {
                    as_: asn.as_xx,
                    four_byte_as: vec![four_byte_as],
                }],
            }],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Instance {
    pub instance_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instance_as: Vec<InstanceAs>,
}

/// High 16 bits of the AS number
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InstanceAs {
    #[serde(rename = "as")]
    pub as_: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub four_byte_as: Vec<FourByteAs>,
}

/// Low 16 bits of the AS number and everything configured under it
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FourByteAs {
    #[serde(rename = "as")]
    pub as_: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp_running: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_vrf: Option<DefaultVrf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrfs: Option<Vrfs>,
}

impl FourByteAs {
    #[must_use]
    pub fn new(router_id: &str) -> Self {
        Self {
            bgp_running: Some(Empty),
            default_vrf: Some(DefaultVrf {
                global: Some(Global {
                    router_id: Some(router_id.to_owned()),
                    global_afs: None,
                }),
                bgp_entity: None,
            }),
            ..Default::default()
        }
    }
    fn default_vrf_mut(&mut self) -> &mut DefaultVrf {
        self.default_vrf.get_or_insert_with(Default::default)
    }
    fn entity_mut(&mut self) -> &mut BgpEntity {
        self.default_vrf_mut()
            .bgp_entity
            .get_or_insert_with(Default::default)
    }
    #[must_use]
    pub fn add_global_af(mut self, af: GlobalAf) -> Self {
        self.default_vrf_mut()
            .global
            .get_or_insert_with(Default::default)
            .global_afs
            .get_or_insert_with(Default::default)
            .items
            .push(af);
        self
    }
    #[must_use]
    pub fn add_neighbor_group(mut self, group: NeighborGroup) -> Self {
        self.entity_mut()
            .neighbor_groups
            .get_or_insert_with(Default::default)
            .items
            .push(group);
        self
    }
    #[must_use]
    pub fn add_neighbor(mut self, neighbor: Neighbor) -> Self {
        self.entity_mut()
            .neighbors
            .get_or_insert_with(Default::default)
            .items
            .push(neighbor);
        self
    }
    #[must_use]
    pub fn add_vrf(mut self, vrf: Vrf) -> Self {
        self.vrfs
            .get_or_insert_with(Default::default)
            .items
            .push(vrf);
        self
    }

    #[must_use]
    pub fn router_id(&self) -> Option<&str> {
        self.default_vrf.as_ref()?.global.as_ref()?.router_id.as_deref()
    }
    #[must_use]
    pub fn global_afs(&self) -> &[GlobalAf] {
        entries(
            self.default_vrf
                .as_ref()
                .and_then(|vrf| vrf.global.as_ref())
                .and_then(|global| global.global_afs.as_ref()),
        )
    }
    fn entity(&self) -> Option<&BgpEntity> {
        self.default_vrf.as_ref()?.bgp_entity.as_ref()
    }
    #[must_use]
    pub fn neighbor_groups(&self) -> &[NeighborGroup] {
        entries(self.entity().and_then(|e| e.neighbor_groups.as_ref()))
    }
    #[must_use]
    pub fn neighbors(&self) -> &[Neighbor] {
        entries(self.entity().and_then(|e| e.neighbors.as_ref()))
    }
    #[must_use]
    pub fn vrfs(&self) -> &[Vrf] {
        entries(self.vrfs.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DefaultVrf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<Global>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp_entity: Option<BgpEntity>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Global {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_afs: Option<GlobalAfs>,
}

yang_list!(GlobalAfs, "global-af", GlobalAf);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GlobalAf {
    pub af_name: BgpAddressFamily,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_routes: Option<Redistribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_routes: Option<Redistribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_all: Option<VrfAll>,
}

impl GlobalAf {
    /// An enabled address family
    #[must_use]
    pub fn new(af_name: BgpAddressFamily) -> Self {
        Self {
            af_name,
            enable: Some(Empty),
            connected_routes: None,
            static_routes: None,
            vrf_all: None,
        }
    }
    #[must_use]
    pub fn set_connected(mut self, route_policy: Option<&str>) -> Self {
        self.connected_routes = Some(Redistribution::new(route_policy));
        self
    }
    #[must_use]
    pub fn set_static(mut self, route_policy: Option<&str>) -> Self {
        self.static_routes = Some(Redistribution::new(route_policy));
        self
    }
    #[must_use]
    pub fn set_vrf_all_label_mode(mut self, mode: &str) -> Self {
        self.vrf_all = Some(VrfAll {
            enable: Some(Empty),
            label_mode: Some(LabelMode {
                label_allocation_mode: Some(mode.to_owned()),
            }),
        });
        self
    }
    #[must_use]
    pub fn label_mode(&self) -> Option<&str> {
        self.vrf_all
            .as_ref()?
            .label_mode
            .as_ref()?
            .label_allocation_mode
            .as_deref()
    }
}

/// Presence container for connected or static redistribution
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Redistribution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_metric: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_policy_name: Option<String>,
}

impl Redistribution {
    #[must_use]
    pub fn new(route_policy: Option<&str>) -> Self {
        Self {
            default_metric: None,
            route_policy_name: route_policy.map(str::to_owned),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VrfAll {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_mode: Option<LabelMode>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LabelMode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_allocation_mode: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BgpEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbor_groups: Option<NeighborGroups>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbors: Option<Neighbors>,
}

yang_list!(NeighborGroups, "neighbor-group", NeighborGroup);
yang_list!(Neighbors, "neighbor", Neighbor);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NeighborGroup {
    pub neighbor_group_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_as: Option<AsPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_source_interface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbor_group_afs: Option<NeighborGroupAfs>,
}

yang_list!(NeighborGroupAfs, "neighbor-group-af", NeighborAf);

impl NeighborGroup {
    #[must_use]
    pub fn new(neighbor_group_name: &str) -> Self {
        Self {
            neighbor_group_name: neighbor_group_name.to_owned(),
            create: Some(Empty),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn set_remote_as(mut self, remote_as: AsPair) -> Self {
        self.remote_as = Some(remote_as);
        self
    }
    #[must_use]
    pub fn set_update_source(mut self, interface: &str) -> Self {
        self.update_source_interface = Some(interface.to_owned());
        self
    }
    #[must_use]
    pub fn add_af(mut self, af: NeighborAf) -> Self {
        self.neighbor_group_afs
            .get_or_insert_with(Default::default)
            .items
            .push(af);
        self
    }
    #[must_use]
    pub fn afs(&self) -> &[NeighborAf] {
        entries(self.neighbor_group_afs.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Neighbor {
    pub neighbor_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_as: Option<AsPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_source_interface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbor_group_add_member: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbor_afs: Option<NeighborAfs>,
}

yang_list!(NeighborAfs, "neighbor-af", NeighborAf);

impl Neighbor {
    #[must_use]
    pub fn new(neighbor_address: &str) -> Self {
        Self {
            neighbor_address: neighbor_address.to_owned(),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn set_remote_as(mut self, remote_as: AsPair) -> Self {
        self.remote_as = Some(remote_as);
        self
    }
    #[must_use]
    pub fn set_update_source(mut self, interface: &str) -> Self {
        self.update_source_interface = Some(interface.to_owned());
        self
    }
    #[must_use]
    pub fn set_neighbor_group(mut self, group: &str) -> Self {
        self.neighbor_group_add_member = Some(group.to_owned());
        self
    }
    #[must_use]
    pub fn add_af(mut self, af: NeighborAf) -> Self {
        self.neighbor_afs
            .get_or_insert_with(Default::default)
            .items
            .push(af);
        self
    }
    #[must_use]
    pub fn afs(&self) -> &[NeighborAf] {
        entries(self.neighbor_afs.as_ref())
    }
}

/// Per address family settings of a neighbor, a neighbor group or a vrf neighbor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NeighborAf {
    pub af_name: BgpAddressFamily,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activate: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_reflector_client: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_policy_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_policy_out: Option<String>,
}

impl NeighborAf {
    /// An activated address family
    #[must_use]
    pub fn new(af_name: BgpAddressFamily) -> Self {
        Self {
            af_name,
            activate: Some(Empty),
            route_reflector_client: None,
            route_policy_in: None,
            route_policy_out: None,
        }
    }
    #[must_use]
    pub fn set_route_reflector_client(mut self) -> Self {
        self.route_reflector_client = Some(true);
        self
    }
    /// Same policy applied inbound and outbound
    #[must_use]
    pub fn set_policies(mut self, policy: &str) -> Self {
        self.route_policy_in = Some(policy.to_owned());
        self.route_policy_out = Some(policy.to_owned());
        self
    }
    #[must_use]
    pub fn is_route_reflector_client(&self) -> bool {
        self.route_reflector_client.unwrap_or(false)
    }
}

yang_list!(Vrfs, "vrf", Vrf);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Vrf {
    pub vrf_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_global: Option<VrfGlobal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_neighbors: Option<VrfNeighbors>,
}

impl Vrf {
    #[must_use]
    pub fn new(vrf_name: &str, rd: RouteDistinguisher) -> Self {
        Self {
            vrf_name: vrf_name.to_owned(),
            vrf_global: Some(VrfGlobal {
                exists: Some(Empty),
                route_distinguisher: Some(rd),
                vrf_global_afs: None,
            }),
            vrf_neighbors: None,
        }
    }
    #[must_use]
    pub fn add_af(mut self, af: VrfGlobalAf) -> Self {
        self.vrf_global
            .get_or_insert_with(Default::default)
            .vrf_global_afs
            .get_or_insert_with(Default::default)
            .items
            .push(af);
        self
    }
    #[must_use]
    pub fn add_neighbor(mut self, neighbor: VrfNeighbor) -> Self {
        self.vrf_neighbors
            .get_or_insert_with(Default::default)
            .items
            .push(neighbor);
        self
    }
    #[must_use]
    pub fn route_distinguisher(&self) -> Option<&RouteDistinguisher> {
        self.vrf_global.as_ref()?.route_distinguisher.as_ref()
    }
    #[must_use]
    pub fn afs(&self) -> &[VrfGlobalAf] {
        entries(
            self.vrf_global
                .as_ref()
                .and_then(|global| global.vrf_global_afs.as_ref()),
        )
    }
    #[must_use]
    pub fn neighbors(&self) -> &[VrfNeighbor] {
        entries(self.vrf_neighbors.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VrfGlobal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exists: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_distinguisher: Option<RouteDistinguisher>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_global_afs: Option<VrfGlobalAfs>,
}

yang_enum!(
    RouteDistinguisherType {
        Auto => "auto",
        As => "as",
        FourByteAs => "four-byte-as",
        Ipv4Address => "ipv4-address",
    }
);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RouteDistinguisher {
    #[serde(rename = "type")]
    pub type_: RouteDistinguisherType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_xx: Option<u32>,
    #[serde(rename = "as", default, skip_serializing_if = "Option::is_none")]
    pub as_: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_index: Option<u32>,
}

impl RouteDistinguisher {
    #[must_use]
    pub fn four_byte_as(asn: AsPair, as_index: u32) -> Self {
        Self {
            type_: RouteDistinguisherType::FourByteAs,
            as_xx: Some(asn.as_xx),
            as_: Some(asn.as_yy),
            as_index: Some(as_index),
            address: None,
            address_index: None,
        }
    }
}

/// CLI form: `auto`, `AS:INDEX` or `ADDRESS:INDEX`
impl std::fmt::Display for RouteDistinguisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.type_ {
            RouteDistinguisherType::Auto => f.write_str("auto"),
            RouteDistinguisherType::Ipv4Address => write!(
                f,
                "{}:{}",
                self.address.as_deref().unwrap_or_default(),
                self.address_index.unwrap_or_default()
            ),
            RouteDistinguisherType::As | RouteDistinguisherType::FourByteAs => {
                crate::datatypes::fmt_as(
                    f,
                    self.as_xx.unwrap_or_default(),
                    self.as_.unwrap_or_default(),
                )?;
                write!(f, ":{}", self.as_index.unwrap_or_default())
            }
        }
    }
}

yang_list!(VrfGlobalAfs, "vrf-global-af", VrfGlobalAf);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VrfGlobalAf {
    pub af_name: BgpAddressFamily,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_routes: Option<Redistribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_routes: Option<Redistribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_policy: Option<String>,
}

impl VrfGlobalAf {
    #[must_use]
    pub fn new(af_name: BgpAddressFamily) -> Self {
        Self {
            af_name,
            enable: Some(Empty),
            connected_routes: None,
            static_routes: None,
            table_policy: None,
        }
    }
    #[must_use]
    pub fn set_connected(mut self, route_policy: Option<&str>) -> Self {
        self.connected_routes = Some(Redistribution::new(route_policy));
        self
    }
    #[must_use]
    pub fn set_static(mut self, route_policy: Option<&str>) -> Self {
        self.static_routes = Some(Redistribution::new(route_policy));
        self
    }
    #[must_use]
    pub fn set_table_policy(mut self, policy: &str) -> Self {
        self.table_policy = Some(policy.to_owned());
        self
    }
}

yang_list!(VrfNeighbors, "vrf-neighbor", VrfNeighbor);
yang_list!(VrfNeighborAfs, "vrf-neighbor-af", NeighborAf);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VrfNeighbor {
    pub neighbor_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_as: Option<AsPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbor_group_add_member: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_neighbor_afs: Option<VrfNeighborAfs>,
}

impl VrfNeighbor {
    #[must_use]
    pub fn new(neighbor_address: &str) -> Self {
        Self {
            neighbor_address: neighbor_address.to_owned(),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn set_remote_as(mut self, remote_as: AsPair) -> Self {
        self.remote_as = Some(remote_as);
        self
    }
    #[must_use]
    pub fn set_neighbor_group(mut self, group: &str) -> Self {
        self.neighbor_group_add_member = Some(group.to_owned());
        self
    }
    #[must_use]
    pub fn add_af(mut self, af: NeighborAf) -> Self {
        self.vrf_neighbor_afs
            .get_or_insert_with(Default::default)
            .items
            .push(af);
        self
    }
    #[must_use]
    pub fn afs(&self) -> &[NeighborAf] {
        entries(self.vrf_neighbor_afs.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_as_splits_the_number() {
        let bgp = Bgp::with_as(AsPair::new(1, 10), FourByteAs::new("1.1.1.1"));
        let instance_as = &bgp.instances[0].instance_as[0];
        assert_eq!(instance_as.as_, 1);
        assert_eq!(instance_as.four_byte_as[0].as_, 10);
        assert_eq!(instance_as.four_byte_as[0].router_id(), Some("1.1.1.1"));
    }

    #[test]
    fn test_neighbor_groups_keep_order() {
        let four_byte_as = FourByteAs::new("1.1.1.1")
            .add_neighbor_group(NeighborGroup::new("a").set_remote_as(AsPair::new(0, 100)))
            .add_neighbor_group(NeighborGroup::new("b").set_remote_as(AsPair::new(0, 200)));
        let remotes: Vec<_> = four_byte_as
            .neighbor_groups()
            .iter()
            .filter_map(|g| g.remote_as)
            .collect();
        assert_eq!(remotes, [AsPair::new(0, 100), AsPair::new(0, 200)]);
        assert!(four_byte_as.neighbors().is_empty());
        assert!(four_byte_as.global_afs().is_empty());
    }

    #[test]
    fn test_route_distinguisher_text() {
        let rd = RouteDistinguisher::four_byte_as(AsPair::new(0, 3), 3);
        assert_eq!(rd.to_string(), "3:3");
        let rd = RouteDistinguisher::four_byte_as(AsPair::new(2, 3), 4);
        assert_eq!(rd.to_string(), "2.3:4");
        let rd = RouteDistinguisher {
            type_: RouteDistinguisherType::Ipv4Address,
            as_xx: None,
            as_: None,
            as_index: None,
            address: Some("10.0.0.1".to_owned()),
            address_index: Some(7),
        };
        assert_eq!(rd.to_string(), "10.0.0.1:7");
    }

    #[test]
    fn test_label_mode() {
        let af = GlobalAf::new(BgpAddressFamily::VPNV4_UNICAST).set_vrf_all_label_mode("per-ce");
        assert_eq!(af.label_mode(), Some("per-ce"));
        assert_eq!(GlobalAf::new(BgpAddressFamily::IPV4_UNICAST).label_mode(), None);
    }
}
