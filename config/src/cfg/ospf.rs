// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Cisco-IOS-XR-ipv4-ospf-cfg: OSPF processes and their default-vrf areas

use crate::yang::{Empty, YangEntity, entries};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ospf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processes: Option<Processes>,
}

impl YangEntity for Ospf {
    const NAME: &'static str = "ospf";
    const NAMESPACE: &'static str = "http://cisco.com/ns/yang/Cisco-IOS-XR-ipv4-ospf-cfg";
}

impl Ospf {
    #[must_use]
    pub fn add_process(mut self, process: Process) -> Self {
        self.processes
            .get_or_insert_with(Default::default)
            .items
            .push(process);
        self
    }
    #[must_use]
    pub fn processes(&self) -> &[Process] {
        entries(self.processes.as_ref())
    }
}

yang_list!(Processes, "process", Process);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Process {
    pub process_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribute: Option<Distribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_vrf: Option<DefaultVrf>,
}

impl Process {
    /// A process that is started on creation
    #[must_use]
    pub fn new(process_name: &str) -> Self {
        Self {
            process_name: process_name.to_owned(),
            start: Some(Empty),
            ..Default::default()
        }
    }
    /// Distribute link-state information to BGP
    #[must_use]
    pub fn set_distribute(mut self) -> Self {
        self.distribute = Some(Distribute::default());
        self
    }
    #[must_use]
    pub fn set_router_id(mut self, router_id: &str) -> Self {
        self.default_vrf
            .get_or_insert_with(Default::default)
            .router_id = Some(router_id.to_owned());
        self
    }
    #[must_use]
    pub fn add_area(mut self, area: Area) -> Self {
        self.default_vrf
            .get_or_insert_with(Default::default)
            .area_addresses
            .get_or_insert_with(Default::default)
            .area_area_id
            .push(area);
        self
    }
    #[must_use]
    pub fn router_id(&self) -> Option<&str> {
        self.default_vrf.as_ref()?.router_id.as_deref()
    }
    /// Areas keyed by number first, then areas keyed by dotted address.
    pub fn areas(&self) -> impl Iterator<Item = &Area> {
        let addresses = self
            .default_vrf
            .as_ref()
            .and_then(|vrf| vrf.area_addresses.as_ref());
        let by_id = addresses.map_or(&[][..], |a| a.area_area_id.as_slice());
        let by_address = addresses.map_or(&[][..], |a| a.area_address.as_slice());
        by_id.iter().chain(by_address)
    }
}

/// Presence container; only its options are carried.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Distribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttle: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DefaultVrf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_addresses: Option<AreaAddresses>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AreaAddresses {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub area_address: Vec<Area>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub area_area_id: Vec<Area>,
}

/// An area, keyed either by `area-id` or by dotted `address`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Area {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_scopes: Option<NameScopes>,
}

impl Area {
    #[must_use]
    pub fn new(area_id: u32) -> Self {
        Self {
            area_id: Some(area_id),
            running: Some(Empty),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn add_name_scope(mut self, scope: NameScope) -> Self {
        self.name_scopes
            .get_or_insert_with(Default::default)
            .items
            .push(scope);
        self
    }
    #[must_use]
    pub fn name_scopes(&self) -> &[NameScope] {
        entries(self.name_scopes.as_ref())
    }
    /// Area identifier as shown by the CLI
    #[must_use]
    pub fn id(&self) -> String {
        match (&self.area_id, &self.address) {
            (Some(id), _) => id.to_string(),
            (None, Some(address)) => address.clone(),
            (None, None) => String::new(),
        }
    }
}

yang_list!(NameScopes, "name-scope", NameScope);

yang_enum!(
    OspfNetworkType {
        Broadcast => "broadcast",
        NonBroadcast => "non-broadcast",
        PointToPoint => "point-to-point",
        PointToMultipoint => "point-to-multipoint",
        NonBroadcastPointToMultipoint => "non-broadcast-point-to-multipoint",
    }
);

/// Interface attached to an area
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NameScope {
    pub interface_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_type: Option<OspfNetworkType>,
}

impl NameScope {
    #[must_use]
    pub fn new(interface_name: &str) -> Self {
        Self {
            interface_name: interface_name.to_owned(),
            running: Some(Empty),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn set_cost(mut self, cost: u32) -> Self {
        self.cost = Some(cost);
        self
    }
    #[must_use]
    pub fn set_passive(mut self, passive: bool) -> Self {
        self.passive = Some(passive);
        self
    }
    #[must_use]
    pub fn set_network_type(mut self, network_type: OspfNetworkType) -> Self {
        self.network_type = Some(network_type);
        self
    }
}
