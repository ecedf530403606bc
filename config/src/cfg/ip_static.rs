// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Cisco-IOS-XR-ip-static-cfg: static routes of the default VRF

use crate::yang::{YangEntity, entries};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RouterStatic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_vrf: Option<DefaultVrf>,
}

impl YangEntity for RouterStatic {
    const NAME: &'static str = "router-static";
    const NAMESPACE: &'static str = "http://cisco.com/ns/yang/Cisco-IOS-XR-ip-static-cfg";
}

/// Address families of static routes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaticAf {
    Ipv4,
    Ipv6,
}

impl RouterStatic {
    #[must_use]
    pub fn add_prefix(mut self, af: StaticAf, prefix: VrfPrefix) -> Self {
        let family = self
            .default_vrf
            .get_or_insert_with(Default::default)
            .address_family
            .get_or_insert_with(Default::default);
        let unicast = match af {
            StaticAf::Ipv4 => &mut family.vrfipv4,
            StaticAf::Ipv6 => &mut family.vrfipv6,
        };
        unicast
            .get_or_insert_with(Default::default)
            .vrf_unicast
            .get_or_insert_with(Default::default)
            .vrf_prefixes
            .get_or_insert_with(Default::default)
            .items
            .push(prefix);
        self
    }
    /// Unicast prefixes of one address family, in configuration order.
    #[must_use]
    pub fn prefixes(&self, af: StaticAf) -> &[VrfPrefix] {
        let family = self
            .default_vrf
            .as_ref()
            .and_then(|vrf| vrf.address_family.as_ref());
        let unicast = family.and_then(|f| match af {
            StaticAf::Ipv4 => f.vrfipv4.as_ref(),
            StaticAf::Ipv6 => f.vrfipv6.as_ref(),
        });
        entries(
            unicast
                .and_then(|u| u.vrf_unicast.as_ref())
                .and_then(|u| u.vrf_prefixes.as_ref()),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DefaultVrf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_family: Option<AddressFamily>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AddressFamily {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrfipv4: Option<VrfAfUnicast>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrfipv6: Option<VrfAfUnicast>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VrfAfUnicast {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_unicast: Option<VrfUnicast>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VrfUnicast {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_prefixes: Option<VrfPrefixes>,
}

yang_list!(VrfPrefixes, "vrf-prefix", VrfPrefix);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VrfPrefix {
    pub prefix: String,
    pub prefix_length: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_route: Option<VrfRoute>,
}

impl VrfPrefix {
    #[must_use]
    pub fn new(prefix: &str, prefix_length: u8) -> Self {
        Self {
            prefix: prefix.to_owned(),
            prefix_length,
            vrf_route: None,
        }
    }
    #[must_use]
    pub fn add_next_hop(mut self, next_hop: NextHop) -> Self {
        self.vrf_route
            .get_or_insert_with(Default::default)
            .vrf_next_hop_table
            .get_or_insert_with(Default::default)
            .push(next_hop);
        self
    }
    fn table(&self) -> Option<&VrfNextHopTable> {
        self.vrf_route.as_ref()?.vrf_next_hop_table.as_ref()
    }
    #[must_use]
    pub fn interface_next_hops(&self) -> &[NextHop] {
        entries(self.table().and_then(|t| t.vrf_next_hop_interface_name.as_ref()))
    }
    #[must_use]
    pub fn address_next_hops(&self) -> &[NextHop] {
        entries(self.table().and_then(|t| t.vrf_next_hop_next_hop_address.as_ref()))
    }
    #[must_use]
    pub fn interface_address_next_hops(&self) -> &[NextHop] {
        entries(
            self.table()
                .and_then(|t| t.vrf_next_hop_interface_name_next_hop_address.as_ref()),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VrfRoute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_next_hop_table: Option<VrfNextHopTable>,
}

/// Next hops grouped by how they are reached.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VrfNextHopTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_next_hop_interface_name: Option<InterfaceNextHops>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_next_hop_next_hop_address: Option<AddressNextHops>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_next_hop_interface_name_next_hop_address: Option<InterfaceAddressNextHops>,
}

impl VrfNextHopTable {
    fn push(&mut self, next_hop: NextHop) {
        let list = match (&next_hop.interface_name, &next_hop.next_hop_address) {
            (Some(_), Some(_)) => &mut self
                .vrf_next_hop_interface_name_next_hop_address
                .get_or_insert_with(Default::default)
                .items,
            (None, Some(_)) => &mut self
                .vrf_next_hop_next_hop_address
                .get_or_insert_with(Default::default)
                .items,
            _ => &mut self
                .vrf_next_hop_interface_name
                .get_or_insert_with(Default::default)
                .items,
        };
        list.push(next_hop);
    }
}

yang_list!(InterfaceNextHops, "vrf-next-hop-interface-name", NextHop);
yang_list!(AddressNextHops, "vrf-next-hop-next-hop-address", NextHop);
yang_list!(
    InterfaceAddressNextHops,
    "vrf-next-hop-interface-name-next-hop-address",
    NextHop
);

/// A next hop entry. Which keys are set depends on the list it lives in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NextHop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hop_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NextHop {
    #[must_use]
    pub fn interface(interface_name: &str) -> Self {
        Self {
            interface_name: Some(interface_name.to_owned()),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn address(next_hop_address: &str) -> Self {
        Self {
            next_hop_address: Some(next_hop_address.to_owned()),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn set_address(mut self, next_hop_address: &str) -> Self {
        self.next_hop_address = Some(next_hop_address.to_owned());
        self
    }
    #[must_use]
    pub fn set_distance(mut self, metric: u32) -> Self {
        self.metric = Some(metric);
        self
    }
    #[must_use]
    pub fn set_tag(mut self, tag: u32) -> Self {
        self.tag = Some(tag);
        self
    }
    #[must_use]
    pub fn set_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_hops_are_filed_by_kind() {
        let prefix = VrfPrefix::new("10.10.0.0", 16)
            .add_next_hop(NextHop::interface("GigabitEthernet0/0/0/0"))
            .add_next_hop(NextHop::address("172.16.0.1"))
            .add_next_hop(NextHop::interface("GigabitEthernet0/0/0/1").set_address("172.16.1.1"));
        assert_eq!(prefix.interface_next_hops().len(), 1);
        assert_eq!(prefix.address_next_hops().len(), 1);
        assert_eq!(prefix.interface_address_next_hops().len(), 1);
    }

    #[test]
    fn test_prefixes_per_family() {
        let statics = RouterStatic::default()
            .add_prefix(StaticAf::Ipv6, VrfPrefix::new("2001:db8::", 32))
            .add_prefix(StaticAf::Ipv6, VrfPrefix::new("2001:db9::", 32));
        assert!(statics.prefixes(StaticAf::Ipv4).is_empty());
        let v6: Vec<_> = statics.prefixes(StaticAf::Ipv6).iter().map(|p| &p.prefix).collect();
        assert_eq!(v6, ["2001:db8::", "2001:db9::"]);
    }
}
