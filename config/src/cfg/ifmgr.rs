// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Cisco-IOS-XR-ifmgr-cfg: interface configurations

use crate::yang::{Empty, YangEntity};
use serde::{Deserialize, Serialize};

yang_list!(
    /// Root of the interface manager configuration
    InterfaceConfigurations,
    "interface-configuration",
    InterfaceConfiguration
);

impl YangEntity for InterfaceConfigurations {
    const NAME: &'static str = "interface-configurations";
    const NAMESPACE: &'static str = "http://cisco.com/ns/yang/Cisco-IOS-XR-ifmgr-cfg";
}

yang_enum!(
    /// Whether the configuration applies to the active or the pre-configured interface
    InterfaceActive {
        Act => "act",
        Pre => "pre",
    }
);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InterfaceConfiguration {
    pub active: InterfaceActive,
    pub interface_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shutdown: Option<Empty>,
    #[serde(
        rename = "vrf",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vrf: Option<String>,
    #[serde(rename = "ipv4-network", default, skip_serializing_if = "Option::is_none")]
    pub ipv4_network: Option<Ipv4Network>,
    #[serde(rename = "ipv6-network", default, skip_serializing_if = "Option::is_none")]
    pub ipv6_network: Option<Ipv6Network>,
}

impl Default for InterfaceConfiguration {
    fn default() -> Self {
        Self {
            active: InterfaceActive::Act,
            interface_name: String::new(),
            description: None,
            shutdown: None,
            vrf: None,
            ipv4_network: None,
            ipv6_network: None,
        }
    }
}

impl InterfaceConfiguration {
    #[must_use]
    pub fn new(interface_name: &str) -> Self {
        Self {
            interface_name: interface_name.to_owned(),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn set_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
    #[must_use]
    pub fn set_shutdown(mut self) -> Self {
        self.shutdown = Some(Empty);
        self
    }
    #[must_use]
    pub fn set_vrf(mut self, vrf: &str) -> Self {
        self.vrf = Some(vrf.to_owned());
        self
    }
    #[must_use]
    pub fn set_primary(mut self, address: &str, netmask: &str) -> Self {
        let addresses = self.ipv4_addresses_mut();
        addresses.primary = Some(Ipv4Address::new(address, netmask));
        self
    }
    #[must_use]
    pub fn add_secondary(mut self, address: &str, netmask: &str) -> Self {
        let addresses = self.ipv4_addresses_mut();
        addresses
            .secondaries
            .get_or_insert_with(Default::default)
            .items
            .push(Ipv4Address::new(address, netmask));
        self
    }
    #[must_use]
    pub fn add_ipv6(mut self, address: &str, prefix_length: u8) -> Self {
        self.ipv6_network
            .get_or_insert_with(Default::default)
            .addresses
            .get_or_insert_with(Default::default)
            .regular_addresses
            .get_or_insert_with(Default::default)
            .items
            .push(RegularAddress::new(address, prefix_length));
        self
    }
    fn ipv4_addresses_mut(&mut self) -> &mut Ipv4Addresses {
        self.ipv4_network
            .get_or_insert_with(Default::default)
            .addresses
            .get_or_insert_with(Default::default)
    }

    /// Primary IPv4 address, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&Ipv4Address> {
        self.ipv4_addresses()?.primary.as_ref()
    }
    /// Secondary IPv4 addresses, in configuration order.
    #[must_use]
    pub fn secondaries(&self) -> &[Ipv4Address] {
        crate::entries(self.ipv4_addresses().and_then(|a| a.secondaries.as_ref()))
    }
    /// IPv6 regular addresses, in configuration order.
    #[must_use]
    pub fn ipv6_addresses(&self) -> &[RegularAddress] {
        crate::entries(
            self.ipv6_network
                .as_ref()
                .and_then(|n| n.addresses.as_ref())
                .and_then(|a| a.regular_addresses.as_ref()),
        )
    }
    fn ipv4_addresses(&self) -> Option<&Ipv4Addresses> {
        self.ipv4_network.as_ref()?.addresses.as_ref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ipv4Network {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Ipv4Addresses>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ipv4Addresses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<Ipv4Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondaries: Option<Secondaries>,
}

yang_list!(Secondaries, "secondary", Ipv4Address);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ipv4Address {
    pub address: String,
    pub netmask: String,
}

impl Ipv4Address {
    #[must_use]
    pub fn new(address: &str, netmask: &str) -> Self {
        Self {
            address: address.to_owned(),
            netmask: netmask.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ipv6Network {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Ipv6Addresses>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ipv6Addresses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_addresses: Option<RegularAddresses>,
}

yang_list!(RegularAddresses, "regular-address", RegularAddress);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegularAddress {
    pub address: String,
    pub prefix_length: u8,
    #[serde(default = "default_zone")]
    pub zone: String,
}

fn default_zone() -> String {
    "0".to_owned()
}

impl RegularAddress {
    #[must_use]
    pub fn new(address: &str, prefix_length: u8) -> Self {
        Self {
            address: address.to_owned(),
            prefix_length,
            zone: default_zone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_builder() {
        let ifc = InterfaceConfiguration::new("GigabitEthernet0/0/0/1")
            .set_primary("10.0.0.1", "255.255.255.0")
            .add_secondary("10.0.1.1", "255.255.255.0")
            .add_secondary("10.0.2.1", "255.255.255.0")
            .add_ipv6("2001:db8::1", 64);
        assert_eq!(ifc.active, InterfaceActive::Act);
        assert_eq!(ifc.primary().map(|p| p.address.as_str()), Some("10.0.0.1"));
        let secondaries: Vec<_> = ifc.secondaries().iter().map(|s| &s.address).collect();
        assert_eq!(secondaries, ["10.0.1.1", "10.0.2.1"]);
        assert_eq!(ifc.ipv6_addresses()[0].prefix_length, 64);
        assert!(ifc.shutdown.is_none());
    }

    #[test]
    fn test_interface_without_addresses() {
        let ifc = InterfaceConfiguration::new("Loopback0");
        assert!(ifc.primary().is_none());
        assert!(ifc.secondaries().is_empty());
        assert!(ifc.ipv6_addresses().is_empty());
    }
}
