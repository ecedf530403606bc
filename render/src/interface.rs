// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: interfaces

use crate::builder::{ConfigBuilder, Render};
use config::cfg::ifmgr::{InterfaceConfiguration, InterfaceConfigurations};

impl Render for InterfaceConfiguration {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("interface {}", self.interface_name));
        if let Some(vrf) = &self.vrf {
            cfg += format!("vrf {vrf}");
        }
        if let Some(description) = &self.description {
            cfg += format!("description {description}");
        }
        if let Some(primary) = self.primary() {
            cfg += format!("ipv4 address {} {}", primary.address, primary.netmask);
        }
        for secondary in self.secondaries() {
            cfg += format!(
                "ipv4 address {} {} secondary",
                secondary.address, secondary.netmask
            );
        }
        for address in self.ipv6_addresses() {
            cfg += format!("ipv6 address {}/{}", address.address, address.prefix_length);
        }
        if self.shutdown.is_some() {
            cfg += "shutdown";
        }
        cfg.close();
        cfg
    }
}

impl Render for InterfaceConfigurations {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        self.items.iter().for_each(|ifc| cfg += ifc.render(&()));
        cfg
    }
}
