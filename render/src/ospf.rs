// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: OSPF

use crate::builder::{ConfigBuilder, Render};
use config::cfg::ospf::{Area, NameScope, Ospf, Process};

impl Render for NameScope {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("interface {}", self.interface_name));
        if let Some(cost) = self.cost {
            cfg += format!("cost {cost}");
        }
        if self.passive == Some(true) {
            cfg += "passive enable";
        }
        if let Some(network) = self.network_type {
            cfg += format!("network {network}");
        }
        cfg.close();
        cfg
    }
}

impl Render for Area {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("area {}", self.id()));
        self.name_scopes()
            .iter()
            .for_each(|scope| cfg += scope.render(&()));
        cfg.close();
        cfg
    }
}

impl Render for Process {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("router ospf {}", self.process_name));
        if let Some(router_id) = self.router_id() {
            cfg += format!("router-id {router_id}");
        }
        if self.distribute.is_some() {
            cfg += "distribute link-state";
        }
        self.areas().for_each(|area| cfg += area.render(&()));
        cfg.close();
        cfg
    }
}

impl Render for Ospf {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        self.processes()
            .iter()
            .for_each(|process| cfg += process.render(&()));
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Rendered;
    use config::cfg::ospf::OspfNetworkType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ospf_process() {
        let ospf = Ospf::default().add_process(
            Process::new("DEFAULT")
                .set_router_id("172.16.255.1")
                .set_distribute()
                .add_area(
                    Area::new(0)
                        .add_name_scope(NameScope::new("Loopback0").set_passive(true))
                        .add_name_scope(
                            NameScope::new("GigabitEthernet0/0/0/0")
                                .set_cost(10)
                                .set_network_type(OspfNetworkType::PointToPoint),
                        ),
                ),
        );
        let expected = [
            "router ospf DEFAULT",
            " router-id 172.16.255.1",
            " distribute link-state",
            " area 0",
            "  interface Loopback0",
            "   passive enable",
            "  !",
            "  interface GigabitEthernet0/0/0/0",
            "   cost 10",
            "   network point-to-point",
            "  !",
            " !",
            "!",
        ];
        assert_eq!(ospf.rendered(), expected.join("\n"));
    }

    #[test]
    fn test_no_processes() {
        assert_eq!(Ospf::default().rendered(), "");
    }

    #[test]
    fn test_process_without_areas() {
        let ospf = Ospf::default().add_process(Process::new("EDGE"));
        assert_eq!(ospf.rendered(), "router ospf EDGE\n!");
    }
}
