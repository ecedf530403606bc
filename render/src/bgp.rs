// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: BGP

use crate::builder::{ConfigBuilder, Render};
use crate::labels::af_label;
use config::cfg::bgp::{
    Bgp, FourByteAs, GlobalAf, Neighbor, NeighborAf, NeighborGroup, Redistribution, Vrf,
    VrfGlobalAf, VrfNeighbor,
};
use config::datatypes::AsPair;

/// Text rendered for a model without any instance
pub const NO_BGP_INSTANCES: &str = "No BGP instances found";

/* utils */
fn redistribute(protocol: &str, redist: &Redistribution) -> String {
    match &redist.route_policy_name {
        Some(policy) => format!("redistribute {protocol} route-policy {policy}"),
        None => format!("redistribute {protocol}"),
    }
}
fn redistributions(
    connected: Option<&Redistribution>,
    statics: Option<&Redistribution>,
) -> ConfigBuilder {
    let mut cfg = ConfigBuilder::new();
    if let Some(redist) = connected {
        cfg += redistribute("connected", redist);
    }
    if let Some(redist) = statics {
        cfg += redistribute("static", redist);
    }
    cfg
}

/* impl Render */
impl Render for NeighborAf {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("address-family {}", af_label(self.af_name)));
        if self.is_route_reflector_client() {
            cfg += "route-reflector-client";
        }
        if let Some(policy) = &self.route_policy_in {
            cfg += format!("route-policy {policy} in");
        }
        if let Some(policy) = &self.route_policy_out {
            cfg += format!("route-policy {policy} out");
        }
        cfg.close();
        cfg
    }
}

impl Render for GlobalAf {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("address-family {}", af_label(self.af_name)));
        cfg += redistributions(self.connected_routes.as_ref(), self.static_routes.as_ref());
        if let Some(mode) = self.label_mode() {
            cfg.open("vrf all");
            cfg += format!("label mode {mode}");
            cfg.close();
        }
        cfg.close();
        cfg
    }
}

impl Render for NeighborGroup {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("neighbor-group {}", self.neighbor_group_name));
        if let Some(remote_as) = self.remote_as {
            cfg += format!("remote-as {remote_as}");
        }
        if let Some(source) = &self.update_source_interface {
            cfg += format!("update-source {source}");
        }
        self.afs().iter().for_each(|af| cfg += af.render(&()));
        cfg.close();
        cfg
    }
}

impl Render for Neighbor {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("neighbor {}", self.neighbor_address));
        if let Some(remote_as) = self.remote_as {
            cfg += format!("remote-as {remote_as}");
        }
        if let Some(source) = &self.update_source_interface {
            cfg += format!("update-source {source}");
        }
        if let Some(group) = &self.neighbor_group_add_member {
            cfg += format!("use neighbor-group {group}");
        }
        self.afs().iter().for_each(|af| cfg += af.render(&()));
        cfg.close();
        cfg
    }
}

impl Render for VrfGlobalAf {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("address-family {}", af_label(self.af_name)));
        cfg += redistributions(self.connected_routes.as_ref(), self.static_routes.as_ref());
        if let Some(policy) = &self.table_policy {
            cfg += format!("table-policy {policy}");
        }
        cfg.close();
        cfg
    }
}

impl Render for VrfNeighbor {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("neighbor {}", self.neighbor_address));
        if let Some(group) = &self.neighbor_group_add_member {
            cfg += format!("use neighbor-group {group}");
        }
        if let Some(remote_as) = self.remote_as {
            cfg += format!("remote-as {remote_as}");
        }
        self.afs().iter().for_each(|af| cfg += af.render(&()));
        cfg.close();
        cfg
    }
}

impl Render for Vrf {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("vrf {}", self.vrf_name));
        if let Some(rd) = self.route_distinguisher() {
            cfg += format!("rd {rd}");
        }
        self.afs().iter().for_each(|af| cfg += af.render(&()));
        self.neighbors()
            .iter()
            .for_each(|neigh| cfg += neigh.render(&()));
        cfg.close();
        cfg
    }
}

/// A four-byte AS, rendered with the high half of its number as context
impl Render for FourByteAs {
    type Context = u32;
    type Output = ConfigBuilder;
    fn render(&self, as_xx: &u32) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("router bgp {}", AsPair::new(*as_xx, self.as_)));
        if let Some(router_id) = self.router_id() {
            cfg += format!("bgp router-id {router_id}");
        }
        self.global_afs()
            .iter()
            .for_each(|af| cfg += af.render(&()));
        self.neighbor_groups()
            .iter()
            .for_each(|group| cfg += group.render(&()));
        self.neighbors()
            .iter()
            .for_each(|neigh| cfg += neigh.render(&()));
        self.vrfs().iter().for_each(|vrf| cfg += vrf.render(&()));
        cfg.close();
        cfg
    }
}

impl Render for Bgp {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        if self.instances.is_empty() {
            return ConfigBuilder::from_string(NO_BGP_INSTANCES.to_owned());
        }
        let mut cfg = ConfigBuilder::new();
        for instance in &self.instances {
            for instance_as in &instance.instance_as {
                instance_as
                    .four_byte_as
                    .iter()
                    .for_each(|four_byte_as| cfg += four_byte_as.render(&instance_as.as_));
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Rendered;
    use config::cfg::bgp::RouteDistinguisher;
    use config::datatypes::BgpAddressFamily;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_instances() {
        assert_eq!(Bgp::default().rendered(), NO_BGP_INSTANCES);
    }

    #[test]
    fn test_neighbor_groups_in_order() {
        let four_byte_as = FourByteAs::new("10.0.0.1")
            .add_neighbor_group(NeighborGroup::new("first").set_remote_as(AsPair::new(0, 100)))
            .add_neighbor_group(NeighborGroup::new("second").set_remote_as(AsPair::new(0, 200)));
        let bgp = Bgp::with_as(AsPair::new(0, 65000), four_byte_as);
        let expected = [
            "router bgp 65000",
            " bgp router-id 10.0.0.1",
            " neighbor-group first",
            "  remote-as 100",
            " !",
            " neighbor-group second",
            "  remote-as 200",
            " !",
            "!",
        ];
        assert_eq!(bgp.rendered(), expected.join("\n"));
    }

    #[test]
    fn test_global_afs() {
        let four_byte_as = FourByteAs::new("10.1.1.1")
            .add_global_af(GlobalAf::new(BgpAddressFamily::IPV4_UNICAST).set_connected(Some("passall")))
            .add_global_af(
                GlobalAf::new(BgpAddressFamily::VPNV4_UNICAST).set_vrf_all_label_mode("per-ce"),
            )
            .add_global_af(GlobalAf::new(BgpAddressFamily::IPV6_UNICAST).set_static(None));
        let bgp = Bgp::with_as(AsPair::new(1, 10), four_byte_as);
        let expected = [
            "router bgp 1.10",
            " bgp router-id 10.1.1.1",
            " address-family IPv4 unicast",
            "  redistribute connected route-policy passall",
            " !",
            " address-family VPNv4 unicast",
            "  vrf all",
            "   label mode per-ce",
            "  !",
            " !",
            " address-family IPv6 unicast",
            "  redistribute static",
            " !",
            "!",
        ];
        assert_eq!(bgp.rendered(), expected.join("\n"));
    }

    #[test]
    fn test_neighbors_and_vrfs() {
        let four_byte_as = FourByteAs::new("10.1.1.1")
            .add_neighbor(
                Neighbor::new("2001::1")
                    .set_remote_as(AsPair::new(0, 1))
                    .set_update_source("Loopback0")
                    .add_af(NeighborAf::new(BgpAddressFamily::IPV6_UNICAST).set_policies("passall")),
            )
            .add_neighbor(
                Neighbor::new("80.1.1.1")
                    .set_neighbor_group("rr-client"),
            )
            .add_vrf(
                Vrf::new("3", RouteDistinguisher::four_byte_as(AsPair::new(0, 3), 3))
                    .add_af(
                        VrfGlobalAf::new(BgpAddressFamily::IPV4_UNICAST)
                            .set_table_policy("allow-only-pfxlen-32"),
                    )
                    .add_neighbor(
                        VrfNeighbor::new("30.1.1.2")
                            .set_neighbor_group("ce")
                            .add_af(
                                NeighborAf::new(BgpAddressFamily::IPV4_UNICAST)
                                    .set_policies("passall"),
                            ),
                    ),
            );
        let bgp = Bgp::with_as(AsPair::new(0, 100), four_byte_as);
        let expected = [
            "router bgp 100",
            " bgp router-id 10.1.1.1",
            " neighbor 2001::1",
            "  remote-as 1",
            "  update-source Loopback0",
            "  address-family IPv6 unicast",
            "   route-policy passall in",
            "   route-policy passall out",
            "  !",
            " !",
            " neighbor 80.1.1.1",
            "  use neighbor-group rr-client",
            " !",
            " vrf 3",
            "  rd 3:3",
            "  address-family IPv4 unicast",
            "   table-policy allow-only-pfxlen-32",
            "  !",
            "  neighbor 30.1.1.2",
            "   use neighbor-group ce",
            "   address-family IPv4 unicast",
            "    route-policy passall in",
            "    route-policy passall out",
            "   !",
            "  !",
            " !",
            "!",
        ];
        assert_eq!(bgp.rendered(), expected.join("\n"));
    }

    #[test]
    fn test_unknown_family_is_labelled() {
        let four_byte_as = FourByteAs::new("1.1.1.1")
            .add_neighbor(Neighbor::new("1.1.1.2").add_af(NeighborAf::new(BgpAddressFamily(42))));
        let bgp = Bgp::with_as(AsPair::new(0, 1), four_byte_as);
        let expected = [
            "router bgp 1",
            " bgp router-id 1.1.1.1",
            " neighbor 1.1.1.2",
            "  address-family Error",
            "  !",
            " !",
            "!",
        ];
        assert_eq!(bgp.rendered(), expected.join("\n"));
    }
}
