// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! BGP speakers

use config::cfg::bgp::{
    Bgp, FourByteAs, GlobalAf, Neighbor, NeighborAf, NeighborGroup, RouteDistinguisher, Vrf,
    VrfGlobalAf, VrfNeighbor,
};
use config::datatypes::{AsPair, BgpAddressFamily as Family};

fn asn(number: u32) -> AsPair {
    AsPair::new(0, number)
}

fn af_with_policies(family: Family, policy: &str) -> NeighborAf {
    NeighborAf::new(family).set_policies(policy)
}

/// Route reflector in AS 100 with its clients (sample 95)
#[must_use]
pub fn route_reflector() -> Bgp {
    let clients = NeighborGroup::new("rr-client")
        .set_remote_as(asn(100))
        .add_af(NeighborAf::new(Family::IPV4_UNICAST).set_route_reflector_client())
        .add_af(NeighborAf::new(Family::VPNV4_UNICAST).set_route_reflector_client());
    let speaker = FourByteAs::new("200.1.1.2")
        .add_global_af(GlobalAf::new(Family::IPV4_UNICAST))
        .add_global_af(GlobalAf::new(Family::VPNV4_UNICAST))
        .add_neighbor_group(clients)
        .add_neighbor(Neighbor::new("80.1.1.1").set_neighbor_group("rr-client"))
        .add_neighbor(Neighbor::new("200.1.1.1").set_neighbor_group("rr-client"));
    Bgp::with_as(asn(100), speaker)
}

/// Dual stack PE in AS 200 with two iBGP neighbors (sample 97)
#[must_use]
pub fn dual_stack_pe() -> Bgp {
    let speaker = FourByteAs::new("10.1.1.2")
        .add_global_af(
            GlobalAf::new(Family::IPV4_UNICAST)
                .set_connected(None)
                .set_static(None),
        )
        .add_global_af(GlobalAf::new(Family::VPNV4_UNICAST))
        .add_global_af(
            GlobalAf::new(Family::IPV6_UNICAST)
                .set_connected(None)
                .set_static(None),
        )
        .add_global_af(GlobalAf::new(Family::VPNV6_UNICAST))
        .add_global_af(GlobalAf::new(Family::L2VPN_EVPN))
        .add_neighbor(
            Neighbor::new("2001::6")
                .set_remote_as(asn(100))
                .add_af(af_with_policies(Family::IPV4_UNICAST, "pass-all"))
                .add_af(af_with_policies(Family::IPV6_UNICAST, "pass-all")),
        )
        .add_neighbor(
            Neighbor::new("10.1.1.1")
                .set_remote_as(asn(100))
                .add_af(af_with_policies(Family::IPV4_UNICAST, "pass-all"))
                .add_af(af_with_policies(Family::VPNV4_UNICAST, "pass-all")),
        );
    Bgp::with_as(asn(200), speaker)
}

fn l3vpn_vrfs(speaker: FourByteAs) -> FourByteAs {
    let rd = |n| RouteDistinguisher::four_byte_as(asn(n), n);
    let vrf_1 = Vrf::new("1", rd(1))
        .add_af(VrfGlobalAf::new(Family::IPV4_UNICAST).set_static(None))
        .add_neighbor(
            VrfNeighbor::new("10.1.1.2")
                .set_neighbor_group("ce")
                .add_af(NeighborAf::new(Family::IPV4_UNICAST)),
        );
    let vrf_2 = Vrf::new("2", rd(2))
        .add_af(VrfGlobalAf::new(Family::IPV4_UNICAST).set_static(None))
        .add_af(VrfGlobalAf::new(Family::IPV6_UNICAST).set_static(None))
        .add_neighbor(
            VrfNeighbor::new("2001::5")
                .set_remote_as(asn(200))
                .add_af(af_with_policies(Family::IPV6_UNICAST, "passall")),
        );
    let host_routes = |name: &str, n: u32, neighbor: &str| {
        Vrf::new(name, rd(n))
            .add_af(
                VrfGlobalAf::new(Family::IPV4_UNICAST).set_table_policy("allow-only-pfxlen-32"),
            )
            .add_neighbor(VrfNeighbor::new(neighbor).set_neighbor_group("ce"))
    };
    speaker
        .add_vrf(vrf_1)
        .add_vrf(vrf_2)
        .add_vrf(host_routes("3", 3, "30.1.1.2"))
        .add_vrf(host_routes("4", 4, "40.1.1.2"))
}

/// L3VPN PE in AS 100 with link-state, CE neighbor group and four vrfs (sample 99)
#[must_use]
pub fn l3vpn_pe() -> Bgp {
    let speaker = FourByteAs::new("10.1.1.1")
        .add_global_af(GlobalAf::new(Family::IPV4_UNICAST).set_connected(Some("passall")))
        .add_global_af(GlobalAf::new(Family::VPNV4_UNICAST).set_vrf_all_label_mode("per-ce"))
        .add_global_af(
            GlobalAf::new(Family::IPV6_UNICAST)
                .set_connected(Some("passall"))
                .set_static(None),
        )
        .add_global_af(GlobalAf::new(Family::VPNV6_UNICAST).set_vrf_all_label_mode("per-ce"))
        .add_global_af(GlobalAf::new(Family::L2VPN_EVPN))
        .add_global_af(GlobalAf::new(Family::LINK_STATE))
        .add_neighbor_group(
            NeighborGroup::new("ce")
                .set_remote_as(asn(200))
                .add_af(af_with_policies(Family::IPV4_UNICAST, "passall")),
        )
        .add_neighbor(
            Neighbor::new("3001::5")
                .set_remote_as(asn(100))
                .add_af(af_with_policies(Family::IPV4_UNICAST, "passall"))
                .add_af(af_with_policies(Family::IPV6_UNICAST, "passall")),
        )
        .add_neighbor(
            Neighbor::new("200.1.1.2")
                .set_remote_as(asn(100))
                .add_af(af_with_policies(Family::IPV4_UNICAST, "passall"))
                .add_af(af_with_policies(Family::VPNV4_UNICAST, "passall"))
                .add_af(NeighborAf::new(Family::LINK_STATE)),
        )
        .add_neighbor(
            Neighbor::new("2001::208:28:2:1")
                .set_remote_as(asn(1))
                .set_update_source("Loopback0")
                .add_af(NeighborAf::new(Family::IPV6_UNICAST))
                .add_af(NeighborAf::new(Family::LINK_STATE)),
        );
    Bgp::with_as(asn(100), l3vpn_vrfs(speaker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::encode;
    use pretty_assertions::assert_eq;
    use render::Rendered;

    #[test]
    fn test_route_reflector() {
        let expected = [
            "router bgp 100",
            " bgp router-id 200.1.1.2",
            " address-family IPv4 unicast",
            " !",
            " address-family VPNv4 unicast",
            " !",
            " neighbor-group rr-client",
            "  remote-as 100",
            "  address-family IPv4 unicast",
            "   route-reflector-client",
            "  !",
            "  address-family VPNv4 unicast",
            "   route-reflector-client",
            "  !",
            " !",
            " neighbor 80.1.1.1",
            "  use neighbor-group rr-client",
            " !",
            " neighbor 200.1.1.1",
            "  use neighbor-group rr-client",
            " !",
            "!",
        ];
        assert_eq!(route_reflector().rendered(), expected.join("\n"));
    }

    #[test]
    fn test_dual_stack_pe() {
        let text = dual_stack_pe().rendered();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "router bgp 200");
        assert_eq!(
            &lines[2..6],
            [
                " address-family IPv4 unicast",
                "  redistribute connected",
                "  redistribute static",
                " !",
            ]
        );
        assert!(text.contains(" address-family L2VPN EVPN\n !"));
        assert!(text.contains(
            " neighbor 2001::6\n  remote-as 100\n  address-family IPv4 unicast\n   route-policy pass-all in\n   route-policy pass-all out\n  !"
        ));
        assert_eq!(lines.last(), Some(&"!"));
    }

    #[test]
    fn test_l3vpn_pe_vrfs() {
        let text = l3vpn_pe().rendered();
        let expected = [
            " vrf 3",
            "  rd 3:3",
            "  address-family IPv4 unicast",
            "   table-policy allow-only-pfxlen-32",
            "  !",
            "  neighbor 30.1.1.2",
            "   use neighbor-group ce",
            "  !",
            " !",
        ];
        assert!(text.contains(&expected.join("\n")), "{text}");
        assert!(text.contains(" address-family VPNv4 unicast\n  vrf all\n   label mode per-ce\n  !\n !"));
        assert_eq!(text.matches("neighbor 200.1.1.2").count(), 1);
        assert_eq!(text.matches("address-family Link-state link-state").count(), 3);
    }

    #[test]
    fn test_encoded_speaker() {
        let xml = encode(&l3vpn_pe()).unwrap();
        assert!(xml.contains("<instance-name>default</instance-name>"));
        assert!(xml.contains("<bgp-running/>"));
        assert!(xml.contains("<af-name>link-state-link-state</af-name>"));
        assert!(xml.contains("<label-allocation-mode>per-ce</label-allocation-mode>"));
    }
}
