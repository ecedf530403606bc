// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! VRFs with a route target

use args::RouteTargetArgs;
use config::cfg::rsi::{Af, RouteTarget, Vrf, Vrfs};

/// A vrf with one address family importing or exporting an AS route target (sample 40)
#[must_use]
pub fn route_target_vrf(args: &RouteTargetArgs) -> Vrfs {
    let af = Af::new(args.af, args.saf)
        .add_route_target(args.direction, RouteTarget::from_as(args.asn));
    Vrfs::from(vec![Vrf::new(&args.vrf_name).add_af(af)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::encode;
    use config::cfg::rsi::{RouteTargetDirection, VrfAddressFamily, VrfSubAddressFamily};
    use config::datatypes::AsPair;
    use pretty_assertions::assert_eq;
    use render::Rendered;

    fn args(direction: RouteTargetDirection) -> RouteTargetArgs {
        RouteTargetArgs {
            vrf_name: "BLUE".to_owned(),
            af: VrfAddressFamily::Ipv4,
            saf: VrfSubAddressFamily::Unicast,
            direction,
            asn: AsPair::new(65172, 1),
        }
    }

    #[test]
    fn test_export_route_target() {
        let expected = [
            "vrf BLUE",
            " address-family ipv4 unicast",
            "  export route-target",
            "   65172:1",
            "  !",
            " !",
            "!",
        ];
        assert_eq!(
            route_target_vrf(&args(RouteTargetDirection::Export)).rendered(),
            expected.join("\n")
        );
    }

    #[test]
    fn test_encoded_import() {
        let xml = encode(&route_target_vrf(&args(RouteTargetDirection::Import))).unwrap();
        assert!(xml.contains("<import-route-targets>"));
        assert!(!xml.contains("<export-route-targets>"));
        assert!(xml.contains("<topology-name>default</topology-name>"));
        assert!(xml.contains("<as-index>1</as-index>"));
        assert!(xml.contains("<bgp xmlns=\"http://cisco.com/ns/yang/Cisco-IOS-XR-ipv4-bgp-cfg\">"));
    }
}
