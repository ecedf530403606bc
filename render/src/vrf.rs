// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: VRFs and their route targets

use crate::builder::{ConfigBuilder, Render};
use config::cfg::rsi::{Af, RouteTarget, RouteTargetDirection, Vrf, Vrfs};
use config::datatypes::AsPair;

/* impl Render */
impl Render for RouteTarget {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        for rt in &self.as_or_four_byte_as {
            cfg += format!("{}:{}", AsPair::new(rt.as_xx, rt.as_), rt.as_index);
        }
        for rt in &self.ipv4_address {
            cfg += format!("{}:{}", rt.address, rt.address_index);
        }
        cfg
    }
}

fn render_route_targets(af: &Af, direction: RouteTargetDirection) -> ConfigBuilder {
    let mut cfg = ConfigBuilder::new();
    let targets = af.route_targets(direction);
    if targets.is_empty() {
        return cfg;
    }
    cfg.open(match direction {
        RouteTargetDirection::Import => "import route-target",
        RouteTargetDirection::Export => "export route-target",
    });
    targets.iter().for_each(|rt| cfg += rt.render(&()));
    cfg.close();
    cfg
}

impl Render for Af {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("address-family {} {}", self.af_name, self.saf_name));
        cfg += render_route_targets(self, RouteTargetDirection::Import);
        cfg += render_route_targets(self, RouteTargetDirection::Export);
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
        if let Some(description) = &self.description {
            cfg += format!("description {description}");
        }
        self.afs().iter().for_each(|af| cfg += af.render(&()));
        cfg.close();
        cfg
    }
}

impl Render for Vrfs {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        self.items.iter().for_each(|vrf| cfg += vrf.render(&()));
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Rendered;
    use config::cfg::rsi::{VrfAddressFamily, VrfSubAddressFamily};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vrf_route_targets() {
        let af = Af::new(VrfAddressFamily::Ipv4, VrfSubAddressFamily::Unicast)
            .add_route_target(
                RouteTargetDirection::Import,
                RouteTarget::from_as(AsPair::new(100, 1)),
            )
            .add_route_target(
                RouteTargetDirection::Export,
                RouteTarget::from_address("10.0.0.1", 5),
            );
        let vrfs = Vrfs::from(vec![Vrf::new("BLUE").set_description("tenant").add_af(af)]);
        let expected = [
            "vrf BLUE",
            " description tenant",
            " address-family ipv4 unicast",
            "  import route-target",
            "   100:1",
            "  !",
            "  export route-target",
            "   10.0.0.1:5",
            "  !",
            " !",
            "!",
        ];
        assert_eq!(vrfs.rendered(), expected.join("\n"));
    }

    #[test]
    fn test_vrf_without_afs() {
        let vrfs = Vrfs::from(vec![Vrf::new("RED")]);
        assert_eq!(vrfs.rendered(), "vrf RED\n!");
        assert_eq!(Vrfs::default().rendered(), "");
    }

    #[test]
    fn test_four_byte_route_target_in_asdot() {
        let rt = RouteTarget {
            type_: config::cfg::rsi::RouteTargetType::FourByteAs,
            as_or_four_byte_as: vec![config::cfg::rsi::AsOrFourByteAs {
                as_xx: 1,
                as_: 10,
                as_index: 7,
                stitching_rt: 0,
            }],
            ipv4_address: vec![],
        };
        assert_eq!(rt.rendered(), "1.10:7");
    }
}
