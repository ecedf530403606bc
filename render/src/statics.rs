// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: static routes

use crate::builder::{ConfigBuilder, Render};
use config::cfg::ip_static::{NextHop, RouterStatic, StaticAf, VrfPrefix};

/* route options, in CLI order */
fn next_hop_options(next_hop: &NextHop) -> String {
    let mut out = String::new();
    if let Some(distance) = next_hop.metric {
        out += format!(" {distance}").as_str();
    }
    if let Some(tag) = next_hop.tag {
        out += format!(" tag {tag}").as_str();
    }
    if let Some(description) = &next_hop.description {
        out += format!(" description {description}").as_str();
    }
    out
}

impl Render for VrfPrefix {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        let prefix = format!("{}/{}", self.prefix, self.prefix_length);
        let next_hops = self
            .interface_next_hops()
            .iter()
            .chain(self.address_next_hops())
            .chain(self.interface_address_next_hops());
        for next_hop in next_hops {
            let target = [&next_hop.interface_name, &next_hop.next_hop_address]
                .into_iter()
                .flatten()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            cfg += format!("{prefix} {target}{}", next_hop_options(next_hop));
        }
        cfg
    }
}

fn render_family(statics: &RouterStatic, af: StaticAf) -> ConfigBuilder {
    let mut cfg = ConfigBuilder::new();
    let prefixes = statics.prefixes(af);
    if prefixes.is_empty() {
        return cfg;
    }
    cfg.open(match af {
        StaticAf::Ipv4 => "address-family ipv4 unicast",
        StaticAf::Ipv6 => "address-family ipv6 unicast",
    });
    prefixes.iter().for_each(|prefix| cfg += prefix.render(&()));
    cfg.close();
    cfg
}

impl Render for RouterStatic {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut families = ConfigBuilder::new();
        families += render_family(self, StaticAf::Ipv4);
        families += render_family(self, StaticAf::Ipv6);
        if families.is_empty() {
            return families;
        }
        let mut cfg = ConfigBuilder::new();
        cfg.open("router static");
        cfg += families;
        cfg.close();
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Rendered;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_router_static() {
        let statics = RouterStatic::default()
            .add_prefix(
                StaticAf::Ipv4,
                VrfPrefix::new("0.0.0.0", 0).add_next_hop(NextHop::interface("MgmtEth0/RP0/CPU0/0")),
            )
            .add_prefix(
                StaticAf::Ipv4,
                VrfPrefix::new("10.10.0.0", 16).add_next_hop(
                    NextHop::interface("GigabitEthernet0/0/0/0")
                        .set_address("172.16.0.1")
                        .set_distance(200)
                        .set_tag(7),
                ),
            )
            .add_prefix(
                StaticAf::Ipv6,
                VrfPrefix::new("2001:db8::", 32)
                    .add_next_hop(NextHop::address("fe80::1").set_description("backup")),
            );
        let expected = [
            "router static",
            " address-family ipv4 unicast",
            "  0.0.0.0/0 MgmtEth0/RP0/CPU0/0",
            "  10.10.0.0/16 GigabitEthernet0/0/0/0 172.16.0.1 200 tag 7",
            " !",
            " address-family ipv6 unicast",
            "  2001:db8::/32 fe80::1 description backup",
            " !",
            "!",
        ];
        assert_eq!(statics.rendered(), expected.join("\n"));
    }

    #[test]
    fn test_no_routes() {
        assert_eq!(RouterStatic::default().rendered(), "");
        let empty_prefix = RouterStatic::default().add_prefix(StaticAf::Ipv4, VrfPrefix::new("10.0.0.0", 8));
        assert_eq!(
            empty_prefix.rendered(),
            "router static\n address-family ipv4 unicast\n !\n!"
        );
    }
}
