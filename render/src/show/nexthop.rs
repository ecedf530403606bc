// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! `show bgp nexthops`

use super::col;
use crate::bgp::NO_BGP_INSTANCES;
use crate::labels::{af_label, hex, int_to_time, millis_to_secs, nexthop_status, rib_event_label};
use config::oper::bgp::{Bgp, NextHopAddressFamily, NextHopAf, NextHopAfVrfAf, NextHopVrf};
use std::fmt::{Display, Formatter};

const TABLE_HEADING: &str =
    "Next Hop         Status              Metric Tbl-ID       Notf LastRIBEvent      RefCount";

const STATUS_CODES: &str = "Status Codes: R/UR Reachable/Unreachable\n\
    \x20             C/NC Connected/Not-connected\n\
    \x20             L/NL Local/Non-local\n\
    \x20             PR   Pending Registration\n\
    \x20             I    Invalid (Policy drop)";

/// Next-hop processing of the default vrf, then the next hops tracked for
/// each gateway address family of its first address family.
pub struct BgpNextHops<'a>(pub &'a Bgp);

struct Processing<'a>(Option<&'a NextHopVrf>);
impl Display for Processing<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let nh = self.0;
        let secs = |value: Option<u32>| col(value.map(millis_to_secs));
        let time = |value: Option<u32>| col(value.map(int_to_time));
        writeln!(f, "Total Nexthop Processing")?;
        writeln!(
            f,
            "  Time Spent: {} seconds",
            secs(nh.and_then(|n| n.total_processing_time))
        )?;
        writeln!(f)?;
        writeln!(f, "Maximum Nexthop Processing")?;
        writeln!(
            f,
            "  Received: {} ",
            time(nh.and_then(|n| n.max_proc_notification_time))
        )?;
        writeln!(
            f,
            "  Bestpaths Deleted: {}",
            col(nh.and_then(|n| n.max_notification_bestpath_deletes))
        )?;
        writeln!(
            f,
            "  Bestpaths Changed: {}",
            col(nh.and_then(|n| n.max_notification_bestpath_changes))
        )?;
        writeln!(
            f,
            "  Time Spent: {} seconds",
            secs(nh.and_then(|n| n.maximum_processing_time))
        )?;
        writeln!(f)?;
        writeln!(f, "Last Notification Processing")?;
        writeln!(
            f,
            "  Received: {}",
            time(nh.and_then(|n| n.last_notification_time))
        )?;
        write!(
            f,
            "  Time Spent: {} seconds",
            secs(nh.and_then(|n| n.last_notification_processing_time))
        )
    }
}

struct GatewayFamily<'a>(&'a NextHopAddressFamily);
impl Display for GatewayFamily<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let info = self.0.next_hop_af_vrf_af.as_ref();
        let field = |get: fn(&NextHopAfVrfAf) -> Option<u32>| col(info.and_then(get));
        writeln!(f, "Gateway Address Family: {}", af_label(self.0.next_hop_af_name))?;
        writeln!(f, "Table ID: {}", col(info.and_then(|i| i.nh_table_id).map(hex)))?;
        writeln!(f, "Nexthop Count: {}", field(|i| i.total_nexthops))?;
        writeln!(f, "Critical Trigger Delay: {} ms", field(|i| i.critical_trigger_delay))?;
        writeln!(
            f,
            "Non-critical Trigger Delay: {} ms",
            field(|i| i.non_critical_trigger_delay)
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Nexthop Version: {}, RIB version: {}",
            field(|i| i.nh_nexthop_version),
            field(|i| i.nh_rib_version)
        )?;
        writeln!(
            f,
            "EPE Table Version: {}, EPE Label version: {}",
            field(|i| i.epe_table_version),
            field(|i| i.epe_label_version)
        )?;
        writeln!(
            f,
            "EPE Downloaded Version: {}, EPE Standby version: {}",
            field(|i| i.epe_downloaded_version),
            field(|i| i.epe_standby_version)
        )?;
        writeln!(f)?;
        writeln!(f, "{STATUS_CODES}")
    }
}

struct NextHopRow<'a>(&'a NextHopAf);
impl Display for NextHopRow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let nh = self.0;
        let gw = nh.gateway();
        let status = col(gw.and_then(|g| g.nexthop_status).map(nexthop_status));
        let metric = col(gw.and_then(|g| g.nexthop_metric));
        let tableid = col(gw.and_then(|g| g.nexthop_tableid).map(hex));
        let notf = format!(
            "{}/{}",
            col(gw.and_then(|g| g.critical_events)),
            col(gw.and_then(|g| g.non_critical_events))
        );
        let ribtime = col(gw.and_then(|g| g.last_event_since).map(int_to_time));
        let ribevent = col(gw.and_then(|g| g.last_event_type).map(rib_event_label));
        let refcount = format!(
            "{}/{}",
            col(nh.nexthop_reference_count),
            col(nh.nh_reference_count_total)
        );
        write!(
            f,
            "{:<16} {status:<19} {metric:<6} {tableid:<12} {notf:<4} {ribtime:<8}{ribevent:<9} {refcount:<8}",
            col(nh.next_hop_address.as_deref())
        )
    }
}

impl Display for BgpNextHops<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let instances = self.0.instances();
        if instances.is_empty() {
            return f.write_str(NO_BGP_INSTANCES);
        }
        for (n, vrf) in instances.iter().filter_map(|i| i.default_vrf()).enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            Processing(vrf.next_hop_vrf.as_ref()).fmt(f)?;
            let families = vrf.afs().first().map(|af| af.next_hop_families());
            for family in families.unwrap_or_default() {
                write!(f, "\n\n{}", GatewayFamily(family))?;
                write!(f, "\n{TABLE_HEADING}")?;
                for next_hop in family.next_hops() {
                    write!(f, "\n{}", NextHopRow(next_hop))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::datatypes::BgpAddressFamily;
    use config::oper::bgp::{Af, GatewayInfo, NhRibEvent, Vrf};
    use crate::show::testdata;
    use pretty_assertions::assert_eq;

    fn next_hop(address: &str, status: u32) -> NextHopAf {
        NextHopAf {
            next_hop_address: Some(address.to_owned()),
            nexthop_gateway_info: vec![GatewayInfo {
                nexthop_status: Some(status),
                nexthop_metric: Some(0),
                nexthop_tableid: Some(0xe000_0000),
                critical_events: Some(1),
                non_critical_events: Some(0),
                last_event_since: Some(3723),
                last_event_type: Some(NhRibEvent::CRITICAL),
            }],
            nexthop_reference_count: Some(1),
            nh_reference_count_total: Some(2),
        }
    }

    fn family(next_hops: Vec<NextHopAf>) -> NextHopAddressFamily {
        NextHopAddressFamily {
            next_hop_af_name: BgpAddressFamily::IPV4_UNICAST,
            next_hop_af_vrf_af: Some(NextHopAfVrfAf {
                nh_table_id: Some(0xe000_0000),
                total_nexthops: Some(2),
                critical_trigger_delay: Some(3000),
                non_critical_trigger_delay: Some(10000),
                nh_nexthop_version: Some(1),
                nh_rib_version: Some(1),
                epe_table_version: Some(1),
                epe_label_version: Some(1),
                epe_downloaded_version: Some(1),
                epe_standby_version: Some(0),
            }),
            next_hop_afs: Some(next_hops.into()),
        }
    }

    fn bgp_with(families: Vec<NextHopAddressFamily>) -> Bgp {
        let af = Af {
            next_hop_address_families: Some(families.into()),
            ..Af::new(BgpAddressFamily::IPV4_UNICAST)
        };
        let vrf = Vrf {
            afs: Some(vec![af].into()),
            next_hop_vrf: Some(NextHopVrf {
                total_processing_time: Some(2),
                max_proc_notification_time: Some(59),
                max_notification_bestpath_deletes: Some(0),
                max_notification_bestpath_changes: Some(3),
                maximum_processing_time: Some(1500),
                last_notification_time: Some(3661),
                last_notification_processing_time: Some(0),
            }),
            ..Default::default()
        };
        testdata::bgp(testdata::instance(vrf, vec![]))
    }

    const PROCESSING: [&str; 12] = [
        "Total Nexthop Processing",
        "  Time Spent: 0.002 seconds",
        "",
        "Maximum Nexthop Processing",
        "  Received: 00:00:59 ",
        "  Bestpaths Deleted: 0",
        "  Bestpaths Changed: 3",
        "  Time Spent: 1.5 seconds",
        "",
        "Last Notification Processing",
        "  Received: 01:01:01",
        "  Time Spent: 0.0 seconds",
    ];

    #[test]
    fn test_no_instances() {
        assert_eq!(BgpNextHops(&Bgp::default()).to_string(), NO_BGP_INSTANCES);
    }

    #[test]
    fn test_processing_only() {
        let bgp = bgp_with(vec![]);
        assert_eq!(BgpNextHops(&bgp).to_string(), PROCESSING.join("\n"));
    }

    #[test]
    fn test_next_hop_table() {
        let bgp = bgp_with(vec![family(vec![
            next_hop("172.16.255.2", 0b01_01_10_01),
            next_hop("172.16.255.3", 0b10_00_00_10),
        ])]);
        let mut expected = PROCESSING.to_vec();
        expected.extend([
            "",
            "Gateway Address Family: IPv4 unicast",
            "Table ID: 0xe0000000",
            "Nexthop Count: 2",
            "Critical Trigger Delay: 3000 ms",
            "Non-critical Trigger Delay: 10000 ms",
            "",
            "Nexthop Version: 1, RIB version: 1",
            "EPE Table Version: 1, EPE Label version: 1",
            "EPE Downloaded Version: 1, EPE Standby version: 0",
            "",
            "Status Codes: R/UR Reachable/Unreachable",
            "              C/NC Connected/Not-connected",
            "              L/NL Local/Non-local",
            "              PR   Pending Registration",
            "              I    Invalid (Policy drop)",
            "",
            "Next Hop         Status              Metric Tbl-ID       Notf LastRIBEvent      RefCount",
            "172.16.255.2     [R][NC][L][PR]      0      0xe0000000   1/0  01:02:03(Cri)     1/2     ",
            "172.16.255.3     [UR][I]             0      0xe0000000   1/0  01:02:03(Cri)     1/2     ",
        ]);
        assert_eq!(BgpNextHops(&bgp).to_string(), expected.join("\n"));
    }

    #[test]
    fn test_rows_stay_with_their_family() {
        let mut ipv6 = family(vec![next_hop("2001:db8::1", 0b01)]);
        ipv6.next_hop_af_name = BgpAddressFamily::IPV6_UNICAST;
        let bgp = bgp_with(vec![family(vec![next_hop("10.0.0.1", 0b01)]), ipv6]);
        let text = BgpNextHops(&bgp).to_string();
        let (first, second) = text
            .split_once("Gateway Address Family: IPv6 unicast")
            .unwrap_or_default();
        assert!(first.contains("10.0.0.1"));
        assert!(!second.contains("10.0.0.1"));
        assert!(second.contains("2001:db8::1"));
    }
}
