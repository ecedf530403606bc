// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! `show bgp`, `show bgp vpnv4 unicast` and `show bgp vrf NAME`

use super::col;
use crate::bgp::NO_BGP_INSTANCES;
use crate::labels::{hex, origin_code, path_status, route_distinguisher};
use config::datatypes::BgpAddressFamily;
use config::oper::bgp::{Af, Bgp, GlobalProcessInfo, Path, Vrf};
use std::fmt::{Display, Formatter};

const LEGENDS: &str = "Status codes: s suppressed, d damped, h history, * valid, > best\n\
    i - internal, r RIB-failure, S stale, N Nexthop-discard\n\
    Origin codes: i - IGP, e - EGP, ? - incomplete";

const TABLE_HEADING: &str =
    "   Network          Next Hop          Metric    LocPrf   Weight  Path";

fn active(flag: Option<bool>) -> &'static str {
    if flag.unwrap_or(false) { "Active" } else { "Inactive" }
}

fn rd_label(raw: &str) -> String {
    route_distinguisher(raw).unwrap_or_else(|| raw.to_owned())
}

struct PathRow<'a>(&'a Path);
impl Display for PathRow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let path = self.0;
        let info = path.path_information.as_ref();
        let attrs = path.common_attributes();
        let status = info.map(path_status).unwrap_or_default();
        let network = format!(
            "{}/{}",
            col(path.network.as_deref()),
            col(path.prefix_length)
        );
        let nexthop = col(
            info.and_then(|i| i.next_hop.as_ref())
                .and_then(|nh| nh.ipv4_address.as_deref()),
        );
        let metric = col(info.and_then(|i| i.aigp_metric));
        let locprf = col(attrs.and_then(|a| a.local_preference));
        let weight = col(info.and_then(|i| i.path_weight));
        let mut aspath = col(attrs.and_then(|a| a.neighbor_as));
        aspath += attrs.and_then(|a| a.origin).map_or("", origin_code);
        write!(
            f,
            "{status:<3}{network:<16} {nexthop:<20} {metric:>3} {locprf:>9} {weight:>8}  {aspath:<5}"
        )
    }
}

/* utils for the headers */
fn fmt_router_id(f: &mut Formatter<'_>, info: Option<&GlobalProcessInfo>) -> std::fmt::Result {
    let router_id = info
        .and_then(|i| i.vrf.as_ref())
        .and_then(|v| v.router_id.as_deref());
    let local_as = info.and_then(|i| i.global.as_ref()).and_then(|g| g.local_as);
    writeln!(
        f,
        "BGP router identifier {}, local AS number {}",
        col(router_id),
        col(local_as)
    )
}
fn fmt_nsr(f: &mut Formatter<'_>, info: Option<&GlobalProcessInfo>) -> std::fmt::Result {
    let nsr = info.and_then(|i| i.vrf.as_ref()).and_then(|v| v.is_nsr);
    let nsr = if nsr.unwrap_or(false) { "enabled" } else { "disabled" };
    writeln!(f, "Non-stop routing is {nsr}")
}
fn fmt_af_versions(f: &mut Formatter<'_>, af: Option<&Af>) -> std::fmt::Result {
    let vrf = af.and_then(Af::process_vrf);
    let syncgrp = af
        .and_then(Af::process_global)
        .map(|global| {
            global
                .syncgrp_version
                .iter()
                .map(|version| version.entry.to_string())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default();
    let converged = if vrf.and_then(|v| v.nsr_is_conv).unwrap_or(false) {
        "Reached"
    } else {
        "Not Reached"
    };
    writeln!(f, "BGP table state: {}", active(vrf.and_then(|v| v.table_is_active)))?;
    writeln!(
        f,
        "Table ID: {}    RD version: {}",
        col(vrf.and_then(|v| v.table_id).map(hex)),
        col(vrf.and_then(|v| v.rd_version))
    )?;
    writeln!(
        f,
        "BGP main routing table version {}",
        col(vrf.and_then(|v| v.table_version))
    )?;
    writeln!(
        f,
        "BGP NSR Initial initsync version {} ({converged})",
        col(vrf.and_then(|v| v.nsr_conv_version))
    )?;
    writeln!(f, "BGP NSR/ISSU Sync-Group versions {syncgrp}")
}

/// Header of the default vrf for an address family
fn fmt_global_header(f: &mut Formatter<'_>, vrf: &Vrf, af: Option<&Af>) -> std::fmt::Result {
    let info = vrf.global_process_info.as_ref();
    fmt_router_id(f, info)?;
    let gscan = info
        .and_then(|i| i.global.as_ref())
        .and_then(|g| g.generic_scan_period);
    writeln!(f, "BGP generic scan interval {} secs", col(gscan))?;
    fmt_nsr(f, info)?;
    fmt_af_versions(f, af)?;
    let scan = af.and_then(Af::process_global).and_then(|g| g.scanner_period);
    writeln!(f, "BGP scan interval {} secs", col(scan))?;
    write!(f, "\n{LEGENDS}")
}

/// Paths of an address family of the default vrf, for every instance
struct DefaultVrfTable<'a> {
    bgp: &'a Bgp,
    af_name: BgpAddressFamily,
    /// emit a `Route Distinguisher` line each time it changes
    with_rd: bool,
}
impl Display for DefaultVrfTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let instances = self.bgp.instances();
        if instances.is_empty() {
            return f.write_str(NO_BGP_INSTANCES);
        }
        let mut rows = String::new();
        let mut first = true;
        for vrf in instances.iter().filter_map(|i| i.default_vrf()) {
            if !first {
                writeln!(f)?;
            }
            first = false;
            let af = vrf.af(self.af_name);
            fmt_global_header(f, vrf, af)?;
            if self.with_rd {
                writeln!(f)?;
            }
            let mut previous_rd = None;
            for path in af.map(Af::paths).unwrap_or_default() {
                if self.with_rd && path.route_distinguisher.is_some() {
                    let rd = path.route_distinguisher.as_deref();
                    if rd != previous_rd {
                        rows += &format!("\nRoute Distinguisher: {}", col(rd.map(rd_label)));
                        previous_rd = rd;
                    }
                }
                rows += &format!("\n{}", PathRow(path));
            }
        }
        write!(f, "\n{TABLE_HEADING}{rows}\n\n")
    }
}

/// IPv4 unicast paths of the default vrf
pub struct BgpTable<'a>(pub &'a Bgp);
impl Display for BgpTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        DefaultVrfTable {
            bgp: self.0,
            af_name: BgpAddressFamily::IPV4_UNICAST,
            with_rd: false,
        }
        .fmt(f)
    }
}

/// VPNv4 unicast paths of the default vrf, grouped by route distinguisher
pub struct BgpVpnv4Table<'a>(pub &'a Bgp);
impl Display for BgpVpnv4Table<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        DefaultVrfTable {
            bgp: self.0,
            af_name: BgpAddressFamily::VPNV4_UNICAST,
            with_rd: true,
        }
        .fmt(f)
    }
}

/// IPv4 unicast paths of a named vrf
pub struct BgpVrfTable<'a> {
    pub bgp: &'a Bgp,
    pub vrf_name: &'a str,
}
impl<'a> BgpVrfTable<'a> {
    #[must_use]
    pub fn new(bgp: &'a Bgp, vrf_name: &'a str) -> Self {
        Self { bgp, vrf_name }
    }
}
impl Display for BgpVrfTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let instances = self.bgp.instances();
        if instances.is_empty() {
            return f.write_str(NO_BGP_INSTANCES);
        }
        let Some(vrfs) = instances
            .iter()
            .map(|instance| instance.vrf(self.vrf_name))
            .collect::<Option<Vec<_>>>()
        else {
            return write!(f, "VRF {} not found", self.vrf_name);
        };
        let mut rd = String::new();
        let mut rows = String::new();
        for (n, vrf) in vrfs.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            let info = vrf.global_process_info.as_ref();
            let af = vrf.af(BgpAddressFamily::IPV4_UNICAST);
            rd = col(vrf.route_distinguisher().map(rd_label));
            let state = active(info.and_then(|i| i.vrf.as_ref()).and_then(|v| v.vrf_is_active));
            writeln!(
                f,
                "BGP VRF {}, state: {state}",
                col(info.and_then(|i| i.vrf_name.as_deref()))
            )?;
            writeln!(f, "BGP Route Distinguisher {rd}")?;
            writeln!(f, "VRF ID: {}", col(info.and_then(|i| i.vrfid).map(hex)))?;
            fmt_router_id(f, info)?;
            fmt_nsr(f, info)?;
            fmt_af_versions(f, af)?;
            writeln!(f, "\n{LEGENDS}")?;
            for path in af.map(Af::paths).unwrap_or_default() {
                rows += &format!("\n{}", PathRow(path));
            }
        }
        write!(f, "\n{TABLE_HEADING}\nRoute Distinguisher: {rd}{rows}\n\n")
    }
}
