// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Code to label tables and the small formatting helpers shared by renderers

use config::datatypes::BgpAddressFamily;
use config::oper::bgp::{BgpConnState, BgpNsrState, NhRibEvent, PathInformation};

/// Label of any code missing from a table
pub const UNKNOWN_LABEL: &str = "Error";

const AF_LABELS: [&str; 16] = [
    "IPv4 unicast",
    "IPv4 multicast",
    "IPv4 labeled-unicast",
    "IPv4 tunnel",
    "VPNv4 unicast",
    "IPv6 unicast",
    "IPv6 multicast",
    "IPv6 labeled-unicast",
    "VPNv6 unicast",
    "IPv4 MDT",
    "L2VPN VPLS-VPWS",
    "IPv4 rt-filter",
    "IPv4 MVPN",
    "IPv6 MVPN",
    "L2VPN EVPN",
    "Link-state link-state",
];

const NBR_STATE_LABELS: [&str; 9] = [
    "DontCare",
    "Idle",
    "Connect",
    "Active",
    "OpenSent",
    "OpenConfirm",
    "Established",
    "Closing",
    "ClosingSync",
];

const NSR_STATE_LABELS: [&str; 6] = [
    "None",
    "OPER_DOWN",
    "TCP Sync in progress",
    "TCP Sync Phase 2",
    "BGP Sync in progress",
    "Neighbor Ready",
];

const RIB_EVENT_LABELS: [&str; 3] = ["(Cri)", "(Non-Cri)", "(Reg)"];

fn lookup(table: &[&'static str], code: u32) -> &'static str {
    usize::try_from(code)
        .ok()
        .and_then(|index| table.get(index))
        .copied()
        .unwrap_or(UNKNOWN_LABEL)
}

#[must_use]
pub fn af_label(af: BgpAddressFamily) -> &'static str {
    lookup(&AF_LABELS, af.code())
}
#[must_use]
pub fn nbr_state_label(state: BgpConnState) -> &'static str {
    lookup(&NBR_STATE_LABELS, state.code())
}
#[must_use]
pub fn nsr_state_label(state: BgpNsrState) -> &'static str {
    lookup(&NSR_STATE_LABELS, state.code())
}
#[must_use]
pub fn rib_event_label(event: NhRibEvent) -> &'static str {
    lookup(&RIB_EVENT_LABELS, event.code())
}

/// Status code of a path: `s d h * > i r S N`, in that order.
#[must_use]
pub fn path_status(info: &PathInformation) -> String {
    let flags = [
        (info.is_aggregation_suppressed, 's'),
        (info.is_path_damped, 'd'),
        (info.is_path_history_held, 'h'),
        (info.is_path_valid, '*'),
        (info.is_best_path, '>'),
        (info.is_internal_path, 'i'),
        (info.rib_failed, 'r'),
        (info.is_path_stale, 'S'),
        (info.is_path_nexthop_discarded, 'N'),
    ];
    flags
        .iter()
        .filter(|(flag, _)| flag.unwrap_or(false))
        .map(|(_, token)| token)
        .collect()
}

/// Origin suffix of the path column
#[must_use]
pub fn origin_code(origin: u8) -> &'static str {
    match origin {
        0 => " i",
        1 => " e",
        2 => " ?",
        _ => "",
    }
}

/// Status of a next-hop gateway. The word packs 2-bit fields:
/// reachability, connectivity, locality and registration.
#[must_use]
pub fn nexthop_status(word: u32) -> String {
    let field = |n: u32| (word >> (2 * n)) & 0b11;
    let mut status = String::new();
    let pairs = [("[R]", "[UR]"), ("[C]", "[NC]"), ("[L]", "[NL]")];
    for (n, (low, high)) in (0..).zip(pairs) {
        match field(n) {
            0b01 => status.push_str(low),
            0b10 => status.push_str(high),
            _ => {}
        }
    }
    let registration = field(3);
    if registration & 0b01 != 0 {
        status.push_str("[PR]");
    } else if registration & 0b10 != 0 {
        status.push_str("[I]");
    }
    status
}

/// Decodes the last 8 hex digits of a raw route distinguisher as `HIGH:LOW`.
#[must_use]
pub fn route_distinguisher(raw: &str) -> Option<String> {
    let start = raw.len().checked_sub(8)?;
    let tail = raw.get(start..)?;
    let high = u16::from_str_radix(tail.get(..4)?, 16).ok()?;
    let low = u16::from_str_radix(tail.get(4..)?, 16).ok()?;
    Some(format!("{high}:{low}"))
}

/// `HH:MM:SS` from seconds
#[must_use]
pub fn int_to_time(seconds: u32) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    )
}

/// Seconds with a fractional part, from milliseconds
#[must_use]
pub fn millis_to_secs(millis: u32) -> String {
    format!("{:?}", f64::from(millis) / 1000.0)
}

#[must_use]
pub fn hex(value: u32) -> String {
    format!("{value:#x}")
}
