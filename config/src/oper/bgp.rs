// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Cisco-IOS-XR-ipv4-bgp-oper: sessions, path tables and next-hop tracking.
//!
//! Only the leaves that the show views consume are modeled. Everything is
//! optional since a device may omit any of them.

use crate::datatypes::BgpAddressFamily;
use crate::yang::{YangEntity, entries};
use serde::{Deserialize, Serialize};

yang_code!(
    /// Neighbor session state
    BgpConnState {
        DONT_CARE = 0 => "bgp-st-dont-care",
        IDLE = 1 => "bgp-st-idle",
        CONNECT = 2 => "bgp-st-connect",
        ACTIVE = 3 => "bgp-st-active",
        OPEN_SENT = 4 => "bgp-st-open-sent",
        OPEN_CONFIRM = 5 => "bgp-st-open-confirm",
        ESTABLISHED = 6 => "bgp-st-estab",
        CLOSING = 7 => "bgp-st-closing",
        CLOSING_SYNC = 8 => "bgp-st-closing-sync",
    }
);

yang_code!(
    /// Non-stop routing synchronization state of a neighbor
    BgpNsrState {
        NONE = 0 => "bgp-nbr-nsr-st-none",
        OPER_DOWN = 1 => "bgp-nbr-nsr-st-oper-down",
        TCP_INIT_SYNC = 2 => "bgp-nbr-nsr-st-tcp-init-sync",
        TCP_PHASE_TWO = 3 => "bgp-nbr-nsr-st-tcp-phase-two",
        BGP_INIT_SYNC = 4 => "bgp-nbr-nsr-st-bgp-init-sync",
        NEIGHBOR_READY = 5 => "bgp-nbr-nsr-st-neighbor-ready",
    }
);

yang_code!(
    /// Kind of the last RIB event seen for a next hop
    NhRibEvent {
        CRITICAL = 0 => "bgp-nh-event-critical",
        NON_CRITICAL = 1 => "bgp-nh-event-non-critical",
        REGISTRATION = 2 => "bgp-nh-event-registration",
    }
);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Bgp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instances: Option<Instances>,
}

impl YangEntity for Bgp {
    const NAME: &'static str = "bgp";
    const NAMESPACE: &'static str = "http://cisco.com/ns/yang/Cisco-IOS-XR-ipv4-bgp-oper";
    const IS_CONFIG: bool = false;
}

impl Bgp {
    #[must_use]
    pub fn instances(&self) -> &[Instance] {
        entries(self.instances.as_ref())
    }
    #[must_use]
    pub fn add_instance(mut self, instance: Instance) -> Self {
        self.instances
            .get_or_insert_with(Default::default)
            .items
            .push(instance);
        self
    }
}

yang_list!(Instances, "instance", Instance);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Instance {
    pub instance_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_active: Option<InstanceActive>,
}

impl Instance {
    #[must_use]
    pub fn default_vrf(&self) -> Option<&Vrf> {
        self.instance_active.as_ref()?.default_vrf.as_ref()
    }
    #[must_use]
    pub fn vrfs(&self) -> &[Vrf] {
        entries(self.instance_active.as_ref().and_then(|a| a.vrfs.as_ref()))
    }
    /// Non-default vrf by name
    #[must_use]
    pub fn vrf(&self, name: &str) -> Option<&Vrf> {
        self.vrfs()
            .iter()
            .find(|vrf| vrf.vrf_name.as_deref() == Some(name))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InstanceActive {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_vrf: Option<Vrf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrfs: Option<Vrfs>,
}

yang_list!(Vrfs, "vrf", Vrf);

/// State of one vrf. The default vrf carries no name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Vrf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afs: Option<Afs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbors: Option<Neighbors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information: Option<Information>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_process_info: Option<GlobalProcessInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hop_vrf: Option<NextHopVrf>,
}

impl Vrf {
    #[must_use]
    pub fn neighbors(&self) -> &[Neighbor] {
        entries(self.neighbors.as_ref())
    }
    #[must_use]
    pub fn afs(&self) -> &[Af] {
        entries(self.afs.as_ref())
    }
    #[must_use]
    pub fn af(&self, af_name: BgpAddressFamily) -> Option<&Af> {
        self.afs().iter().find(|af| af.af_name == af_name)
    }
    #[must_use]
    pub fn route_distinguisher(&self) -> Option<&str> {
        self.information.as_ref()?.route_distinguisher.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Information {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_distinguisher: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GlobalProcessInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrfid: Option<u32>,
    #[serde(rename = "global", default, skip_serializing_if = "Option::is_none")]
    pub global: Option<ProcessGlobal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf: Option<ProcessVrf>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProcessGlobal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_as: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_scan_period: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProcessVrf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_nsr: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_is_active: Option<bool>,
}

yang_list!(Neighbors, "neighbor", Neighbor);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Neighbor {
    pub neighbor_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_as: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_queued_in: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_queued_out: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_state: Option<BgpConnState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsr_state: Option<BgpNsrState>,
}

yang_list!(Afs, "af", Af);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Af {
    pub af_name: BgpAddressFamily,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_table: Option<PathTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hop_address_families: Option<NextHopAddressFamilies>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_af_process_info: Option<GlobalAfProcessInfo>,
}

impl Af {
    #[must_use]
    pub fn new(af_name: BgpAddressFamily) -> Self {
        Self {
            af_name,
            path_table: None,
            next_hop_address_families: None,
            global_af_process_info: None,
        }
    }
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        entries(self.path_table.as_ref())
    }
    #[must_use]
    pub fn next_hop_families(&self) -> &[NextHopAddressFamily] {
        entries(self.next_hop_address_families.as_ref())
    }
    #[must_use]
    pub fn process_global(&self) -> Option<&AfGlobal> {
        self.global_af_process_info.as_ref()?.global.as_ref()
    }
    #[must_use]
    pub fn process_vrf(&self) -> Option<&AfVrf> {
        self.global_af_process_info.as_ref()?.vrf.as_ref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GlobalAfProcessInfo {
    #[serde(rename = "global", default, skip_serializing_if = "Option::is_none")]
    pub global: Option<AfGlobal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf: Option<AfVrf>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AfGlobal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanner_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub syncgrp_version: Vec<SyncGroupVersion>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SyncGroupVersion {
    pub entry: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AfVrf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rd_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsr_conv_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsr_is_conv: Option<bool>,
}

yang_list!(PathTable, "path", Path);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Path {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_distinguisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_information: Option<PathInformation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes_after_policy_in: Option<PathAttributes>,
}

impl Path {
    #[must_use]
    pub fn common_attributes(&self) -> Option<&CommonAttributes> {
        self.attributes_after_policy_in
            .as_ref()?
            .common_attributes
            .as_ref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PathInformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hop: Option<PathNextHop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aigp_metric: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_aggregation_suppressed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_path_damped: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_path_history_held: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_path_valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_best_path: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_internal_path: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rib_failed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_path_stale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_path_nexthop_discarded: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PathNextHop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PathAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_attributes: Option<CommonAttributes>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommonAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbor_as: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_preference: Option<u32>,
}

yang_list!(
    NextHopAddressFamilies,
    "next-hop-address-family",
    NextHopAddressFamily
);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NextHopAddressFamily {
    pub next_hop_af_name: BgpAddressFamily,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hop_af_vrf_af: Option<NextHopAfVrfAf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hop_afs: Option<NextHopAfs>,
}

impl NextHopAddressFamily {
    #[must_use]
    pub fn next_hops(&self) -> &[NextHopAf] {
        entries(self.next_hop_afs.as_ref())
    }
}

/// Next-hop tracking counters of one gateway address family
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NextHopAfVrfAf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nh_table_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_nexthops: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_trigger_delay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_critical_trigger_delay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nh_nexthop_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nh_rib_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epe_table_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epe_label_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epe_downloaded_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epe_standby_version: Option<u32>,
}

yang_list!(NextHopAfs, "next-hop-af", NextHopAf);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NextHopAf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hop_address: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nexthop_gateway_info: Vec<GatewayInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nexthop_reference_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nh_reference_count_total: Option<u32>,
}

impl NextHopAf {
    /// First gateway entry, the one the CLI shows
    #[must_use]
    pub fn gateway(&self) -> Option<&GatewayInfo> {
        self.nexthop_gateway_info.first()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GatewayInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nexthop_status: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nexthop_metric: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nexthop_tableid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_events: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_critical_events: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_event_since: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_event_type: Option<NhRibEvent>,
}

/// Next-hop processing counters. Durations are in milliseconds,
/// timestamps in seconds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NextHopVrf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_processing_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_proc_notification_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_notification_bestpath_deletes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_notification_bestpath_changes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_processing_time: Option<u32>,
    // leaf name as published by the device
    #[serde(
        rename = "last-notificationication-time",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_notification_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_notification_processing_time: Option<u32>,
}
