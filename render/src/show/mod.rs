// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Fixed-layout views over the BGP operational model, in the shape of the
//! matching IOS-XR `show bgp` commands. Each view is a [`Display`] wrapper.
//!
//! Absent containers are skipped. Leaves missing from a present record
//! render as empty columns.

use std::fmt::Display;

mod nexthop;
mod sessions;
mod table;

pub use nexthop::BgpNextHops;
pub use sessions::BgpSessions;
pub use table::{BgpTable, BgpVpnv4Table, BgpVrfTable};

/// Text of an optional leaf, empty when absent
pub(crate) fn col<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod testdata {
    use config::datatypes::BgpAddressFamily;
    use config::oper::bgp::{
        Af, AfGlobal, AfVrf, Bgp, CommonAttributes, GlobalAfProcessInfo, GlobalProcessInfo,
        Information, Instance, InstanceActive, Path, PathAttributes, PathInformation, PathNextHop,
        ProcessGlobal, ProcessVrf, SyncGroupVersion, Vrf,
    };

    pub fn process_info(vrf_name: &str) -> GlobalProcessInfo {
        GlobalProcessInfo {
            vrf_name: Some(vrf_name.to_owned()),
            vrfid: Some(0x6000_0000),
            global: Some(ProcessGlobal {
                local_as: Some(65001),
                generic_scan_period: Some(60),
            }),
            vrf: Some(ProcessVrf {
                router_id: Some("172.16.255.1".to_owned()),
                is_nsr: Some(true),
                vrf_is_active: Some(true),
            }),
        }
    }

    pub fn af_process_info() -> GlobalAfProcessInfo {
        GlobalAfProcessInfo {
            global: Some(AfGlobal {
                scanner_period: Some(60),
                syncgrp_version: vec![SyncGroupVersion { entry: 0 }, SyncGroupVersion { entry: 0 }],
            }),
            vrf: Some(AfVrf {
                table_is_active: Some(true),
                table_id: Some(0xe000_0000),
                table_version: Some(27),
                rd_version: Some(27),
                nsr_conv_version: Some(27),
                nsr_is_conv: Some(true),
            }),
        }
    }

    pub fn path(rd: Option<&str>, network: &str, len: u8, nexthop: &str, best: bool) -> Path {
        Path {
            route_distinguisher: rd.map(str::to_owned),
            network: Some(network.to_owned()),
            prefix_length: Some(len),
            path_information: Some(PathInformation {
                next_hop: Some(PathNextHop {
                    ipv4_address: Some(nexthop.to_owned()),
                    ipv6_address: None,
                }),
                aigp_metric: Some(0),
                path_weight: Some(32768),
                is_path_valid: Some(true),
                is_best_path: Some(best),
                ..Default::default()
            }),
            attributes_after_policy_in: Some(PathAttributes {
                common_attributes: Some(CommonAttributes {
                    neighbor_as: Some(0),
                    origin: Some(2),
                    local_preference: Some(100),
                }),
            }),
        }
    }

    pub fn af(af_name: BgpAddressFamily, paths: Vec<Path>) -> Af {
        Af {
            path_table: Some(paths.into()),
            global_af_process_info: Some(af_process_info()),
            ..Af::new(af_name)
        }
    }

    pub fn instance(default_vrf: Vrf, vrfs: Vec<Vrf>) -> Instance {
        Instance {
            instance_name: "default".to_owned(),
            instance_active: Some(InstanceActive {
                default_vrf: Some(default_vrf),
                vrfs: Some(vrfs.into()),
            }),
        }
    }

    pub fn customer_vrf(name: &str, rd: &str, afs: Vec<Af>) -> Vrf {
        Vrf {
            vrf_name: Some(name.to_owned()),
            afs: Some(afs.into()),
            information: Some(Information {
                route_distinguisher: Some(rd.to_owned()),
            }),
            global_process_info: Some(process_info(name)),
            ..Default::default()
        }
    }

    pub fn bgp(instance: Instance) -> Bgp {
        Bgp::default().add_instance(instance)
    }
}
