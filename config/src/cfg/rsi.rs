// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Cisco-IOS-XR-infra-rsi-cfg: VRFs, their address families and route targets

use crate::cfg::bgp::BgpCfg;
use crate::datatypes::AsPair;
use crate::errors::ConfigError;
use crate::yang::{Empty, Xmlns, YangEntity, entries};
use serde::{Deserialize, Serialize};

yang_list!(
    /// Root of the VRF configuration
    Vrfs,
    "vrf",
    Vrf
);

impl YangEntity for Vrfs {
    const NAME: &'static str = "vrfs";
    const NAMESPACE: &'static str = "http://cisco.com/ns/yang/Cisco-IOS-XR-infra-rsi-cfg";
}

yang_enum!(VrfAddressFamily {
    Ipv4 => "ipv4",
    Ipv6 => "ipv6",
});

yang_enum!(VrfSubAddressFamily {
    Unicast => "unicast",
    Multicast => "multicast",
});

yang_enum!(RouteTargetType {
    As => "as",
    FourByteAs => "four-byte-as",
    Ipv4Address => "ipv4-address",
});

/// Which list of route targets an entry goes to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTargetDirection {
    Import,
    Export,
}

/// Case-insensitive parse of an address family name (ipv4, ipv6).
pub fn parse_af(name: &str) -> Result<VrfAddressFamily, ConfigError> {
    VrfAddressFamily::from_yang(&name.to_lowercase())
        .ok_or_else(|| ConfigError::InvalidAfName(name.to_owned()))
}

/// Case-insensitive parse of a sub-address family name (unicast, multicast).
pub fn parse_saf(name: &str) -> Result<VrfSubAddressFamily, ConfigError> {
    VrfSubAddressFamily::from_yang(&name.to_lowercase())
        .ok_or_else(|| ConfigError::InvalidSafName(name.to_owned()))
}

/// Case-insensitive parse of a route target direction (import, export).
pub fn parse_direction(name: &str) -> Result<RouteTargetDirection, ConfigError> {
    match name.to_lowercase().as_str() {
        "import" => Ok(RouteTargetDirection::Import),
        "export" => Ok(RouteTargetDirection::Export),
        _ => Err(ConfigError::InvalidDirection(name.to_owned())),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Vrf {
    pub vrf_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afs: Option<Afs>,
}

impl Vrf {
    #[must_use]
    pub fn new(vrf_name: &str) -> Self {
        Self {
            vrf_name: vrf_name.to_owned(),
            create: Some(Empty),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn set_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
    #[must_use]
    pub fn add_af(mut self, af: Af) -> Self {
        self.afs.get_or_insert_with(Default::default).items.push(af);
        self
    }
    #[must_use]
    pub fn afs(&self) -> &[Af] {
        entries(self.afs.as_ref())
    }
}

yang_list!(Afs, "af", Af);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Af {
    pub af_name: VrfAddressFamily,
    pub saf_name: VrfSubAddressFamily,
    pub topology_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp: Option<AfBgp>,
}

impl Af {
    #[must_use]
    pub fn new(af_name: VrfAddressFamily, saf_name: VrfSubAddressFamily) -> Self {
        Self {
            af_name,
            saf_name,
            topology_name: "default".to_owned(),
            create: Some(Empty),
            bgp: None,
        }
    }
    #[must_use]
    pub fn add_route_target(mut self, direction: RouteTargetDirection, rt: RouteTarget) -> Self {
        let bgp = self.bgp.get_or_insert_with(Default::default);
        let targets = match direction {
            RouteTargetDirection::Import => &mut bgp.import_route_targets,
            RouteTargetDirection::Export => &mut bgp.export_route_targets,
        };
        targets
            .get_or_insert_with(Default::default)
            .route_targets
            .get_or_insert_with(Default::default)
            .items
            .push(rt);
        self
    }
    /// Route targets of one direction, in configuration order.
    #[must_use]
    pub fn route_targets(&self, direction: RouteTargetDirection) -> &[RouteTarget] {
        let targets = self.bgp.as_ref().and_then(|bgp| match direction {
            RouteTargetDirection::Import => bgp.import_route_targets.as_ref(),
            RouteTargetDirection::Export => bgp.export_route_targets.as_ref(),
        });
        entries(targets.and_then(|t| t.route_targets.as_ref()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AfBgp {
    #[serde(rename = "@xmlns", default)]
    pub xmlns: Xmlns<BgpCfg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_route_targets: Option<RouteTargetTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_route_targets: Option<RouteTargetTable>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RouteTargetTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_targets: Option<RouteTargets>,
}

yang_list!(RouteTargets, "route-target", RouteTarget);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RouteTarget {
    #[serde(rename = "type")]
    pub type_: RouteTargetType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub as_or_four_byte_as: Vec<AsOrFourByteAs>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ipv4_address: Vec<RouteTargetAddress>,
}

impl RouteTarget {
    /// A 2-byte AS route target `AS:INDEX`.
    #[must_use]
    pub fn from_as(asn: AsPair) -> Self {
        Self {
            type_: RouteTargetType::As,
            as_or_four_byte_as: vec![AsOrFourByteAs {
                as_xx: 0,
                as_: asn.as_xx,
                as_index: asn.as_yy,
                stitching_rt: 0,
            }],
            ipv4_address: vec![],
        }
    }
    /// An IPv4 address route target `ADDRESS:INDEX`.
    #[must_use]
    pub fn from_address(address: &str, address_index: u32) -> Self {
        Self {
            type_: RouteTargetType::Ipv4Address,
            as_or_four_byte_as: vec![],
            ipv4_address: vec![RouteTargetAddress {
                address: address.to_owned(),
                address_index,
                stitching_rt: 0,
            }],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AsOrFourByteAs {
    pub as_xx: u32,
    #[serde(rename = "as")]
    pub as_: u32,
    pub as_index: u32,
    pub stitching_rt: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RouteTargetAddress {
    pub address: String,
    pub address_index: u32,
    pub stitching_rt: u32,
}
