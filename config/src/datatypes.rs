// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Types shared by several models

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::net::Ipv4Addr;
use std::str::FromStr;

yang_code!(
    /// BGP address family, numbered as in the IOS-XR BGP datatypes module.
    BgpAddressFamily {
        IPV4_UNICAST = 0 => "ipv4-unicast",
        IPV4_MULTICAST = 1 => "ipv4-multicast",
        IPV4_LABELED_UNICAST = 2 => "ipv4-labeled-unicast",
        IPV4_TUNNEL = 3 => "ipv4-tunnel",
        VPNV4_UNICAST = 4 => "vpnv4-unicast",
        IPV6_UNICAST = 5 => "ipv6-unicast",
        IPV6_MULTICAST = 6 => "ipv6-multicast",
        IPV6_LABELED_UNICAST = 7 => "ipv6-labeled-unicast",
        VPNV6_UNICAST = 8 => "vpnv6-unicast",
        IPV4_MDT = 9 => "ipv4-mdt",
        L2VPN_VPLS = 10 => "l2vpn-vpls",
        IPV4_RT_FILTER = 11 => "ipv4-rt-filter",
        IPV4_MVPN = 12 => "ipv4-mvpn",
        IPV6_MVPN = 13 => "ipv6-mvpn",
        L2VPN_EVPN = 14 => "l2vpn-evpn",
        LINK_STATE = 15 => "link-state-link-state",
    }
);

/// A 4-byte AS number given as its high (`as-xx`) and low (`as-yy`) 16-bit halves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AsPair {
    pub as_xx: u32,
    pub as_yy: u32,
}

impl AsPair {
    #[must_use]
    pub fn new(as_xx: u32, as_yy: u32) -> Self {
        Self { as_xx, as_yy }
    }
}

/// asplain when the high half is zero, asdot otherwise
impl Display for AsPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_as(f, self.as_xx, self.as_yy)
    }
}

pub(crate) fn fmt_as(f: &mut std::fmt::Formatter<'_>, high: u32, low: u32) -> std::fmt::Result {
    if high == 0 {
        write!(f, "{low}")
    } else {
        write!(f, "{high}.{low}")
    }
}

/// Parses `AS:INDEX`, the form taken by route targets on the command line.
impl FromStr for AsPair {
    type Err = ConfigError;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let err = || ConfigError::InvalidAsFormat(input.to_owned());
        let (high, low) = input.split_once(':').ok_or_else(err)?;
        let as_xx = high.trim().parse().map_err(|_| err())?;
        let as_yy = low.trim().parse().map_err(|_| err())?;
        Ok(Self { as_xx, as_yy })
    }
}

/// Prefix length of a dotted IPv4 netmask such as `255.255.255.0`.
pub fn prefix_length(netmask: &str) -> Result<u8, ConfigError> {
    let err = || ConfigError::InvalidNetmask(netmask.to_owned());
    let bits = u32::from(netmask.trim().parse::<Ipv4Addr>().map_err(|_| err())?);
    if bits.leading_ones() + bits.trailing_zeros() != 32 {
        return Err(err());
    }
    u8::try_from(bits.leading_ones()).map_err(|_| err())
}

yang_enum!(
    /// Permit or deny, for access and prefix list entries
    AclGrant {
        Permit => "permit",
        Deny => "deny",
    }
);
