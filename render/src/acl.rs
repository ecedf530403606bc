// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: IPv4 access lists and prefix lists

use crate::builder::{ConfigBuilder, Render};
use config::cfg::acl::{Access, AccessListEntry, Ipv4AclAndPrefixList, Prefix, PrefixListEntry};
use config::datatypes::prefix_length;
use tracing::debug;

const HOST_WILDCARD: &str = "0.0.0.0";

impl Render for AccessListEntry {
    type Context = ();
    type Output = String;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let seq = self.sequence_number;
        if let Some(remark) = &self.remark {
            return format!("{seq} remark {remark}");
        }
        let mut line = seq.to_string();
        if let Some(grant) = self.grant {
            line += &format!(" {grant}");
        }
        let source = match &self.source_network {
            Some(network) => match (&network.source_address, &network.source_wild_card_bits) {
                (Some(address), Some(wildcard)) if wildcard == HOST_WILDCARD => {
                    format!("host {address}")
                }
                (Some(address), Some(wildcard)) => format!("{address} {wildcard}"),
                (Some(address), None) => format!("host {address}"),
                (None, _) => "any".to_owned(),
            },
            None => "any".to_owned(),
        };
        line + &format!(" ipv4 {source} any")
    }
}

impl Render for Access {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("ipv4 access-list {}", self.access_list_name));
        self.entries()
            .iter()
            .for_each(|entry| cfg += entry.render(&()));
        cfg.close();
        cfg
    }
}

impl Render for PrefixListEntry {
    type Context = ();
    type Output = String;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let seq = self.sequence_number;
        if let Some(remark) = &self.remark {
            return format!("{seq} remark {remark}");
        }
        let prefix = self.prefix.as_deref().unwrap_or_default();
        let netmask = self.netmask.as_deref().unwrap_or_default();
        let length = prefix_length(netmask).map_or_else(
            |e| {
                debug!("Prefix list entry {seq}: {e}");
                netmask.to_owned()
            },
            |length| length.to_string(),
        );
        let mut line = seq.to_string();
        if let Some(grant) = self.grant {
            line += &format!(" {grant}");
        }
        line += &format!(" {prefix}/{length}");
        if let Some(min) = self.min_length() {
            line += &format!(" ge {min}");
        }
        if let Some(max) = self.max_length() {
            line += &format!(" le {max}");
        }
        line
    }
}

impl Render for Prefix {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("ipv4 prefix-list {}", self.prefix_list_name));
        self.entries()
            .iter()
            .for_each(|entry| cfg += entry.render(&()));
        cfg.close();
        cfg
    }
}

impl Render for Ipv4AclAndPrefixList {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        self.access_lists()
            .iter()
            .for_each(|acl| cfg += acl.render(&()));
        self.prefix_lists()
            .iter()
            .for_each(|plist| cfg += plist.render(&()));
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Rendered;
    use config::datatypes::AclGrant;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty() {
        assert_eq!(Ipv4AclAndPrefixList::default().rendered(), "");
    }

    #[test]
    fn test_access_list() {
        let acls = Ipv4AclAndPrefixList::default().add_access_list(
            Access::new("ACL1")
                .add_entry(AccessListEntry::remark(10, "Allow hosts"))
                .add_entry(AccessListEntry::grant(20, AclGrant::Permit).set_source("172.16.0.1", "0.0.0.0"))
                .add_entry(AccessListEntry::grant(30, AclGrant::Permit).set_source("172.16.0.0", "0.0.255.255"))
                .add_entry(AccessListEntry::grant(40, AclGrant::Deny)),
        );
        let expected = [
            "ipv4 access-list ACL1",
            " 10 remark Allow hosts",
            " 20 permit ipv4 host 172.16.0.1 any",
            " 30 permit ipv4 172.16.0.0 0.0.255.255 any",
            " 40 deny ipv4 any any",
            "!",
        ];
        assert_eq!(acls.rendered(), expected.join("\n"));
    }

    #[test]
    fn test_prefix_list() {
        let plists = Ipv4AclAndPrefixList::default().add_prefix_list(
            Prefix::new("PREFIX1")
                .add_entry(PrefixListEntry::remark(10, "Deny default"))
                .add_entry(PrefixListEntry::grant(20, AclGrant::Deny, "0.0.0.0", "0.0.0.0"))
                .add_entry(
                    PrefixListEntry::grant(30, AclGrant::Permit, "172.16.0.0", "255.255.0.0")
                        .set_min_length(24)
                        .set_max_length(32),
                )
                .add_entry(PrefixListEntry::grant(40, AclGrant::Permit, "10.0.0.0", "255.0.255.0")),
        );
        let expected = [
            "ipv4 prefix-list PREFIX1",
            " 10 remark Deny default",
            " 20 deny 0.0.0.0/0",
            " 30 permit 172.16.0.0/16 ge 24 le 32",
            " 40 permit 10.0.0.0/255.0.255.0",
            "!",
        ];
        assert_eq!(plists.rendered(), expected.join("\n"));
    }

    #[test]
    fn test_entries_without_grant() {
        let entry = AccessListEntry {
            sequence_number: 10,
            ..Default::default()
        };
        assert_eq!(entry.render(&()), "10 ipv4 any any");
        let entry = PrefixListEntry {
            sequence_number: 20,
            prefix: Some("10.0.0.0".to_owned()),
            netmask: Some("255.0.0.0".to_owned()),
            ..Default::default()
        };
        assert_eq!(entry.render(&()), "20 10.0.0.0/8");
    }
}
