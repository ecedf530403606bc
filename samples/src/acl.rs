// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Access and prefix lists

use config::cfg::acl::{Access, AccessListEntry, Ipv4AclAndPrefixList, Prefix, PrefixListEntry};
use config::datatypes::AclGrant;

/// Access list ACL2 permitting three hosts (sample 32)
#[must_use]
pub fn host_access_list() -> Ipv4AclAndPrefixList {
    let hosts = ["172.31.255.1", "172.31.255.33", "172.31.255.65"];
    let mut access =
        Access::new("ACL2").add_entry(AccessListEntry::remark(10, "allow multiple hosts"));
    for (seq, host) in (20..).step_by(10).zip(hosts) {
        access = access
            .add_entry(AccessListEntry::grant(seq, AclGrant::Permit).set_source(host, "0.0.0.0"));
    }
    let access = access.add_entry(AccessListEntry::grant(50, AclGrant::Deny));
    Ipv4AclAndPrefixList::default().add_access_list(access)
}

/// Prefix list PREFIX-LIST2 with two plain prefixes (sample 82)
#[must_use]
pub fn prefix_list() -> Ipv4AclAndPrefixList {
    let prefix = Prefix::new("PREFIX-LIST2")
        .add_entry(PrefixListEntry::remark(10, "allow multiple prefixes"))
        .add_entry(PrefixListEntry::grant(20, AclGrant::Permit, "172.16.0.0", "255.255.0.0"))
        .add_entry(PrefixListEntry::grant(30, AclGrant::Permit, "172.17.128.0", "255.255.255.0"));
    Ipv4AclAndPrefixList::default().add_prefix_list(prefix)
}

/// Prefix list PREFIX-LIST4 matching length ranges (sample 86)
#[must_use]
pub fn prefix_ranges() -> Ipv4AclAndPrefixList {
    let prefix = Prefix::new("PREFIX-LIST4")
        .add_entry(PrefixListEntry::remark(10, "allow prefix ranges"))
        .add_entry(
            PrefixListEntry::grant(20, AclGrant::Permit, "172.17.0.0", "255.255.0.0")
                .set_min_length(24),
        )
        .add_entry(
            PrefixListEntry::grant(30, AclGrant::Permit, "172.18.0.0", "255.255.0.0")
                .set_max_length(24),
        )
        .add_entry(
            PrefixListEntry::grant(40, AclGrant::Permit, "172.19.0.0", "255.255.0.0")
                .set_max_length(20)
                .set_min_length(28),
        );
    Ipv4AclAndPrefixList::default().add_prefix_list(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::encode;
    use pretty_assertions::assert_eq;
    use render::Rendered;

    #[test]
    fn test_host_access_list() {
        let expected = [
            "ipv4 access-list ACL2",
            " 10 remark allow multiple hosts",
            " 20 permit ipv4 host 172.31.255.1 any",
            " 30 permit ipv4 host 172.31.255.33 any",
            " 40 permit ipv4 host 172.31.255.65 any",
            " 50 deny ipv4 any any",
            "!",
        ];
        assert_eq!(host_access_list().rendered(), expected.join("\n"));
    }

    #[test]
    fn test_prefix_lists() {
        let expected = [
            "ipv4 prefix-list PREFIX-LIST2",
            " 10 remark allow multiple prefixes",
            " 20 permit 172.16.0.0/16",
            " 30 permit 172.17.128.0/24",
            "!",
        ];
        assert_eq!(prefix_list().rendered(), expected.join("\n"));

        let expected = [
            "ipv4 prefix-list PREFIX-LIST4",
            " 10 remark allow prefix ranges",
            " 20 permit 172.17.0.0/16 ge 24",
            " 30 permit 172.18.0.0/16 le 24",
            " 40 permit 172.19.0.0/16 ge 28 le 20",
            "!",
        ];
        assert_eq!(prefix_ranges().rendered(), expected.join("\n"));
    }

    #[test]
    fn test_encoded_entries() {
        let xml = encode(&prefix_ranges()).unwrap();
        assert!(xml.contains("<prefix-list-name>PREFIX-LIST4</prefix-list-name>"));
        assert!(xml.contains("<match-min-length/>"));
        assert!(xml.contains("<min-prefix-length>28</min-prefix-length>"));
        assert!(!xml.contains("<accesses"));
    }
}
