// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Cisco-IOS-XR-ipv4-acl-cfg: IPv4 access lists and prefix lists

use crate::datatypes::AclGrant;
use crate::yang::{Empty, YangEntity, entries};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ipv4AclAndPrefixList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accesses: Option<Accesses>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Prefixes>,
}

impl YangEntity for Ipv4AclAndPrefixList {
    const NAME: &'static str = "ipv4-acl-and-prefix-list";
    const NAMESPACE: &'static str = "http://cisco.com/ns/yang/Cisco-IOS-XR-ipv4-acl-cfg";
}

impl Ipv4AclAndPrefixList {
    #[must_use]
    pub fn add_access_list(mut self, access: Access) -> Self {
        self.accesses
            .get_or_insert_with(Default::default)
            .items
            .push(access);
        self
    }
    #[must_use]
    pub fn add_prefix_list(mut self, prefix: Prefix) -> Self {
        self.prefixes
            .get_or_insert_with(Default::default)
            .items
            .push(prefix);
        self
    }
    #[must_use]
    pub fn access_lists(&self) -> &[Access] {
        entries(self.accesses.as_ref())
    }
    #[must_use]
    pub fn prefix_lists(&self) -> &[Prefix] {
        entries(self.prefixes.as_ref())
    }
}

yang_list!(Accesses, "access", Access);
yang_list!(AccessListEntries, "access-list-entry", AccessListEntry);
yang_list!(Prefixes, "prefix", Prefix);
yang_list!(PrefixListEntries, "prefix-list-entry", PrefixListEntry);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Access {
    pub access_list_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_list_entries: Option<AccessListEntries>,
}

impl Access {
    #[must_use]
    pub fn new(access_list_name: &str) -> Self {
        Self {
            access_list_name: access_list_name.to_owned(),
            access_list_entries: None,
        }
    }
    #[must_use]
    pub fn add_entry(mut self, entry: AccessListEntry) -> Self {
        self.access_list_entries
            .get_or_insert_with(Default::default)
            .items
            .push(entry);
        self
    }
    #[must_use]
    pub fn entries(&self) -> &[AccessListEntry] {
        entries(self.access_list_entries.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AccessListEntry {
    pub sequence_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant: Option<AclGrant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_network: Option<SourceNetwork>,
}

impl AccessListEntry {
    #[must_use]
    pub fn remark(sequence_number: u32, remark: &str) -> Self {
        Self {
            sequence_number,
            remark: Some(remark.to_owned()),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn grant(sequence_number: u32, grant: AclGrant) -> Self {
        Self {
            sequence_number,
            grant: Some(grant),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn set_source(mut self, address: &str, wild_card_bits: &str) -> Self {
        self.source_network = Some(SourceNetwork {
            source_address: Some(address.to_owned()),
            source_wild_card_bits: Some(wild_card_bits.to_owned()),
        });
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceNetwork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_wild_card_bits: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Prefix {
    pub prefix_list_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_list_entries: Option<PrefixListEntries>,
}

impl Prefix {
    #[must_use]
    pub fn new(prefix_list_name: &str) -> Self {
        Self {
            prefix_list_name: prefix_list_name.to_owned(),
            prefix_list_entries: None,
        }
    }
    #[must_use]
    pub fn add_entry(mut self, entry: PrefixListEntry) -> Self {
        self.prefix_list_entries
            .get_or_insert_with(Default::default)
            .items
            .push(entry);
        self
    }
    #[must_use]
    pub fn entries(&self) -> &[PrefixListEntry] {
        entries(self.prefix_list_entries.as_ref())
    }
}

/// A prefix list entry. Length bounds only apply when their match marker is set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PrefixListEntry {
    pub sequence_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant: Option<AclGrant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netmask: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_max_length: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_prefix_length: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_min_length: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_prefix_length: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl PrefixListEntry {
    #[must_use]
    pub fn remark(sequence_number: u32, remark: &str) -> Self {
        Self {
            sequence_number,
            remark: Some(remark.to_owned()),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn grant(sequence_number: u32, grant: AclGrant, prefix: &str, netmask: &str) -> Self {
        Self {
            sequence_number,
            grant: Some(grant),
            prefix: Some(prefix.to_owned()),
            netmask: Some(netmask.to_owned()),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn set_min_length(mut self, length: u8) -> Self {
        self.min_prefix_length = Some(length);
        self.match_min_length = Some(Empty);
        self
    }
    #[must_use]
    pub fn set_max_length(mut self, length: u8) -> Self {
        self.max_prefix_length = Some(length);
        self.match_max_length = Some(Empty);
        self
    }
    /// Lower bound, when matched on
    #[must_use]
    pub fn min_length(&self) -> Option<u8> {
        self.match_min_length.and(self.min_prefix_length)
    }
    /// Upper bound, when matched on
    #[must_use]
    pub fn max_length(&self) -> Option<u8> {
        self.match_max_length.and(self.max_prefix_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds_need_marker() {
        let entry = PrefixListEntry::grant(20, AclGrant::Permit, "172.17.0.0", "255.255.0.0")
            .set_min_length(24);
        assert_eq!(entry.min_length(), Some(24));
        assert_eq!(entry.max_length(), None);
        let unmatched = PrefixListEntry {
            max_prefix_length: Some(20),
            ..entry
        };
        assert_eq!(unmatched.max_length(), None);
    }

    #[test]
    fn test_access_list_entries_order() {
        let acl = Access::new("ACL")
            .add_entry(AccessListEntry::remark(10, "hosts"))
            .add_entry(AccessListEntry::grant(20, AclGrant::Permit).set_source("10.0.0.1", "0.0.0.0"))
            .add_entry(AccessListEntry::grant(30, AclGrant::Deny));
        let seqs: Vec<u32> = acl.entries().iter().map(|e| e.sequence_number).collect();
        assert_eq!(seqs, [10, 20, 30]);
        let lists = Ipv4AclAndPrefixList::default().add_access_list(acl);
        assert_eq!(lists.access_lists().len(), 1);
        assert!(lists.prefix_lists().is_empty());
    }
}
