// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Cisco-IOS-XR-infra-syslog-cfg: remote logging, suppression and correlation

use crate::yang::{Empty, Xmlns, YangEntity, YangModule, entries};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Syslog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<Ipv4Logging>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_facilities: Option<LoggingFacilities>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_server: Option<HostServer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_interface_table: Option<SourceInterfaceTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppression: Option<Suppression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppress_duplicates: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlator: Option<Correlator>,
}

impl YangEntity for Syslog {
    const NAME: &'static str = "syslog";
    const NAMESPACE: &'static str = "http://cisco.com/ns/yang/Cisco-IOS-XR-infra-syslog-cfg";
}

/// Cisco-IOS-XR-infra-correlator-cfg, which augments suppression and
/// correlation into the syslog tree
#[derive(Clone, Copy, Debug)]
pub struct CorrelatorCfg;

impl YangModule for CorrelatorCfg {
    const URI: &'static str = "http://cisco.com/ns/yang/Cisco-IOS-XR-infra-correlator-cfg";
}

yang_enum!(
    LoggingTos {
        Precedence => "precedence",
        Dscp => "dscp",
    }
);

yang_enum!(
    LoggingDscpValue {
        Default => "default",
        Af11 => "af11",
        Af12 => "af12",
        Af13 => "af13",
        Af21 => "af21",
        Af22 => "af22",
        Af23 => "af23",
        Af31 => "af31",
        Af32 => "af32",
        Af33 => "af33",
        Af41 => "af41",
        Af42 => "af42",
        Af43 => "af43",
        Ef => "ef",
        Cs1 => "cs1",
        Cs2 => "cs2",
        Cs3 => "cs3",
        Cs4 => "cs4",
        Cs5 => "cs5",
        Cs6 => "cs6",
        Cs7 => "cs7",
    }
);

yang_enum!(
    Facility {
        Kern => "kern",
        User => "user",
        Mail => "mail",
        Daemon => "daemon",
        Auth => "auth",
        Syslog => "syslog",
        Lpr => "lpr",
        News => "news",
        Uucp => "uucp",
        Cron => "cron",
        Authpriv => "authpriv",
        Ftp => "ftp",
        Local0 => "local0",
        Local1 => "local1",
        Local2 => "local2",
        Local3 => "local3",
        Local4 => "local4",
        Local5 => "local5",
        Local6 => "local6",
        Local7 => "local7",
        Sys9 => "sys9",
        Sys10 => "sys10",
        Sys11 => "sys11",
        Sys12 => "sys12",
        Sys13 => "sys13",
        Sys14 => "sys14",
    }
);

impl Syslog {
    #[must_use]
    pub fn set_dscp(mut self, tos: Option<LoggingTos>, dscp: LoggingDscpValue) -> Self {
        self.ipv4 = Some(Ipv4Logging {
            tos: Some(Tos {
                type_: tos,
                dscp: Some(dscp),
            }),
        });
        self
    }
    #[must_use]
    pub fn set_facility(mut self, facility: Facility) -> Self {
        self.logging_facilities = Some(LoggingFacilities {
            facility_level: Some(facility),
        });
        self
    }
    #[must_use]
    pub fn add_host_vrf(mut self, vrf: HostVrf) -> Self {
        self.host_server
            .get_or_insert_with(Default::default)
            .vrfs
            .get_or_insert_with(Default::default)
            .items
            .push(vrf);
        self
    }
    #[must_use]
    pub fn add_source_interface(mut self, interface: &str, vrfs: &[&str]) -> Self {
        let value = SourceInterfaceValue {
            src_interface_name_value: interface.to_owned(),
            source_interface_vrfs: Some(SourceInterfaceVrfs::from(
                vrfs.iter()
                    .map(|vrf| SourceInterfaceVrf {
                        vrf_name: (*vrf).to_owned(),
                    })
                    .collect::<Vec<_>>(),
            )),
        };
        self.source_interface_table
            .get_or_insert_with(Default::default)
            .source_interface_values
            .get_or_insert_with(Default::default)
            .items
            .push(value);
        self
    }
    #[must_use]
    pub fn set_host_name_prefix(mut self, prefix: &str) -> Self {
        self.host_name_prefix = Some(prefix.to_owned());
        self
    }
    #[must_use]
    pub fn add_suppression_rule(mut self, name: &str) -> Self {
        self.suppression
            .get_or_insert_with(Default::default)
            .rules
            .get_or_insert_with(Default::default)
            .items
            .push(SuppressionRule {
                name: name.to_owned(),
            });
        self
    }
    #[must_use]
    pub fn set_suppress_duplicates(mut self) -> Self {
        self.suppress_duplicates = Some(Empty);
        self
    }
    #[must_use]
    pub fn add_correlator_rule(mut self, rule: CorrelatorRule) -> Self {
        self.correlator
            .get_or_insert_with(Default::default)
            .rules
            .get_or_insert_with(Default::default)
            .items
            .push(rule);
        self
    }
    #[must_use]
    pub fn set_correlator_buffer_size(mut self, size: u32) -> Self {
        self.correlator.get_or_insert_with(Default::default).buffer_size = Some(size);
        self
    }

    #[must_use]
    pub fn dscp(&self) -> Option<LoggingDscpValue> {
        self.ipv4.as_ref()?.tos.as_ref()?.dscp
    }
    #[must_use]
    pub fn facility(&self) -> Option<Facility> {
        self.logging_facilities.as_ref()?.facility_level
    }
    #[must_use]
    pub fn host_vrfs(&self) -> &[HostVrf] {
        entries(self.host_server.as_ref().and_then(|h| h.vrfs.as_ref()))
    }
    #[must_use]
    pub fn source_interfaces(&self) -> &[SourceInterfaceValue] {
        entries(
            self.source_interface_table
                .as_ref()
                .and_then(|t| t.source_interface_values.as_ref()),
        )
    }
    #[must_use]
    pub fn suppression_rules(&self) -> &[SuppressionRule] {
        entries(self.suppression.as_ref().and_then(|s| s.rules.as_ref()))
    }
    #[must_use]
    pub fn correlator_rules(&self) -> &[CorrelatorRule] {
        entries(self.correlator.as_ref().and_then(|c| c.rules.as_ref()))
    }
    #[must_use]
    pub fn correlator_buffer_size(&self) -> Option<u32> {
        self.correlator.as_ref()?.buffer_size
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ipv4Logging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tos: Option<Tos>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Tos {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<LoggingTos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dscp: Option<LoggingDscpValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingFacilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_level: Option<Facility>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HostServer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrfs: Option<HostVrfs>,
}

yang_list!(HostVrfs, "vrf", HostVrf);
yang_list!(Ipv4Hosts, "ipv4", Ipv4Host);
yang_list!(Ipv6Hosts, "ipv6", Ipv6Host);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HostVrf {
    pub vrf_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4s: Option<Ipv4Hosts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6s: Option<Ipv6Hosts>,
}

impl HostVrf {
    #[must_use]
    pub fn new(vrf_name: &str) -> Self {
        Self {
            vrf_name: vrf_name.to_owned(),
            ..Default::default()
        }
    }
    #[must_use]
    pub fn add_ipv4(mut self, address: &str, severity: u32) -> Self {
        self.ipv4s.get_or_insert_with(Default::default).items.push(Ipv4Host {
            address: address.to_owned(),
            ipv4_severity_port: Some(SeverityPort::new(severity)),
        });
        self
    }
    #[must_use]
    pub fn add_ipv6(mut self, address: &str, severity: u32) -> Self {
        self.ipv6s.get_or_insert_with(Default::default).items.push(Ipv6Host {
            address: address.to_owned(),
            ipv6_severity_port: Some(SeverityPort::new(severity)),
        });
        self
    }
    /// IPv4 hosts then IPv6 hosts, as `(address, severity)`
    pub fn hosts(&self) -> impl Iterator<Item = (&str, Option<u32>)> {
        let v4 = entries(self.ipv4s.as_ref()).iter().map(|h| {
            (
                h.address.as_str(),
                h.ipv4_severity_port.as_ref().and_then(|p| p.severity),
            )
        });
        let v6 = entries(self.ipv6s.as_ref()).iter().map(|h| {
            (
                h.address.as_str(),
                h.ipv6_severity_port.as_ref().and_then(|p| p.severity),
            )
        });
        v4.chain(v6)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ipv4Host {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_severity_port: Option<SeverityPort>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ipv6Host {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_severity_port: Option<SeverityPort>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SeverityPort {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl SeverityPort {
    #[must_use]
    pub fn new(severity: u32) -> Self {
        Self {
            severity: Some(severity),
            port: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceInterfaceTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_interface_values: Option<SourceInterfaceValues>,
}

yang_list!(SourceInterfaceValues, "source-interface-value", SourceInterfaceValue);
yang_list!(SourceInterfaceVrfs, "source-interface-vrf", SourceInterfaceVrf);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceInterfaceValue {
    pub src_interface_name_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_interface_vrfs: Option<SourceInterfaceVrfs>,
}

impl SourceInterfaceValue {
    #[must_use]
    pub fn vrfs(&self) -> &[SourceInterfaceVrf] {
        entries(self.source_interface_vrfs.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceInterfaceVrf {
    pub vrf_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Suppression {
    #[serde(rename = "@xmlns", default)]
    pub xmlns: Xmlns<CorrelatorCfg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<SuppressionRules>,
}

yang_list!(SuppressionRules, "rule", SuppressionRule);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SuppressionRule {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Correlator {
    #[serde(rename = "@xmlns", default)]
    pub xmlns: Xmlns<CorrelatorCfg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<CorrelatorRules>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_size: Option<u32>,
}

yang_list!(CorrelatorRules, "rule", CorrelatorRule);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CorrelatorRule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_stateful: Option<NonStateful>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_to: Option<AppliedTo>,
}

impl CorrelatorRule {
    /// A non-stateful rule correlating `root_cause` with the messages
    /// that follow it within `timeout` milliseconds.
    #[must_use]
    pub fn non_stateful(name: &str, timeout: u32, root_cause: AlarmCause) -> Self {
        Self {
            name: name.to_owned(),
            non_stateful: Some(NonStateful {
                timeout: Some(timeout),
                root_cause: Some(root_cause),
                ..Default::default()
            }),
            applied_to: None,
        }
    }
    #[must_use]
    pub fn add_non_root_cause(mut self, cause: AlarmCause) -> Self {
        self.non_stateful
            .get_or_insert_with(Default::default)
            .non_root_causes
            .get_or_insert_with(Default::default)
            .items
            .push(cause);
        self
    }
    #[must_use]
    pub fn set_timeout_root_cause(mut self, timeout: u32) -> Self {
        self.non_stateful
            .get_or_insert_with(Default::default)
            .timeout_root_cause = Some(timeout);
        self
    }
    #[must_use]
    pub fn set_applied_to_all(mut self) -> Self {
        self.applied_to = Some(AppliedTo { all: Some(Empty) });
        self
    }
    #[must_use]
    pub fn non_root_causes(&self) -> &[AlarmCause] {
        entries(
            self.non_stateful
                .as_ref()
                .and_then(|n| n.non_root_causes.as_ref()),
        )
    }
    #[must_use]
    pub fn is_applied_to_all(&self) -> bool {
        self.applied_to.as_ref().is_some_and(|a| a.all.is_some())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NonStateful {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_correlation: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_cause: Option<AlarmCause>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_root_causes: Option<NonRootCauses>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_root_cause: Option<u32>,
}

yang_list!(NonRootCauses, "non-root-cause", AlarmCause);

/// Message identified by category, group and code
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AlarmCause {
    pub category: String,
    pub group: String,
    pub message_code: String,
}

impl AlarmCause {
    #[must_use]
    pub fn new(category: &str, group: &str, message_code: &str) -> Self {
        Self {
            category: category.to_owned(),
            group: group.to_owned(),
            message_code: message_code.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppliedTo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<Empty>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosts_v4_before_v6() {
        let vrf = HostVrf::new("default")
            .add_ipv6("2001:db8::1", 3)
            .add_ipv4("10.0.0.1", 6);
        let hosts: Vec<_> = vrf.hosts().collect();
        assert_eq!(hosts, [("10.0.0.1", Some(6)), ("2001:db8::1", Some(3))]);
    }

    #[test]
    fn test_correlator_rule() {
        let rule = CorrelatorRule::non_stateful("R", 10, AlarmCause::new("A", "B", "C"))
            .add_non_root_cause(AlarmCause::new("A", "B", "D"))
            .set_applied_to_all();
        assert_eq!(rule.non_root_causes().len(), 1);
        assert!(rule.is_applied_to_all());
        let syslog = Syslog::default()
            .add_correlator_rule(rule)
            .set_correlator_buffer_size(1024);
        assert_eq!(syslog.correlator_rules().len(), 1);
        assert_eq!(syslog.correlator_buffer_size(), Some(1024));
    }

    #[test]
    fn test_empty_syslog_accessors() {
        let syslog = Syslog::default();
        assert!(syslog.host_vrfs().is_empty());
        assert!(syslog.source_interfaces().is_empty());
        assert!(syslog.suppression_rules().is_empty());
        assert_eq!(syslog.dscp(), None);
        assert_eq!(syslog.facility(), None);
    }
}
