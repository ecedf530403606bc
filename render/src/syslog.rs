// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: syslog

use crate::builder::{ConfigBuilder, Render};
use config::cfg::syslog::{AlarmCause, CorrelatorRule, HostVrf, SourceInterfaceValue, Syslog};

const SEVERITY_NAMES: [&str; 8] = [
    "emergencies",
    "alerts",
    "critical",
    "errors",
    "warnings",
    "notifications",
    "info",
    "debugging",
];

/// CLI keyword of a syslog severity, or the number if it has none
fn severity(level: u32) -> String {
    usize::try_from(level)
        .ok()
        .and_then(|index| SEVERITY_NAMES.get(index))
        .map_or_else(|| level.to_string(), |name| (*name).to_owned())
}

fn alarm(cause: &AlarmCause) -> String {
    format!("{} {} {}", cause.category, cause.group, cause.message_code)
}

impl Render for HostVrf {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        for (address, level) in self.hosts() {
            let mut line = format!("logging {address} vrf {}", self.vrf_name);
            if let Some(level) = level {
                line += &format!(" severity {}", severity(level));
            }
            cfg += line;
        }
        cfg
    }
}

impl Render for SourceInterfaceValue {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        let iface = &self.src_interface_name_value;
        if self.vrfs().is_empty() {
            cfg += format!("logging source-interface {iface}");
        }
        for vrf in self.vrfs() {
            if vrf.vrf_name == "default" {
                cfg += format!("logging source-interface {iface}");
            } else {
                cfg += format!("logging source-interface {iface} vrf {}", vrf.vrf_name);
            }
        }
        cfg
    }
}

impl Render for CorrelatorRule {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        cfg.open(format!("logging correlator rule {} type nonstateful", self.name));
        if let Some(rule) = &self.non_stateful {
            if let Some(timeout) = rule.timeout {
                cfg += format!("timeout {timeout}");
            }
            if let Some(timeout) = rule.timeout_root_cause {
                cfg += format!("timeout-rootcause {timeout}");
            }
            if let Some(cause) = &rule.root_cause {
                cfg += format!("rootcause {}", alarm(cause));
            }
        }
        if !self.non_root_causes().is_empty() {
            cfg.open("nonrootcause");
            for cause in self.non_root_causes() {
                cfg += format!("alarm {}", alarm(cause));
            }
            cfg.close();
        }
        cfg.close();
        cfg
    }
}

impl Render for Syslog {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = ConfigBuilder::new();
        if let Some(dscp) = self.dscp() {
            cfg += format!("logging ipv4 dscp {dscp}");
        }
        if let Some(facility) = self.facility() {
            cfg += format!("logging facility {facility}");
        }
        if let Some(prefix) = &self.host_name_prefix {
            cfg += format!("logging hostnameprefix {prefix}");
        }
        if self.suppress_duplicates.is_some() {
            cfg += "logging suppress duplicates";
        }
        self.source_interfaces()
            .iter()
            .for_each(|value| cfg += value.render(&()));
        self.host_vrfs().iter().for_each(|vrf| cfg += vrf.render(&()));
        for rule in self.suppression_rules() {
            cfg.open(format!("logging suppress rule {}", rule.name));
            cfg.close();
        }
        for rule in self.correlator_rules() {
            cfg += rule.render(&());
        }
        for rule in self.correlator_rules().iter().filter(|r| r.is_applied_to_all()) {
            cfg.open(format!("logging correlator apply rule {}", rule.name));
            cfg += "all-of-router";
            cfg.close();
        }
        if let Some(size) = self.correlator_buffer_size() {
            cfg += format!("logging correlator buffer-size {size}");
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Rendered;
    use config::cfg::syslog::{Facility, LoggingDscpValue, LoggingTos};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty() {
        assert_eq!(Syslog::default().rendered(), "");
    }

    #[test]
    fn test_severity_names() {
        assert_eq!(severity(0), "emergencies");
        assert_eq!(severity(6), "info");
        assert_eq!(severity(7), "debugging");
        assert_eq!(severity(9), "9");
    }

    #[test]
    fn test_hosts_and_globals() {
        let syslog = Syslog::default()
            .set_dscp(Some(LoggingTos::Dscp), LoggingDscpValue::Cs6)
            .set_facility(Facility::Local7)
            .set_host_name_prefix("PE1")
            .set_suppress_duplicates()
            .add_source_interface("Loopback0", &["default", "mgmt"])
            .add_host_vrf(
                HostVrf::new("default")
                    .add_ipv6("2001:db8::1", 3)
                    .add_ipv4("10.0.0.1", 6),
            );
        let expected = [
            "logging ipv4 dscp cs6",
            "logging facility local7",
            "logging hostnameprefix PE1",
            "logging suppress duplicates",
            "logging source-interface Loopback0",
            "logging source-interface Loopback0 vrf mgmt",
            "logging 10.0.0.1 vrf default severity info",
            "logging 2001:db8::1 vrf default severity errors",
        ];
        assert_eq!(syslog.rendered(), expected.join("\n"));
    }

    #[test]
    fn test_correlation() {
        let rule = CorrelatorRule::non_stateful("LINK", 5000, AlarmCause::new("L2", "SONET", "ALARM"))
            .set_timeout_root_cause(3000)
            .add_non_root_cause(AlarmCause::new("L2", "IFMGR", "STATECHANGE"))
            .add_non_root_cause(AlarmCause::new("L2", "LINK", "UPDOWN"))
            .set_applied_to_all();
        let syslog = Syslog::default()
            .add_suppression_rule("FLAP")
            .add_correlator_rule(rule)
            .set_correlator_buffer_size(1024);
        let expected = [
            "logging suppress rule FLAP",
            "!",
            "logging correlator rule LINK type nonstateful",
            " timeout 5000",
            " timeout-rootcause 3000",
            " rootcause L2 SONET ALARM",
            " nonrootcause",
            "  alarm L2 IFMGR STATECHANGE",
            "  alarm L2 LINK UPDOWN",
            " !",
            "!",
            "logging correlator apply rule LINK",
            " all-of-router",
            "!",
            "logging correlator buffer-size 1024",
        ];
        assert_eq!(syslog.rendered(), expected.join("\n"));
    }
}
