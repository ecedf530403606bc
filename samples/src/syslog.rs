// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Syslog: remote hosts, source interface and alarm correlation

use config::cfg::syslog::{
    AlarmCause, CorrelatorRule, Facility, HostVrf, LoggingDscpValue, LoggingTos, Syslog,
};

const INFORMATIONAL: u32 = 6;

/// Two IPv4 hosts in the default vrf, suppression rule `duplicates` (sample 52)
#[must_use]
pub fn ipv4_hosts() -> Syslog {
    Syslog::default()
        .set_dscp(None, LoggingDscpValue::Cs2)
        .set_facility(Facility::Local0)
        .add_host_vrf(
            HostVrf::new("default")
                .add_ipv4("10.0.0.1", INFORMATIONAL)
                .add_ipv4("10.0.0.2", INFORMATIONAL),
        )
        .add_source_interface("Loopback0", &["default"])
        .set_host_name_prefix("router")
        .add_suppression_rule("duplicates")
}

/// Two IPv6 hosts in vrf MGMT-PLANE, duplicate suppression (sample 53)
#[must_use]
pub fn ipv6_hosts() -> Syslog {
    Syslog::default()
        .set_dscp(Some(LoggingTos::Dscp), LoggingDscpValue::Cs2)
        .set_facility(Facility::Local0)
        .add_host_vrf(
            HostVrf::new("MGMT-PLANE")
                .add_ipv6("2001:db8::a:1", INFORMATIONAL)
                .add_ipv6("2001:db8::a:2", INFORMATIONAL),
        )
        .add_source_interface("Loopback0", &["default"])
        .set_host_name_prefix("router")
        .set_suppress_duplicates()
}

/// Fan failure correlation applied to the whole router (sample 62)
#[must_use]
pub fn fan_correlation() -> Syslog {
    let rule = CorrelatorRule::non_stateful(
        "RULE2",
        3_600_000,
        AlarmCause::new("PLATFORM", "ENVMON", "FAN_FAIL"),
    )
    .add_non_root_cause(AlarmCause::new("PLATFORM", "ENVMON", "FAN_CLEAR"))
    .add_non_root_cause(AlarmCause::new("PLATFORM", "ENVMON", "FANTRAY_FAIL"))
    .set_timeout_root_cause(360_000)
    .set_applied_to_all();
    Syslog::default()
        .add_correlator_rule(rule)
        .set_correlator_buffer_size(65535)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::encode;
    use pretty_assertions::assert_eq;
    use render::Rendered;

    #[test]
    fn test_ipv4_hosts() {
        let expected = [
            "logging ipv4 dscp cs2",
            "logging facility local0",
            "logging hostnameprefix router",
            "logging source-interface Loopback0",
            "logging 10.0.0.1 vrf default severity info",
            "logging 10.0.0.2 vrf default severity info",
            "logging suppress rule duplicates",
            "!",
        ];
        assert_eq!(ipv4_hosts().rendered(), expected.join("\n"));
    }

    #[test]
    fn test_ipv6_hosts() {
        let expected = [
            "logging ipv4 dscp cs2",
            "logging facility local0",
            "logging hostnameprefix router",
            "logging suppress duplicates",
            "logging source-interface Loopback0",
            "logging 2001:db8::a:1 vrf MGMT-PLANE severity info",
            "logging 2001:db8::a:2 vrf MGMT-PLANE severity info",
        ];
        assert_eq!(ipv6_hosts().rendered(), expected.join("\n"));
    }

    #[test]
    fn test_fan_correlation() {
        let expected = [
            "logging correlator rule RULE2 type nonstateful",
            " timeout 3600000",
            " timeout-rootcause 360000",
            " rootcause PLATFORM ENVMON FAN_FAIL",
            " nonrootcause",
            "  alarm PLATFORM ENVMON FAN_CLEAR",
            "  alarm PLATFORM ENVMON FANTRAY_FAIL",
            " !",
            "!",
            "logging correlator apply rule RULE2",
            " all-of-router",
            "!",
            "logging correlator buffer-size 65535",
        ];
        assert_eq!(fan_correlation().rendered(), expected.join("\n"));
    }

    #[test]
    fn test_encoded_tos() {
        let xml = encode(&ipv6_hosts()).unwrap();
        assert!(xml.contains("<type>dscp</type>"));
        assert!(xml.contains("<dscp>cs2</dscp>"));
        assert!(xml.contains("<suppress-duplicates/>"));
        let xml = encode(&ipv4_hosts()).unwrap();
        assert!(!xml.contains("<type>"));
        assert!(xml.contains("<name>duplicates</name>"));
        assert!(xml.contains(
            "<suppression xmlns=\"http://cisco.com/ns/yang/Cisco-IOS-XR-infra-correlator-cfg\">"
        ));
    }

    #[test]
    fn test_encoded_correlator_namespace() {
        let xml = encode(&fan_correlation()).unwrap();
        let correlator = xml
            .lines()
            .find(|line| line.trim_start().starts_with("<correlator"))
            .unwrap();
        assert!(correlator.contains("Cisco-IOS-XR-infra-correlator-cfg"));
    }
}
