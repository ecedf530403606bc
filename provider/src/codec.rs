// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Encoding and decoding of models, without a device

use crate::errors::ProviderError;
use config::YangEntity;
use quick_xml::se::Serializer;
use std::str::FromStr;
use tracing::debug;

use tracectl::trace_target;
trace_target!("codec", LevelFilter::WARN, &["provider", "codec"]);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EncodingFormat {
    #[default]
    Xml,
}

impl FromStr for EncodingFormat {
    type Err = ProviderError;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            _ => Err(ProviderError::UnsupportedEncoding(name.to_owned())),
        }
    }
}

/// How [`CodecService`] writes payloads
#[derive(Clone, Debug)]
pub struct CodecServiceProvider {
    encoding: EncodingFormat,
    pretty: bool,
}

impl CodecServiceProvider {
    #[must_use]
    pub fn new(encoding: EncodingFormat) -> Self {
        Self {
            encoding,
            pretty: true,
        }
    }
    #[must_use]
    pub fn set_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
    #[must_use]
    pub fn encoding(&self) -> EncodingFormat {
        self.encoding
    }
    #[must_use]
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Default for CodecServiceProvider {
    fn default() -> Self {
        Self::new(EncodingFormat::Xml)
    }
}

/// Adds the namespace of the model to the root element
fn with_namespace(xml: &str, name: &str, namespace: &str) -> String {
    let open = format!("<{name}");
    match xml.find(&open) {
        Some(at) => {
            let split = at + open.len();
            format!("{} xmlns=\"{namespace}\"{}", &xml[..split], &xml[split..])
        }
        None => xml.to_owned(),
    }
}

pub(crate) fn to_xml<T: YangEntity>(entity: &T, pretty: bool) -> Result<String, ProviderError> {
    let mut xml = String::new();
    let mut ser = Serializer::with_root(&mut xml, Some(T::NAME))
        .map_err(|e| ProviderError::Encode(T::NAME, e.to_string()))?;
    if pretty {
        ser.indent(' ', 2);
    }
    entity
        .serialize(ser)
        .map_err(|e| ProviderError::Encode(T::NAME, e.to_string()))?;
    Ok(with_namespace(&xml, T::NAME, T::NAMESPACE))
}

pub(crate) fn from_xml<T: YangEntity>(xml: &str) -> Result<T, ProviderError> {
    quick_xml::de::from_str(xml).map_err(|e| ProviderError::Decode(T::NAME, e.to_string()))
}

/// Stateless codec: a model in, a payload out, and back.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodecService;

impl CodecService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
    pub fn encode<T: YangEntity>(
        &self,
        provider: &CodecServiceProvider,
        entity: &T,
    ) -> Result<String, ProviderError> {
        match provider.encoding {
            EncodingFormat::Xml => {
                let payload = to_xml(entity, provider.pretty)?;
                debug!("Encoded {} ({} bytes)", T::NAME, payload.len());
                Ok(payload)
            }
        }
    }
    pub fn decode<T: YangEntity>(
        &self,
        provider: &CodecServiceProvider,
        payload: &str,
    ) -> Result<T, ProviderError> {
        match provider.encoding {
            EncodingFormat::Xml => {
                debug!("Decoding {} ({} bytes)", T::NAME, payload.len());
                from_xml(payload)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::cfg::acl::{Access, AccessListEntry, Ipv4AclAndPrefixList};
    use config::cfg::ospf::{Area, Ospf, Process};
    use config::cfg::rsi::{
        Af, RouteTarget, RouteTargetDirection, Vrf, VrfAddressFamily, VrfSubAddressFamily, Vrfs,
    };
    use config::cfg::syslog::Syslog;
    use config::datatypes::AclGrant;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encoding_names() {
        assert_eq!("XML".parse::<EncodingFormat>().ok(), Some(EncodingFormat::Xml));
        assert!(matches!(
            "json".parse::<EncodingFormat>(),
            Err(ProviderError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn test_namespace_on_root() {
        assert_eq!(
            with_namespace("<ospf><process/></ospf>", "ospf", "urn:x"),
            "<ospf xmlns=\"urn:x\"><process/></ospf>"
        );
        assert_eq!(with_namespace("<ospf/>", "ospf", "urn:x"), "<ospf xmlns=\"urn:x\"/>");
    }

    #[test]
    fn test_encode_compact() {
        let acls = Ipv4AclAndPrefixList::default()
            .add_access_list(Access::new("ACL1").add_entry(AccessListEntry::remark(10, "hosts")));
        let provider = CodecServiceProvider::default().set_pretty(false);
        let xml = CodecService::new().encode(&provider, &acls).unwrap();
        assert!(xml.starts_with(
            "<ipv4-acl-and-prefix-list xmlns=\"http://cisco.com/ns/yang/Cisco-IOS-XR-ipv4-acl-cfg\">"
        ));
        assert!(xml.contains("<access-list-name>ACL1</access-list-name>"));
        assert!(xml.contains("<remark>hosts</remark>"));
        assert!(xml.ends_with("</ipv4-acl-and-prefix-list>"));
    }

    #[test]
    fn test_decode_what_was_encoded() {
        let ospf = Ospf::default().add_process(
            Process::new("CORE")
                .set_router_id("172.16.255.1")
                .add_area(Area::new(0)),
        );
        let acls = Ipv4AclAndPrefixList::default().add_access_list(
            Access::new("ACL2")
                .add_entry(AccessListEntry::grant(20, AclGrant::Deny).set_source("10.0.0.0", "0.255.255.255")),
        );
        let codec = CodecService::new();
        let provider = CodecServiceProvider::default();
        let xml = codec.encode(&provider, &ospf).unwrap();
        assert_eq!(codec.decode::<Ospf>(&provider, &xml).unwrap(), ospf);
        let xml = codec.encode(&provider, &acls).unwrap();
        assert_eq!(codec.decode::<Ipv4AclAndPrefixList>(&provider, &xml).unwrap(), acls);
    }

    fn line_of<'a>(xml: &'a str, element: &str) -> &'a str {
        let open = format!("<{element}");
        xml.lines()
            .find(|line| line.trim_start().starts_with(&open))
            .unwrap_or_default()
    }

    #[test]
    fn test_augmented_containers_carry_their_namespace() {
        const CORRELATOR_NS: &str = "http://cisco.com/ns/yang/Cisco-IOS-XR-infra-correlator-cfg";
        let codec = CodecService::new();
        let provider = CodecServiceProvider::default();

        let syslog = Syslog::default()
            .add_suppression_rule("duplicates")
            .set_correlator_buffer_size(65535);
        let xml = codec.encode(&provider, &syslog).unwrap();
        assert_eq!(
            line_of(&xml, "syslog"),
            "<syslog xmlns=\"http://cisco.com/ns/yang/Cisco-IOS-XR-infra-syslog-cfg\">"
        );
        assert_eq!(
            line_of(&xml, "suppression").trim(),
            format!("<suppression xmlns=\"{CORRELATOR_NS}\">")
        );
        assert_eq!(
            line_of(&xml, "correlator").trim(),
            format!("<correlator xmlns=\"{CORRELATOR_NS}\">")
        );
        assert_eq!(codec.decode::<Syslog>(&provider, &xml).unwrap(), syslog);

        let vrfs = Vrfs::from(vec![Vrf::new("BLUE").add_af(
            Af::new(VrfAddressFamily::Ipv4, VrfSubAddressFamily::Unicast)
                .add_route_target(RouteTargetDirection::Import, RouteTarget::from_address("10.0.0.1", 7)),
        )]);
        let xml = codec.encode(&provider, &vrfs).unwrap();
        assert_eq!(
            line_of(&xml, "bgp").trim(),
            "<bgp xmlns=\"http://cisco.com/ns/yang/Cisco-IOS-XR-ipv4-bgp-cfg\">"
        );
    }

    #[test]
    fn test_decode_garbage() {
        let provider = CodecServiceProvider::default();
        assert!(matches!(
            CodecService::new().decode::<Ospf>(&provider, "<ospf><processes>"),
            Err(ProviderError::Decode("ospf", _))
        ));
    }
}
