// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Create and read of models on a device

use crate::codec::{from_xml, to_xml};
use crate::errors::ProviderError;
use crate::netconf::{CAP_CANDIDATE, NetconfRpc};
use config::YangEntity;
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, info};

use tracectl::trace_target;
trace_target!("crud", LevelFilter::WARN, &["provider", "crud"]);

/// The element named `name` inside the `<data>` of a reply, if any
fn data_element<'a>(reply: &'a str, name: &str) -> Result<Option<&'a str>, ProviderError> {
    let malformed = |e: quick_xml::Error| ProviderError::MalformedReply(e.to_string());
    let mut reader = Reader::from_str(reply);
    let mut in_data = false;
    loop {
        let start = usize::try_from(reader.buffer_position()).unwrap_or(usize::MAX);
        match reader.read_event().map_err(malformed)? {
            Event::Start(e) if e.local_name().as_ref() == b"data" => in_data = true,
            Event::Empty(e) if e.local_name().as_ref() == b"data" => return Ok(None),
            Event::Start(e) if in_data && e.local_name().as_ref() == name.as_bytes() => {
                reader.read_to_end(e.name()).map_err(malformed)?;
                let end = usize::try_from(reader.buffer_position()).unwrap_or(usize::MAX);
                return Ok(reply.get(start..end));
            }
            Event::Empty(e) if in_data && e.local_name().as_ref() == name.as_bytes() => {
                return Ok(None);
            }
            Event::End(e) if e.local_name().as_ref() == b"data" => return Ok(None),
            Event::Eof => {
                return Err(ProviderError::MalformedReply(
                    "reply without data".to_owned(),
                ));
            }
            _ => {}
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CrudService;

impl CrudService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Merges `entity` into the configuration of the device. Devices with a
    /// candidate datastore get it there and then a commit.
    pub fn create<P: NetconfRpc, T: YangEntity>(
        &self,
        provider: &mut P,
        entity: &T,
    ) -> Result<(), ProviderError> {
        let config = to_xml(entity, false)?;
        let target = if provider.has_capability(CAP_CANDIDATE) {
            "candidate"
        } else {
            "running"
        };
        info!("Creating {} in {target}", T::NAME);
        provider.rpc(&format!(
            "<edit-config><target><{target}/></target><config>{config}</config></edit-config>"
        ))?;
        if target == "candidate" {
            provider.rpc("<commit/>")?;
        }
        Ok(())
    }

    /// Reads the part of the device state selected by `filter`. Configuration
    /// models come from the running datastore, operational ones from `get`.
    /// A reply without the model yields its default, empty value.
    pub fn read<P: NetconfRpc, T: YangEntity>(
        &self,
        provider: &mut P,
        filter: &T,
    ) -> Result<T, ProviderError> {
        let filter = to_xml(filter, false)?;
        let operation = if T::IS_CONFIG {
            format!(
                "<get-config><source><running/></source><filter type=\"subtree\">{filter}</filter></get-config>"
            )
        } else {
            format!("<get><filter type=\"subtree\">{filter}</filter></get>")
        };
        info!("Reading {}", T::NAME);
        let reply = provider.rpc(&operation)?;
        match data_element(&reply, T::NAME)? {
            Some(element) => {
                debug!("Decoding {} bytes of {}", element.len(), T::NAME);
                from_xml(element)
            }
            None => Ok(T::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netconf::CAP_BASE;
    use crate::netconf::tests::{reply, sent, server_hello, session};
    use config::cfg::ospf::{Ospf, Process};
    use config::oper::bgp::Bgp;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    const OSPF_NS: &str = "http://cisco.com/ns/yang/Cisco-IOS-XR-ipv4-ospf-cfg";

    #[test]
    fn test_create_in_candidate() {
        let mut session = session(&[
            server_hello(&[CAP_BASE, CAP_CANDIDATE]),
            reply(1, "<ok/>"),
            reply(2, "<ok/>"),
        ]);
        let ospf = Ospf::default().add_process(Process::new("1"));
        CrudService::new().create(&mut session, &ospf).unwrap();
        let sent = sent(&session);
        assert_eq!(sent.len(), 3);
        assert!(sent[1].contains("<edit-config><target><candidate/></target><config><ospf xmlns="));
        assert!(sent[1].contains("<process-name>1</process-name>"));
        assert!(sent[2].contains("<commit/>"));
    }

    #[test]
    #[traced_test]
    fn test_create_in_running() {
        let mut session = session(&[server_hello(&[CAP_BASE]), reply(1, "<ok/>")]);
        CrudService::new().create(&mut session, &Ospf::default()).unwrap();
        let sent = sent(&session);
        assert_eq!(sent.len(), 2);
        assert!(sent[1].contains("<target><running/></target>"));
        assert!(logs_contain("Creating ospf in running"));
    }

    #[test]
    fn test_read_config() {
        let data = format!(
            "<data><ospf xmlns=\"{OSPF_NS}\"><processes><process><process-name>CORE</process-name></process></processes></ospf></data>"
        );
        let mut session = session(&[server_hello(&[CAP_BASE]), reply(1, &data)]);
        let ospf = CrudService::new().read(&mut session, &Ospf::default()).unwrap();
        assert_eq!(ospf.processes().len(), 1);
        assert_eq!(ospf.processes()[0].process_name, "CORE");
        let sent = sent(&session);
        assert!(sent[1].contains("<get-config><source><running/></source><filter type=\"subtree\"><ospf"));
    }

    #[test]
    fn test_read_oper_empty() {
        let mut session = session(&[server_hello(&[CAP_BASE]), reply(1, "<data/>")]);
        let bgp = CrudService::new().read(&mut session, &Bgp::default()).unwrap();
        assert!(bgp.instances().is_empty());
        let sent = sent(&session);
        assert!(sent[1].contains("<get><filter type=\"subtree\"><bgp"));
    }

    #[test]
    fn test_data_element() {
        let reply = "<rpc-reply><data><a><x/></a><b>1</b></data></rpc-reply>";
        assert_eq!(data_element(reply, "b").unwrap(), Some("<b>1</b>"));
        assert_eq!(data_element(reply, "c").unwrap(), None);
        assert!(data_element("<rpc-reply><ok/></rpc-reply>", "b").is_err());
    }
}
