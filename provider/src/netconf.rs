// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! NETCONF 1.0 sessions over the ssh `netconf` subsystem

use crate::errors::ProviderError;
use crate::device::DeviceUrl;
use quick_xml::Reader;
use quick_xml::events::Event;
use ssh2::{
    Channel, CheckResult, KnownHostFileKind, KnownHostKeyFormat, KnownHosts, Session, Stream,
};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

use tracectl::trace_target;
trace_target!("netconf", LevelFilter::WARN, &["provider", "netconf"]);

/// End of message marker of NETCONF 1.0
pub const DELIMITER: &str = "]]>]]>";
pub const BASE_NS: &str = "urn:ietf:params:xml:ns:netconf:base:1.0";
pub const CAP_BASE: &str = "urn:ietf:params:netconf:base:1.0";
pub const CAP_CANDIDATE: &str = "urn:ietf:params:netconf:capability:candidate:1.0";

/// Environment variable naming the known hosts file
pub const KNOWN_HOSTS_ENV: &str = "XRNC_KNOWN_HOSTS";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Something that runs NETCONF operations
pub trait NetconfRpc {
    /// Sends `operation` inside an `<rpc>` and returns the reply
    fn rpc(&mut self, operation: &str) -> Result<String, ProviderError>;
    fn capabilities(&self) -> &[String];
    fn has_capability(&self, capability: &str) -> bool {
        self.capabilities()
            .iter()
            .any(|cap| cap.split('?').next() == Some(capability))
    }
}

/// Text of every element named `name`
fn texts_of(xml: &str, name: &str) -> Result<Vec<String>, ProviderError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut found = vec![];
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == name.as_bytes() => {
                let text = reader
                    .read_text(e.name())
                    .map_err(|e| ProviderError::MalformedReply(e.to_string()))?;
                found.push(text.trim().to_owned());
            }
            Ok(Event::Eof) => return Ok(found),
            Ok(_) => {}
            Err(e) => return Err(ProviderError::MalformedReply(e.to_string())),
        }
    }
}

/// Fails with [`ProviderError::Rpc`] when the reply carries an `rpc-error`
pub(crate) fn check_reply(reply: &str) -> Result<(), ProviderError> {
    if !reply.contains("rpc-error") {
        return Ok(());
    }
    let messages = texts_of(reply, "error-message")?;
    let message = if messages.is_empty() {
        texts_of(reply, "error-tag")?.join(", ")
    } else {
        messages.join(", ")
    };
    Err(ProviderError::Rpc(message))
}

/// A NETCONF session over any pair of byte streams
pub struct NetconfSession<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    message_id: u64,
    capabilities: Vec<String>,
}

impl<R: BufRead, W: Write> NetconfSession<R, W> {
    /// Exchanges hellos
    pub fn open(reader: R, writer: W) -> Result<Self, ProviderError> {
        let mut session = Self {
            reader,
            writer,
            message_id: 0,
            capabilities: vec![],
        };
        session.send(&format!(
            "{XML_DECL}<hello xmlns=\"{BASE_NS}\"><capabilities><capability>{CAP_BASE}</capability></capabilities></hello>"
        ))?;
        let hello = session.recv()?;
        session.capabilities = texts_of(&hello, "capability")?;
        if session.capabilities.is_empty() {
            return Err(ProviderError::MalformedReply("hello without capabilities".to_owned()));
        }
        debug!("Device advertised {} capabilities", session.capabilities.len());
        Ok(session)
    }

    fn send(&mut self, message: &str) -> Result<(), ProviderError> {
        trace!("Sending: {message}");
        self.writer.write_all(message.as_bytes())?;
        self.writer.write_all(DELIMITER.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    fn recv(&mut self) -> Result<String, ProviderError> {
        let mut buf = vec![];
        loop {
            if self.reader.read_until(b'>', &mut buf)? == 0 {
                return Err(ProviderError::SessionClosed);
            }
            if buf.ends_with(DELIMITER.as_bytes()) {
                buf.truncate(buf.len() - DELIMITER.len());
                let message = String::from_utf8_lossy(&buf).trim().to_owned();
                trace!("Received: {message}");
                return Ok(message);
            }
        }
    }

    /// Ends the session
    pub fn close(&mut self) -> Result<(), ProviderError> {
        let reply = self.rpc("<close-session/>")?;
        debug!("Session closed: {}", reply.contains("<ok"));
        Ok(())
    }

    /// The stream the session writes to
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead, W: Write> NetconfRpc for NetconfSession<R, W> {
    fn rpc(&mut self, operation: &str) -> Result<String, ProviderError> {
        self.message_id += 1;
        self.send(&format!(
            "{XML_DECL}<rpc message-id=\"{}\" xmlns=\"{BASE_NS}\">{operation}</rpc>",
            self.message_id
        ))?;
        let reply = self.recv()?;
        check_reply(&reply)?;
        Ok(reply)
    }
    fn capabilities(&self) -> &[String] {
        &self.capabilities
    }
}

/// How the key a device presents is checked against the known hosts file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HostKeyVerification {
    /// The host must be known with this very key
    #[default]
    Strict,
    /// Unknown hosts are trusted and recorded, changed keys are still refused
    AcceptNew,
}

/// Options of the ssh transport
#[derive(Clone, Debug)]
pub struct SshOptions {
    pub known_hosts: PathBuf,
    pub verification: HostKeyVerification,
    pub timeout: Duration,
}

impl Default for SshOptions {
    /// `$XRNC_KNOWN_HOSTS`, or else `~/.ssh/known_hosts`
    fn default() -> Self {
        let known_hosts = std::env::var_os(KNOWN_HOSTS_ENV).map_or_else(
            || {
                std::env::var_os("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_default()
                    .join(".ssh")
                    .join("known_hosts")
            },
            PathBuf::from,
        );
        Self {
            known_hosts,
            verification: HostKeyVerification::Strict,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Name of `host` in a known hosts file
fn known_host_name(host: &str, port: u16) -> String {
    if port == 22 {
        host.to_owned()
    } else {
        format!("[{host}]:{port}")
    }
}

/// Checks `key` against the hosts in `known`, loaded from `path`
fn verify_host_key(
    known: &mut KnownHosts,
    path: &Path,
    url: &DeviceUrl,
    key: &[u8],
    format: KnownHostKeyFormat,
    verification: HostKeyVerification,
) -> Result<(), ProviderError> {
    let rejected = |reason: &str| ProviderError::HostKey(url.host.clone(), reason.to_owned());
    match known.check_port(&url.host, url.port, key) {
        CheckResult::Match => Ok(()),
        CheckResult::Mismatch => Err(rejected("it differs from the known one")),
        CheckResult::Failure => Err(rejected("the known hosts could not be checked")),
        CheckResult::NotFound => match verification {
            HostKeyVerification::Strict => Err(rejected(&format!(
                "unknown host, not found in {}",
                path.display()
            ))),
            HostKeyVerification::AcceptNew => {
                let name = known_host_name(&url.host, url.port);
                known.add(&name, key, "added by xrnc", format)?;
                known.write_file(path, KnownHostFileKind::OpenSSH)?;
                warn!("Added host key of {name} to {}", path.display());
                Ok(())
            }
        },
    }
}

type ChannelSession = NetconfSession<BufReader<Stream>, Stream>;

/// NETCONF session with a device, over the `netconf` subsystem of an ssh channel.
pub struct NetconfServiceProvider {
    session: ChannelSession,
    channel: Channel,
    address: String,
}

impl NetconfServiceProvider {
    pub fn connect(url: &DeviceUrl) -> Result<Self, ProviderError> {
        Self::connect_with(url, &SshOptions::default())
    }

    pub fn connect_with(url: &DeviceUrl, options: &SshOptions) -> Result<Self, ProviderError> {
        if url.scheme != "ssh" {
            return Err(ProviderError::UnsupportedScheme(url.scheme.clone()));
        }
        info!("Connecting to {url}");
        let tcp = TcpStream::connect((url.host.as_str(), url.port))?;
        let mut ssh = Session::new()?;
        ssh.set_timeout(u32::try_from(options.timeout.as_millis()).unwrap_or(u32::MAX));
        ssh.set_tcp_stream(tcp);
        ssh.handshake()?;

        let (key, key_type) = ssh
            .host_key()
            .ok_or_else(|| ProviderError::HostKey(url.host.clone(), "no key presented".to_owned()))?;
        let mut known = ssh.known_hosts()?;
        if let Err(e) = known.read_file(&options.known_hosts, KnownHostFileKind::OpenSSH) {
            debug!("No known hosts read from {}: {e}", options.known_hosts.display());
        }
        verify_host_key(
            &mut known,
            &options.known_hosts,
            url,
            key,
            key_type.into(),
            options.verification,
        )?;

        match &url.password {
            Some(password) => ssh.userauth_password(&url.username, password)?,
            None => ssh.userauth_agent(&url.username)?,
        }
        if !ssh.authenticated() {
            return Err(ProviderError::Authentication(url.username.clone()));
        }

        let mut channel = ssh.channel_session()?;
        channel.subsystem("netconf")?;
        let session = NetconfSession::open(BufReader::new(channel.stream(0)), channel.stream(0))?;
        Ok(Self {
            session,
            channel,
            address: url.to_string(),
        })
    }

    /// Closes the session and then the channel
    pub fn close(mut self) -> Result<(), ProviderError> {
        let closed = self.session.close();
        self.channel.send_eof()?;
        self.channel.wait_close()?;
        debug!(
            "Channel to {} closed with status {}",
            self.address,
            self.channel.exit_status()?
        );
        closed
    }
}

impl NetconfRpc for NetconfServiceProvider {
    fn rpc(&mut self, operation: &str) -> Result<String, ProviderError> {
        self.session.rpc(operation)
    }
    fn capabilities(&self) -> &[String] {
        self.session.capabilities()
    }
}
