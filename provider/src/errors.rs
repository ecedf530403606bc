// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Errors of the device collaborators

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Invalid device url '{0}': {1}")]
    InvalidUrl(String, String),
    #[error("Unsupported encoding '{0}'")]
    UnsupportedEncoding(String),
    #[error("Unsupported transport '{0}'")]
    UnsupportedScheme(String),
    #[error("Failed to encode {0}: {1}")]
    Encode(&'static str, String),
    #[error("Failed to decode {0}: {1}")]
    Decode(&'static str, String),
    #[error("Transport failure: {0}")]
    Transport(#[from] std::io::Error),
    #[error("SSH failure: {0}")]
    Ssh(#[from] ssh2::Error),
    #[error("Host key of {0} rejected: {1}")]
    HostKey(String, String),
    #[error("Authentication failed for {0}")]
    Authentication(String),
    #[error("Session closed by the device")]
    SessionClosed,
    #[error("Malformed reply: {0}")]
    MalformedReply(String),
    #[error("Device rejected the request: {0}")]
    Rpc(String),
}
