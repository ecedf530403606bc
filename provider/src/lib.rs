// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Device collaborators: addresses, the codec, NETCONF sessions and CRUD.

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod codec;
pub mod crud;
pub mod errors;
pub mod netconf;
pub mod device;

pub use codec::{CodecService, CodecServiceProvider, EncodingFormat};
pub use crud::CrudService;
pub use errors::ProviderError;
pub use netconf::{
    HostKeyVerification, NetconfRpc, NetconfServiceProvider, NetconfSession, SshOptions,
};
pub use device::DeviceUrl;

use tracectl::trace_target;
trace_target!("provider", LevelFilter::WARN, &["provider"]);
