// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Sample configurations and the plumbing shared by the sample binaries.
//!
//! Every binary does one of three things: encode a literal configuration,
//! create it on a device, or read a model from a device and print it as
//! CLI-like text.

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::missing_errors_doc)]

pub mod acl;
pub mod bgp;
pub mod ospf;
pub mod run;
pub mod syslog;
pub mod vrf;

pub use run::{create, encode, exit_with, init, read};

use tracectl::trace_target;
trace_target!("samples", LevelFilter::INFO, &["samples"]);
