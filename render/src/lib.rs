// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! CLI-like text out of the configuration and operational models.
//!
//! Configuration models render through [`Render`] into a [`ConfigBuilder`]
//! that keeps track of the block nesting, IOS-XR style: a header opens a
//! block, its content is indented by one space and a `!` closes it.
//! The BGP operational views live in [`show`].

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::module_name_repetitions)]

pub mod acl;
pub mod bgp;
pub mod builder;
pub mod interface;
pub mod labels;
pub mod ospf;
pub mod show;
pub mod statics;
pub mod syslog;
pub mod vrf;

pub use bgp::NO_BGP_INSTANCES;
pub use builder::{ConfigBuilder, Render, Rendered};

use tracectl::trace_target;
trace_target!("render", LevelFilter::WARN, &["render"]);
