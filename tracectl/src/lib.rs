// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Tracing targets registry and runtime control of log levels.
//!
//! Crates declare their targets with [`trace_target!`] or [`custom_target!`].
//! The declarations are gathered at link time and become the initial levels
//! of the [`TracingControl`] the first time it is used.

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::missing_errors_doc)]

pub mod control;
pub mod display;
pub mod targets;

// re-exports
pub use control::{TargetState, TraceCtlError, TracingControl, VERBOSE_TAG, get_trace_ctl};
pub use tracing_subscriber::filter::LevelFilter;
