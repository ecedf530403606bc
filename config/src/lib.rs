// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Typed records for the IOS-XR YANG models handled by the samples.
//!
//! Each YANG container or list entry maps to a plain struct: optional leaves and
//! containers are `Option`s, lists are ordered `Vec`s and empty leaves are
//! `Option<Empty>`. Roots implement [`YangEntity`].

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

#[macro_use]
mod yang;

pub mod cfg;
pub mod datatypes;
pub mod errors;
pub mod oper;

pub use errors::ConfigError;
pub use yang::{Empty, Xmlns, YangEntity, YangList, YangModule, entries};
