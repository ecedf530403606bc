// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Rejections of values supplied to build a model.

use thiserror::Error;

/// The reasons why we may reject a value
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid AF name")]
    InvalidAfName(String),
    #[error("Invalid SAF")]
    InvalidSafName(String),
    #[error("Incorrect AS format")]
    InvalidAsFormat(String),
    #[error("invalid direction")]
    InvalidDirection(String),
    #[error("Invalid netmask: {0}")]
    InvalidNetmask(String),
}
