// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Configuration models

pub mod acl;
pub mod bgp;
pub mod ifmgr;
pub mod ip_static;
pub mod ospf;
pub mod rsi;
pub mod syslog;
