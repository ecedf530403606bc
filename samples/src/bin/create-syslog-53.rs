// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Create remote IPv6 syslog hosts

use args::{DeviceArgs, Parser};
use samples::syslog::ipv6_hosts;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = DeviceArgs::parse();
    samples::init(&args.log);
    samples::exit_with(samples::create(&args.device, &ipv6_hosts()))
}
