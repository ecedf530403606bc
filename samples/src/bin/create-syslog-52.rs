// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Create remote IPv4 syslog hosts

use args::{DeviceArgs, Parser};
use samples::syslog::ipv4_hosts;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = DeviceArgs::parse();
    samples::init(&args.log);
    samples::exit_with(samples::create(&args.device, &ipv4_hosts()))
}
