// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Create an L3VPN BGP PE with four vrfs

use args::{DeviceArgs, Parser};
use samples::bgp::l3vpn_pe;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = DeviceArgs::parse();
    samples::init(&args.log);
    samples::exit_with(samples::create(&args.device, &l3vpn_pe()))
}
