// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Create a BGP route reflector

use args::{DeviceArgs, Parser};
use samples::bgp::route_reflector;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = DeviceArgs::parse();
    samples::init(&args.log);
    samples::exit_with(samples::create(&args.device, &route_reflector()))
}
