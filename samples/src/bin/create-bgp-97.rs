// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Create a dual stack BGP PE

use args::{DeviceArgs, Parser};
use samples::bgp::dual_stack_pe;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = DeviceArgs::parse();
    samples::init(&args.log);
    samples::exit_with(samples::create(&args.device, &dual_stack_pe()))
}
