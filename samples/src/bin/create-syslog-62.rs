// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Create a fan failure correlation rule

use args::{DeviceArgs, Parser};
use samples::syslog::fan_correlation;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = DeviceArgs::parse();
    samples::init(&args.log);
    samples::exit_with(samples::create(&args.device, &fan_correlation()))
}
