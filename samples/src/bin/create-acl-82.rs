// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Create prefix list PREFIX-LIST2

use args::{DeviceArgs, Parser};
use samples::acl::prefix_list;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = DeviceArgs::parse();
    samples::init(&args.log);
    samples::exit_with(samples::create(&args.device, &prefix_list()))
}
