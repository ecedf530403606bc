// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Show the static routes of a device

use args::{DeviceArgs, Parser};
use config::cfg::ip_static::RouterStatic;
use render::Rendered;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = DeviceArgs::parse();
    samples::init(&args.log);
    let result = samples::read::<RouterStatic>(&args.device);
    samples::exit_with(result.map(|model| println!("{}", model.rendered())))
}
