// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Encode a fan failure correlation rule as XML

use args::{CodecArgs, Parser};
use samples::syslog::fan_correlation;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CodecArgs::parse();
    samples::init(&args.log);
    samples::exit_with(samples::encode(&fan_correlation()).map(|xml| println!("{xml}")))
}
