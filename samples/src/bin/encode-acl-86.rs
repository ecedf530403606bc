// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Encode prefix list PREFIX-LIST4 as XML

use args::{CodecArgs, Parser};
use samples::acl::prefix_ranges;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CodecArgs::parse();
    samples::init(&args.log);
    samples::exit_with(samples::encode(&prefix_ranges()).map(|xml| println!("{xml}")))
}
