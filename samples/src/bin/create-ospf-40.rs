// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Create an OSPF process

use args::{NamedArgs, Parser};
use samples::ospf::distributing_process;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = NamedArgs::parse();
    samples::init(&args.log);
    samples::exit_with(samples::create(&args.device, &distributing_process(&args.name)))
}
