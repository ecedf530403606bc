// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Encode remote IPv4 syslog hosts as XML

use args::{CodecArgs, Parser};
use samples::syslog::ipv4_hosts;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CodecArgs::parse();
    samples::init(&args.log);
    samples::exit_with(samples::encode(&ipv4_hosts()).map(|xml| println!("{xml}")))
}
