// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Encode access list ACL2 as XML

use args::{CodecArgs, Parser};
use samples::acl::host_access_list;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CodecArgs::parse();
    samples::init(&args.log);
    samples::exit_with(samples::encode(&host_access_list()).map(|xml| println!("{xml}")))
}
