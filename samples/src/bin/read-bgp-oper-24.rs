// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Show the IPv4 unicast BGP table of a vrf

use args::{NamedArgs, Parser};
use config::oper::bgp::Bgp;
use render::show::BgpVrfTable;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = NamedArgs::parse();
    samples::init(&args.log);
    let result = samples::read::<Bgp>(&args.device);
    samples::exit_with(result.map(|bgp| println!("{}", BgpVrfTable::new(&bgp, &args.name))))
}
