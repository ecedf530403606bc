// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Show the BGP next hops of a device

use args::{DeviceArgs, Parser};
use config::oper::bgp::Bgp;
use render::show::BgpNextHops;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = DeviceArgs::parse();
    samples::init(&args.log);
    let result = samples::read::<Bgp>(&args.device);
    samples::exit_with(result.map(|bgp| println!("{}", BgpNextHops(&bgp))))
}
