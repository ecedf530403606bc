// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Create a vrf with a route target

use args::{Parser, RouteTargetCmdArgs, exit_on_error};
use samples::vrf::route_target_vrf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = RouteTargetCmdArgs::parse();
    samples::init(&args.log);
    let route_target = exit_on_error(args.route_target());
    samples::exit_with(samples::create(&args.device, &route_target_vrf(&route_target)))
}
