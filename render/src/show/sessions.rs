// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! `show bgp sessions`

use super::col;
use crate::bgp::NO_BGP_INSTANCES;
use crate::labels::{nbr_state_label, nsr_state_label};
use config::oper::bgp::{Bgp, Instance, Neighbor};
use std::fmt::Display;

const HEADING: &str = "BGP Sessions:\n\
    Neighbor         Vrf                  Spk    AS   InQ  OutQ  NBRState     NSRState";

/// BGP neighbor sessions: those of the default vrf first, then those of each vrf.
pub struct BgpSessions<'a>(pub &'a Bgp);

struct SessionRow<'a>(&'a Neighbor);
impl Display for SessionRow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let neigh = self.0;
        write!(
            f,
            "{:<16} {:<20} {:>3} {:>5} {:>5} {:>5}  {:<12} {:<8}",
            neigh.neighbor_address,
            col(neigh.vrf_name.as_deref()),
            col(neigh.speaker_id),
            col(neigh.remote_as),
            col(neigh.messages_queued_in),
            col(neigh.messages_queued_out),
            col(neigh.connection_state.map(nbr_state_label)),
            col(neigh.nsr_state.map(nsr_state_label)),
        )
    }
}

fn neighbors(instance: &Instance) -> impl Iterator<Item = &Neighbor> {
    instance
        .default_vrf()
        .into_iter()
        .chain(instance.vrfs())
        .flat_map(|vrf| vrf.neighbors())
}

impl Display for BgpSessions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let instances = self.0.instances();
        if instances.is_empty() {
            return f.write_str(NO_BGP_INSTANCES);
        }
        let mut count = 0usize;
        for (n, instance) in instances.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            f.write_str(HEADING)?;
            for neigh in neighbors(instance) {
                write!(f, "\n{}", SessionRow(neigh))?;
                count += 1;
            }
        }
        write!(f, "\n\nTotal Neighbor count: {count}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::show::testdata;
    use config::oper::bgp::{BgpConnState, BgpNsrState, Vrf};
    use pretty_assertions::assert_eq;

    fn neighbor(address: &str, vrf: &str, remote_as: u32) -> Neighbor {
        Neighbor {
            neighbor_address: address.to_owned(),
            vrf_name: Some(vrf.to_owned()),
            speaker_id: Some(0),
            remote_as: Some(remote_as),
            messages_queued_in: Some(0),
            messages_queued_out: Some(0),
            connection_state: Some(BgpConnState::ESTABLISHED),
            nsr_state: Some(BgpNsrState::NONE),
        }
    }

    fn vrf_with(name: &str, neighbors: Vec<Neighbor>) -> Vrf {
        Vrf {
            vrf_name: Some(name.to_owned()),
            neighbors: Some(neighbors.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_instances() {
        assert_eq!(BgpSessions(&Bgp::default()).to_string(), NO_BGP_INSTANCES);
    }

    #[test]
    fn test_default_vrf_first() {
        let default_vrf = vrf_with("default", vec![neighbor("192.168.0.2", "default", 65000)]);
        let red = vrf_with(
            "RED",
            vec![
                neighbor("10.1.0.2", "RED", 65101),
                Neighbor {
                    connection_state: Some(BgpConnState::ACTIVE),
                    nsr_state: Some(BgpNsrState(42)),
                    ..neighbor("10.1.0.6", "RED", 65102)
                },
            ],
        );
        let bgp = testdata::bgp(testdata::instance(default_vrf, vec![red]));
        let expected = [
            "BGP Sessions:",
            "Neighbor         Vrf                  Spk    AS   InQ  OutQ  NBRState     NSRState",
            "192.168.0.2      default                0 65000     0     0  Established  None    ",
            "10.1.0.2         RED                    0 65101     0     0  Established  None    ",
            "10.1.0.6         RED                    0 65102     0     0  Active       Error   ",
            "",
            "Total Neighbor count: 3",
        ];
        assert_eq!(BgpSessions(&bgp).to_string(), expected.join("\n"));
    }

    #[test]
    fn test_absent_leaves_are_blank() {
        let default_vrf = vrf_with(
            "default",
            vec![Neighbor {
                neighbor_address: "192.168.0.9".to_owned(),
                ..Default::default()
            }],
        );
        let bgp = testdata::bgp(testdata::instance(default_vrf, vec![]));
        let text = BgpSessions(&bgp).to_string();
        let row = text.lines().nth(2).unwrap_or_default();
        assert_eq!(row.trim_end(), "192.168.0.9");
        assert_eq!(row.len(), 16 + 1 + 20 + 1 + 3 + 1 + 5 + 1 + 5 + 1 + 5 + 2 + 12 + 1 + 8);
        assert!(text.ends_with("Total Neighbor count: 1"));
    }
}
