// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! OSPF

use config::cfg::ospf::{Ospf, Process};

/// A started process distributing link-state information (sample 40)
#[must_use]
pub fn distributing_process(name: &str) -> Ospf {
    Ospf::default().add_process(Process::new(name).set_distribute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::encode;
    use pretty_assertions::assert_eq;
    use render::Rendered;

    #[test]
    fn test_distributing_process() {
        let ospf = distributing_process("CORE");
        assert_eq!(
            ospf.rendered(),
            ["router ospf CORE", " distribute link-state", "!"].join("\n")
        );
        let xml = encode(&ospf).unwrap();
        assert!(xml.contains("<process-name>CORE</process-name>"));
        assert!(xml.contains("<start/>"));
    }
}
