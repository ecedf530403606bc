// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Listing of the tracing targets, grouped by tag

use crate::control::Levels;
use std::fmt::{Display, Formatter, Result};

impl Display for Levels {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for tag in self.tags() {
            writeln!(f, "{tag}:")?;
            for target in self.targets.values().filter(|t| t.has_tag(tag)) {
                writeln!(f, "  {:<40} {}", target.target, target.level)?;
            }
        }
        write!(f, "(default level: {})", self.default)
    }
}
