// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Utils to build CLI-like configuration text

use std::fmt::Display;
use std::ops::AddAssign;

/// Line closing a configuration block
pub const MARKER: &str = "!";

#[derive(Debug, Default)]
/// Append-only buffer of configuration lines. Each line is indented with one
/// space per nesting level. Blocks are opened with [`ConfigBuilder::open`] and
/// terminated with [`ConfigBuilder::close`], which emits a [`MARKER`] at the
/// depth of the block header.
pub struct ConfigBuilder {
    lines: Vec<String>,
    depth: usize,
}

/// Lines joined with newlines. This provides `to_string()`.
impl Display for ConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (n, line) in self.lines.iter().enumerate() {
            if n > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Main operations on a [`ConfigBuilder`]
impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn from_string(string: String) -> Self {
        Self {
            lines: vec![string],
            depth: 0,
        }
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
    fn append(&mut self, stanza: &str) {
        self.lines.push(format!("{}{stanza}", " ".repeat(self.depth)));
    }
    /// Emit a block header and nest what follows.
    pub fn open(&mut self, header: impl AsRef<str>) {
        self.append(header.as_ref());
        self.depth += 1;
    }
    /// Terminate the innermost block.
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.append(MARKER);
    }
    /// Appends the lines of another builder, nested at the current depth.
    fn merge(&mut self, other: Self) {
        for line in other.lines {
            self.append(&line);
        }
    }
}

/// Make it very easy to add config lines to a [`ConfigBuilder`]
impl AddAssign<Self> for ConfigBuilder {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(rhs);
    }
}
impl AddAssign<String> for ConfigBuilder {
    fn add_assign(&mut self, rhs: String) {
        self.append(&rhs);
    }
}
impl AddAssign<&str> for ConfigBuilder {
    fn add_assign(&mut self, rhs: &str) {
        self.append(rhs);
    }
}

/// Main trait to turn a model into CLI-like text
pub trait Render {
    /// What the template needs besides the model, e.g. a vrf name
    type Context;
    type Output;
    fn render(&self, ctx: &Self::Context) -> Self::Output;
}

/// Final text of a model that renders without context
pub trait Rendered {
    fn rendered(&self) -> String;
}

impl<T> Rendered for T
where
    T: Render<Context = (), Output = ConfigBuilder>,
{
    fn rendered(&self) -> String {
        self.render(&()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nesting() {
        let mut cfg = ConfigBuilder::new();
        cfg.open("router ospf 1");
        cfg.open("area 0");
        cfg += "interface Loopback0";
        cfg.close();
        cfg.close();
        assert_eq!(cfg.depth(), 0);
        assert_eq!(
            cfg.to_string(),
            "router ospf 1\n area 0\n  interface Loopback0\n !\n!"
        );
    }

    #[test]
    fn test_merge_indents_at_current_depth() {
        let mut inner = ConfigBuilder::new();
        inner.open("neighbor 10.0.0.1");
        inner += "remote-as 100";
        inner.close();

        let mut cfg = ConfigBuilder::new();
        cfg.open("router bgp 100");
        cfg += inner;
        cfg.close();
        assert_eq!(
            cfg.lines(),
            [
                "router bgp 100",
                " neighbor 10.0.0.1",
                "  remote-as 100",
                " !",
                "!"
            ]
        );
    }

    #[test]
    fn test_empty_builder() {
        let cfg = ConfigBuilder::new();
        assert!(cfg.is_empty());
        assert_eq!(cfg.to_string(), "");
    }

    #[test]
    fn test_close_never_underflows() {
        let mut cfg = ConfigBuilder::new();
        cfg.close();
        assert_eq!(cfg.to_string(), "!");
        assert_eq!(cfg.depth(), 0);
    }
}
