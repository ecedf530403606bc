// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Tracing targets declared at link time

use crate::LevelFilter;
use linkme::distributed_slice;

/// A target as written at its declaration site
#[derive(Debug)]
pub struct Declaration {
    pub(crate) target: &'static str,
    pub(crate) tag: &'static str,
    pub(crate) level: LevelFilter,
    pub(crate) extra_tags: &'static [&'static str],
}

impl Declaration {
    #[must_use]
    pub const fn new(
        target: &'static str,
        tag: &'static str,
        level: LevelFilter,
        extra_tags: &'static [&'static str],
    ) -> Self {
        Self {
            target,
            tag,
            level,
            extra_tags,
        }
    }

    /// The own tag followed by the extra ones, without duplicates
    pub(crate) fn tags(&self) -> Vec<&'static str> {
        let mut tags = vec![self.tag];
        for tag in self.extra_tags {
            if !tags.contains(tag) {
                tags.push(tag);
            }
        }
        tags
    }
}

#[allow(unsafe_code)] // linkme places the slice in a dedicated link section
#[distributed_slice]
pub static DECLARATIONS: [Declaration];

/// Declares the calling module as a tracing target, tagged with `$tag`
/// and the `$tags` list.
#[macro_export]
macro_rules! trace_target {
    ($tag:expr, $level:expr, $tags:expr) => {
        $crate::custom_target!(module_path!(), $tag, $level, $tags);
    };
}

/// Declares a target whose name is not a module path
#[macro_export]
macro_rules! custom_target {
    ($target:expr, $level:expr, $tags:expr) => {
        $crate::custom_target!($target, $target, $level, $tags);
    };
    ($target:expr, $tag:expr, $level:expr, $tags:expr) => {
        const _: () = {
            #[allow(unused_imports)]
            use $crate::LevelFilter;
            #[allow(unsafe_code)]
            #[::linkme::distributed_slice($crate::targets::DECLARATIONS)]
            static DECLARATION: $crate::targets::Declaration =
                $crate::targets::Declaration::new($target, $tag, $level, $tags);
        };
    };
}

#[cfg(test)]
mod tests {
    use super::Declaration;
    use crate::LevelFilter;

    #[test]
    fn test_tags_without_duplicates() {
        let decl = Declaration::new("x::y", "netconf", LevelFilter::WARN, &["provider", "netconf"]);
        assert_eq!(decl.tags(), vec!["netconf", "provider"]);
    }
}
