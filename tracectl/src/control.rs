// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Runtime control of log levels per target and per tag.

use ordermap::OrderMap;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, Registry, filter::LevelFilter, prelude::*, reload};

use crate::targets::{DECLARATIONS, Declaration};
use crate::trace_target;

trace_target!("tracectl", LevelFilter::WARN, &[]);

/// Tag carried by every target that talks to a device or codes models.
/// `--verbose` raises it to debug.
pub const VERBOSE_TAG: &str = "provider";

#[derive(Debug, Error, PartialEq)]
pub enum TraceCtlError {
    #[error("Invalid syntax '{0}': it should be tag=level")]
    Syntax(String),
    #[error("Invalid level '{0}'")]
    Level(String),
}

/// Current level of a target and the tags it answers to
#[derive(Debug, Clone)]
pub struct TargetState {
    pub(crate) target: &'static str,
    pub(crate) level: LevelFilter,
    pub(crate) tags: Vec<&'static str>,
}

impl TargetState {
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }
    #[must_use]
    pub fn level(&self) -> LevelFilter {
        self.level
    }
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

impl From<&Declaration> for TargetState {
    fn from(decl: &Declaration) -> Self {
        Self {
            target: decl.target,
            level: decl.level,
            tags: decl.tags(),
        }
    }
}

/// Levels of all known targets, in declaration order
#[derive(Debug)]
pub(crate) struct Levels {
    pub(crate) default: LevelFilter,
    pub(crate) targets: OrderMap<&'static str, TargetState>,
}

impl Levels {
    fn from_declarations(default: LevelFilter) -> Self {
        let mut levels = Self {
            default,
            targets: OrderMap::new(),
        };
        DECLARATIONS.iter().for_each(|decl| levels.add(decl.into()));
        levels
    }
    fn add(&mut self, state: TargetState) {
        if let Some(previous) = self.targets.insert(state.target, state) {
            warn!("Target {} is declared more than once", previous.target);
        }
    }
    /// Tags in order of first appearance
    pub(crate) fn tags(&self) -> Vec<&'static str> {
        let mut tags = vec![];
        for tag in self.targets.values().flat_map(|t| t.tags.iter()) {
            if !tags.contains(tag) {
                tags.push(*tag);
            }
        }
        tags
    }
    fn filter(&self) -> EnvFilter {
        self.targets
            .values()
            .fold(EnvFilter::new(self.default.to_string()), |filter, t| {
                match Directive::from_str(&format!("{}={}", t.target, t.level)) {
                    Ok(directive) => filter.add_directive(directive),
                    Err(e) => {
                        warn!("Ignoring target {}: {e}", t.target);
                        filter
                    }
                }
            })
    }
}

/// Parses comma-separated `tag=level` items. Levels are off, error, warn,
/// info, debug or trace.
fn parse_levels(input: &str) -> Result<OrderMap<&str, LevelFilter>, TraceCtlError> {
    input
        .split(',')
        .map(str::trim)
        .map(|item| {
            let (tag, level) = item
                .split_once('=')
                .ok_or_else(|| TraceCtlError::Syntax(item.to_owned()))?;
            let level = level.trim();
            let level =
                LevelFilter::from_str(level).map_err(|_| TraceCtlError::Level(level.to_owned()))?;
            Ok((tag.trim(), level))
        })
        .collect()
}

/// Owner of the target levels and of the reloadable filter of the global subscriber.
#[derive(Debug)]
pub struct TracingControl {
    levels: Mutex<Levels>,
    handle: Option<reload::Handle<EnvFilter, Registry>>,
}

static TRACING_CTL: OnceLock<TracingControl> = OnceLock::new();

/// The process-wide [`TracingControl`], which installs the subscriber on first use.
pub fn get_trace_ctl() -> &'static TracingControl {
    TRACING_CTL.get_or_init(TracingControl::install)
}

impl TracingControl {
    fn install() -> Self {
        let levels = Levels::from_declarations(LevelFilter::WARN);
        let (filter, handle) = reload::Layer::new(levels.filter());

        // stdout carries rendered text and XML only
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(false);

        let handle = match tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
        {
            Ok(()) => Some(handle),
            Err(e) => {
                eprintln!("Tracing subscriber already installed: {e}");
                None
            }
        };
        Self {
            levels: Mutex::new(levels),
            handle,
        }
    }

    pub(crate) fn levels(&self) -> MutexGuard<'_, Levels> {
        self.levels.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, change: impl FnOnce(&mut Levels) -> bool) {
        let mut levels = self.levels();
        if change(&mut levels)
            && let Some(handle) = &self.handle
            && let Err(e) = handle.reload(levels.filter())
        {
            eprintln!("Failed to reload tracing filter: {e}");
        }
    }

    #[cfg(test)]
    pub(crate) fn declare(
        &self,
        target: &'static str,
        level: LevelFilter,
        tags: &'static [&'static str],
    ) {
        let decl = Declaration::new(target, target, level, tags);
        self.update(|levels| {
            levels.add((&decl).into());
            true
        });
    }

    /// Sets the level of every target carrying `tag`
    pub fn set_tag_level(&self, tag: &str, level: LevelFilter) {
        let mut changed = 0;
        self.update(|levels| {
            for target in levels.targets.values_mut() {
                if target.has_tag(tag) && target.level != level {
                    target.level = level;
                    changed += 1;
                }
            }
            changed > 0
        });
        debug!("Level of tag '{tag}' set to {level}, {changed} targets changed");
    }

    pub fn set_level_all(&self, level: LevelFilter) {
        self.update(|levels| {
            levels.targets.values_mut().for_each(|t| t.level = level);
            true
        });
    }

    /// Level of the events outside any declared target
    pub fn set_default_level(&self, level: LevelFilter) {
        self.update(|levels| std::mem::replace(&mut levels.default, level) != level);
    }

    #[must_use]
    pub fn default_level(&self) -> LevelFilter {
        self.levels().default
    }

    pub fn set_verbose(&self) {
        self.set_tag_level(VERBOSE_TAG, LevelFilter::DEBUG);
    }

    /// Applies a `tag=level[,tag=level]` string. `default` names the level
    /// of undeclared targets and `all` every declared target; other tags
    /// are applied after `all`, in order.
    pub fn setup_from_string(&self, input: &str) -> Result<(), TraceCtlError> {
        let config = parse_levels(input)?;
        if let Some(level) = config.get("default") {
            self.set_default_level(*level);
        }
        if let Some(level) = config.get("all") {
            self.set_level_all(*level);
        }
        config
            .iter()
            .filter(|(tag, _)| !matches!(**tag, "default" | "all"))
            .for_each(|(tag, level)| self.set_tag_level(tag, *level));
        Ok(())
    }

    #[must_use]
    pub fn target(&self, target: &str) -> Option<TargetState> {
        self.levels().targets.get(target).cloned()
    }

    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        self.levels().tags()
    }

    /// Listing of the targets grouped by tag
    #[must_use]
    pub fn targets_by_tag(&self) -> String {
        self.levels().to_string()
    }
}
