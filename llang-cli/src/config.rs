//! CLI configuration
//!
//! Logging configuration assembled from the command line: one global level
//! plus optional per-phase overrides.

use llang_config::{LogLevel, Phase};
use std::collections::BTreeMap;
use tracing::Level;

/// CLI log configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub phases: BTreeMap<Phase, Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            phases: BTreeMap::new(),
        }
    }
}

impl LogConfig {
    pub fn new(global: LogLevel) -> Self {
        Self {
            global: to_level(global),
            phases: BTreeMap::new(),
        }
    }

    pub fn with_phase(mut self, phase: Phase, level: LogLevel) -> Self {
        self.phases.insert(phase, to_level(level));
        self
    }

    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.target() == target)
            .and_then(|phase| self.phases.get(&phase).copied())
            .unwrap_or(self.global)
    }
}

pub fn to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// Parse `PHASE=LEVEL`
pub fn parse_phase_level(s: &str) -> Result<(Phase, LogLevel), String> {
    let (phase, level) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PHASE=LEVEL, got '{s}'"))?;
    Ok((phase.trim().parse()?, level.trim().parse()?))
}
