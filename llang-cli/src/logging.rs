//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。日志写到 stderr（或文件），
//! stdout 只输出渲染出的模型。

use crate::config::LogConfig;
use llang_config::Phase;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// 本二进制的日志 target
pub const TARGET: &str = "llang::cli";

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 全局级别加每个阶段一条规则的过滤器
pub fn targets(log_config: &LogConfig) -> Targets {
    Phase::ALL
        .into_iter()
        .fold(Targets::new().with_default(log_config.global), |targets, phase| {
            let target = phase.target();
            let level = log_config.level_for(&target);
            targets.with_target(target, level)
        })
        .with_target(llang_api::TARGET, log_config.global)
        .with_target(TARGET, log_config.global)
}

/// 使用指定格式初始化日志系统，设置了 `file` 时写入文件
pub fn init_with_file<P: AsRef<Path>>(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<P>,
) -> io::Result<()> {
    let targets = targets(log_config);

    match file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = create_format_layer(format, Mutex::new(file)).with_filter(targets);
            tracing_subscriber::registry().with(layer).init();
        }
        None => {
            let layer = create_format_layer(format, io::stderr).with_filter(targets);
            tracing_subscriber::registry().with(layer).init();
        }
    }
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W>(
    format: LogFormat,
    make_writer: W,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llang_config::LogLevel;
    use tracing::Level;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_targets_carry_phase_override() {
        let config = LogConfig::new(LogLevel::Warn).with_phase(Phase::Parser, LogLevel::Debug);
        let targets = targets(&config);
        assert!(targets.would_enable("llang::parser", &Level::DEBUG));
        assert!(!targets.would_enable("llang::lexer", &Level::DEBUG));
        assert!(targets.would_enable("llang::lexer", &Level::WARN));
        assert_eq!(targets.default_level(), Some(LevelFilter::WARN));
    }
}
