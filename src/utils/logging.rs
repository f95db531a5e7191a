use std::{path::Path, sync::LazyLock};

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::{
    fmt::{format::FmtSpan, writer::MakeWriterExt},
    EnvFilter,
};

pub const LOG_PREFIX: &str = "waka-box";

fn crate_filter(log_level: Option<LevelFilter>) -> EnvFilter {
    let level = log_level
        .map(|v| v.to_string())
        .unwrap_or_else(|| std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()));

    EnvFilter::new(format!(
        "{}={level}",
        env!("CARGO_PKG_NAME").replace("-", "_"),
    ))
}

/// Logs go to stderr, stdout is reserved for report previews. When `log_dir` is given the same
/// output is also written into daily rotated files there.
pub fn enable_logging(log_dir: Option<&Path>, log_level: Option<LevelFilter>) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(crate_filter(log_level))
        .with_span_events(FmtSpan::CLOSE)
        .pretty();

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::Builder::new()
                .rotation(Rotation::DAILY)
                .max_log_files(5)
                .filename_prefix(LOG_PREFIX)
                .build(dir)?;
            subscriber
                .with_writer(std::io::stderr.and(appender))
                .init();
        }
        None => subscriber.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

pub static TEST_LOGGING: LazyLock<()> = LazyLock::new(|| {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .pretty()
        .init()
});
