use anyhow::Result;
use bookmyseat_config::LoggingConfig;
use std::io;
use std::io::IsTerminal;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter directives for the command line flags. `None` defers to `RUST_LOG` and the configured level.
fn verbosity_directives(verbose_level: u8, quiet: bool) -> Option<&'static str> {
    if quiet {
        return Some("error");
    }
    match verbose_level {
        0 => None,
        // -v: our crates at debug, connection pool chatter suppressed
        1 => Some("debug,hyper::proto::h1=warn,hyper::client::pool=warn,reqwest::connect=warn"),
        _ => Some("trace"),
    }
}

fn build_filter(verbose_level: u8, quiet: bool, configured_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    let directives = verbosity_directives(verbose_level, quiet).unwrap_or(configured_level);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

fn use_json(config: &LoggingConfig) -> bool {
    if let Ok(value) = std::env::var("RUST_LOG_JSON") {
        return value == "true";
    }
    config.json.unwrap_or_else(|| !io::stdout().is_terminal())
}

/// Rotation prefix for a log file name, `bookmyseat` for `bookmyseat.log`
fn rotation_prefix(file_name: &str) -> &str {
    file_name.rsplit_once('.').map(|(stem, _)| stem).filter(|s| !s.is_empty()).unwrap_or(file_name)
}

fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let log_dir = log_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Log file path has no parent directory"))?;
    std::fs::create_dir_all(log_dir)?;

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid log filename"))?;

    // bookmyseat.log rotates to bookmyseat.2025-11-02, bookmyseat.2025-11-03, ...
    Ok(RollingFileAppender::new(Rotation::DAILY, log_dir, rotation_prefix(file_name)))
}

pub fn init_logging(verbose_level: u8, quiet: bool, config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(verbose_level, quiet, &config.level);
    let json = use_json(config);
    let registry = Registry::default().with(filter);

    if let Some(log_path) = &config.file {
        let appender = file_appender(log_path)?;
        if json {
            let layer = fmt::layer().json().with_timer(ChronoUtc::rfc_3339()).with_writer(appender);
            registry.with(layer).try_init()?;
        } else {
            let layer = fmt::layer()
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(appender);
            registry.with(layer).try_init()?;
        }
    } else if json {
        let layer = fmt::layer().json().with_timer(ChronoUtc::rfc_3339()).with_writer(io::stderr);
        registry.with(layer).try_init()?;
    } else {
        let layer = fmt::layer().with_timer(ChronoUtc::rfc_3339()).with_writer(io::stderr);
        registry.with(layer).try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert_eq!(verbosity_directives(3, true), Some("error"));
        assert_eq!(verbosity_directives(0, false), None);
        assert_eq!(verbosity_directives(2, false), Some("trace"));
    }

    #[test]
    fn test_rotation_prefix() {
        assert_eq!(rotation_prefix("bookmyseat.log"), "bookmyseat");
        assert_eq!(rotation_prefix("bookmyseat"), "bookmyseat");
        assert_eq!(rotation_prefix("app.debug.log"), "app.debug");
    }

    #[test]
    fn test_appender_writes_dated_file() {
        use std::io::Write;

        let dir = tempfile::TempDir::new().unwrap();
        let mut appender = file_appender(&dir.path().join("logs").join("bookmyseat.log")).unwrap();
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let expected = format!("bookmyseat.{}", chrono::Utc::now().format("%Y-%m-%d"));
        let names: Vec<String> = std::fs::read_dir(dir.path().join("logs"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![expected]);
    }

    #[test]
    fn test_configured_json_flag() {
        let config = LoggingConfig {
            json: Some(true),
            ..LoggingConfig::default()
        };
        if std::env::var("RUST_LOG_JSON").is_err() {
            assert!(use_json(&config));
        }
    }
}
