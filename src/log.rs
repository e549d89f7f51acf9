use clap::ValueEnum;
use eyre::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// `RUST_LOG` directives, with `log_level` as the default for everything they don't mention.
fn build_env_filter(log_level: LogLevel) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(log_level.as_level_filter().into())
        .from_env_lossy()
}

/// Installs the global subscriber. Logs go to stderr, stdout belongs to the menu.
pub fn setup_logs(log_level: LogLevel) -> Result<()> {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_env_filter(build_env_filter(log_level))
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Cannot setup_logs")?;
    Ok(())
}
