use crate::utils::error::{Result, ToolsError};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where and how to log. Messages go to stderr and to `log_file`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_file: PathBuf,
    pub verbose: bool,
    pub json: bool,
}

/// Handle for an installed logging setup.
///
/// Global contexts live for the rest of the process; scoped contexts are
/// removed again when dropped.
#[derive(Debug)]
pub struct LogContext {
    log_file: PathBuf,
    _guard: Option<DefaultGuard>,
}

impl LogContext {
    /// Installs the subscriber process-wide.
    pub fn init(config: &LoggingConfig) -> Result<Self> {
        build_subscriber(config)?
            .try_init()
            .map_err(|e| ToolsError::ConfigError {
                message: format!("Logging already initialised: {}", e),
            })?;

        Ok(Self {
            log_file: config.log_file.clone(),
            _guard: None,
        })
    }

    /// Installs the subscriber for the current thread only.
    pub fn scoped(config: &LoggingConfig) -> Result<Self> {
        let guard = build_subscriber(config)?.set_default();

        Ok(Self {
            log_file: config.log_file.clone(),
            _guard: Some(guard),
        })
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("bsn_testing_tools=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bsn_testing_tools=info"))
    }
}

fn build_subscriber(
    config: &LoggingConfig,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let console = (!config.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });
    let console_json = config.json.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
    });
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    Ok(tracing_subscriber::registry()
        .with(build_filter(config.verbose))
        .with(console)
        .with(console_json)
        .with(file_layer))
}
