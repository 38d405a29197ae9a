pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::jobs::{BsnFileJob, PersonsJob};
pub use config::ToolsConfig;
pub use core::bsn::{is_valid_bsn, BsnValidator};
pub use core::engine::ToolsEngine;
pub use core::generator::{generate_valid_bsn, BsnGenerator};
pub use core::workspace::{LocalStorage, Workspace};
pub use domain::model::{Bsn, Candidate};
pub use utils::error::{Result, ToolsError};
pub use utils::logger::{LogContext, LoggingConfig};
