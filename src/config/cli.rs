use crate::config::toml_config::ToolsConfig;
use crate::utils::error::Result;
use crate::utils::logger::LoggingConfig;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "bsn-testing-tools")]
#[command(about = "Generate BSN test data and download sample person records")]
pub struct CliConfig {
    #[arg(long, global = true, default_value = ".", help = "Directory the output and logging folders live in")]
    pub root: PathBuf,

    #[arg(long, global = true, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Write console logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print valid BSNs
    Generate {
        #[arg(long, default_value_t = 1)]
        count: usize,

        #[arg(long, help = "Seed for reproducible output")]
        seed: Option<u64>,
    },

    /// Check BSNs against the 11-proof
    Validate {
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// Write the BSN test file to the output directory
    BsnFile {
        #[arg(long, help = "Number of generated valid BSNs to append")]
        generated: Option<usize>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Download random person records as CSV
    Persons {
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}

impl CliConfig {
    /// Loads the configuration file if one was given, defaults otherwise.
    pub fn load_tools_config(&self) -> Result<ToolsConfig> {
        match &self.config {
            Some(path) => ToolsConfig::from_file(path),
            None => Ok(ToolsConfig::default()),
        }
    }

    pub fn logging_config(&self, log_file: &Path) -> LoggingConfig {
        LoggingConfig {
            log_file: log_file.to_path_buf(),
            verbose: self.verbose,
            json: self.json_logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = CliConfig::parse_from([
            "bsn-testing-tools",
            "generate",
            "--count",
            "3",
            "--seed",
            "42",
        ]);

        assert_eq!(cli.root, PathBuf::from("."));
        match cli.command {
            Command::Generate { count, seed } => {
                assert_eq!(count, 3);
                assert_eq!(seed, Some(42));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_validate_requires_candidates() {
        assert!(CliConfig::try_parse_from(["bsn-testing-tools", "validate"]).is_err());

        let cli = CliConfig::try_parse_from([
            "bsn-testing-tools",
            "--verbose",
            "validate",
            "123456782",
            "123456789",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Validate { candidates } => assert_eq!(candidates.len(), 2),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CliConfig::try_parse_from([
            "bsn-testing-tools",
            "validate",
            "--verbose",
            "--json-logs",
            "--root",
            "/tmp/bsn",
            "123456782",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(cli.json_logs);
        assert_eq!(cli.root, PathBuf::from("/tmp/bsn"));
        match cli.command {
            Command::Validate { candidates } => assert_eq!(candidates, vec!["123456782"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_persons_defaults() {
        let cli = CliConfig::parse_from(["bsn-testing-tools", "persons"]);
        assert!(matches!(cli.command, Command::Persons { count: 10 }));
        assert_eq!(cli.load_tools_config().unwrap(), ToolsConfig::default());
    }
}
