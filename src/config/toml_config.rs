use crate::core::generator::DEFAULT_MAX_ATTEMPTS;
use crate::utils::error::{Result, ToolsError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration file. Every section and field has a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub paths: PathsConfig,
    pub persons: PersonsConfig,
    pub generator: GeneratorConfig,
    pub bsn_file: BsnFileConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub output_dir: String,
    pub logging_dir: String,
    pub log_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output_dir: "output".to_string(),
            logging_dir: "logging".to_string(),
            log_file: "app.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonsConfig {
    pub endpoint: String,
    pub nationality: String,
    pub timeout_seconds: u64,
    pub retry_attempts: u32,
    pub retry_delay_seconds: u64,
    pub filename: String,
}

impl Default for PersonsConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://randomuser.me/api/".to_string(),
            nationality: "NL".to_string(),
            timeout_seconds: 10,
            retry_attempts: 0,
            retry_delay_seconds: 1,
            filename: "testpersonen.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub max_attempts: usize,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BsnFileConfig {
    pub filename: String,
    pub generated_count: usize,
}

impl Default for BsnFileConfig {
    fn default() -> Self {
        Self {
            filename: "bsn_testbestand.csv".to_string(),
            generated_count: 0,
        }
    }
}

impl ToolsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ToolsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| ToolsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ToolsConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("paths.output_dir", &self.paths.output_dir)?;
        validation::validate_path("paths.logging_dir", &self.paths.logging_dir)?;
        validation::validate_path("paths.log_file", &self.paths.log_file)?;

        validation::validate_url("persons.endpoint", &self.persons.endpoint)?;
        validation::validate_non_empty_string("persons.nationality", &self.persons.nationality)?;
        validation::validate_range("persons.timeout_seconds", self.persons.timeout_seconds, 1, 300)?;
        validation::validate_range("persons.retry_attempts", self.persons.retry_attempts, 0, 10)?;
        validation::validate_path("persons.filename", &self.persons.filename)?;

        validation::validate_positive_number(
            "generator.max_attempts",
            self.generator.max_attempts,
            1,
        )?;

        validation::validate_path("bsn_file.filename", &self.bsn_file.filename)?;

        Ok(())
    }
}
