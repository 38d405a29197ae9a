use crate::config::toml_config::PersonsConfig;
use crate::core::{Job, JobOutcome, Storage};
use crate::utils::error::{Result, ToolsError};
use crate::utils::validation;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// randomuser.me serves at most this many records per request.
pub const MAX_PERSONS: usize = 5000;

/// Downloads random person records as CSV and stores them unchanged.
pub struct PersonsJob<S: Storage> {
    storage: S,
    config: PersonsConfig,
    count: usize,
    client: Client,
}

impl<S: Storage> PersonsJob<S> {
    pub fn new(storage: S, config: PersonsConfig, count: usize) -> Result<Self> {
        validation::validate_range("persons.count", count, 1, MAX_PERSONS)?;
        validation::validate_range("persons.retry_attempts", config.retry_attempts, 0, 10)?;

        Ok(Self {
            storage,
            config,
            count,
            client: Client::new(),
        })
    }

    pub fn request_url(&self) -> Result<Url> {
        Url::parse_with_params(
            &self.config.endpoint,
            &[
                ("results", self.count.to_string()),
                ("format", "csv".to_string()),
                ("nat", self.config.nationality.clone()),
            ],
        )
        .map_err(|e| ToolsError::InvalidConfigValueError {
            field: "persons.endpoint".to_string(),
            value: self.config.endpoint.clone(),
            reason: format!("Invalid URL format: {}", e),
        })
    }

    /// Fetches the CSV body, retrying network errors and 5xx responses.
    pub async fn fetch(&self) -> Result<Vec<u8>> {
        let url = self.request_url()?;
        let max_tries = self.config.retry_attempts.saturating_add(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.fetch_once(&url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_tries && is_retryable(&e) => {
                    tracing::warn!(
                        "Attempt {}/{} failed: {}; retrying in {}s",
                        attempt,
                        max_tries,
                        e,
                        self.config.retry_delay_seconds
                    );
                    tokio::time::sleep(Duration::from_secs(self.config.retry_delay_seconds)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_once(&self, url: &Url) -> Result<Vec<u8>> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url.clone())
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ToolsError::ApiStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

fn is_retryable(error: &ToolsError) -> bool {
    match error {
        ToolsError::ApiError(_) => true,
        ToolsError::ApiStatus { status, .. } => *status >= 500,
        _ => false,
    }
}

/// Counts data rows, excluding the header.
pub fn count_csv_records(body: &[u8]) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(body);
    let mut count = 0;
    for record in reader.records() {
        record?;
        count += 1;
    }
    Ok(count)
}

#[async_trait::async_trait]
impl<S: Storage> Job for PersonsJob<S> {
    fn name(&self) -> &str {
        "persons"
    }

    async fn run(&self) -> Result<JobOutcome> {
        tracing::info!(
            "Downloading {} test persons from {}",
            self.count,
            self.config.endpoint
        );

        let body = match self.fetch().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to download test persons: {}", e);
                return Err(e);
            }
        };

        let records = count_csv_records(&body)?;
        if records != self.count {
            tracing::warn!("Requested {} persons but received {}", self.count, records);
        }

        self.storage.write_file(&self.config.filename, &body).await?;
        let output_path = self.storage.full_path(&self.config.filename);
        tracing::info!("Test persons saved to {}", output_path.display());

        Ok(JobOutcome {
            output_path,
            records,
        })
    }
}
