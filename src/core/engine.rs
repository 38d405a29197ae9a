use crate::core::{Job, JobOutcome};
use crate::utils::error::Result;
use std::time::Instant;

pub struct ToolsEngine<J: Job> {
    job: J,
}

impl<J: Job> ToolsEngine<J> {
    pub fn new(job: J) -> Self {
        Self { job }
    }

    pub async fn run(&self) -> Result<JobOutcome> {
        let started = Instant::now();
        tracing::info!("Starting job '{}'", self.job.name());

        match self.job.run().await {
            Ok(outcome) => {
                tracing::info!(
                    "Job '{}' wrote {} records to {} in {:?}",
                    self.job.name(),
                    outcome.records,
                    outcome.output_path.display(),
                    started.elapsed()
                );
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!("Job '{}' failed: {}", self.job.name(), e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ToolsError;
    use std::path::PathBuf;

    struct FixedJob {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl Job for FixedJob {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn run(&self) -> Result<JobOutcome> {
            if self.fail {
                return Err(ToolsError::ConfigError {
                    message: "boom".to_string(),
                });
            }
            Ok(JobOutcome {
                output_path: PathBuf::from("output/fixed.csv"),
                records: 3,
            })
        }
    }

    #[tokio::test]
    async fn test_run_returns_outcome() {
        let engine = ToolsEngine::new(FixedJob { fail: false });
        let outcome = engine.run().await.unwrap();
        assert_eq!(outcome.records, 3);
        assert_eq!(outcome.output_path, PathBuf::from("output/fixed.csv"));
    }

    #[tokio::test]
    async fn test_run_propagates_errors() {
        let engine = ToolsEngine::new(FixedJob { fail: true });
        assert!(matches!(
            engine.run().await,
            Err(ToolsError::ConfigError { .. })
        ));
    }
}
