use crate::config::toml_config::{BsnFileConfig, GeneratorConfig};
use crate::core::bsn::{passes_eleven_proof, BsnValidator};
use crate::core::generator::BsnGenerator;
use crate::core::{Bsn, BsnRecord, BsnSource, Job, JobOutcome, Storage};
use crate::utils::error::{Result, ToolsError};
use rand::RngCore;

/// Fixed numbers every BSN test file starts with.
pub const SAMPLE_BSNS: [&str; 16] = [
    "123456782", "987654321", "111222333", "123456789", "876543210", "234567890", "345678901",
    "456789012", "567890123", "678901234", "789012345", "890123456", "901234567", "012345678",
    "135792468", "246813579",
];

/// Writes `bsn,valid,source` rows: the samples, then freshly generated numbers.
pub struct BsnFileJob<S: Storage> {
    storage: S,
    config: BsnFileConfig,
    generator: GeneratorConfig,
}

impl<S: Storage> BsnFileJob<S> {
    pub fn new(storage: S, config: BsnFileConfig, generator: GeneratorConfig) -> Self {
        Self {
            storage,
            config,
            generator,
        }
    }

    pub fn build_records(&self) -> Result<Vec<BsnRecord>> {
        let validator = BsnValidator::new();
        let mut records = Vec::with_capacity(SAMPLE_BSNS.len() + self.config.generated_count);

        for sample in SAMPLE_BSNS {
            let bsn = Bsn::parse(sample)?;
            let valid = validator.validate_bsn(&bsn);
            records.push(BsnRecord {
                bsn,
                valid,
                source: BsnSource::Sample,
            });
        }

        let generated = match self.generator.seed {
            Some(seed) => self.generate(BsnGenerator::seeded(seed))?,
            None => self.generate(BsnGenerator::from_thread_rng())?,
        };
        records.extend(generated.into_iter().map(|bsn| BsnRecord {
            valid: passes_eleven_proof(&bsn),
            bsn,
            source: BsnSource::Generated,
        }));

        Ok(records)
    }

    fn generate<R: RngCore>(&self, generator: BsnGenerator<R>) -> Result<Vec<Bsn>> {
        generator
            .with_max_attempts(self.generator.max_attempts)
            .generate_many(self.config.generated_count)
    }
}

pub fn records_to_csv(records: &[BsnRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| ToolsError::IoError(e.into_error()))
}

#[async_trait::async_trait]
impl<S: Storage> Job for BsnFileJob<S> {
    fn name(&self) -> &str {
        "bsn-file"
    }

    async fn run(&self) -> Result<JobOutcome> {
        let records = self.build_records()?;
        let data = records_to_csv(&records)?;

        self.storage.write_file(&self.config.filename, &data).await?;
        let output_path = self.storage.full_path(&self.config.filename);
        tracing::info!("BSN test file saved to {}", output_path.display());

        Ok(JobOutcome {
            output_path,
            records: records.len(),
        })
    }
}
