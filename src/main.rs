use anyhow::Context;
use bsn_testing_tools::core::JobOutcome;
use bsn_testing_tools::utils::validation::Validate;
use bsn_testing_tools::{
    BsnFileJob, BsnGenerator, BsnValidator, CliConfig, Command, LogContext, PersonsJob,
    ToolsConfig, ToolsEngine, ToolsError, Workspace,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = cli
        .load_tools_config()
        .context("Failed to load configuration")?;
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let workspace = Workspace::init(&cli.root, &config.paths)
        .with_context(|| format!("Failed to prepare workspace in {}", cli.root.display()))?;
    let _logging = LogContext::init(&cli.logging_config(workspace.log_file()))
        .context("Failed to initialise logging")?;

    tracing::info!("Starting bsn-testing-tools");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli, &config, &workspace).await {
        tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(
    cli: &CliConfig,
    config: &ToolsConfig,
    workspace: &Workspace,
) -> Result<(), ToolsError> {
    match &cli.command {
        Command::Generate { count, seed } => {
            let numbers = match seed.or(config.generator.seed) {
                Some(seed) => BsnGenerator::seeded(seed)
                    .with_max_attempts(config.generator.max_attempts)
                    .generate_many(*count)?,
                None => BsnGenerator::from_thread_rng()
                    .with_max_attempts(config.generator.max_attempts)
                    .generate_many(*count)?,
            };
            for bsn in numbers {
                println!("{}", bsn);
            }
        }
        Command::Validate { candidates } => {
            let validator = BsnValidator::new();
            let mut malformed = None;
            for candidate in candidates {
                match validator.validate(candidate) {
                    Ok(true) => println!("✅ {} is valid", candidate),
                    Ok(false) => println!("❌ {} is invalid", candidate),
                    Err(e) => {
                        println!("⚠️ {}", e);
                        malformed = Some(e);
                    }
                }
            }
            if let Some(e) = malformed {
                std::process::exit(e.exit_code().max(1));
            }
        }
        Command::BsnFile { generated, seed } => {
            let mut file_config = config.bsn_file.clone();
            if let Some(generated) = generated {
                file_config.generated_count = *generated;
            }
            let mut generator_config = config.generator.clone();
            if seed.is_some() {
                generator_config.seed = *seed;
            }

            let job = BsnFileJob::new(workspace.output_storage(), file_config, generator_config);
            report(ToolsEngine::new(job).run().await?);
        }
        Command::Persons { count } => {
            let job = PersonsJob::new(workspace.output_storage(), config.persons.clone(), *count)?;
            report(ToolsEngine::new(job).run().await?);
        }
    }

    Ok(())
}

fn report(outcome: JobOutcome) {
    println!("✅ Wrote {} records", outcome.records);
    println!("📁 Output saved to: {}", outcome.output_path.display());
}
