use clap::Parser;
use country_etl::utils::{logger, validation::Validate};
use country_etl::{CliConfig, CountryPipeline, EtlEngine, EtlError};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting country-etl");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ country-etl failed: {} (Category: {:?})",
            e,
            e.category()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &CliConfig) -> Result<(), EtlError> {
    let config = cli.to_run_config()?;
    config.validate()?;

    let engine = EtlEngine::new(CountryPipeline::with_stdout(config));
    let outcome = engine.run()?;

    tracing::info!("✅ Done, {} records", outcome.records());
    Ok(())
}
