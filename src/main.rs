use clap::Parser;
use sample::utils::{logger, validation::Validate};
use sample::{CliConfig, ConfigProvider, Sample, SampleError};

fn fail(e: SampleError) -> ! {
    tracing::error!(
        "Sample failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        logger::init_cli_logger(cli.verbose);
        fail(e);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            fail(e);
        }
    };

    logger::init_logger(config.verbose(), config.log_format());
    tracing::debug!("Resolved config: {:?}", config);

    let sample = Sample::new();
    sample.run(config.args())?;

    Ok(())
}
