use clap::Parser;
use swaggerhub_publish::utils::{logger, validation::Validate};
use swaggerhub_publish::{CliConfig, DryRunPublisher, LocalStorage, PublishEngine, PublishError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting swaggerhub-publish");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.to_publish_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    let publisher = DryRunPublisher::with_host(config.host());
    let engine = PublishEngine::new(LocalStorage::default(), publisher, config);

    if cli.dry_run {
        match engine.plan().await {
            Ok(coordinates) => {
                tracing::info!("Dry run complete");
                println!("{}", coordinates.resource_path());
            }
            Err(e) => exit_with(e),
        }
        return Ok(());
    }

    match engine.run().await {
        Ok(resource_path) => {
            println!("{}", resource_path);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn exit_with(e: PublishError) -> ! {
    tracing::error!(
        "Publish failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}
