use clap::Parser;
use postal_gen::utils::{logger, validation::Validate};
use postal_gen::{CliConfig, GeneratorEngine, LocalStorage, PostalCodePipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting postal-gen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = PostalCodePipeline::new(storage, config);
    let engine = GeneratorEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Generation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
