use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use lexigen::utils::{logger, validation::Validate};
use lexigen::{web, CliConfig, GeminiClient, VocabEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting lexigen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Missing credential is non-fatal: the UI stays up and every generation
    // attempt answers with the failure message.
    let client = GeminiClient::from_config(&config);
    if !client.is_available() {
        eprintln!("⚠️  No API key found; the generate button will report an error.");
    }

    let engine = VocabEngine::new(client, config.generation_request());
    let state = web::AppState::new(Arc::new(engine));

    let addr: SocketAddr = config.bind.parse()?;
    web::serve(state, addr).await?;

    Ok(())
}
