use clap::Parser;
use csv_import::utils::{logger, validation::Validate};
use csv_import::{
    CliConfig, CredentialStore, FileCredentialStore, HttpTransport, ImportEngine, RowOutcome,
};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting csv-import CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let cache_path = match &config.key_cache {
        Some(path) => PathBuf::from(path),
        None => FileCredentialStore::default_path()
            .ok_or("no config directory available; pass --key-cache")?,
    };
    let store = FileCredentialStore::new(cache_path);

    // A freshly supplied key is cached immediately; otherwise fall back to
    // the cached one from an earlier run.
    let credential = match &config.api_key {
        Some(key) => {
            store.set(key)?;
            tracing::debug!("API key cached for later runs");
            key.clone()
        }
        None => match store.get()? {
            Some(key) => key,
            None => {
                eprintln!("❌ No API key available: pass --api-key once to cache it");
                std::process::exit(1);
            }
        },
    };

    let content = tokio::fs::read(&config.file).await?;

    let transport = HttpTransport::new(&config.base_url)?;
    let engine = ImportEngine::new(transport);

    match engine.submit(&config.collection, &credential, &content).await {
        Ok(report) => {
            for (index, outcome) in report.outcomes.iter().enumerate() {
                if let RowOutcome::Failed(reason) = outcome {
                    eprintln!("⚠️ row {}: {}", index + 1, reason);
                }
            }
            if report.all_created() {
                tracing::info!("✅ Import completed: {} records created", report.created());
                println!("✅ Import completed: {} records created", report.created());
            } else {
                tracing::warn!(
                    "⚠️ Import completed with failures: {} created, {} failed",
                    report.created(),
                    report.failed()
                );
                println!(
                    "⚠️ Import completed: {} created, {} of {} failed",
                    report.created(),
                    report.failed(),
                    report.attempted
                );
            }
        }
        Err(e) => {
            tracing::error!("❌ Import failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
