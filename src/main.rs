use clap::Parser;
use staffdir::utils::{export, logger, validation::Validate};
use staffdir::{CliConfig, HttpFetcher, LocalStorage, ScrapePipeline, Storage};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting staffdir");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Ctrl-C received, stopping new fetches");
            signal_cancel.cancel();
        }
    });

    let fetcher = HttpFetcher::new(Duration::from_secs(config.timeout_secs))?;
    let storage = LocalStorage::new(config.output_path.clone());
    let export_formats = config.export.clone();

    let pipeline = ScrapePipeline::new(Arc::new(fetcher), config, storage.clone())?;
    let report = pipeline.run(cancel).await?;

    for record in &report.records {
        println!("{}", record.name);
        println!("  URL: {}", record.source_url);
        println!("  Raum: {}", record.room.as_deref().unwrap_or("-"));
        println!("  Sprechstunde: {}", record.office_hour.as_deref().unwrap_or("-"));
        println!("  E-Mail: {}", record.email.as_deref().unwrap_or("-"));
    }

    for failure in &report.failures {
        eprintln!("FEHLER {}: {} ({})", failure.name, failure.reason, failure.url);
    }

    for format in &export_formats {
        let (file_name, content) = match format.as_str() {
            "json" => ("records.json", export::records_to_json(&report.records)?),
            "csv" => ("records.csv", export::records_to_csv(&report.records)?),
            // validate() already rejected anything else
            _ => continue,
        };
        storage.write_file(file_name, content.as_bytes()).await?;
        tracing::info!("Exported {} records to {}", report.records.len(), file_name);
    }

    tracing::info!(
        "Done: {} records, {} failures{}",
        report.records.len(),
        report.failures.len(),
        if report.cancelled { " (cancelled)" } else { "" }
    );

    if report.cancelled {
        std::process::exit(130);
    }

    Ok(())
}
