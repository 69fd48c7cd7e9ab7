use anyhow::Context;
use clap::Parser;
use course_scraper::utils::error::ErrorSeverity;
use course_scraper::utils::{logger, validation::Validate};
use course_scraper::{
    CatalogConfig, CatalogEngine, CatalogPipeline, CliConfig, LocalStorage, StaticCourseSource,
    TabularExport,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 載入課程目錄
    let catalog = match &config.catalog {
        Some(path) => CatalogConfig::from_file(path)
            .with_context(|| format!("failed to load catalog '{}'", path.display()))?,
        None => CatalogConfig::embedded().context("failed to load the built-in catalog")?,
    };

    for validation in [config.validate(), catalog.validate()] {
        if let Err(e) = validation {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = CatalogPipeline::new(storage, config, catalog, StaticCourseSource);
    let engine = CatalogEngine::new(pipeline);

    match engine.run().await {
        Ok(outcome) => {
            println!();
            println!("{}", outcome.result.summary);

            println!();
            println!("✅ Scraping complete! Files created:");
            println!("  - {} (for database import)", outcome.load.json_path);
            if let TabularExport::Written { .. } = outcome.load.csv {
                println!("  - {} (for review/editing)", outcome.load.csv_path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Catalog export failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
