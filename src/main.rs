use clap::Parser;
use solid_sampler::utils::error::ErrorSeverity;
use solid_sampler::utils::{logger, validation::Validate};
use solid_sampler::{build_demo, CliConfig, DemoRunner, SamplerConfig, SamplerError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting solid-sampler");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    let principles = cli.principles();

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        display_summary(&config, &principles);
        return Ok(());
    }

    let mut runner = DemoRunner::new();
    for principle in &principles {
        runner.add(build_demo(*principle, &config));
    }

    match runner.run_all().await {
        Ok(runs) => {
            for run in &runs {
                println!("{}", run.report);
            }
            tracing::info!(
                "📊 Summary: {}",
                DemoRunner::execution_summary(&runs)
            );
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn display_summary(config: &SamplerConfig, principles: &[solid_sampler::Principle]) {
    println!("Demonstrations to run:");
    for principle in principles {
        println!("  - {}: {}", principle, principle.summary());
    }
    println!("Document title: {}", config.devices.document);
    println!(
        "Shapes: height {} probed with width {}",
        config.shapes.initial_height, config.shapes.probe_width
    );
    println!("Catalog: {} products", config.catalog.products.len());
    if !config.query.is_empty() {
        println!("Extra query: {}", config.query.describe());
    }
    println!(
        "Journal: {} entries -> {}/{} (overwrite: {})",
        config.journal.entries.len(),
        config.journal.output_path,
        config.journal.file_name,
        config.journal.overwrite
    );
}

fn fail(e: SamplerError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
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
    std::process::exit(exit_code);
}
