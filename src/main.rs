use clap::Parser;
use custom_lists::utils::error::ErrorSeverity;
use custom_lists::utils::monitor::SystemMonitor;
use custom_lists::utils::{logger, validation::Validate};
use custom_lists::{CliConfig, ListError, LocalStorage, ReportWriter, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting custom-lists scenario runner");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        exit_with(&e);
    }

    tracing::info!("📁 Loading scenario from: {}", cli.config);
    let mut config = match TomlConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load scenario file '{}': {}", cli.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    cli.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Scenario validation failed: {}", e);
        exit_with(&e);
    }

    display_scenario_summary(&config);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No operations will be executed");
        perform_dry_run(&config);
        return Ok(());
    }

    let formats = match config.report_formats() {
        Ok(formats) => formats,
        Err(e) => exit_with(&e),
    };

    let monitor = SystemMonitor::new(config.monitoring_enabled());
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let plan = config.to_plan();
    monitor.log_stats("Before scenario");

    let reports = match plan.execute() {
        Ok(reports) => reports,
        Err(e) => exit_with(&e),
    };

    monitor.log_stats("After scenario");

    let writer = ReportWriter::new(LocalStorage::new(config.output_path()), formats);
    for report in &reports {
        let failed = report.failed_steps();
        println!(
            "✅ {} list: {} operations, {} failed, final contents: [{}]",
            report.implementation,
            report.outcomes.len(),
            failed,
            report
                .final_contents
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        match writer.write(report) {
            Ok(paths) => {
                for path in paths {
                    tracing::info!("📁 Report saved to: {}", path);
                    println!("📁 Report saved to: {}", path);
                }
            }
            Err(e) => exit_with(&e),
        }
    }

    monitor.log_final_stats();
    Ok(())
}

fn exit_with(e: &ListError) -> ! {
    tracing::error!(
        "❌ Scenario failed: {} (Category: {:?}, Severity: {:?})",
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

fn display_scenario_summary(config: &TomlConfig) {
    println!("📋 Scenario Summary:");
    match &config.scenario.version {
        Some(version) => println!("  Scenario: {} v{}", config.scenario.name, version),
        None => println!("  Scenario: {}", config.scenario.name),
    }
    if let Some(description) = &config.scenario.description {
        println!("  Description: {}", description);
    }
    println!("  List: {}", config.list.kind);
    if let Some(capacity) = config.list.initial_capacity {
        println!("  Initial Capacity: {}", capacity);
    }
    println!("  Operations: {}", config.operations.len());
    println!("  On Error: {:?}", config.error_policy());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));
    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    for (position, operation) in config.operations.iter().enumerate() {
        println!("  {:>3}. {}", position + 1, operation);
    }
    println!();
    println!("✅ Dry run complete. Drop --dry-run to execute the scenario.");
}
