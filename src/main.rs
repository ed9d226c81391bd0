use clap::Parser;
use turtle_island::config::LogFormat;
use turtle_island::utils::error::ErrorSeverity;
use turtle_island::utils::{logger, validation::Validate};
use turtle_island::{CliConfig, CsvRecipePipeline, LocalStorage, RecipeConfig, RecipeEngine};

fn main() {
    let args = CliConfig::parse();

    match args.log_format {
        LogFormat::Compact => logger::init_cli_logger(args.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Loading recipe from: {}", args.config);

    let mut config = match RecipeConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load recipe '{}': {}", args.config, e);
            eprintln!("Make sure the file exists and is valid TOML");
            std::process::exit(1);
        }
    };

    if let Some(input) = &args.input {
        tracing::info!("Input overridden to: {}", input);
        config.source.path = input.clone();
    }

    if let Err(e) = config.validate() {
        tracing::error!("Recipe validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!(
        "Recipe '{}' loaded with {} step(s)",
        config.recipe.name,
        config.steps.len()
    );

    if args.dry_run {
        tracing::info!("DRY RUN - no data will be read or written");
        for (position, step) in config.steps.iter().enumerate() {
            tracing::info!("  {}. {}", position + 1, step.describe());
            match serde_json::to_string(step) {
                Ok(json) => tracing::debug!("     {}", json),
                Err(e) => tracing::warn!("     could not serialize step: {}", e),
            }
        }
        return;
    }

    let monitor_enabled = args
        .monitor
        .unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("System monitoring enabled");
    }

    let storage = LocalStorage::new(config.load.output_path.clone());
    let pipeline = CsvRecipePipeline::new(storage, config);
    let engine = RecipeEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(output_path) => {
            println!("Recipe completed, output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "Recipe failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
