use clap::Parser;
use woc_bootcamp::core::ConfigProvider;
use woc_bootcamp::utils::{logger, validation::Validate};
use woc_bootcamp::{LocalStorage, PlotEngine, TaylorPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-taylor")]
#[command(about = "Taylor expansion plots driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "bootcamp.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the expansion order from config
    #[arg(long)]
    order: Option<u32>,

    /// Override compare mode from config
    #[arg(long)]
    compare: Option<bool>,

    /// Dry run - compute the approximations without writing any files
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    let verbose = args.verbose || config.verbose();
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(order) = args.order {
        config.taylor.order = Some(order);
        tracing::info!("🔧 Order overridden to: {}", order);
    }
    if let Some(compare) = args.compare {
        config.output.compare = Some(compare);
        tracing::info!("🔧 Compare mode overridden to: {}", compare);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);
    println!("Executing Taylor expansion up to order {}", config.order());

    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = PlotEngine::new(TaylorPipeline::new(storage, config));

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        for summary in engine.dry_run().await? {
            println!(
                "n={:<3} max |error| = {:.3e}   |error| at x=1 = {:.3e}",
                summary.order, summary.max_abs_error, summary.error_at_one
            );
        }
        return Ok(());
    }

    match engine.run().await {
        Ok(outputs) => {
            tracing::info!("✅ Plot completed successfully!");
            for path in outputs {
                println!("📁 {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Plot failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    let grid = config.grid();
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("   Order: {}", config.order());
    tracing::info!(
        "   Grid: {} points over [{}, {}]",
        grid.points,
        grid.start,
        grid.stop
    );
    tracing::info!("   Compare mode: {}", config.compare());
    tracing::info!("   Output: {}", config.output_path());
    tracing::info!("   Formats: {}", config.output_formats().join(", "));
}
