use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use faqbot::config::AppConfig;
use faqbot::embeddings::Strategy;
use faqbot::matcher::build_matcher;
use faqbot::Result;
use tracing::info;

#[derive(Parser)]
#[command(name = "faqbot")]
#[command(about = "FAQ-matching HTTP service")]
#[command(version)]
struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (default: config.toml, then config.example.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,
        /// Listening port (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
        /// Vectorization strategy
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,
        /// Catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Disable cross-origin requests
        #[arg(long)]
        no_cors: bool,
    },
    /// Answer one message locally and print the reply
    Ask {
        /// The message to match
        message: String,
        /// Vectorization strategy
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,
        /// Catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Show current configuration
    Config,
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            let mut config = AppConfig::from_file(path)?;
            config.apply_env_overrides()?;
            Ok(config)
        }
        None => AppConfig::load(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    if cli.verbose {
        config.logging.level = "debug".to_string();
    }

    match cli.command {
        Commands::Serve {
            host,
            port,
            strategy,
            catalog,
            no_cors,
        } => {
            faqbot::logging::init_logging(&config)?;
            info!("Configuration loaded successfully");

            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(strategy) = strategy {
                config.matcher.strategy = strategy;
            }
            if let Some(catalog) = catalog {
                config.catalog.path = catalog;
            }
            if no_cors {
                config.server.enable_cors = false;
            }

            faqbot::api::serve_api(&config).await?;
        }
        Commands::Ask {
            message,
            strategy,
            catalog,
        } => {
            faqbot::logging::init_simple_logging();

            let strategy = strategy.unwrap_or(config.matcher.strategy);
            let catalog = catalog.unwrap_or(config.catalog.path);
            handle_ask_command(&message, strategy, &catalog)?;
        }
        Commands::Config => {
            handle_config_command(&config)?;
        }
    }

    Ok(())
}

fn handle_ask_command(message: &str, strategy: Strategy, catalog: &Path) -> Result<()> {
    let matcher = build_matcher(catalog, strategy)?;

    let best = matcher.best_match(message)?;
    if let Some(best) = best {
        let question = matcher
            .catalog()
            .get(best.index)
            .map_or("", |e| e.question.as_str());
        println!(
            "🔍 Closest question: {question:?} (score {:.4}, threshold {:.2})",
            best.score,
            matcher.threshold()
        );
    }

    println!("{}", matcher.reply_for(best));
    Ok(())
}

fn handle_config_command(config: &AppConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| faqbot::FaqBotError::Custom(format!("Failed to render config: {e}")))?;

    println!("📋 Current configuration");
    println!("========================\n");
    println!("{rendered}");
    println!(
        "Dense strategy: {}",
        if cfg!(feature = "dense") {
            "compiled in"
        } else {
            "not compiled (use --features dense)"
        }
    );
    Ok(())
}
