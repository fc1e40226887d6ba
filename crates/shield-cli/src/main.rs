//! Prompt Shield CLI - Command-line interface for the classification gateway

use clap::Parser;
use shield_core::{DecisionPipeline, Mode, PipelineError, ShieldConfig};
use tracing::error;

#[derive(Parser)]
#[command(name = "shield")]
#[command(about = "Prompt Shield - Request classification gateway for tool-using models")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run a message through the decision pipeline
    Analyze {
        /// The message to evaluate
        message: String,
        /// Pipeline mode (shield, guardrail, chaos)
        #[arg(short, long, default_value = "shield")]
        mode: Mode,
        /// Configuration file path
        #[arg(short, long, default_value = "config/shield.toml")]
        config: String,
    },
    /// List the registered tool catalog
    Tools {
        /// Configuration file path
        #[arg(short, long, default_value = "config/shield.toml")]
        config: String,
    },
    /// Check configuration validity
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "config/shield.toml")]
        config: String,
    },
}

/// Loads configuration, falling back to defaults when the file does
/// not exist.
fn load_config(path: &str) -> anyhow::Result<ShieldConfig> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(toml::from_str(&raw)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ShieldConfig::default()),
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();

    match cli.command {
        Some(Commands::Analyze {
            message,
            mode,
            config,
        }) => {
            let config = load_config(&config)?;
            let pipeline = DecisionPipeline::from_config(&config)?;

            match pipeline.decide(&message, mode).await {
                Ok(decision) => {
                    println!("{}", serde_json::to_string_pretty(&decision)?);
                }
                Err(e) => {
                    // Internal detail goes to the log, never to the user.
                    error!("pipeline failure: {e}");
                    let body = match e {
                        PipelineError::ChaosModeDisabled => {
                            serde_json::json!({ "error": "Requested mode is not available" })
                        }
                        _ => serde_json::json!({ "error": "Internal Server Error" }),
                    };
                    println!("{}", serde_json::to_string_pretty(&body)?);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Tools { config }) => {
            let config = load_config(&config)?;
            let registry = config.build_registry()?;
            for tool in registry.iter() {
                println!("{:<28} [{}] {}", tool.name, tool.risk_level, tool.description);
            }
        }
        Some(Commands::Check { config: path }) => {
            let config = load_config(&path)?;
            let registry = config.build_registry()?;
            println!(
                "Config OK: {} tools, chaos mode {}",
                registry.len(),
                if config.global.allow_chaos_mode {
                    "ENABLED"
                } else {
                    "disabled"
                }
            );
        }
        None => {
            println!("Prompt Shield v0.1.0 - Use --help for commands");
        }
    }

    Ok(())
}
