//! `ua-rotator` command line.
//!
//! ```text
//! ua-rotator [--config PATH] pick [--count N] [--seed S]
//! ua-rotator [--config PATH] get URL [--user-agent VALUE | --no-user-agent]
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

use ua_rotator::config::{load_config, PolicyMode, RotatorConfig, StrategyKind};
use ua_rotator::observability::logging;
use ua_rotator::{RotatingClient, UserAgentPolicy};

#[derive(Parser)]
#[command(name = "ua-rotator")]
#[command(about = "Set, unset or rotate the User-Agent of HTTP requests", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print selected User-Agent values, one per line
    Pick {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Seed the random strategy for a reproducible sequence
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// GET a URL and pretty-print the JSON response
    Get {
        url: Url,

        /// Send this fixed value instead of rotating
        #[arg(short = 'A', long, conflicts_with = "no_user_agent")]
        user_agent: Option<String>,

        /// Send no User-Agent header at all
        #[arg(long)]
        no_user_agent: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RotatorConfig::default(),
    };

    logging::init(&config.observability.log_filter);

    tracing::info!(
        mode = ?config.user_agent.mode,
        strategy = ?config.user_agent.strategy,
        candidates = config.user_agent.candidates.len(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Pick { count, seed } => {
            if seed.is_some() {
                config.user_agent.mode = PolicyMode::Rotate;
                config.user_agent.strategy = StrategyKind::Random;
                config.user_agent.seed = seed;
            }
            let policy = UserAgentPolicy::from_config(&config.user_agent)?;
            for _ in 0..count {
                match policy.resolve() {
                    Some(ua) => println!("{}", ua),
                    None => println!("(unset)"),
                }
            }
        }
        Commands::Get {
            url,
            user_agent,
            no_user_agent,
        } => {
            let policy = if no_user_agent {
                UserAgentPolicy::Unset
            } else if let Some(value) = user_agent {
                UserAgentPolicy::fixed(value)?
            } else {
                UserAgentPolicy::from_config(&config.user_agent)?
            };
            let client = RotatingClient::new(policy, &config.timeouts)?;
            let json = client.get_json(url).await?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
