use std::path::PathBuf;
use std::sync::Arc;
use clap::{Parser, Subcommand};
use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use news_comments::api::{ApiServer, ApiServerConfig};
use news_comments::{AppConfig, Comments};
use news_comments_cache::EvictionPolicy;

#[derive(Parser)]
#[command(name = "news-comments")]
#[command(about = "Comment service for news items", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start API server
    Server {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Maximum number of cached comments
        #[arg(long)]
        cache_capacity: Option<usize>,

        /// Cache eviction policy (lru or lfu)
        #[arg(long)]
        cache_policy: Option<EvictionPolicy>,

        /// Cached comment lifetime in seconds
        #[arg(long)]
        cache_ttl_secs: Option<u64>,
    },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "news_comments=info,news_comments_cache=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Server {
            host,
            port,
            cache_capacity,
            cache_policy,
            cache_ttl_secs,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(capacity) = cache_capacity {
                config.cache.capacity = capacity;
            }
            if let Some(policy) = cache_policy {
                config.cache.policy = policy;
            }
            if cache_ttl_secs.is_some() {
                config.cache.ttl_secs = cache_ttl_secs;
            }
            config.validate()?;

            let comments = Arc::new(Comments::in_memory(&config)?);
            let server = ApiServer::new(
                ApiServerConfig {
                    host: config.server.host.clone(),
                    port: config.server.port,
                },
                comments,
            );
            println!(
                "Starting API server on {}:{}",
                config.server.host, config.server.port
            );
            server.start().await?;
        }

        Commands::Config => {
            config.validate()?;
            print!("{}", serde_yaml::to_string(&config)?);
        }
    }

    Ok(())
}

/// Defaults, then the YAML file, then `COMMENTS_*` environment variables
fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    let mut config = match path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    config.apply_env()?;
    Ok(config)
}
