use anyhow::Result;
use clap::{Parser, Subcommand};
use semantic_qa_common::{logger, AppConfig};

#[derive(Parser)]
#[command(name = "semantic-qa")]
#[command(about = "Semantic QA - sentence-embedding similarity answer service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "3000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env before reading config
    dotenv::dotenv().ok();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            // CLI arguments override the environment
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());

            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("Semantic QA starting...");
            tracing::info!("  Host: {}", host);
            tracing::info!("  Port: {}", port);
            tracing::info!("  Embedding backend: {}", config.embedding_base_url);
            tracing::info!("  Embedding model: {}", config.embedding_model);

            semantic_qa_server::start_server(config).await?;
        }
        None => {
            // Default: start server with env/default config
            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!(
                "Semantic QA starting on http://{}",
                config.server_bind_address()
            );

            semantic_qa_server::start_server(config).await?;
        }
    }

    Ok(())
}
