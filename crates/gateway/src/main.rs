//! SheTrade Connect gateway - HTTP REST API over the in-memory store.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gateway_lib::config::GatewayConfig;
use gateway_lib::routes::ROUTE_TABLE;

#[derive(Parser)]
#[command(name = "shetrade-gateway")]
#[command(about = "SheTrade Connect REST API")]
struct Cli {
    /// Force debug logging regardless of RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "GATEWAY_HOST")]
        host: Option<String>,
        #[arg(long, env = "GATEWAY_PORT")]
        port: Option<u16>,
        /// Start with an empty store
        #[arg(long)]
        no_seed: bool,
    },
    /// Print the route table
    Routes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = GatewayConfig::from_env();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.service.log_level))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_seed,
        } => {
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            if no_seed {
                config.seed_fixtures = false;
            }

            gateway_lib::run_server(config).await?;
        }
        Commands::Routes => {
            for (method, path) in ROUTE_TABLE {
                println!("{:<7} {}", method, path);
            }
        }
    }

    Ok(())
}
