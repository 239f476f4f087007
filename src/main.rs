//! WhatsApp API middleware entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use whatsapp_api_middleware::api::docs::{openapi_json, DOCS_PATH};
use whatsapp_api_middleware::config::Config;
use whatsapp_api_middleware::{metrics, server};

/// WhatsApp API middleware HTTP service.
#[derive(Parser, Debug)]
#[command(name = "whatsapp-api-middleware")]
#[command(about = "API middleware para notificaciones WhatsApp")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Interface to bind (overrides APP_HOST).
    #[arg(long, global = true)]
    host: Option<String>,

    /// Port to listen on (overrides APP_PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document as JSON.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load()?;
    apply_overrides(&args, &mut config);

    init_logging(&config);

    // Initialize metrics
    metrics::init_metrics();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Openapi) => cmd_openapi(),
        Some(Command::Serve) | None => cmd_serve(&config).await,
    }
}

/// CLI flags take precedence over the environment.
fn apply_overrides(args: &Args, config: &mut Config) {
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.verbose |= args.verbose;
}

/// Install the tracing subscriber. `--verbose` replaces the configured filter.
fn init_logging(config: &Config) {
    let filter = if config.verbose {
        EnvFilter::new("whatsapp_api_middleware=debug,tower_http=debug,info")
    } else {
        EnvFilter::new(&config.log_level)
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Run the HTTP server until shutdown.
async fn cmd_serve(config: &Config) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        docs = DOCS_PATH,
        "Starting WhatsApp API middleware"
    );

    server::run(config).await?;
    Ok(())
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("WHATSAPP API MIDDLEWARE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}:{}", config.host, config.port);
    println!("  Log Level: {}", config.log_level);
    println!("  Log Format: {}", if config.log_json { "JSON" } else { "Text" });
    println!("  Verbose: {}", config.verbose);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    println!("{}", openapi_json()?);
    Ok(())
}
