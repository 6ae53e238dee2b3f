//! Time Booking service CLI server
//!
//! ```sh
//! # Run with default config (~/.config/time-booking/config.toml)
//! time-booking
//!
//! # Custom config path and port
//! time-booking --config /etc/time-booking/config.toml --port 8080
//!
//! # Load the demo data set into an empty database
//! time-booking --seed
//!
//! # Validate config without starting
//! time-booking --check
//! ```

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use time_booking::config::{AppConfig, ConfigError};
use time_booking::infrastructure::database::redact_credentials;
use time_booking::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "time-booking",
    version,
    about = "REST API for users, departments, projects and booking accounts",
    long_about = "Time Booking service: JSON REST API with OpenAPI docs for managing \
                  users, departments, projects and booking accounts.\n\n\
                  Default config: ~/.config/time-booking/config.toml\n\
                  DATABASE_URL overrides database.url."
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TIME_BOOKING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen address.
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Load demo data if the database is empty.
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(time_booking::default_config_path);

    // A missing file falls back to defaults; an unreadable or invalid one is fatal.
    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
            (AppConfig::default(), Some(source))
        }
        Err(e) => return Err(e.into()),
    };

    // ── Apply overrides ────────────────────────────────────────
    config.apply_env();
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    if let Some(host) = cli.host {
        info!("CLI override: host = {}", host);
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Database    : {}", redact_credentials(&config.database.url));
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        seed: cli.seed,
    })
    .await?;

    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
