//! # Savor Storefront
//!
//! Terminal shell over the detail screen session: browse the catalog,
//! inspect an item, flip its favorite flag, and place an order.
//!
//! ## Module Organization
//! ```text
//! savor_storefront/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap definitions
//! ├── config.rs       ◄─── storefront.toml + SAVOR_* env
//! ├── navigation.rs   ◄─── Navigator that ends the command
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command context, printing
//! │   ├── catalog.rs  ◄─── browse
//! │   └── details.rs  ◄─── show, favorite, order
//! └── error.rs        ◄─── AppError for command failures
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod navigation;

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use savor_client::HttpMenuApi;

use cli::{Cli, Command};
use commands::{catalog, details, CommandContext};
use config::StorefrontConfig;
use error::AppResult;

/// Runs the storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Parse command line                                                  │
/// │  2. Initialize Logging (stderr, RUST_LOG or "info,savor=debug")         │
/// │  3. Load configuration (defaults → file → SAVOR_* env)                  │
/// │  4. Build the HTTP menu client                                          │
/// │  5. Dispatch the subcommand, print errors as "error [CODE]: message"    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let mut stdout = std::io::stdout().lock();
    match execute(cli, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error [{}]: {}", e.code.as_str(), e.message);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli, out: &mut dyn Write) -> AppResult<()> {
    let config = StorefrontConfig::load(cli.config.as_deref())?;
    info!(base_url = %config.api.base_url, locale = %config.display.locale, "configuration loaded");

    let api = HttpMenuApi::new(config.client_config()?)?;
    let ctx = CommandContext::new(Arc::new(api), config);
    dispatch(&ctx, cli.command, out).await
}

/// Runs one parsed subcommand against `ctx`.
pub async fn dispatch(ctx: &CommandContext, command: Command, out: &mut dyn Write) -> AppResult<()> {
    match command {
        Command::Browse { category, search } => {
            catalog::browse(ctx, category, search.as_deref(), out).await
        }
        Command::Show { id } => details::show(ctx, &id, out).await,
        Command::Favorite { id } => details::favorite(ctx, &id, out).await,
        Command::Order {
            id,
            extras,
            quantity,
        } => details::order(ctx, &id, &extras, quantity, out).await,
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=savor_session=trace` - Trace the session only
/// - Default: INFO, DEBUG for savor crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,savor=debug"));

    // Ignore a second initialization
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
