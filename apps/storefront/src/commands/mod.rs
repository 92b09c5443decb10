//! # Storefront Commands
//!
//! One handler per subcommand.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (context, shared printing)
//! ├── catalog.rs  ◄─── browse
//! └── details.rs  ◄─── show, favorite, order
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  storefront order 3 --extra 1:2 --quantity 2                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  clap ──► Command::Order { id, extras, quantity }                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  details::order(&ctx, ..., &mut stdout)                                 │
//! │         │  DetailsSession::open / increment_extra / submit_order        │
//! │         ▼                                                               │
//! │  Result<(), AppError> ──► exit code                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers write to any `io::Write` so tests can capture their output.

pub mod catalog;
pub mod details;

use std::io::Write;
use std::sync::Arc;

use savor_client::MenuApi;
use savor_session::DetailsView;

use crate::config::StorefrontConfig;
use crate::error::{AppError, AppResult};

/// What every command needs.
#[derive(Clone)]
pub struct CommandContext {
    pub api: Arc<dyn MenuApi>,
    pub config: StorefrontConfig,
}

impl CommandContext {
    pub fn new(api: Arc<dyn MenuApi>, config: StorefrontConfig) -> Self {
        CommandContext { api, config }
    }
}

pub(crate) fn write_line(out: &mut dyn Write, line: impl AsRef<str>) -> AppResult<()> {
    writeln!(out, "{}", line.as_ref())
        .map_err(|e| AppError::internal(format!("Failed to write output: {e}")))
}

/// Prints the detail screen as text.
pub(crate) fn print_details(out: &mut dyn Write, view: &DetailsView) -> AppResult<()> {
    let Some(item) = &view.item else {
        return write_line(out, "(loading)");
    };

    let heart = if view.is_favorite { "♥" } else { "♡" };
    write_line(out, format!("{} {} (#{})", heart, item.name, item.id))?;
    write_line(out, format!("  {}", item.description))?;

    if !view.extras.is_empty() {
        write_line(out, "  Extras:")?;
        for extra in &view.extras {
            write_line(
                out,
                format!(
                    "    [{}] {:<24} x{}",
                    extra.id, extra.name, extra.quantity
                ),
            )?;
        }
    }

    write_line(out, format!("  Quantity: {}", view.order_quantity))?;
    write_line(out, format!("  Total: {}", view.formatted_total))
}
