//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use savor_core::{validation, ExtraId, ValidationError};

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Browse the menu and place orders")]
pub struct Cli {
    /// Config file (defaults to storefront.toml in the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List categories and foods
    Browse {
        /// Only foods in this category
        #[arg(long)]
        category: Option<u64>,

        /// Case-insensitive name filter
        #[arg(long)]
        search: Option<String>,
    },

    /// Show an item's details, extras and favorite status
    Show {
        /// Item id
        id: String,
    },

    /// Flip an item's favorite status
    Favorite {
        /// Item id
        id: String,
    },

    /// Compose and submit an order
    Order {
        /// Item id
        id: String,

        /// Extra to add, as EXTRA_ID or EXTRA_ID:COUNT (repeatable)
        #[arg(long = "extra", value_name = "EXTRA_ID[:N]")]
        extras: Vec<String>,

        /// Order quantity
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
}

/// A parsed `--extra` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraRequest {
    pub id: ExtraId,
    pub count: u32,
}

impl ExtraRequest {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let (id, count) = match raw.split_once(':') {
            Some((id, count)) => {
                let count = count
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ValidationError::InvalidFormat {
                        field: "extra".to_string(),
                        reason: format!("'{count}' is not a count"),
                    })?;
                (id, count)
            }
            None => (raw, 1),
        };

        Ok(ExtraRequest {
            id: validation::parse_extra_id(id)?,
            count: validation::validate_step_count("extra", count)?,
        })
    }
}
