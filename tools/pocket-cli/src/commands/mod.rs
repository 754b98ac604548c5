//! CLI command implementations.

pub mod cart;
pub mod categories;
pub mod checkout;
pub mod config;
pub mod featured;
pub mod menu;

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Category tab to show ("All" for everything).
    #[arg(long)]
    pub category: Option<String>,

    /// Case-insensitive text to match in names and descriptions.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order: name-asc, name-desc, price-asc, price-desc.
    #[arg(long)]
    pub sort: Option<String>,

    /// Page to show (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: usize,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Show how many items each category holds.
    #[arg(long)]
    pub counts: bool,
}

/// Arguments for the featured command.
#[derive(Args)]
pub struct FeaturedArgs {
    /// Show at most this many favourites.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Menu item ids to add, in order. Repeats follow the duplicate-add policy.
    pub items: Vec<String>,

    /// Set a line's quantity (ID=N). Zero or less removes the line.
    #[arg(long = "qty", value_name = "ID=N")]
    pub quantities: Vec<String>,

    /// Remove a line.
    #[arg(long = "remove", value_name = "ID")]
    pub removals: Vec<String>,

    /// Start from the demo cart.
    #[arg(long)]
    pub sample: bool,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Checkout form file (TOML or JSON, camelCase field names).
    #[arg(short, long)]
    pub form: Option<String>,

    /// Override a form field (FIELD=VALUE), e.g. deliveryOption=pickup.
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub fields: Vec<String>,

    /// Menu item ids to order.
    #[arg(short, long, value_delimiter = ',')]
    pub items: Vec<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Split a `KEY=VALUE` argument.
pub(crate) fn parse_assignment(arg: &str) -> Result<(&str, &str)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected KEY=VALUE, got {:?}", arg))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("Missing key in {:?}", arg));
    }
    Ok((key, value))
}
