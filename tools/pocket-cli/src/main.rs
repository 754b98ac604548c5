//! Pocket CLI - Command line storefront for the Pocket Diner menu.
//!
//! Commands:
//! - `pocket menu` - Browse the menu with filters, search, sort, and paging
//! - `pocket categories` - List category tabs
//! - `pocket featured` - Show the house favourites
//! - `pocket cart` - Build a cart and show its totals
//! - `pocket checkout` - Validate a checkout form and place the order
//! - `pocket config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{CartArgs, CategoriesArgs, CheckoutArgs, ConfigArgs, FeaturedArgs, MenuArgs};

/// Pocket CLI - Browse the menu, fill a cart, and check out
#[derive(Parser)]
#[command(name = "pocket")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of the menu
    Menu(MenuArgs),

    /// List menu categories
    Categories(CategoriesArgs),

    /// Show the house favourites
    Featured(FeaturedArgs),

    /// Build a cart and show totals
    Cart(CartArgs),

    /// Validate a checkout form and place the order
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config; the config commands must still open a broken file
    let config_path = cli.config.as_deref();
    let validate = !matches!(cli.command, Commands::Config(_));
    let ctx = match context::Context::load(config_path, output.clone(), validate) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Menu(args) => commands::menu::run(args, &ctx),
        Commands::Categories(args) => commands::categories::run(args, &ctx),
        Commands::Featured(args) => commands::featured::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
