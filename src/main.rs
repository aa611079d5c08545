//! Windvane - build-time route planner for Markdown/MDX blogs.
//!
//! Derives canonical slugs, layouts, languages, and legacy date-bucketed
//! slugs for every content document, then writes the route table, permanent
//! redirects, and a sitemap for the page renderer and hosting layer.

mod cli;
mod config;
mod content;
mod core;
mod derive;
mod embed;
mod generator;
mod logger;
mod page;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Validate { args } => cli::validate::validate_site(args, &config),
    }
}
