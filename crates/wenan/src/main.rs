// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wenan - a copywriting assistant for WeChat Moments, Bilibili and
//! short-video platforms.
//!
//! This is the binary entry point.

mod form;
mod generate;
mod options;
mod setup;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use wenan_core::ContentDomain;

/// Wenan - generate social-media copy with an OpenAI-compatible model.
#[derive(Parser, Debug)]
#[command(name = "wenan", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate copy once and print it.
    Generate(generate::GenerateArgs),
    /// Launch an interactive session with history and templates.
    Shell {
        /// Domain to start in; defaults to `generation.domain`.
        #[arg(long)]
        domain: Option<ContentDomain>,
    },
    /// List the categories, styles and lengths each domain accepts.
    Options {
        /// Only show this domain.
        #[arg(long)]
        domain: Option<ContentDomain>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => wenan_config::load_and_validate_path(path),
        None => wenan_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            wenan_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.session.log_level);
    tracing::debug!(
        endpoint = %config.provider.endpoint,
        model = %config.provider.model,
        "config loaded"
    );

    let outcome = match cli.command {
        Some(Commands::Generate(args)) => generate::run_generate(&config, args).await,
        Some(Commands::Shell { domain }) => shell::run_shell(&config, domain).await,
        Some(Commands::Options { domain }) => {
            print!("{}", options::render_options(domain));
            Ok(())
        }
        None => {
            println!("wenan: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Installs the stderr subscriber so generated text on stdout stays clean.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wenan={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
