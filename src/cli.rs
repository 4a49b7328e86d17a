// CLI module - command-line argument parsing and handlers
//
// Provides subcommands that run without starting the TUI:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults
// - register: Create a user account on the backend

use crate::api::{CrmBackend, HttpBackend};
use crate::config::{Config, VERSION};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};

/// Smart Connect - terminal client for the CRM backend
#[derive(Parser)]
#[command(name = "smart-connect")]
#[command(version = VERSION)]
#[command(about = "Terminal client for the Smart Connect CRM", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Register a new user account
    Register {
        /// Account name
        #[arg(long)]
        username: String,

        /// Password (prompted on stdin when omitted)
        #[arg(long)]
        password: Option<String>,

        /// Role stored with the account (server default when omitted)
        #[arg(long)]
        role: Option<String>,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub async fn handle_cli() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path()?;
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset()?;
            } else {
                println!("Usage: smart-connect config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        Some(Commands::Register {
            username,
            password,
            role,
        }) => {
            handle_register(&username, password, role.as_deref()).await?;
            Ok(true)
        }
        None => Ok(false), // No subcommand, start the TUI
    }
}

fn handle_config_path() -> anyhow::Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> anyhow::Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let path = Config::reset_config_file()?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

/// Read a password line from stdin after printing a prompt on stderr
fn prompt_password(input: &mut impl BufRead) -> anyhow::Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn handle_register(
    username: &str,
    password: Option<String>,
    role: Option<&str>,
) -> anyhow::Result<()> {
    let username = username.trim();
    anyhow::ensure!(!username.is_empty(), "Username must not be empty");

    let password = match password {
        Some(password) => password,
        None => prompt_password(&mut std::io::stdin().lock())?,
    };
    anyhow::ensure!(!password.is_empty(), "Password must not be empty");

    let config = Config::from_env();
    let backend = HttpBackend::from_config(&config)?;
    tracing::info!(user = %username, api_url = %config.api_url, "Registering account");

    backend
        .register(username, &password, role)
        .await
        .with_context(|| format!("Registration failed at {}", config.api_url))?;

    println!("User {username} registered. Sign in with: smart-connect");
    Ok(())
}
