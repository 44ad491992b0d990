//! apiconf CLI - Resolve the API base URL for the current environment
//!
//! ```bash
//! apiconf show                      # Print the API base URL
//! apiconf show --env production     # Resolve for another environment
//! apiconf list                      # Print every environment's settings
//! apiconf check                     # Validate table and APP_ENV
//! apiconf serve                     # Serve the config over HTTP (port 3000)
//! apiconf --table envs.json show    # Use a custom table file
//! ```

use apiconf::{environment_from_process, AppConfig, ConfigTable, ENV_VAR};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "apiconf")]
#[command(about = "Resolve the API base URL for the active environment", long_about = None)]
struct Cli {
    /// JSON config table to use instead of the builtin one
    #[arg(short, long, global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the API base URL for the active environment
    Show {
        /// Environment tag (overrides APP_ENV)
        #[arg(short, long)]
        env: Option<String>,

        /// Print the whole resolved config as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every environment in the table
    List {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the table and the active environment
    Check,

    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    let table_path = cli.table.as_deref();

    let result = match cli.command {
        Commands::Show { env, json } => cmd_show(table_path, env.as_deref(), json),
        Commands::List { json } => cmd_list(table_path, json),
        Commands::Check => cmd_check(table_path),
        Commands::Serve { port } => cmd_serve(table_path, port).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn load_table(path: Option<&Path>) -> Result<ConfigTable, Box<dyn std::error::Error>> {
    match path {
        Some(p) => Ok(ConfigTable::from_file(p)?),
        None => Ok(ConfigTable::builtin()),
    }
}

/// Resolve against the table, honoring an explicit `--env`.
///
/// Without overrides this goes through the process-wide value.
fn resolve(
    table_path: Option<&Path>,
    env_override: Option<&str>,
) -> Result<AppConfig, Box<dyn std::error::Error>> {
    match (table_path, env_override) {
        (None, None) => Ok(apiconf::settings::init()?.clone()),
        (_, Some(tag)) => Ok(AppConfig::resolve(Some(tag), &load_table(table_path)?)?),
        (Some(_), None) => Ok(AppConfig::from_env_with(&load_table(table_path)?)?),
    }
}

fn cmd_show(
    table_path: Option<&Path>,
    env_override: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve(table_path, env_override)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", config.api_base_url);
    }
    Ok(())
}

fn cmd_list(table_path: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_table(table_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    let active = environment_from_process();
    write_listing(&mut io::stdout().lock(), &table, &active)?;
    Ok(())
}

/// Header and rows go to the same writer, with the active environment marked.
fn write_listing(out: &mut impl Write, table: &ConfigTable, active: &str) -> io::Result<()> {
    writeln!(out, "📋 Environments:\n")?;
    for (env, entry) in table.entries() {
        let marker = if env.as_str() == active { "▶" } else { " " };
        writeln!(out, "  {} {:<12} {}", marker, env, entry.api_url)?;
    }
    Ok(())
}

fn cmd_check(table_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("✔️  Checking configuration");

    let table = load_table(table_path)?;
    table.validate()?;
    eprintln!("   Table: all environments present");

    let config = AppConfig::from_env_with(&table)?;
    eprintln!("   {}: {}", ENV_VAR, config.environment);
    eprintln!("   API base URL: {}", config.api_base_url);

    eprintln!("\n✅ Configuration is valid");
    Ok(())
}

async fn cmd_serve(table_path: Option<&Path>, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_table(table_path)?;
    apiconf::server::start_server(port, table).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_header_and_rows_share_writer() {
        let mut out = Vec::new();
        write_listing(&mut out, &ConfigTable::builtin(), "production").unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "📋 Environments:");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "    development  http://localhost:5000/api");
        assert_eq!(lines[3], "  ▶ production   http://localhost:5000/api");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_listing_without_active_match() {
        let mut out = Vec::new();
        write_listing(&mut out, &ConfigTable::builtin(), "staging").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('▶'));
    }
}
