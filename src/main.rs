use anyhow::Result;
use clap::{Parser, Subcommand};

use splitpal::config::{paths::SplitpalPaths, settings::Settings};
use splitpal::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "splitpal",
    version,
    about = "Terminal-based bill splitting and shared-expense tracker",
    long_about = "splitpal keeps a roster of friends with running balances and \
                  lets you split bills with them from the terminal. Positive \
                  balances mean a friend owes you; negative means you owe them."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Write a default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SplitpalPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) | None => {
            run_tui(&settings)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Config already exists at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Initialized splitpal at: {}", paths.base_dir().display());
                println!();
                println!("Default settings written with a starter roster:");
                for seed in &settings.seed_friends {
                    println!("  - {} ({}{})", seed.name, seed.balance, settings.currency_symbol);
                }
                println!();
                println!("Edit '{}' to change them.", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("splitpal Configuration");
            println!("======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Avatar base URL: {}", settings.avatar_base_url);
            println!("  Seed friends:    {}", settings.seed_friends.len());
        }
    }

    Ok(())
}
