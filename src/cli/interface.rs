use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};

use super::display;
use crate::config::AppConfig;
use crate::model::InventoryItem;
use crate::persistence::InventoryLogger;
use crate::report;

#[derive(Parser, Debug)]
#[command(name = "recordkeep")]
#[command(about = "Keep inventory logs and grade student score files")]
pub struct Cli {
    /// Directory holding persisted data files
    #[arg(long, global = true, env = "RECORDKEEP_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Grade a score file (`id,fullName,score` per line) and write a report
    Report {
        /// Score file to read
        input: PathBuf,
        /// Report file to write
        output: PathBuf,
    },
    /// Work with the JSON inventory log
    Inventory {
        #[command(subcommand)]
        action: InventoryCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum InventoryCommand {
    /// Append an item and save the log
    Add {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = clap::value_parser!(i32).range(0..))]
        quantity: i32,
    },
    /// Show every saved item
    List,
    /// Empty the saved log
    Clear,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::new(cli.data_dir)?;

    match cli.command {
        Commands::Report { input, output } => {
            let students = report::read_students(&input)
                .with_context(|| format!("could not process score file {}", input.display()))?;
            report::write_report(&output, &students)
                .with_context(|| format!("could not write report {}", output.display()))?;
            display::display_report(&students, &output);
        }
        Commands::Inventory { action } => run_inventory(&config, action)?,
    }
    Ok(())
}

fn run_inventory(config: &AppConfig, action: InventoryCommand) -> anyhow::Result<()> {
    let mut logger: InventoryLogger<InventoryItem> = InventoryLogger::new(config.inventory_file());

    match action {
        InventoryCommand::Add { id, name, quantity } => {
            config.ensure_data_dir()?;
            logger.load_from_file()?;
            logger.add(InventoryItem::new(id, name, quantity, Utc::now()));
            logger.save_to_file()?;
            println!("Saved {} item(s) to {}", logger.len(), logger.file_path().display());
        }
        InventoryCommand::List => {
            logger.load_from_file()?;
            display::display_inventory(&logger.get_all());
        }
        InventoryCommand::Clear => {
            config.ensure_data_dir()?;
            logger.save_to_file()?;
            println!("Inventory log cleared");
        }
    }
    Ok(())
}
