//! Usage reading commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::output;
use crate::context::CliContext;

/// Usage reading arguments
#[derive(Args, Debug)]
pub struct UsageArgs {
    #[command(subcommand)]
    pub command: UsageCommands,
}

/// Usage subcommands
#[derive(Subcommand, Debug)]
pub enum UsageCommands {
    /// Append a usage reading to an assessment
    Add {
        /// Assessment id
        id: String,
        /// Logical timestamp of the reading
        #[arg(long)]
        timestamp: i64,
        /// Consumption for this reading
        #[arg(long)]
        consumption: f64,
    },
    /// List an assessment's usage readings in append order
    List {
        /// Assessment id
        id: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Total consumption across an assessment's readings
    Total {
        /// Assessment id
        id: String,
    },
}

/// Run usage command
pub fn run(ctx: &CliContext, args: UsageArgs) -> Result<()> {
    match args.command {
        UsageCommands::Add {
            id,
            timestamp,
            consumption,
        } => {
            let updated = ctx.service.append_usage(&id, timestamp, consumption)?;
            println!(
                "Recorded reading for {} ({} readings total)",
                updated.id,
                updated.usage_history.len()
            );
            Ok(())
        }
        UsageCommands::List { id, json } => {
            let readings = ctx.service.usage_history(&id)?;
            if json {
                return output::print_json(&readings);
            }
            if readings.is_empty() {
                println!("No usage readings recorded.");
                return Ok(());
            }
            println!("{}", output::readings_table(&readings));
            Ok(())
        }
        UsageCommands::Total { id } => {
            let total = ctx.service.total_consumption(&id)?;
            println!("{total}");
            Ok(())
        }
    }
}
