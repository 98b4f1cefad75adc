//! List command

use anyhow::Result;
use clap::Args;

use super::output;
use crate::context::CliContext;

/// List arguments
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run list command
pub fn run(ctx: &CliContext, args: ListArgs) -> Result<()> {
    let assessments = ctx.service.list_assessments()?;

    if args.json {
        return output::print_json(&assessments);
    }

    if assessments.is_empty() {
        println!("No assessments recorded.");
        return Ok(());
    }

    println!("{}", output::assessments_table(&assessments));
    Ok(())
}
