//! Top command: threshold filter over efficiency ratings

use anyhow::Result;
use clap::Args;

use super::output;
use crate::context::CliContext;

/// Top arguments
#[derive(Args, Debug)]
pub struct TopArgs {
    /// Minimum efficiency rating (must be > 0)
    #[arg(long)]
    pub threshold: f64,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run top command
pub fn run(ctx: &CliContext, args: TopArgs) -> Result<()> {
    let assessments = ctx.service.high_efficiency(args.threshold)?;

    if args.json {
        return output::print_json(&assessments);
    }

    if assessments.is_empty() {
        println!("No assessments at or above rating {:.1}.", args.threshold);
        return Ok(());
    }

    println!("{}", output::assessments_table(&assessments));
    Ok(())
}
