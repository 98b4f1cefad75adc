//! Show command

use anyhow::Result;
use clap::Args;

use super::output;
use crate::context::CliContext;

/// Show arguments
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Assessment id
    pub id: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run show command
pub fn run(ctx: &CliContext, args: ShowArgs) -> Result<()> {
    let assessment = ctx.service.get_assessment(&args.id)?;

    if args.json {
        output::print_json(&assessment)?;
    } else {
        output::print_assessment(&assessment);
    }
    Ok(())
}
