//! Delete command

use anyhow::Result;
use clap::Args;

use super::output;
use crate::context::CliContext;

/// Delete arguments
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Assessment id
    pub id: String,

    /// Print the removed record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run delete command
pub fn run(ctx: &CliContext, args: DeleteArgs) -> Result<()> {
    let removed = ctx.service.delete_assessment(&args.id)?;

    if args.json {
        output::print_json(&removed)?;
    } else {
        println!("Deleted assessment {}", removed.id);
    }
    Ok(())
}
