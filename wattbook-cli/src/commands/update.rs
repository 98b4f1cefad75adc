//! Update command

use anyhow::Result;
use clap::Args;
use wattbook_core::AssessmentPatch;

use super::output;
use crate::context::CliContext;

/// Update arguments; omitted fields keep their stored value
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Assessment id
    pub id: String,

    /// New property address
    #[arg(long)]
    pub address: Option<String>,

    /// New efficiency rating (must be > 0)
    #[arg(long)]
    pub rating: Option<f64>,

    /// New projected cost savings (must be > 0)
    #[arg(long)]
    pub savings: Option<f64>,

    /// New recommendations text
    #[arg(long)]
    pub recommendations: Option<String>,

    /// Print the updated record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run update command
pub fn run(ctx: &CliContext, args: UpdateArgs) -> Result<()> {
    let updated = ctx.service.update_assessment(
        &args.id,
        AssessmentPatch {
            address: args.address,
            efficiency_rating: args.rating,
            recommendations: args.recommendations,
            cost_savings: args.savings,
        },
    )?;

    if args.json {
        output::print_json(&updated)?;
    } else {
        println!("Updated assessment {}", updated.id);
        output::print_assessment(&updated);
    }
    Ok(())
}
