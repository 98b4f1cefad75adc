//! Create command

use anyhow::Result;
use clap::Args;
use wattbook_core::NewAssessment;

use super::output;
use crate::context::CliContext;

/// Create arguments
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Property address
    #[arg(long)]
    pub address: String,

    /// Efficiency rating (must be > 0)
    #[arg(long)]
    pub rating: f64,

    /// Projected cost savings (must be > 0)
    #[arg(long)]
    pub savings: f64,

    /// Recommendations text
    #[arg(long)]
    pub recommendations: Option<String>,

    /// Print the created record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run create command
pub fn run(ctx: &CliContext, args: CreateArgs) -> Result<()> {
    let created = ctx.service.create_assessment(NewAssessment {
        address: args.address,
        efficiency_rating: args.rating,
        recommendations: args.recommendations,
        cost_savings: args.savings,
    })?;

    if args.json {
        output::print_json(&created)?;
    } else {
        println!("Created assessment {}", created.id);
        output::print_assessment(&created);
    }
    Ok(())
}
