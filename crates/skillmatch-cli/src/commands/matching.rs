//! Compatibility matching command.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::output;

#[derive(Args)]
pub struct MatchArgs {
    /// Emit one JSON record per line instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: MatchArgs, config: &Path) -> Result<()> {
    let store = super::open_store(config).await?;
    let records = skillmatch_graph::score_matches(&store).await?;

    if args.json {
        for record in &records {
            println!("{}", serde_json::to_string(record)?);
        }
    } else {
        output::print_match_table(&records);
    }

    Ok(())
}
