use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use tripcal_calendar::build_grid;
use tripcal_feed::{build_index, read_feed};

use crate::cli::RenderArgs;
use crate::config;
use crate::render::render_grid;

/// Run the `render` subcommand.
pub fn run(args: RenderArgs) -> Result<()> {
    let config = config::load(&args.config)?;

    info!(path = %args.feed.display(), "reading reservation feed");
    let entries = read_feed(&args.feed)?;
    info!(n_entries = entries.len(), "feed loaded");

    let index = build_index(&entries);
    let grid = build_grid(args.year, args.month, &index)
        .with_context(|| format!("failed to build grid for {}-{:02}", args.year, args.month))?;

    // The injected reference date keeps the past indicator reproducible;
    // the ambient clock is read only here at the edge.
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    info!(%today, "rendering grid");

    print!("{}", render_grid(&grid, &config, today));
    Ok(())
}
