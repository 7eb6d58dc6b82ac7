use chrono::Utc;

use crate::cli::commands::paging_helpers;
use crate::cli::context::Context;
use crate::cli::filters::{build_filter, format_time};
use crate::cli::{FilterArgs, output, render};
use crate::core::errors::Result;
use crate::core::models::filter::{ActionFilter, FilterDescriptor};

/// Execute the `adminlog logs` command.
///
/// Loads the filtered audit log page by page up to `page`, stopping with an
/// error if the data ends first.
pub fn execute(
    ctx: &Context,
    filters: &FilterArgs,
    page: usize,
    page_size: Option<usize>,
) -> Result<()> {
    let filter = build_filter(filters, &ctx.config, Utc::now().timestamp())?;
    let fetcher = ctx.fetcher()?;
    let rt = ctx.runtime()?;
    let mut ctl = ctx.controller_with_size(page_size)?;

    paging_helpers::show_page(&rt, &mut ctl, &fetcher, filter.clone(), page, ctx.quiet)?;

    if !ctx.quiet {
        output::header(&format!("adminlog logs ({})", describe(&filter)));
        println!();
    }
    render::print_page(&ctl);
    Ok(())
}

/// One-line summary of a structured filter for headers.
pub fn describe(filter: &FilterDescriptor) -> String {
    let mut parts = vec![format!(
        "{} → {}",
        format_time(filter.start_time),
        format_time(filter.end_time)
    )];
    if let Some(actor) = &filter.actor {
        parts.push(format!("actor: {actor}"));
    }
    if let ActionFilter::Only(t) = filter.action {
        parts.push(format!("type: {}", t.label()));
    }
    parts.join(", ")
}
