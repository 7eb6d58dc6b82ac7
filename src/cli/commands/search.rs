use chrono::Utc;

use crate::cli::commands::paging_helpers;
use crate::cli::context::Context;
use crate::cli::filters::build_filter;
use crate::cli::{FilterArgs, output, render};
use crate::core::errors::{AdminLogError, Result};

/// Execute the `adminlog search` command.
///
/// The search endpoint spans every log category and has no paging; the
/// results are narrowed to administrative entries and paged locally.
pub fn execute(ctx: &Context, keyword: &str, page: usize, page_size: Option<usize>) -> Result<()> {
    if keyword.trim().is_empty() {
        return Err(AdminLogError::InvalidArgument {
            detail: "search keyword must not be empty. Use 'adminlog logs' to list entries.".into(),
        });
    }
    let filter = build_filter(&FilterArgs::default(), &ctx.config, Utc::now().timestamp())?
        .with_keyword(Some(keyword));
    let fetcher = ctx.fetcher()?;
    let rt = ctx.runtime()?;
    let mut ctl = ctx.controller_with_size(page_size)?;

    paging_helpers::show_page(&rt, &mut ctl, &fetcher, filter, page, ctx.quiet)?;

    if !ctx.quiet {
        output::header(&format!(
            "adminlog search '{}' ({} admin entries)",
            keyword.trim(),
            ctl.store().loaded()
        ));
        println!();
    }
    render::print_page(&ctl);
    Ok(())
}
