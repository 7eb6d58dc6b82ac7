use tokio::runtime::Runtime;

use crate::cli::output;
use crate::core::errors::{AdminLogError, Result};
use crate::core::models::filter::FilterDescriptor;
use crate::core::models::page::FetchRequest;
use crate::core::services::pagination::{Applied, PaginationController};
use crate::core::traits::fetcher::PageFetcher;
use crate::core::traits::preferences::PageSizeStore;

/// Run `request` (if any) to completion and apply it.
///
/// A failed fetch becomes an error for the caller; the controller already
/// left its cache untouched.
pub fn settle<S, F>(
    rt: &Runtime,
    ctl: &mut PaginationController<S>,
    fetcher: &F,
    request: Option<FetchRequest>,
    quiet: bool,
) -> Result<()>
where
    S: PageSizeStore,
    F: PageFetcher + ?Sized,
{
    let Some(request) = request else {
        return Ok(());
    };
    tracing::debug!(epoch = %ctl.epoch(), page = request.page_number(), "loading");
    let sp = output::spinner(&format!("Loading page {}...", request.page_number()), quiet);
    let applied = rt.block_on(ctl.load(fetcher, request));
    output::finish_spinner(sp);

    match applied {
        Applied::Merged { .. } | Applied::Stale => Ok(()),
        Applied::Failed(message) => Err(AdminLogError::LoadFailed { message }),
    }
}

/// Apply `filter` and walk forward to `page`, one page at a time.
///
/// Pages already cached are not fetched again. Running out of data before
/// `page` is an `InvalidPage` error naming the last page.
pub fn show_page<S, F>(
    rt: &Runtime,
    ctl: &mut PaginationController<S>,
    fetcher: &F,
    filter: FilterDescriptor,
    page: usize,
    quiet: bool,
) -> Result<()>
where
    S: PageSizeStore,
    F: PageFetcher + ?Sized,
{
    if page == 0 {
        return Err(AdminLogError::InvalidPage { page, last: None });
    }
    let request = ctl.set_filter(filter);
    settle(rt, ctl, fetcher, request, quiet)?;

    for next in ctl.active_page() + 1..=page {
        if !ctl.has_next_page() {
            return Err(AdminLogError::InvalidPage {
                page,
                last: Some(ctl.page_count().max(1)),
            });
        }
        let request = ctl.request_page(next)?;
        settle(rt, ctl, fetcher, request, quiet)?;
    }
    // an empty last page when the total is an exact multiple of the size
    if ctl.store().is_past_end(ctl.active_page(), ctl.page_size()) {
        return Err(AdminLogError::InvalidPage {
            page,
            last: Some(ctl.page_count().max(1)),
        });
    }
    Ok(())
}
