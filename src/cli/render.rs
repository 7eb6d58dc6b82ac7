use colored::Colorize;

use crate::cli::filters::format_time;
use crate::core::models::log_entry::{ActionType, LogEntry};
use crate::core::services::pagination::{LoadState, PaginationController};
use crate::core::traits::preferences::PageSizeStore;

/// Print the active page and a pagination footer.
pub fn print_page<S: PageSizeStore>(ctl: &PaginationController<S>) {
    let rows = ctl.current_page();
    if ctl.store().is_empty() && ctl.store().known_end() {
        println!("  {}", "No audit entries match this query".dimmed());
    } else if rows.is_empty() {
        println!("  {}", "No audit entries on this page".dimmed());
    } else {
        for entry in &rows {
            print_entry(entry);
        }
    }
    println!();
    println!("  {}", footer(ctl).dimmed());
    if let LoadState::Error { message } = ctl.state() {
        println!("  {} last request failed: {}", "⚠".yellow(), message);
    }
}

/// `page 2 of 5 · … · 43 entries` when the total is known,
/// `page 2 of 3+ · … · 20 cached` otherwise.
pub fn footer<S: PageSizeStore>(ctl: &PaginationController<S>) -> String {
    let store = ctl.store();
    let pages = ctl.page_count().max(1);
    let (of, count) = if store.known_end() {
        (format!("{pages}"), format!("{} entries", ctl.estimated_total()))
    } else {
        (format!("{pages}+"), format!("{} cached", store.loaded()))
    };
    format!(
        "page {} of {} · {} per page · {}",
        ctl.active_page(),
        of,
        ctl.page_size(),
        count
    )
}

/// Print a single audit entry as a formatted row.
fn print_entry(entry: &LogEntry) {
    let target = entry
        .target()
        .map(|t| format!("→ {t}"))
        .unwrap_or_default();
    println!(
        "  {} {} {:<12} {:<15} {} {}",
        format_time(entry.created_at).dimmed(),
        "│".dimmed(),
        entry.username.blue(),
        format_action(entry.action_type()),
        target.cyan(),
        entry.content,
    );
}

/// Format an ActionType as a colored label.
fn format_action(action: ActionType) -> String {
    let label = action.label();
    match action {
        ActionType::UserMgmt => label.blue().to_string(),
        ActionType::ChannelMgmt => label.yellow().to_string(),
        ActionType::SystemConfig => label.magenta().to_string(),
        ActionType::RedemptionMgmt => label.green().to_string(),
        ActionType::LogMgmt => label.cyan().to_string(),
        ActionType::Unknown => label.red().to_string(),
    }
}
