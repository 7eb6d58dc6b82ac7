use std::io::{BufRead, Write};

use chrono::Utc;
use tokio::runtime::Runtime;

use crate::cli::commands::logs::describe;
use crate::cli::commands::paging_helpers::settle;
use crate::cli::context::{Context, Controller};
use crate::cli::filters::build_filter;
use crate::cli::{FilterArgs, output, render};
use crate::core::errors::{AdminLogError, Result};
use crate::core::models::filter::{ActionFilter, FilterDescriptor, QueryMode};
use crate::core::traits::fetcher::PageFetcher;

const HELP: &str = "\
  n, next            next page
  p, prev            previous page
  g, page <N>        jump to page N
  size <N>           change page size (saved)
  actor <NAME>|-     filter by operator, '-' clears
  type <TYPE>        any, user, channel, config, redemption, log
  search <TEXT>      full-text search (admin entries only)
  clear              leave search, back to the structured filter
  r, refresh         reload from page 1
  q, quit            exit";

/// One line of input in a browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Goto(usize),
    Size(usize),
    Actor(Option<String>),
    Type(ActionFilter),
    Search(String),
    Clear,
    Refresh,
    Help,
    Quit,
}

impl BrowseCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };
        let cmd = match word.to_ascii_lowercase().as_str() {
            "n" | "next" => BrowseCommand::Next,
            "p" | "prev" => BrowseCommand::Prev,
            "g" | "page" => BrowseCommand::Goto(parse_number(rest, "page")?),
            "size" => BrowseCommand::Size(parse_number(rest, "size")?),
            "actor" => match rest {
                "" | "-" => BrowseCommand::Actor(None),
                name => BrowseCommand::Actor(Some(name.to_string())),
            },
            "type" => BrowseCommand::Type(ActionFilter::parse(rest)?),
            "search" | "/" if !rest.is_empty() => BrowseCommand::Search(rest.to_string()),
            "search" | "/" => {
                return Err(AdminLogError::InvalidArgument {
                    detail: "search needs a keyword".into(),
                });
            }
            "clear" => BrowseCommand::Clear,
            "r" | "refresh" => BrowseCommand::Refresh,
            "h" | "help" | "?" => BrowseCommand::Help,
            "q" | "quit" | "exit" => BrowseCommand::Quit,
            other => {
                return Err(AdminLogError::InvalidArgument {
                    detail: format!("unknown command '{other}', type 'help' for a list"),
                });
            }
        };
        Ok(cmd)
    }
}

fn parse_number(s: &str, what: &str) -> Result<usize> {
    s.parse().map_err(|_| AdminLogError::InvalidArgument {
        detail: format!("{what} needs a number, got '{s}'"),
    })
}

/// Execute the `adminlog browse` command.
///
/// Reads commands from stdin until `quit` or end of input. Errors from a
/// single command are reported and the session continues.
pub fn execute(ctx: &Context, filters: &FilterArgs) -> Result<()> {
    let mut filter = build_filter(filters, &ctx.config, Utc::now().timestamp())?;
    let fetcher = ctx.fetcher()?;
    let rt = ctx.runtime()?;
    let mut ctl = ctx.controller();

    let request = ctl.set_filter(filter.clone());
    match settle(&rt, &mut ctl, &fetcher, request, ctx.quiet) {
        Ok(()) => show(ctx, &ctl),
        Err(e) => output::error(&format!("Error: {e}")),
    }

    let stdin = std::io::stdin();
    prompt(ctx.quiet);
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(ctx.quiet);
            continue;
        }
        match BrowseCommand::parse(&line) {
            Ok(BrowseCommand::Quit) => break,
            Ok(BrowseCommand::Help) => println!("{HELP}"),
            Ok(cmd) => match step(&rt, &mut ctl, &fetcher, &mut filter, cmd, ctx.quiet) {
                Ok(()) => show(ctx, &ctl),
                Err(e) => output::error(&format!("Error: {e}")),
            },
            Err(e) => output::error(&format!("Error: {e}")),
        }
        prompt(ctx.quiet);
    }
    Ok(())
}

/// Apply one command to the controller, fetching if needed.
fn step<F: PageFetcher + ?Sized>(
    rt: &Runtime,
    ctl: &mut Controller,
    fetcher: &F,
    filter: &mut FilterDescriptor,
    cmd: BrowseCommand,
    quiet: bool,
) -> Result<()> {
    let request = match cmd {
        BrowseCommand::Next => {
            if !ctl.has_next_page() {
                output::warning("Already on the last page");
                return Ok(());
            }
            ctl.request_page(ctl.active_page() + 1)?
        }
        BrowseCommand::Prev => {
            if ctl.active_page() <= 1 {
                output::warning("Already on the first page");
                return Ok(());
            }
            ctl.request_page(ctl.active_page() - 1)?
        }
        BrowseCommand::Goto(n) => ctl.request_page(n)?,
        BrowseCommand::Size(n) => ctl.set_page_size(n)?,
        BrowseCommand::Actor(name) => {
            *filter = filter.clone().with_actor(name.as_deref());
            ctl.set_filter(filter.clone())
        }
        BrowseCommand::Type(action) => {
            *filter = filter.clone().with_action(action);
            ctl.set_filter(filter.clone())
        }
        BrowseCommand::Search(keyword) => {
            *filter = filter.clone().with_keyword(Some(&keyword));
            ctl.set_filter(filter.clone())
        }
        BrowseCommand::Clear => {
            *filter = filter.clone().with_keyword(None);
            ctl.set_filter(filter.clone())
        }
        BrowseCommand::Refresh => ctl.refresh(),
        BrowseCommand::Help | BrowseCommand::Quit => None,
    };
    settle(rt, ctl, fetcher, request, quiet)
}

fn show(ctx: &Context, ctl: &Controller) {
    if !ctx.quiet {
        let title = match ctl.query() {
            Some(QueryMode::FullText(kw)) => format!("search '{kw}'"),
            Some(QueryMode::Structured(f)) => describe(&f),
            None => "adminlog browse".to_string(),
        };
        output::header(&title);
        println!();
    }
    render::print_page(ctl);
}

fn prompt(quiet: bool) {
    if !quiet {
        print!("adminlog> ");
        let _ = std::io::stdout().flush();
    }
}
