use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::{AdminLogError, Result};

/// Execute the `adminlog page-size` command.
///
/// Without an argument, prints the page size the next session will use.
/// With one, validates it against the configured options and saves it.
pub fn execute(ctx: &Context, size: Option<usize>) -> Result<()> {
    let mut ctl = ctx.controller();
    match size {
        None => {
            println!("{}", ctl.page_size());
            Ok(())
        }
        Some(n) => {
            if !ctx.persist {
                return Err(AdminLogError::InvalidArgument {
                    detail: "--no-persist cannot be combined with setting the page size".into(),
                });
            }
            ctl.set_page_size(n)?;
            if !ctx.quiet {
                output::success(&format!("Page size set to {n}"));
            }
            Ok(())
        }
    }
}
