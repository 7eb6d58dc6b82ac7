use std::path::PathBuf;

use crate::adapters::http::http_fetcher::HttpPageFetcher;
use crate::adapters::preferences::file_store::FilePageSizeStore;
use crate::adapters::preferences::memory_store::MemoryPageSizeStore;
use crate::cli::Cli;
use crate::config::app_config::AppConfig;
use crate::core::errors::{AdminLogError, Result};
use crate::core::services::pagination::PaginationController;
use crate::core::traits::preferences::PageSizeStore;

/// Controller type used by every command.
pub type Controller = PaginationController<Box<dyn PageSizeStore>>;

/// Everything a command needs, resolved once from flags and config.
pub struct Context {
    pub config: AppConfig,
    pub base_url: String,
    pub access_token: Option<String>,
    pub persist: bool,
    pub quiet: bool,
}

impl Context {
    /// Resolve the config file and apply command-line overrides.
    pub fn from_cli(args: &Cli) -> Result<Self> {
        let (path, required) = match &args.config {
            Some(p) => (Some(PathBuf::from(p)), true),
            None => (AppConfig::default_path(), false),
        };
        let config = match path {
            Some(p) => AppConfig::load(&p, required)?,
            None => AppConfig::default(),
        };

        let base_url = args
            .server
            .clone()
            .unwrap_or_else(|| config.server.base_url.clone());
        validate_base_url(&base_url)?;

        let access_token = args
            .token
            .clone()
            .or_else(|| config.server.access_token.clone())
            .filter(|t| !t.is_empty());

        Ok(Self {
            config,
            base_url,
            access_token,
            persist: !args.no_persist,
            quiet: args.quiet,
        })
    }

    pub fn fetcher(&self) -> Result<HttpPageFetcher> {
        HttpPageFetcher::new(&self.base_url, self.access_token.clone(), self.config.timeout())
    }

    /// The page-size preference store, honoring `--no-persist`.
    pub fn preferences(&self) -> Box<dyn PageSizeStore> {
        if self.persist
            && let Some(store) = FilePageSizeStore::in_config_dir()
        {
            return Box::new(store);
        }
        Box::new(MemoryPageSizeStore::default())
    }

    /// A controller using the saved page size.
    pub fn controller(&self) -> Controller {
        PaginationController::new(self.config.paging(), self.preferences())
    }

    /// A controller whose page size is overridden for this run only.
    pub fn controller_with_size(&self, page_size: Option<usize>) -> Result<Controller> {
        let Some(size) = page_size else {
            return Ok(self.controller());
        };
        let scratch: Box<dyn PageSizeStore> = Box::new(MemoryPageSizeStore::with(size));
        let mut ctl = PaginationController::new(self.config.paging(), scratch);
        // a disallowed size was ignored at construction; reject it here
        ctl.set_page_size(size)?;
        Ok(ctl)
    }

    /// Single-threaded runtime for the duration of one command.
    pub fn runtime(&self) -> Result<tokio::runtime::Runtime> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(AdminLogError::Io)
    }
}

/// Reject base URLs without an http(s) scheme.
pub fn validate_base_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(AdminLogError::InvalidArgument {
            detail: format!("server URL must start with http:// or https://, got '{url}'"),
        })
    }
}
