use async_trait::async_trait;

use crate::core::errors::FetchError;
use crate::core::models::page::{FetchRequest, Page};

/// Port for loading one page of the audit log.
///
/// Implementations live in `adapters::http`. The returned page must carry
/// `request.epoch` unchanged so the controller can test staleness. No
/// retries: a failure is reported once and the caller decides what to do.
/// Futures are not required to be `Send`; the controller runs on a
/// single-threaded runtime.
#[async_trait(?Send)]
pub trait PageFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<Page, FetchError>;
}
