pub mod fetcher;
pub mod preferences;
