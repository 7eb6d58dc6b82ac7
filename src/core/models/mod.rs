pub mod api_envelope;
pub mod filter;
pub mod log_entry;
pub mod page;
