pub mod http;
pub mod preferences;
