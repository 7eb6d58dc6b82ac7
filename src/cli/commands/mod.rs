pub mod browse;
pub mod logs;
pub mod page_size;
pub mod paging_helpers;
pub mod search;
