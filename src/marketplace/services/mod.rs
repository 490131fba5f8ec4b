/// Domain services
mod pagination;

pub use pagination::{PageAccumulator, Pagination, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
