mod filter_repository;

pub use filter_repository::FilterRepository;

// Re-export for convenience
pub use webfilter_domain::Filter;
