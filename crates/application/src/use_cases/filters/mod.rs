mod add_filter;
mod check_url;
mod delete_filter;
mod get_filters;

pub use add_filter::AddFilterUseCase;
pub use check_url::CheckUrlUseCase;
pub use delete_filter::DeleteFilterUseCase;
pub use get_filters::GetFiltersUseCase;
