mod add;
mod check;
mod list;
mod remove;

pub use add::add;
pub use check::check;
pub use list::list;
pub use remove::remove;
