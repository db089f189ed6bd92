//! CLI command handlers, one per file.

mod check_redirect;
mod column;
mod translate;

pub use check_redirect::run_check_redirect;
pub use column::run_column;
pub use translate::run_translate;
