//! The help center: frequently asked questions filtered by category and search text.

mod core;
mod page;

pub use page::{get_help_page, list_faqs_api};
