//! Dashboard module
//!
//! Provides an overview page showing the financial summary, charts, the add
//! transaction form and the recent transactions.

mod aggregation;
mod cards;
mod charts;
mod handlers;

pub use handlers::{get_dashboard_api, get_dashboard_page};
