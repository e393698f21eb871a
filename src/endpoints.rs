//! The URIs of every page and API route.
//!
//! For endpoints that take a parameter, e.g. '/transactions/{transaction_id}',
//! use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard with stats, charts and recent transactions.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The form target for creating a transaction.
pub const TRANSACTIONS: &str = "/transactions";
/// Deletes a single transaction from the dashboard.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The FAQ help center.
pub const HELP_VIEW: &str = "/help";
/// The list of notifications.
pub const NOTIFICATIONS_VIEW: &str = "/notifications";
/// Marks every notification as read.
pub const NOTIFICATIONS_READ_ALL: &str = "/notifications/read-all";
/// The page describing the application.
pub const ABOUT_VIEW: &str = "/about";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Lists and creates transactions as JSON.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// Updates or deletes a single transaction as JSON.
pub const TRANSACTION_API: &str = "/api/transactions/{transaction_id}";
/// The derived dashboard views as JSON.
pub const DASHBOARD_API: &str = "/api/dashboard";
/// Lists notifications as JSON.
pub const NOTIFICATIONS_API: &str = "/api/notifications";
/// Marks every notification as read and returns the updated list as JSON.
pub const NOTIFICATIONS_READ_ALL_API: &str = "/api/notifications/read-all";
/// Searches the FAQs as JSON.
pub const FAQS_API: &str = "/api/faqs";

/// Replace the first parameter in `endpoint_path` with `id`.
///
/// A parameter starts with a left brace and ends with the next right brace,
/// e.g. '{transaction_id}' in '/transactions/{transaction_id}'. If
/// `endpoint_path` has no parameter it is returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some((prefix, rest)) = endpoint_path.split_once('{') else {
        return endpoint_path.to_owned();
    };

    let suffix = rest.split_once('}').map_or("", |(_, suffix)| suffix);

    format!("{prefix}{id}{suffix}")
}
