//! Application router configuration for the HTML pages and the JSON API.

use std::path::Path;

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    about::get_about_page,
    dashboard::{get_dashboard_api, get_dashboard_page},
    endpoints,
    error_page::{get_404_not_found, get_internal_server_error_page},
    faq::{get_help_page, list_faqs_api},
    notification::{
        get_notifications_page, list_notifications_api, mark_all_read_api,
        mark_all_read_endpoint,
    },
    transaction::{
        create_transaction_api, create_transaction_endpoint, delete_transaction_api,
        delete_transaction_endpoint, list_transactions_api, update_transaction_api,
    },
};

/// Return a router with all the app's routes.
///
/// Files in `static_dir` are served under [endpoints::STATIC].
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::HELP_VIEW, get(get_help_page))
        .route(endpoints::NOTIFICATIONS_VIEW, get(get_notifications_page))
        .route(endpoints::ABOUT_VIEW, get(get_about_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    // These routes are called by htmx and respond with fragments or an HX-Redirect header.
    let hx_routes = Router::new()
        .route(endpoints::TRANSACTIONS, post(create_transaction_endpoint))
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .route(
            endpoints::NOTIFICATIONS_READ_ALL,
            post(mark_all_read_endpoint),
        );

    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_api).post(create_transaction_api),
        )
        .route(
            endpoints::TRANSACTION_API,
            put(update_transaction_api).delete(delete_transaction_api),
        )
        .route(endpoints::DASHBOARD_API, get(get_dashboard_api))
        .route(endpoints::NOTIFICATIONS_API, get(list_notifications_api))
        .route(
            endpoints::NOTIFICATIONS_READ_ALL_API,
            post(mark_all_read_api),
        )
        .route(endpoints::FAQS_API, get(list_faqs_api));

    page_routes
        .merge(hx_routes)
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new(static_dir))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
