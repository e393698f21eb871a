//! Full page responses for missing routes and unexpected failures.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// A full HTML page explaining what went wrong and how the user might fix it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPage<'a> {
    status: StatusCode,
    title: &'a str,
    description: &'a str,
    fix: &'a str,
}

impl ErrorPage<'static> {
    /// The page for routes and resources that do not exist.
    pub const fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            title: "Not Found",
            description: "Something's missing.",
            fix: "Sorry, we can't find that page. Head back to the dashboard to keep going.",
        }
    }

    /// The generic page for failures the user cannot fix.
    pub const fn internal_server_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            title: "Internal Server Error",
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

impl<'a> ErrorPage<'a> {
    /// Replace the description and suggested fix.
    pub fn with_message(self, description: &'a str, fix: &'a str) -> Self {
        Self {
            description,
            fix,
            ..self
        }
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        let header = self.status.as_u16().to_string();
        let markup = error_view(self.title, &header, self.description, self.fix);

        (self.status, Html(markup.into_string())).into_response()
    }
}

/// The fallback handler for routes that do not exist.
pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found().into_response()
}

/// The page clients are sent to after an unexpected error.
pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::internal_server_error().into_response()
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use scraper::Selector;

    use super::ErrorPage;
    use crate::test_utils::parse_html_document;

    #[tokio::test]
    async fn not_found_page_shows_status() {
        let response = ErrorPage::not_found().into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_document(response).await;
        let header = html
            .select(&Selector::parse("h1").unwrap())
            .next()
            .expect("want an h1 with the status code");
        assert_eq!(header.text().collect::<String>().trim(), "404");
    }

    #[tokio::test]
    async fn custom_message_is_rendered() {
        let response = ErrorPage::internal_server_error()
            .with_message("Store unavailable", "Restart the server")
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = parse_html_document(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Store unavailable"));
        assert!(text.contains("Restart the server"));
    }
}
