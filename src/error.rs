//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, error_page::ErrorPage};

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// Transactions cannot be edited once created.
    #[error("updating transactions is not supported")]
    UpdateNotSupported,

    /// Two transactions loaded into the store share an ID.
    #[error("the transaction ID \"{0}\" is used more than once")]
    DuplicateTransactionId(String),

    /// A stored record could not be read back as a valid transaction.
    #[error("invalid transaction record: {0}")]
    UnprocessableRecord(String),

    /// The seed file could not be read or parsed.
    ///
    /// Callers should pass in the path and the original error as a string.
    #[error("could not load seed file \"{0}\": {1}")]
    SeedFile(String, String),

    /// Could not acquire the lock for shared state.
    #[error("could not acquire the state lock")]
    StateLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => ErrorPage::not_found().into_response(),
            Error::StateLockError => ErrorPage::internal_server_error()
                .with_message(
                    "The app's data is unavailable.",
                    "A request failed while updating the data. Restart the server.",
                )
                .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::internal_server_error().into_response()
            }
        }
    }
}

impl Error {
    /// The HTTP status code that best describes the error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound | Error::DeleteMissingTransaction => StatusCode::NOT_FOUND,
            Error::UpdateNotSupported => StatusCode::NOT_IMPLEMENTED,
            Error::UnprocessableRecord(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::DuplicateTransactionId(_) | Error::SeedFile(_, _) | Error::StateLockError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let status_code = self.status_code();
        let alert = match self {
            Error::DeleteMissingTransaction => Alert::Error {
                message: "Could not delete transaction".to_owned(),
                details: "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted."
                    .to_owned(),
            },
            Error::UpdateNotSupported => Alert::Error {
                message: "Could not update transaction".to_owned(),
                details: "Editing transactions is not available. \
                    Delete the transaction and add it again instead."
                    .to_owned(),
            },
            Error::UnprocessableRecord(_) => Alert::Error {
                message: "Could not save transaction".to_owned(),
                details: "The saved transaction could not be read back. Try again.".to_owned(),
            },
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                }
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::test_utils::parse_html_document;

    use super::Error;

    #[test]
    fn not_found_renders_404_page() {
        let response = Error::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unexpected_errors_render_500_page() {
        let error = Error::SeedFile("seed.json".to_owned(), "missing".to_owned());

        assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn lock_error_page_explains_the_failure() {
        let response = Error::StateLockError.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = parse_html_document(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("The app's data is unavailable."));
    }

    #[test]
    fn alert_uses_error_status() {
        assert_eq!(
            Error::DeleteMissingTransaction
                .into_alert_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::UpdateNotSupported.into_alert_response().status(),
            StatusCode::NOT_IMPLEMENTED
        );
    }
}
