use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    api_error::StructuredError,
    endpoints,
    transaction::{TransactionId, state::TransactionState},
};

/// A route handler for deleting a transaction from the dashboard.
///
/// Redirects back to the dashboard so the stats and charts are recomputed,
/// or responds with an alert if the transaction does not exist.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    match state.change(|store| store.remove(&transaction_id)) {
        Ok(_) => {
            tracing::info!("deleted transaction {transaction_id}");

            (
                HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

/// A route handler for deleting a transaction, responds with 204 No Content.
pub async fn delete_transaction_api(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    match state.change(|store| store.remove(&transaction_id)) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => StructuredError::from(error).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{FromRef, Path, State},
        http::StatusCode,
    };
    use scraper::Selector;

    use crate::{
        AppState,
        api_error::{ErrorCode, StructuredError},
        endpoints,
        seed::example_transactions,
        test_utils::{assert_hx_redirect, parse_html_fragment, response_json},
        transaction::{
            TransactionStore,
            delete_endpoint::{delete_transaction_api, delete_transaction_endpoint},
            state::TransactionState,
            store::ListQuery,
        },
    };

    fn get_state() -> TransactionState {
        let store = TransactionStore::with_transactions(example_transactions()).unwrap();

        TransactionState::from_ref(&AppState::with_store(store))
    }

    fn remaining_ids(state: &TransactionState) -> Vec<String> {
        state
            .list(&ListQuery::default())
            .unwrap()
            .into_iter()
            .map(|transaction| transaction.id)
            .collect()
    }

    #[tokio::test]
    async fn deletes_transaction_and_redirects() {
        let state = get_state();

        let response =
            delete_transaction_endpoint(State(state.clone()), Path("seed-2".to_owned())).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::DASHBOARD_VIEW);
        assert_eq!(remaining_ids(&state), ["seed-1", "seed-3"]);
    }

    #[tokio::test]
    async fn missing_transaction_responds_with_alert() {
        let state = get_state();

        let response =
            delete_transaction_endpoint(State(state.clone()), Path("missing".to_owned())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_fragment(response).await;
        let message: String = html
            .select(&Selector::parse("#alert-container p").unwrap())
            .next()
            .expect("No alert message found")
            .text()
            .collect();
        assert_eq!(message, "Could not delete transaction");
        assert_eq!(remaining_ids(&state).len(), 3);
        assert!(state.view_state.lock().unwrap().last_error.is_some());
    }

    #[tokio::test]
    async fn api_deletes_transaction() {
        let state = get_state();

        let response =
            delete_transaction_api(State(state.clone()), Path("seed-1".to_owned())).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(remaining_ids(&state), ["seed-2", "seed-3"]);
    }

    #[tokio::test]
    async fn api_reports_missing_transaction() {
        let state = get_state();

        let response =
            delete_transaction_api(State(state.clone()), Path("missing".to_owned())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: StructuredError =
            serde_json::from_value(response_json(response).await).unwrap();
        assert_eq!(error.code, ErrorCode::NotFound);
        assert_eq!(error.message, "Transaction not found.");
        assert_eq!(error.status, 404);
    }
}
