use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};

use crate::{
    api_error::StructuredError,
    transaction::{state::TransactionState, store::ListQueryParams, validation::FieldErrors},
};

/// A route handler for listing transactions as JSON, newest first.
///
/// Supports the optional `limit`, `type` and `category` query parameters.
pub async fn list_transactions_api(
    State(state): State<TransactionState>,
    params: Result<Query<ListQueryParams>, QueryRejection>,
) -> Response {
    let query = match params {
        Ok(Query(params)) => params.parse(),
        Err(rejection) => {
            tracing::debug!("rejected list query: {rejection}");
            Err(FieldErrors::from([(
                "query".to_owned(),
                vec![rejection.body_text()],
            )]))
        }
    };

    let query = match query {
        Ok(query) => query,
        Err(details) => return StructuredError::invalid_query(details).into_response(),
    };

    match state.list(&query) {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => StructuredError::from(error).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{FromRef, Query, State},
        http::StatusCode,
    };

    use crate::{
        AppState,
        api_error::{ErrorCode, StructuredError},
        seed::example_transactions,
        test_utils::response_json,
        transaction::{
            TransactionStore, list_endpoint::list_transactions_api, state::TransactionState,
            store::ListQueryParams,
        },
    };

    fn get_state() -> TransactionState {
        let store = TransactionStore::with_transactions(example_transactions()).unwrap();

        TransactionState::from_ref(&AppState::with_store(store))
    }

    fn params(query: &str) -> Query<ListQueryParams> {
        Query(serde_urlencoded::from_str(query).unwrap())
    }

    #[tokio::test]
    async fn lists_all_transactions_newest_first() {
        let response = list_transactions_api(State(get_state()), Ok(params(""))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        let ids: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|transaction| transaction["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["seed-1", "seed-2", "seed-3"]);
    }

    #[tokio::test]
    async fn filters_by_type_and_limit() {
        let response =
            list_transactions_api(State(get_state()), Ok(params("type=expense&limit=1"))).await;

        let body = response_json(response).await;
        let transactions = body.as_array().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0]["id"], "seed-2");
    }

    #[tokio::test]
    async fn empty_parameters_are_ignored() {
        let response =
            list_transactions_api(State(get_state()), Ok(params("type=&category=&limit="))).await;

        assert_eq!(response_json(response).await.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn invalid_parameters_are_rejected() {
        let response =
            list_transactions_api(State(get_state()), Ok(params("limit=0&category=pets"))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: StructuredError =
            serde_json::from_value(response_json(response).await).unwrap();
        assert_eq!(error.code, ErrorCode::ValidationError);
        assert_eq!(error.message, "Invalid query parameters");
        let details = error.details.unwrap();
        assert!(details.contains_key("limit"));
        assert!(details.contains_key("category"));
    }
}
