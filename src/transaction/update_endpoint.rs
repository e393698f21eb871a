use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{
    Error,
    api_error::StructuredError,
    transaction::{
        TransactionId,
        state::TransactionState,
        validation::{RawInput, validate_transaction},
    },
};

/// A route handler for updating a transaction.
///
/// Transactions cannot be edited, so this always responds with 501 Not
/// Implemented, whatever the body holds.
pub async fn update_transaction_api(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let input = payload
        .ok()
        .and_then(|Json(body)| validate_transaction(&RawInput::from_json(body)).ok());

    let result = state.change(|store| match input {
        Some(input) => store.update(&transaction_id, input),
        None => Err(Error::UpdateNotSupported),
    });

    match result {
        Ok(transaction) => Json(transaction).into_response(),
        Err(error) => StructuredError::from(error).into_response(),
    }
}
