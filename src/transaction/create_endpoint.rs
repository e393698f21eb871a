//! Defines the endpoints for creating a new transaction.
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde_json::Value;

use crate::{
    Error,
    api_error::StructuredError,
    endpoints,
    transaction::{
        Transaction,
        form::{TransactionForm, transaction_form_view},
        state::TransactionState,
        validation::{RawInput, validate_transaction},
    },
};

/// A route handler for the add transaction form, redirects to the dashboard on success.
///
/// Invalid input re-renders the form with a message under each invalid field.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let input = match validate_transaction(&form.to_raw_input()) {
        Ok(input) => input,
        Err(failure) => {
            tracing::debug!("rejected transaction form: {}", failure.summary());

            if let Err(error) = state.record::<()>(&Err(failure.clone().into())) {
                return error.into_alert_response();
            }

            return transaction_form_view(&form, Some(&failure)).into_response();
        }
    };

    match state.change(|store| Ok(store.create(input))) {
        Ok(transaction) => {
            tracing::info!("created transaction {}", transaction.id);

            (
                HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

/// A route handler for creating a transaction from a JSON body.
///
/// Responds with the created transaction and 201 Created, or a structured error.
pub async fn create_transaction_api(
    State(state): State<TransactionState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let result = create_from_payload(&state, payload);

    if let Err(error) = state.record(&result) {
        return StructuredError::from(error).into_response();
    }

    match result {
        Ok(transaction) => (StatusCode::CREATED, Json(transaction)).into_response(),
        Err(error) => error.into_response(),
    }
}

fn create_from_payload(
    state: &TransactionState,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Transaction, StructuredError> {
    let Json(body) = payload.inspect_err(|rejection| {
        tracing::debug!("rejected transaction payload: {rejection}");
    })?;

    let input = validate_transaction(&RawInput::from_json(body))?;

    let created = state.change(|store| Ok(store.create(input)))?;

    // Read the stored record back so the response only ever holds a well formed transaction.
    let record = serde_json::to_value(&created)
        .map_err(|error| Error::UnprocessableRecord(error.to_string()))?;

    Ok(Transaction::from_record(&record)?)
}
