//! The JSON endpoints for notifications.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::{
    api_error::StructuredError,
    app_state::lock,
    notification::{
        core::{NotificationFilter, filter_notifications_by_type, mark_all_read},
        page::{NotificationQuery, NotificationState},
    },
};

/// A route handler for listing notifications, optionally filtered by `type`.
pub async fn list_notifications_api(
    State(state): State<NotificationState>,
    Query(query): Query<NotificationQuery>,
) -> Response {
    let filter = match NotificationFilter::parse(query.notification_type.as_deref()) {
        Ok(filter) => filter,
        Err(details) => return StructuredError::invalid_query(details).into_response(),
    };

    match lock(&state.notifications, "notifications") {
        Ok(notifications) => {
            Json(filter_notifications_by_type(&notifications, filter)).into_response()
        }
        Err(error) => StructuredError::from(error).into_response(),
    }
}

/// A route handler that marks every notification as read and responds with the updated list.
pub async fn mark_all_read_api(State(state): State<NotificationState>) -> Response {
    match lock(&state.notifications, "notifications") {
        Ok(mut notifications) => {
            mark_all_read(&mut notifications);
            Json(notifications.clone()).into_response()
        }
        Err(error) => StructuredError::from(error).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::{
        AppState,
        api_error::{ErrorCode, StructuredError},
        build_router,
        endpoints,
        transaction::TransactionStore,
    };

    fn get_test_server() -> TestServer {
        let state = AppState::with_store(TransactionStore::new());

        TestServer::new(build_router(state, "static"))
    }

    #[tokio::test]
    async fn lists_notifications_of_one_type() {
        let server = get_test_server();

        let response = server
            .get(endpoints::NOTIFICATIONS_API)
            .add_query_param("type", "error")
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let ids: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|notification| notification["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["n-3"]);
    }

    #[tokio::test]
    async fn rejects_unknown_type() {
        let server = get_test_server();

        let response = server
            .get(endpoints::NOTIFICATIONS_API)
            .add_query_param("type", "urgent")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error = response.json::<StructuredError>();
        assert_eq!(error.code, ErrorCode::ValidationError);
        assert_eq!(
            error.details.unwrap()["type"],
            ["Type must be one of: all, info, warning, error"]
        );
    }

    #[tokio::test]
    async fn mark_all_read_returns_updated_list() {
        let server = get_test_server();

        let response = server.post(endpoints::NOTIFICATIONS_READ_ALL_API).await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let notifications = body.as_array().unwrap();
        assert_eq!(notifications.len(), 5);
        assert!(notifications.iter().all(|notification| notification["read"] == true));

        let unread = server
            .get(endpoints::NOTIFICATIONS_API)
            .await
            .json::<Value>()
            .as_array()
            .unwrap()
            .iter()
            .filter(|notification| notification["read"] == false)
            .count();
        assert_eq!(unread, 0);
    }
}
