//! The notifications page and the form that marks every notification as read.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, html};
use serde::Deserialize;
use time::{
    OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};

use crate::{
    AppState, Error,
    alert::Alert,
    app_state::lock,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, CHIP_ACTIVE_STYLE, CHIP_STYLE, PAGE_CONTAINER_STYLE,
        base,
    },
    navigation::NavBar,
    notification::core::{
        Notification, NotificationFilter, NotificationType, filter_notifications_by_type,
        mark_all_read,
    },
};

/// The state needed to show and update notifications.
#[derive(Debug, Clone)]
pub struct NotificationState {
    pub notifications: Arc<Mutex<Vec<Notification>>>,
}

impl FromRef<AppState> for NotificationState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            notifications: state.notifications.clone(),
        }
    }
}

/// The `type` filter, from the query string or the mark all read form.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationQuery {
    #[serde(default, rename = "type")]
    pub notification_type: Option<String>,
}

impl NotificationQuery {
    /// The selected filter, falling back to showing every notification.
    fn filter_or_all(&self) -> NotificationFilter {
        NotificationFilter::parse(self.notification_type.as_deref()).unwrap_or_else(|_| {
            tracing::debug!(
                "unknown notification filter {:?}, showing all",
                self.notification_type
            );
            NotificationFilter::All
        })
    }
}

/// Route handler for the notifications page.
pub async fn get_notifications_page(
    State(state): State<NotificationState>,
    Query(query): Query<NotificationQuery>,
) -> Result<Response, Error> {
    let filter = query.filter_or_all();
    let notifications = lock(&state.notifications, "notifications")?.clone();

    let content = html! {
        (NavBar::new(endpoints::NOTIFICATIONS_VIEW).into_html())

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-5xl"
            {
                header class="mb-6"
                {
                    h1 class="text-2xl font-semibold tracking-tight" { "Notifications" }
                    p class="mt-1 text-sm text-gray-600 dark:text-gray-300"
                    {
                        "System updates, warnings, and alerts"
                    }
                }

                (notifications_content_view(&notifications, filter))
            }
        }
    };

    Ok(base("Notifications", &[], &content).into_response())
}

/// Route handler for the mark all read button.
///
/// Responds with the updated notification list for the active filter and a
/// success alert.
pub async fn mark_all_read_endpoint(
    State(state): State<NotificationState>,
    Form(form): Form<NotificationQuery>,
) -> Response {
    let notifications = match lock(&state.notifications, "notifications") {
        Ok(mut notifications) => {
            mark_all_read(&mut notifications);
            notifications.clone()
        }
        Err(error) => return error.into_alert_response(),
    };

    tracing::info!("marked {} notifications as read", notifications.len());

    let alert = Alert::Success {
        message: "All notifications marked as read".to_owned(),
        details: String::new(),
    };

    html! {
        (notifications_content_view(&notifications, form.filter_or_all()))
        (alert.into_html())
    }
    .into_response()
}

fn notifications_content_view(
    notifications: &[Notification],
    filter: NotificationFilter,
) -> Markup {
    let all_read = notifications.iter().all(|notification| notification.read);
    let shown = filter_notifications_by_type(notifications, filter);

    html! {
        div id="notifications-content" class="space-y-4"
        {
            div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between"
            {
                nav class="flex flex-wrap gap-2" aria-label="Filter notifications"
                {
                    @for option in NotificationFilter::OPTIONS {
                        a
                            href={ (endpoints::NOTIFICATIONS_VIEW) "?type=" (option.as_str()) }
                            class=(if option == filter { CHIP_ACTIVE_STYLE } else { CHIP_STYLE })
                            aria-current=[(option == filter).then_some("true")]
                        {
                            (option.label())
                        }
                    }
                }

                form
                    hx-post=(endpoints::NOTIFICATIONS_READ_ALL)
                    hx-target="#notifications-content"
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    class="sm:w-auto"
                {
                    input type="hidden" name="type" value=(filter.as_str());

                    button type="submit" disabled[all_read] class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Mark All Read"
                    }
                }
            }

            @if shown.is_empty() {
                div class="rounded-lg border border-dashed border-gray-300 p-8 text-center dark:border-gray-700"
                {
                    p class="text-sm text-gray-600 dark:text-gray-300"
                    {
                        "No notifications for this type."
                    }
                }
            } @else {
                @for notification in &shown {
                    (notification_view(notification))
                }
            }
        }
    }
}

fn notification_view(notification: &Notification) -> Markup {
    let (icon, badge_style) = match notification.notification_type {
        NotificationType::Info => (
            "i",
            "bg-blue-100 text-blue-700 dark:bg-blue-900/40 dark:text-blue-200",
        ),
        NotificationType::Warning => (
            "!",
            "bg-amber-100 text-amber-700 dark:bg-amber-900/40 dark:text-amber-200",
        ),
        NotificationType::Error => (
            "x",
            "bg-red-100 text-red-700 dark:bg-red-900/40 dark:text-red-200",
        ),
    };
    let kind = notification.notification_type.as_str();

    html! {
        article id={ "notification-" (notification.id) } class={ "w-full " (CARD_STYLE) }
        {
            div class="flex items-start gap-3"
            {
                span
                    class="inline-flex h-7 w-7 items-center justify-center rounded-full
                        bg-gray-100 text-sm font-semibold uppercase dark:bg-gray-700"
                    aria-label={ (kind) " notification" }
                {
                    (icon)
                }

                div class="min-w-0 flex-1"
                {
                    div class="flex flex-wrap items-center gap-2"
                    {
                        h2 class="text-sm font-semibold md:text-base" { (notification.title) }

                        span class={ "inline-flex items-center rounded-md px-2 py-0.5 text-xs font-medium " (badge_style) }
                        {
                            (kind)
                        }

                        @if !notification.read {
                            span class="unread inline-flex items-center rounded-md bg-blue-100 px-2 py-0.5
                                text-xs font-medium text-blue-700 dark:bg-blue-900/40 dark:text-blue-200"
                            {
                                "Unread"
                            }
                        }
                    }

                    p class="mt-1 text-sm text-gray-600 dark:text-gray-300" { (notification.message) }

                    p class="mt-2 text-xs text-gray-500 dark:text-gray-400"
                    {
                        time datetime=(notification.timestamp) { (format_timestamp(&notification.timestamp)) }
                    }
                }
            }
        }
    }
}

/// Format an RFC 3339 timestamp in UTC, e.g. "28 Feb 2026, 08:00 UTC".
///
/// Text that is not a valid timestamp is shown as is.
fn format_timestamp(timestamp: &str) -> String {
    OffsetDateTime::parse(timestamp, &Rfc3339)
        .map(|date_time| date_time.to_offset(UtcOffset::UTC))
        .ok()
        .and_then(|date_time| {
            date_time
                .format(format_description!(
                    "[day padding:none] [month repr:short] [year], [hour]:[minute] UTC"
                ))
                .ok()
        })
        .unwrap_or_else(|| timestamp.to_owned())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Query, State},
        http::StatusCode,
    };
    use axum_extra::extract::Form;
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        notification::{
            core::example_notifications,
            page::{
                NotificationQuery, NotificationState, format_timestamp, get_notifications_page,
                mark_all_read_endpoint,
            },
        },
        test_utils::{assert_valid_html, parse_html_document, parse_html_fragment},
    };

    fn get_state() -> NotificationState {
        NotificationState {
            notifications: Arc::new(Mutex::new(example_notifications())),
        }
    }

    fn query(notification_type: &str) -> NotificationQuery {
        NotificationQuery {
            notification_type: Some(notification_type.to_owned()),
        }
    }

    fn titles(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("article h2").unwrap())
            .map(|title| title.text().collect())
            .collect()
    }

    #[tokio::test]
    async fn page_lists_every_notification() {
        let response =
            get_notifications_page(State(get_state()), Query(NotificationQuery::default()))
                .await
                .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(titles(&html).len(), 5);
        let unread = html.select(&Selector::parse("span.unread").unwrap()).count();
        assert_eq!(unread, 3);
    }

    #[tokio::test]
    async fn page_filters_by_type() {
        let response = get_notifications_page(State(get_state()), Query(query("warning")))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_eq!(
            titles(&html),
            ["Large expense detected", "Category limit nearing"]
        );
        let active: Vec<_> = html
            .select(&Selector::parse("a[aria-current=true]").unwrap())
            .filter_map(|link| link.value().attr("href"))
            .collect();
        assert_eq!(active, [format!("{}?type=warning", endpoints::NOTIFICATIONS_VIEW)]);
    }

    #[tokio::test]
    async fn page_shows_empty_message() {
        let state = get_state();
        state
            .notifications
            .lock()
            .unwrap()
            .retain(|notification| notification.id != "n-3");

        let response = get_notifications_page(State(state), Query(query("error")))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert!(titles(&html).is_empty());
        assert!(
            html.root_element()
                .text()
                .any(|text| text.contains("No notifications for this type."))
        );
    }

    #[tokio::test]
    async fn unknown_filter_shows_every_notification() {
        let response = get_notifications_page(State(get_state()), Query(query("urgent")))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_eq!(titles(&html).len(), 5);
    }

    #[tokio::test]
    async fn mark_all_read_updates_list_and_disables_button() {
        let state = get_state();

        let response = mark_all_read_endpoint(State(state.clone()), Form(query("info"))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_eq!(
            titles(&html),
            ["Budget synced", "Monthly summary ready"]
        );
        assert_eq!(html.select(&Selector::parse("span.unread").unwrap()).count(), 0);
        let button = html
            .select(&Selector::parse("#notifications-content button[type=submit]").unwrap())
            .next()
            .expect("No mark all read button found");
        assert!(button.value().attr("disabled").is_some());
        let alert: String = html
            .select(&Selector::parse("#alert-container p").unwrap())
            .next()
            .expect("No alert found")
            .text()
            .collect();
        assert_eq!(alert, "All notifications marked as read");
        assert!(
            state
                .notifications
                .lock()
                .unwrap()
                .iter()
                .all(|notification| notification.read)
        );
    }

    #[test]
    fn formats_timestamp_in_utc() {
        assert_eq!(format_timestamp("2026-02-28T08:00:00.000Z"), "28 Feb 2026, 08:00 UTC");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
