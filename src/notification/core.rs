//! The notification model and the operations on the notification list.

use serde::{Deserialize, Serialize};

use crate::transaction::validation::FieldErrors;

/// How serious a notification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Info,
    Warning,
    Error,
}

impl NotificationType {
    /// The lowercase name used in query strings and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Info => "info",
            NotificationType::Warning => "warning",
            NotificationType::Error => "error",
        }
    }
}

/// A system update, warning or alert shown on the notifications page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    /// An RFC 3339 timestamp, e.g. "2026-02-28T08:00:00.000Z".
    pub timestamp: String,
    pub read: bool,
}

/// Which notifications to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationFilter {
    #[default]
    All,
    Only(NotificationType),
}

impl NotificationFilter {
    /// Every filter in the order they are offered on the page.
    pub const OPTIONS: [NotificationFilter; 4] = [
        NotificationFilter::All,
        NotificationFilter::Only(NotificationType::Info),
        NotificationFilter::Only(NotificationType::Warning),
        NotificationFilter::Only(NotificationType::Error),
    ];

    /// Parse the `type` query parameter.
    ///
    /// A missing or empty value and "all" select every notification.
    ///
    /// # Errors
    /// Returns a message keyed by "type" for any other value.
    pub fn parse(value: Option<&str>) -> Result<Self, FieldErrors> {
        let value = value.map(str::trim).unwrap_or_default();

        match value {
            "" | "all" => Ok(NotificationFilter::All),
            _ => Self::OPTIONS
                .into_iter()
                .find(|filter| filter.as_str() == value)
                .ok_or_else(|| {
                    FieldErrors::from([(
                        "type".to_owned(),
                        vec!["Type must be one of: all, info, warning, error".to_owned()],
                    )])
                }),
        }
    }

    /// The value used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationFilter::All => "all",
            NotificationFilter::Only(notification_type) => notification_type.as_str(),
        }
    }

    /// The label shown on the filter button.
    pub fn label(&self) -> &'static str {
        match self {
            NotificationFilter::All => "All",
            NotificationFilter::Only(NotificationType::Info) => "Info",
            NotificationFilter::Only(NotificationType::Warning) => "Warning",
            NotificationFilter::Only(NotificationType::Error) => "Error",
        }
    }

    fn matches(&self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Only(notification_type) => {
                notification.notification_type == *notification_type
            }
        }
    }
}

/// The notifications that match `filter`, in their original order.
pub fn filter_notifications_by_type(
    notifications: &[Notification],
    filter: NotificationFilter,
) -> Vec<Notification> {
    notifications
        .iter()
        .filter(|notification| filter.matches(notification))
        .cloned()
        .collect()
}

/// Mark every notification as read.
pub fn mark_all_read(notifications: &mut [Notification]) {
    for notification in notifications {
        notification.read = true;
    }
}

/// The notifications shown when the server starts.
pub fn example_notifications() -> Vec<Notification> {
    let notification = |id: &str,
                        title: &str,
                        message: &str,
                        notification_type: NotificationType,
                        timestamp: &str,
                        read: bool| Notification {
        id: id.to_owned(),
        title: title.to_owned(),
        message: message.to_owned(),
        notification_type,
        timestamp: timestamp.to_owned(),
        read,
    };

    vec![
        notification(
            "n-1",
            "Budget synced",
            "Your latest account balances are now available.",
            NotificationType::Info,
            "2026-02-28T08:00:00.000Z",
            false,
        ),
        notification(
            "n-2",
            "Large expense detected",
            "A transaction above your alert threshold was recorded.",
            NotificationType::Warning,
            "2026-02-27T19:10:00.000Z",
            false,
        ),
        notification(
            "n-3",
            "Import failed",
            "We could not process one CSV row. Please review and retry.",
            NotificationType::Error,
            "2026-02-27T13:30:00.000Z",
            true,
        ),
        notification(
            "n-4",
            "Monthly summary ready",
            "Your February cashflow summary has been generated.",
            NotificationType::Info,
            "2026-02-26T21:00:00.000Z",
            true,
        ),
        notification(
            "n-5",
            "Category limit nearing",
            "Food spending is at 90% of your configured monthly target.",
            NotificationType::Warning,
            "2026-02-25T17:45:00.000Z",
            false,
        ),
    ]
}
