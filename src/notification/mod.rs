//! System notifications: the model, the notifications page and its JSON API.

mod api;
mod core;
mod page;

pub use api::{list_notifications_api, mark_all_read_api};
pub use core::{Notification, example_notifications};
pub use page::{get_notifications_page, mark_all_read_endpoint};
