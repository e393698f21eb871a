//! Alert messages that are swapped into the page's alert container by htmx.

use maud::{Markup, html};

/// A dismissable success or error message.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An operation succeeded.
    Success { message: String, details: String },
    /// An operation failed.
    Error { message: String, details: String },
}

impl Alert {
    /// Render the alert as an out-of-band swap for the alert container.
    pub fn into_html(self) -> Markup {
        let (message, details, container_style, icon) = match self {
            Alert::Success { message, details } => (
                message,
                details,
                "flex items-start p-4 mb-4 text-green-800 border border-green-300 \
                rounded-lg bg-green-50 dark:bg-gray-800 dark:text-green-400 \
                dark:border-green-800",
                "✓",
            ),
            Alert::Error { message, details } => (
                message,
                details,
                "flex items-start p-4 mb-4 text-red-800 border border-red-300 \
                rounded-lg bg-red-50 dark:bg-gray-800 dark:text-red-400 \
                dark:border-red-800",
                "!",
            ),
        };

        html! {
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div class=(container_style) role="alert"
                {
                    span class="font-bold me-3" aria-hidden="true" { (icon) }

                    div class="flex-1"
                    {
                        p class="font-medium" { (message) }

                        @if !details.is_empty() {
                            p class="text-sm mt-1" { (details) }
                        }
                    }

                    button
                        type="button"
                        class="ms-3 text-sm font-medium underline"
                        onclick="this.closest('#alert-container').classList.add('hidden')"
                    {
                        "Dismiss"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn error_alert_shows_message_and_details() {
        let markup = Alert::Error {
            message: "Could not delete transaction".to_owned(),
            details: "The transaction could not be found.".to_owned(),
        }
        .into_html();

        let html = Html::parse_fragment(&markup.into_string());
        let paragraphs: Vec<String> = html
            .select(&Selector::parse("p").unwrap())
            .map(|p| p.text().collect())
            .collect();

        assert_eq!(
            paragraphs,
            [
                "Could not delete transaction",
                "The transaction could not be found."
            ]
        );
    }

    #[test]
    fn empty_details_are_omitted() {
        let markup = Alert::Success {
            message: "Saved".to_owned(),
            details: String::new(),
        }
        .into_html();

        let html = Html::parse_fragment(&markup.into_string());
        let count = html.select(&Selector::parse("p").unwrap()).count();

        assert_eq!(count, 1);
    }
}
