//! The page describing the application.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BADGE_STYLE, CARD_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
};

/// The version shown on the about page.
const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Route handler for the about page.
pub async fn get_about_page() -> Markup {
    let content = html! {
        (NavBar::new(endpoints::ABOUT_VIEW).into_html())

        div class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-4xl space-y-4 sm:space-y-6"
            {
                div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between"
                {
                    h1 class="text-2xl font-semibold tracking-tight sm:text-3xl" { "Finboard" }
                    span class=(BADGE_STYLE) { (VERSION) }
                }

                div class=(CARD_STYLE)
                {
                    p class="text-sm leading-6"
                    {
                        "Finboard helps you track incoming and outgoing cash in one place."
                    }
                    p class="mt-3 text-sm leading-6"
                    {
                        "It provides a clear snapshot of balances, trends, and recent \
                        activity so decisions can be made quickly."
                    }
                    p class="mt-3 text-sm leading-6"
                    {
                        "The interface is designed for fast daily use, with responsive \
                        layouts and dark mode support."
                    }
                }
            }
        }
    };

    base("About", &[], &content)
}
