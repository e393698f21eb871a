//! The navigation bar shown at the top of every page.

use maud::{Markup, html};

use crate::endpoints;

/// A link in the navigation bar.
///
/// Only one link should be marked as current at any one time.
#[derive(Clone, Copy)]
struct Link {
    url: &'static str,
    title: &'static str,
    is_current: bool,
}

impl Link {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white bg-blue-700 rounded-sm md:bg-transparent \
            md:text-blue-700 md:p-0 dark:text-white md:dark:text-blue-500"
        } else {
            "block py-2 px-3 text-gray-900 rounded-sm hover:bg-gray-100 \
            md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 \
            dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 \
            dark:hover:text-white md:dark:hover:bg-transparent"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

/// The site wide navigation bar.
pub struct NavBar {
    links: [Link; 4],
}

impl NavBar {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> Self {
        let link = |url: &'static str, title: &'static str| Link {
            url,
            title,
            is_current: active_endpoint == url,
        };

        Self {
            links: [
                link(endpoints::DASHBOARD_VIEW, "Dashboard"),
                link(endpoints::HELP_VIEW, "Help"),
                link(endpoints::NOTIFICATIONS_VIEW, "Notifications"),
                link(endpoints::ABOUT_VIEW, "About"),
            ],
        }
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="sticky top-0 z-40 bg-white border-b border-gray-200 dark:bg-gray-900 dark:border-gray-800"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href=(endpoints::ROOT)
                        class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                    {
                        "Finboard"
                    }

                    ul
                        class="font-medium flex flex-row space-x-4 md:space-x-8
                        rtl:space-x-reverse"
                    {
                        @for link in self.links {
                            li { (link.into_html()) }
                        }
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::NavBar;
    use crate::endpoints;

    #[test]
    fn marks_only_the_active_link() {
        let markup = NavBar::new(endpoints::HELP_VIEW).into_html();
        let html = Html::parse_fragment(&markup.into_string());

        let current: Vec<_> = html
            .select(&Selector::parse("a[aria-current=page]").unwrap())
            .filter_map(|link| link.value().attr("href"))
            .collect();

        assert_eq!(current, [endpoints::HELP_VIEW]);
    }

    #[test]
    fn links_every_page() {
        let markup = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
        let html = Html::parse_fragment(&markup.into_string());

        let links: Vec<_> = html
            .select(&Selector::parse("li a").unwrap())
            .filter_map(|link| link.value().attr("href"))
            .collect();

        assert_eq!(
            links,
            [
                endpoints::DASHBOARD_VIEW,
                endpoints::HELP_VIEW,
                endpoints::NOTIFICATIONS_VIEW,
                endpoints::ABOUT_VIEW
            ]
        );
    }
}
