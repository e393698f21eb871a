//! The help center page and the FAQ search API.

use axum::{
    Json,
    extract::Query,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    api_error::StructuredError,
    endpoints,
    faq::core::{FAQS, Faq, FaqCategoryFilter, filter_faqs},
    html::{
        CARD_STYLE, CHIP_ACTIVE_STYLE, CHIP_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        base,
    },
    navigation::NavBar,
};

/// The category filter and search text.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FaqQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

/// Route handler for the help center page.
///
/// An unknown category shows every category.
pub async fn get_help_page(Query(query): Query<FaqQuery>) -> Response {
    let category = FaqCategoryFilter::parse(query.category.as_deref()).unwrap_or_else(|_| {
        tracing::debug!("unknown FAQ category {:?}, showing all", query.category);
        FaqCategoryFilter::All
    });
    let search = query.q.as_deref().unwrap_or_default();
    let faqs = filter_faqs(&FAQS, category, search);

    let content = html! {
        (NavBar::new(endpoints::HELP_VIEW).into_html())

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-4xl space-y-4"
            {
                header class="space-y-2"
                {
                    h1 class="text-2xl font-semibold tracking-tight" { "Help Center" }
                    p class="text-sm text-gray-600 dark:text-gray-300"
                    {
                        "Find quick answers about setup, account settings, and billing."
                    }
                }

                form
                    method="get"
                    action=(endpoints::HELP_VIEW)
                    hx-get=(endpoints::HELP_VIEW)
                    hx-trigger="input changed delay:300ms from:#faq-search, search"
                    hx-target="#faq-results"
                    hx-select="#faq-results"
                    hx-swap="outerHTML"
                    class="space-y-3"
                {
                    label for="faq-search" class="text-sm font-medium" { "Search FAQs" }

                    input
                        id="faq-search"
                        name="q"
                        type="search"
                        aria-label="Search frequently asked questions"
                        placeholder="Search by keyword"
                        value=(search)
                        class=(FORM_TEXT_INPUT_STYLE);

                    @if category != FaqCategoryFilter::All {
                        input type="hidden" name="category" value=(category.as_str());
                    }
                }

                nav class="flex flex-wrap gap-2" aria-label="FAQ categories"
                {
                    @for option in FaqCategoryFilter::OPTIONS {
                        a
                            href=(help_url(option, search))
                            class=(if option == category { CHIP_ACTIVE_STYLE } else { CHIP_STYLE })
                            aria-current=[(option == category).then_some("true")]
                        {
                            (option.as_str())
                        }
                    }
                }

                (faq_list_view(&faqs))
            }
        }
    };

    base("Help", &[], &content).into_response()
}

/// Route handler for searching the FAQs as JSON.
pub async fn list_faqs_api(Query(query): Query<FaqQuery>) -> Response {
    match FaqCategoryFilter::parse(query.category.as_deref()) {
        Ok(category) => {
            Json(filter_faqs(&FAQS, category, query.q.as_deref().unwrap_or_default()))
                .into_response()
        }
        Err(details) => StructuredError::invalid_query(details).into_response(),
    }
}

fn help_url(category: FaqCategoryFilter, search: &str) -> String {
    let query = FaqQuery {
        category: (category != FaqCategoryFilter::All).then(|| category.as_str().to_owned()),
        q: (!search.is_empty()).then(|| search.to_owned()),
    };

    match serde_urlencoded::to_string(&query) {
        Ok(query) if !query.is_empty() => format!("{}?{query}", endpoints::HELP_VIEW),
        Ok(_) => endpoints::HELP_VIEW.to_owned(),
        Err(error) => {
            tracing::error!("could not encode help query {query:?}: {error}");
            endpoints::HELP_VIEW.to_owned()
        }
    }
}

fn faq_list_view(faqs: &[Faq]) -> Markup {
    html! {
        section id="faq-results" aria-live="polite" class="space-y-3"
        {
            @if faqs.is_empty() {
                div class="rounded-lg border border-dashed border-gray-300 p-6 text-center text-sm dark:border-gray-700"
                {
                    "No FAQs match your current filters."
                }
            } @else {
                @for faq in faqs {
                    details id=(faq.id) class={ "group " (CARD_STYLE) }
                    {
                        summary class="flex cursor-pointer items-center justify-between gap-3 text-sm font-medium"
                        {
                            span { (faq.question) }
                            span aria-hidden="true" class="text-gray-500 group-open:rotate-45" { "+" }
                        }

                        p class="pt-3 text-sm leading-6 text-gray-700 dark:text-gray-300"
                        {
                            (faq.answer)
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::Query, http::StatusCode};
    use scraper::{Html, Selector};

    use crate::{
        api_error::{ErrorCode, StructuredError},
        endpoints,
        faq::{
            core::{FaqCategory, FaqCategoryFilter},
            page::{FaqQuery, get_help_page, help_url, list_faqs_api},
        },
        test_utils::{assert_valid_html, parse_html_document, response_json},
    };

    fn query(category: Option<&str>, q: Option<&str>) -> Query<FaqQuery> {
        Query(FaqQuery {
            category: category.map(str::to_owned),
            q: q.map(str::to_owned),
        })
    }

    fn questions(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("details summary span:first-child").unwrap())
            .map(|span| span.text().collect())
            .collect()
    }

    #[tokio::test]
    async fn page_lists_every_question() {
        let response = get_help_page(query(None, None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(questions(&html).len(), 8);
    }

    #[tokio::test]
    async fn page_filters_by_category_and_search() {
        let response = get_help_page(query(Some("Account"), Some("forgot"))).await;

        let html = parse_html_document(response).await;
        assert_eq!(questions(&html), ["I forgot my password. What should I do?"]);
        let search_value = html
            .select(&Selector::parse("input[name=q]").unwrap())
            .next()
            .and_then(|input| input.value().attr("value"));
        assert_eq!(search_value, Some("forgot"));
    }

    #[tokio::test]
    async fn page_shows_empty_message() {
        let response = get_help_page(query(Some("Billing"), Some("salary"))).await;

        let html = parse_html_document(response).await;
        assert!(questions(&html).is_empty());
        let message: String = html
            .select(&Selector::parse("#faq-results div").unwrap())
            .next()
            .expect("No empty message found")
            .text()
            .collect();
        assert_eq!(message.trim(), "No FAQs match your current filters.");
    }

    #[test]
    fn category_links_keep_search() {
        assert_eq!(help_url(FaqCategoryFilter::All, ""), endpoints::HELP_VIEW);
        assert_eq!(
            help_url(FaqCategoryFilter::Only(FaqCategory::GettingStarted), "card"),
            "/help?category=Getting+Started&q=card"
        );
    }

    #[tokio::test]
    async fn api_returns_matching_faqs() {
        let response = list_faqs_api(query(Some("Billing"), None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let faqs = response_json(response).await;
        let categories: Vec<_> = faqs
            .as_array()
            .unwrap()
            .iter()
            .map(|faq| faq["category"].as_str().unwrap())
            .collect();
        assert_eq!(categories, ["Billing", "Billing"]);
    }

    #[tokio::test]
    async fn api_rejects_unknown_category() {
        let response = list_faqs_api(query(Some("Pricing"), None)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: StructuredError =
            serde_json::from_value(response_json(response).await).unwrap();
        assert_eq!(error.code, ErrorCode::ValidationError);
    }
}
