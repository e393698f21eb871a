//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for the dashboard page and the dashboard JSON API
//! - HTML view functions for rendering the dashboard UI
//! - The state used by the handlers

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    api_error::StructuredError,
    app_state::{ViewState, lock},
    dashboard::{
        aggregation::DashboardSummary,
        cards::stat_cards_view,
        charts::{DashboardChart, charts_script, charts_view, donut_chart, trend_chart},
    },
    endpoints,
    html::{CARD_STYLE, CHIP_ACTIVE_STYLE, CHIP_STYLE, HeadElement, base, link},
    navigation::NavBar,
    transaction::{
        ListQuery, ListQueryParams, Transaction, TransactionForm, TransactionStore,
        TransactionType, transaction_form_view, transaction_list_view,
    },
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Every transaction, newest first.
    pub transactions: Arc<Mutex<TransactionStore>>,
    /// The last error of a failed change to the transactions.
    pub view_state: Arc<Mutex<ViewState>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
            view_state: state.view_state.clone(),
        }
    }
}

/// Display a page with an overview of the user's finances.
///
/// The stats and charts always cover every transaction, `params` only filters
/// the recent transactions table. Invalid filters are ignored.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(params): Query<ListQueryParams>,
) -> Result<Response, Error> {
    let query = params.parse().unwrap_or_else(|errors| {
        tracing::debug!("ignoring invalid dashboard filters: {errors:?}");
        ListQuery::default()
    });

    let (summary, recent) = {
        let store = lock(&state.transactions, "transaction store")?;
        (
            DashboardSummary::from_transactions(store.all()),
            store.list(&query),
        )
    };

    let last_error = lock(&state.view_state, "view state")?.last_error.clone();

    let charts = build_dashboard_charts(&summary);
    let today = OffsetDateTime::now_utc().date();

    Ok(dashboard_view(
        &summary,
        &charts,
        &recent,
        &query,
        last_error.as_ref(),
        &TransactionForm::blank(today),
    )
    .into_response())
}

/// API endpoint returning the stats, donut and trend views as JSON.
pub async fn get_dashboard_api(State(state): State<DashboardState>) -> Response {
    match lock(&state.transactions, "transaction store") {
        Ok(store) => Json(DashboardSummary::from_transactions(store.all())).into_response(),
        Err(error) => StructuredError::from(error).into_response(),
    }
}

/// Creates the dashboard charts from the derived views.
///
/// The chart options are serialized to JSON for ECharts consumption. Views
/// with no data points get no options.
fn build_dashboard_charts(summary: &DashboardSummary) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "donut-chart",
            title: "Spending by Category",
            empty_message: "No expense data yet.",
            options: (!summary.donut.is_empty())
                .then(|| donut_chart(&summary.donut).to_string()),
        },
        DashboardChart {
            id: "trend-chart",
            title: "Balance Trend",
            empty_message: "No trend data yet.",
            options: (!summary.trend.is_empty())
                .then(|| trend_chart(&summary.trend).to_string()),
        },
    ]
}

/// Renders the main dashboard page with stats, charts, the add transaction
/// form and the recent transactions.
fn dashboard_view(
    summary: &DashboardSummary,
    charts: &[DashboardChart],
    recent: &[Transaction],
    query: &ListQuery,
    last_error: Option<&StructuredError>,
    form: &TransactionForm,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center gap-6 px-2 lg:px-6 py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            div class="w-full flex items-center justify-between"
            {
                h1 class="text-2xl font-semibold tracking-tight" { "Overview" }
            }

            @if let Some(error) = last_error {
                (last_error_view(error))
            }

            (stat_cards_view(&summary.stats))

            (charts_view(charts))

            div class="w-full grid grid-cols-1 xl:grid-cols-3 gap-6"
            {
                div class=(CARD_STYLE)
                {
                    (transaction_form_view(form, None))
                }

                div class={ "xl:col-span-2 " (CARD_STYLE) }
                {
                    (type_filter_view(query))
                    (transaction_list_view(recent))
                }
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(charts),
    ];

    base("Dashboard", &scripts, &content)
}

/// Links for filtering the recent transactions by type, keeping the other filters.
fn type_filter_view(query: &ListQuery) -> Markup {
    let options = [
        ("All", None),
        ("Income", Some(TransactionType::Income)),
        ("Expense", Some(TransactionType::Expense)),
    ];

    html! {
        nav class="flex flex-wrap items-center gap-2 mb-4" aria-label="Filter transactions"
        {
            @for (label, transaction_type) in options {
                @let is_active = query.transaction_type == transaction_type;

                a
                    href=(query.with_type(transaction_type).to_url(endpoints::DASHBOARD_VIEW))
                    class=(if is_active { CHIP_ACTIVE_STYLE } else { CHIP_STYLE })
                    aria-current=[is_active.then_some("true")]
                {
                    (label)
                }
            }

            @if !query.is_unfiltered() {
                span class="text-sm" { (link(endpoints::DASHBOARD_VIEW, "Clear filters")) }
            }
        }
    }
}

/// The last failed change, with the message for each invalid field.
fn last_error_view(error: &StructuredError) -> Markup {
    html! {
        div
            id="last-error"
            role="alert"
            class="w-full p-4 text-sm text-red-800 border border-red-300 rounded-lg
                bg-red-50 dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
        {
            p class="font-medium" { (error.message) }

            @if let Some(details) = &error.details {
                ul class="mt-2 list-disc list-inside"
                {
                    @for (field, messages) in details {
                        @for message in messages {
                            li { (field) ": " (message) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{FromRef, Query, State},
        http::StatusCode,
    };
    use scraper::{Html, Selector};

    use crate::{
        AppState, Error,
        api_error::StructuredError,
        dashboard::handlers::{DashboardState, get_dashboard_api, get_dashboard_page},
        endpoints,
        seed::example_transactions,
        test_utils::{
            assert_hx_endpoint, assert_valid_html, element_texts, must_get_form,
            parse_html_document, response_json,
        },
        transaction::{ListQueryParams, TransactionStore},
    };

    fn get_state(store: TransactionStore) -> DashboardState {
        DashboardState::from_ref(&AppState::with_store(store))
    }

    fn example_state() -> DashboardState {
        get_state(TransactionStore::with_transactions(example_transactions()).unwrap())
    }

    fn params(query: &str) -> Query<ListQueryParams> {
        Query(serde_urlencoded::from_str(query).unwrap())
    }

    async fn get_page(state: DashboardState, query: &str) -> Html {
        let response = get_dashboard_page(State(state), params(query)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        parse_html_document(response).await
    }

    #[tokio::test]
    async fn shows_stats_for_every_transaction() {
        let html = get_page(example_state(), "").await;

        assert_valid_html(&html);
        assert_eq!(
            element_texts(&html, "#stats article p:last-child"),
            ["$4,800.00", "$220.55", "$4,579.45", "3"]
        );
    }

    #[tokio::test]
    async fn shows_charts_and_form() {
        let html = get_page(example_state(), "").await;

        assert_eq!(html.select(&Selector::parse("#donut-chart").unwrap()).count(), 1);
        assert_eq!(html.select(&Selector::parse("#trend-chart").unwrap()).count(), 1);
        assert_hx_endpoint(&must_get_form(&html), endpoints::TRANSACTIONS, "hx-post");
    }

    #[tokio::test]
    async fn filters_recent_transactions_but_not_stats() {
        let html = get_page(example_state(), "type=expense").await;

        assert_eq!(html.select(&Selector::parse("tbody tr").unwrap()).count(), 2);
        assert_eq!(element_texts(&html, "#stats article p:last-child")[3], "3");
        assert_eq!(element_texts(&html, "nav a[aria-current=true]"), ["Expense"]);
    }

    #[tokio::test]
    async fn empty_store_shows_placeholders() {
        let html = get_page(get_state(TransactionStore::new()), "").await;

        let placeholders = element_texts(&html, "#charts p");
        assert_eq!(placeholders, ["No expense data yet.", "No trend data yet."]);
        assert_eq!(element_texts(&html, "#transaction-list p"), ["No transactions yet."]);
    }

    #[tokio::test]
    async fn shows_last_error() {
        let state = example_state();
        state.view_state.lock().unwrap().last_error =
            Some(StructuredError::from(Error::DeleteMissingTransaction));

        let html = get_page(state, "").await;

        assert_eq!(element_texts(&html, "#last-error p"), ["Transaction not found."]);
    }

    #[tokio::test]
    async fn api_returns_summary() {
        let response = get_dashboard_api(State(example_state())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let summary = response_json(response).await;
        assert_eq!(summary["stats"]["transactionCount"], 3);
        assert_eq!(summary["donut"].as_array().unwrap().len(), 2);
        assert_eq!(summary["trend"].as_array().unwrap().len(), 3);
    }
}
