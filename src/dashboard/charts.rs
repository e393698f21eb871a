//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations from the derived views:
//! - **Spending by Category**: a donut of expenses per category
//! - **Balance Trend**: income, expenses and the running balance per date
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, JsFunction, Tooltip, Trigger,
    },
    series::{Line, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    dashboard::aggregation::{DonutPoint, TrendPoint},
    html::{CARD_STYLE, HeadElement},
};

/// The colours cycled through by the chart series.
const PALETTE: [&str; 6] = [
    "#0F766E", "#334155", "#F59E0B", "#DC2626", "#14B8A6", "#64748B",
];

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The heading shown above the chart.
    pub title: &'static str,
    /// The message shown instead of the chart when there is nothing to plot.
    pub empty_message: &'static str,
    /// The ECharts configuration as a JSON string, `None` if there is no data.
    pub options: Option<String>,
}

/// Renders the containers for dashboard charts.
///
/// Charts without data show their empty message instead.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div class=(CARD_STYLE)
                    {
                        h3 class="text-base font-semibold" { (chart.title) }

                        @if chart.options.is_some() {
                            div
                                id=(chart.id)
                                class="min-h-[320px] rounded dark:bg-gray-100"
                            {}
                        } @else {
                            p
                                class="flex min-h-[320px] items-center justify-center
                                    text-sm text-gray-500 dark:text-gray-400"
                            {
                                (chart.empty_message)
                            }
                        }
                    }
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing. Charts without data are skipped.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .filter_map(|chart| chart.options.as_ref().map(|options| (chart.id, options)))
        .map(|(id, options)| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{id}");
                    const chart = echarts.init(chartDom);
                    const option = {options};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// The expenses per category as a donut chart.
pub(super) fn donut_chart(points: &[DonutPoint]) -> Chart {
    let data: Vec<(f64, &str)> = points
        .iter()
        .map(|point| (point.value, point.category.label()))
        .collect();

    Chart::new()
        .color(palette())
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().left("center").top("bottom"))
        .series(
            Pie::new()
                .name("Spending")
                .radius(vec!["45%", "70%"])
                .data(data),
        )
}

/// Income, expenses and the running balance per date as a line chart.
pub(super) fn trend_chart(points: &[TrendPoint]) -> Chart {
    let dates: Vec<String> = points.iter().map(|point| point.date.clone()).collect();
    let series = |name: &str, value: fn(&TrendPoint) -> f64| {
        Line::new()
            .name(name)
            .data(points.iter().map(value).collect::<Vec<_>>())
    };

    Chart::new()
        .color(palette())
        .tooltip(currency_tooltip())
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(dates))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(series("Income", |point| point.income))
        .series(series("Expense", |point| point.expense))
        .series(series("Balance", |point| point.balance))
}

fn palette() -> Vec<Color> {
    PALETTE.into_iter().map(Color::from).collect()
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line))
}
