//! The table of recent transactions shown on the dashboard.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BADGE_STYLE, BUTTON_DELETE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_date, format_signed_currency,
    },
    transaction::{Transaction, validation::parse_calendar_date},
};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    }
}

/// Render `transactions` as a table in the order given.
pub fn transaction_list_view(transactions: &[Transaction]) -> Markup {
    html! {
        section id="transaction-list" class="w-full"
        {
            h2 class="text-xl font-semibold mb-4" { "Recent Transactions" }

            @if transactions.is_empty() {
                p class="text-gray-500 dark:text-gray-400" { "No transactions yet." }
            } @else {
                div class="relative overflow-x-auto shadow-md rounded"
                {
                    table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for transaction in transactions {
                                (transaction_row_view(transaction))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row_view(transaction: &Transaction) -> Markup {
    let (description, tooltip) = format_description(&transaction.description);
    let date = match parse_calendar_date(&transaction.date) {
        Some(date) => format_date(date),
        None => transaction.date.clone(),
    };
    let amount = transaction.signed_amount();
    let delete_url = format_endpoint(endpoints::TRANSACTION, &transaction.id);

    html! {
        tr id={ "transaction-" (transaction.id) } class=(TABLE_ROW_STYLE)
        {
            td class={ (TABLE_CELL_STYLE) " whitespace-nowrap" } { (date) }

            td class=(TABLE_CELL_STYLE) title=[tooltip]
            {
                p class="font-medium text-gray-900 dark:text-white" { (description) }

                @if let Some(note) = transaction.note.as_deref().filter(|note| !note.is_empty()) {
                    p class="text-xs" { (note) }
                }
            }

            td class=(TABLE_CELL_STYLE)
            {
                span class=(BADGE_STYLE) { (transaction.category.label()) }
            }

            td class={ (TABLE_CELL_STYLE) " " (amount_class(amount)) " whitespace-nowrap" }
            {
                (format_signed_currency(amount))
            }

            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-confirm={ "Delete \"" (transaction.description) "\"?" }
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

fn format_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        let truncated = truncated + "...";
        (truncated, Some(description))
    }
}
