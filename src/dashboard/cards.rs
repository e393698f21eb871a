//! The stat cards at the top of the dashboard.

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::DashboardStats,
    html::{CARD_STYLE, format_currency},
};

/// Renders the income, expenses, net balance and transaction count cards.
pub(super) fn stat_cards_view(stats: &DashboardStats) -> Markup {
    let cards = [
        ("Income", format_currency(stats.income)),
        ("Expenses", format_currency(stats.expense)),
        ("Net Balance", format_currency(stats.balance)),
        ("Transactions", stats.transaction_count.to_string()),
    ];

    html! {
        section id="stats" class="w-full grid grid-cols-1 gap-4 sm:grid-cols-2 xl:grid-cols-4"
        {
            @for (label, value) in cards {
                article class=(CARD_STYLE)
                {
                    p class="text-sm text-gray-600 dark:text-gray-400" { (label) }
                    p class="mt-2 text-2xl font-semibold tracking-tight" { (value) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::dashboard::{aggregation::DashboardStats, cards::stat_cards_view};

    #[test]
    fn shows_each_stat() {
        let stats = DashboardStats {
            income: 4800.0,
            expense: 220.55,
            balance: -20.5,
            transaction_count: 3,
        };

        let html = Html::parse_fragment(&stat_cards_view(&stats).into_string());
        let paragraph = Selector::parse("p").unwrap();
        let cards: Vec<(String, String)> = html
            .select(&Selector::parse("article").unwrap())
            .map(|card| {
                let mut text = card
                    .select(&paragraph)
                    .map(|p| p.text().collect::<String>());
                (text.next().unwrap(), text.next().unwrap())
            })
            .collect();

        assert_eq!(cards[0].0, "Income");
        assert_eq!(cards[1], ("Expenses".to_owned(), "$220.55".to_owned()));
        assert_eq!(cards[2], ("Net Balance".to_owned(), "-$20.50".to_owned()));
        assert_eq!(cards[3], ("Transactions".to_owned(), "3".to_owned()));
    }
}
