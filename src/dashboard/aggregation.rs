//! Derived views over the transaction collection.
//!
//! Everything here is recomputed from scratch on each request: summary
//! statistics, the expense breakdown by category for the donut chart, and the
//! running balance series for the trend chart.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::transaction::{Category, Transaction, TransactionType};

/// Totals over every transaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// The sum of all income amounts.
    pub income: f64,
    /// The sum of all expense amounts.
    pub expense: f64,
    /// `income - expense`.
    pub balance: f64,
    /// The number of transactions of either type.
    pub transaction_count: usize,
}

/// The total spent in one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DonutPoint {
    pub category: Category,
    pub value: f64,
}

/// Income, expense and running balance for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// The date exactly as it was entered.
    pub date: String,
    pub income: f64,
    pub expense: f64,
    /// The cumulative `income - expense` over this date and every earlier one.
    pub balance: f64,
}

/// Every derived view the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub donut: Vec<DonutPoint>,
    pub trend: Vec<TrendPoint>,
}

impl DashboardSummary {
    /// Compute all views over `transactions`.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            stats: calculate_stats(transactions),
            donut: calculate_donut(transactions),
            trend: calculate_trend(transactions),
        }
    }
}

/// Sum income and expenses and count the transactions.
pub fn calculate_stats(transactions: &[Transaction]) -> DashboardStats {
    let (income, expense) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expense), transaction| {
                match transaction.transaction_type {
                    TransactionType::Income => (income + transaction.amount, expense),
                    TransactionType::Expense => (income, expense + transaction.amount),
                }
            });

    DashboardStats {
        income,
        expense,
        balance: income - expense,
        transaction_count: transactions.len(),
    }
}

/// Total the expenses per category.
///
/// Categories are listed in [Category::ALL] order and categories with no
/// spending are left out. Income never counts towards the breakdown.
pub fn calculate_donut(transactions: &[Transaction]) -> Vec<DonutPoint> {
    Category::ALL
        .into_iter()
        .map(|category| DonutPoint {
            category,
            value: transactions
                .iter()
                .filter(|transaction| {
                    transaction.transaction_type == TransactionType::Expense
                        && transaction.category == category
                })
                .map(|transaction| transaction.amount)
                .sum(),
        })
        .filter(|point| point.value > 0.0)
        .collect()
}

/// Group transactions by date and accumulate the running balance.
///
/// Dates are grouped and ordered by their exact text, so "2026-02-01" and
/// "2026-02-01T00:00:00Z" are separate points.
pub fn calculate_trend(transactions: &[Transaction]) -> Vec<TrendPoint> {
    let mut totals_by_date: BTreeMap<&str, (f64, f64)> = BTreeMap::new();

    for transaction in transactions {
        let (income, expense) = totals_by_date.entry(transaction.date.as_str()).or_default();

        match transaction.transaction_type {
            TransactionType::Income => *income += transaction.amount,
            TransactionType::Expense => *expense += transaction.amount,
        }
    }

    let mut balance = 0.0;

    totals_by_date
        .into_iter()
        .map(|(date, (income, expense))| {
            balance += income - expense;

            TrendPoint {
                date: date.to_owned(),
                income,
                expense,
                balance,
            }
        })
        .collect()
}
