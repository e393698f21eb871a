//! Defines the core data models for transactions.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    Error,
    transaction::validation::{RawInput, validate_transaction},
};

// ============================================================================
// MODELS
// ============================================================================

/// The opaque identifier the store assigns to a transaction.
pub type TransactionId = String;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. a salary payment.
    Income,
    /// Money going out, e.g. rent or groceries.
    Expense,
}

impl TransactionType {
    /// Every transaction type, in display order.
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// The lowercase name used in forms, query strings and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// The name shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }

    /// Parse the exact lowercase name of a transaction type.
    ///
    /// Matching is case-sensitive, "INCOME" is not a transaction type.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of spending and earning categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Housing,
    Food,
    Transportation,
    Utilities,
    Healthcare,
    Insurance,
    Debt,
    Entertainment,
    Shopping,
    Travel,
    Education,
    Salary,
    Freelance,
    Investment,
    Other,
}

impl Category {
    /// Every category, in the order used for charts and form options.
    pub const ALL: [Category; 15] = [
        Category::Housing,
        Category::Food,
        Category::Transportation,
        Category::Utilities,
        Category::Healthcare,
        Category::Insurance,
        Category::Debt,
        Category::Entertainment,
        Category::Shopping,
        Category::Travel,
        Category::Education,
        Category::Salary,
        Category::Freelance,
        Category::Investment,
        Category::Other,
    ];

    /// The lowercase name used in forms, query strings and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Housing => "housing",
            Category::Food => "food",
            Category::Transportation => "transportation",
            Category::Utilities => "utilities",
            Category::Healthcare => "healthcare",
            Category::Insurance => "insurance",
            Category::Debt => "debt",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Travel => "travel",
            Category::Education => "education",
            Category::Salary => "salary",
            Category::Freelance => "freelance",
            Category::Investment => "investment",
            Category::Other => "other",
        }
    }

    /// Parse the exact lowercase name of a category.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == name)
    }

    /// The name shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Utilities => "Utilities",
            Category::Healthcare => "Healthcare",
            Category::Insurance => "Insurance",
            Category::Debt => "Debt",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Travel => "Travel",
            Category::Education => "Education",
            Category::Salary => "Salary",
            Category::Freelance => "Freelance",
            Category::Investment => "Investment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The validated fields of a transaction, before the store assigns an ID.
///
/// Only [validate_transaction] should construct this from untrusted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// What the transaction was for, trimmed, 1-120 characters.
    pub description: String,
    /// The amount of money, always finite and greater than zero.
    pub amount: f64,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The category the transaction belongs to.
    pub category: Category,
    /// When the transaction happened, exactly as entered (trimmed).
    pub date: String,
    /// An optional free-text note.
    ///
    /// `None` means no note was given, `Some("")` means an empty note was
    /// given explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID assigned by the store.
    pub id: TransactionId,
    /// What the transaction was for.
    pub description: String,
    /// The amount of money spent or earned, always positive.
    pub amount: f64,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The category the transaction belongs to.
    pub category: Category,
    /// When the transaction happened.
    pub date: String,
    /// An optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    /// Attach `id` to validated fields.
    pub fn new(id: TransactionId, input: TransactionInput) -> Self {
        Self {
            id,
            description: input.description,
            amount: input.amount,
            transaction_type: input.transaction_type,
            category: input.category,
            date: input.date,
            note: input.note,
        }
    }

    /// Normalize a stored record, e.g. an entry of a seed file.
    ///
    /// The record must have a string `id` and its remaining fields must pass
    /// validation. Unknown keys are dropped.
    ///
    /// # Errors
    /// Returns [Error::UnprocessableRecord] if the record is not a valid transaction.
    pub fn from_record(record: &Value) -> Result<Self, Error> {
        let Some(id) = record.get("id").and_then(Value::as_str) else {
            return Err(Error::UnprocessableRecord(
                "the record does not have a string ID".to_owned(),
            ));
        };

        let raw = RawInput::from_json(record.clone());

        match validate_transaction(&raw) {
            Ok(input) => Ok(Transaction::new(id.to_owned(), input)),
            Err(failure) => Err(Error::UnprocessableRecord(format!(
                "record {id} failed validation: {}",
                failure.summary()
            ))),
        }
    }

    /// The signed effect of this transaction on the balance.
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
