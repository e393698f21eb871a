//! Transaction management for the budgeting application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validation of untrusted input
//! - The in-memory `TransactionStore`
//! - The add transaction form, the recent transactions table and the
//!   HTML and JSON endpoints for creating, listing and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod form;
mod list_endpoint;
mod state;
mod store;
mod update_endpoint;
pub mod validation;
mod view;

pub use core::{Category, Transaction, TransactionId, TransactionInput, TransactionType};
pub use create_endpoint::{create_transaction_api, create_transaction_endpoint};
pub use delete_endpoint::{delete_transaction_api, delete_transaction_endpoint};
pub use form::{TransactionForm, transaction_form_view};
pub use list_endpoint::list_transactions_api;
pub use state::TransactionState;
pub use store::{ListQuery, ListQueryParams, TransactionStore};
pub use update_endpoint::update_transaction_api;
pub use view::transaction_list_view;
