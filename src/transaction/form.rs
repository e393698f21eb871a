//! The add transaction form and the conversion of its fields into raw input.

use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_ERROR_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        loading_spinner,
    },
    transaction::{
        core::{Category, TransactionType},
        validation::{
            AMOUNT_MAX, DESCRIPTION_MAX_LENGTH, NOTE_MAX_LENGTH, RawInput, ValidationFailure,
        },
    },
};

/// The fields of the add transaction form, exactly as submitted.
///
/// Empty fields are deserialized as `None` by [axum_extra::extract::Form].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionForm {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default, rename = "type")]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl TransactionForm {
    /// An expense in the food category dated `today`.
    pub fn blank(today: Date) -> Self {
        Self {
            transaction_type: Some(TransactionType::Expense.as_str().to_owned()),
            category: Some(Category::Food.as_str().to_owned()),
            date: Some(today.to_string()),
            ..Default::default()
        }
    }

    /// Convert the submitted strings into a record for validation.
    ///
    /// The amount is parsed as a number. Text that is not a number becomes NaN
    /// so that it fails validation as a non-finite amount.
    pub fn to_raw_input(&self) -> RawInput {
        let mut raw = RawInput::new();

        let text_fields = [
            ("description", &self.description),
            ("type", &self.transaction_type),
            ("category", &self.category),
            ("date", &self.date),
            ("note", &self.note),
        ];

        for (key, value) in text_fields {
            if let Some(value) = value {
                raw.insert(key, value.as_str());
            }
        }

        let amount = self
            .amount
            .as_deref()
            .map(str::trim)
            .filter(|amount| !amount.is_empty());

        if let Some(amount) = amount {
            raw.insert("amount", amount.parse::<f64>().unwrap_or(f64::NAN));
        }

        raw
    }
}

/// Render the add transaction form.
///
/// `form` fills in the inputs and `failure` adds the messages under each
/// invalid field.
pub fn transaction_form_view(
    form: &TransactionForm,
    failure: Option<&ValidationFailure>,
) -> Markup {
    let selected_type = form.transaction_type.as_deref();
    let selected_category = form.category.as_deref();

    html! {
        form
            id="transaction-form"
            hx-post=(endpoints::TRANSACTIONS)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-indicator="#indicator"
            class="w-full space-y-4"
        {
            h2 class="text-xl font-semibold" { "Add Transaction" }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    id="description"
                    name="description"
                    type="text"
                    maxlength=(DESCRIPTION_MAX_LENGTH)
                    placeholder="e.g. Groceries"
                    required
                    value=[form.description.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_errors(errors_for(failure, "description")))
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    id="amount"
                    name="amount"
                    type="number"
                    step="0.01"
                    min="0.01"
                    max=(AMOUNT_MAX)
                    placeholder="0.00"
                    required
                    value=[form.amount.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_errors(errors_for(failure, "amount")))
            }

            div class="grid grid-cols-1 sm:grid-cols-2 gap-4"
            {
                div
                {
                    label for="type" class=(FORM_LABEL_STYLE) { "Type" }

                    select id="type" name="type" class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for transaction_type in TransactionType::ALL {
                            option
                                value=(transaction_type.as_str())
                                selected[selected_type == Some(transaction_type.as_str())]
                            {
                                (transaction_type.label())
                            }
                        }
                    }

                    (field_errors(errors_for(failure, "type")))
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                    select id="category" name="category" class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for category in Category::ALL {
                            option
                                value=(category.as_str())
                                selected[selected_category == Some(category.as_str())]
                            {
                                (category.label())
                            }
                        }
                    }

                    (field_errors(errors_for(failure, "category")))
                }
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    id="date"
                    name="date"
                    type="date"
                    required
                    value=[form.date.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_errors(errors_for(failure, "date")))
            }

            div
            {
                label for="note" class=(FORM_LABEL_STYLE) { "Note (optional)" }

                input
                    id="note"
                    name="note"
                    type="text"
                    maxlength=(NOTE_MAX_LENGTH)
                    value=[form.note.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_errors(errors_for(failure, "note")))
            }

            button type="submit" id="indicator" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="htmx-indicator" { (loading_spinner()) }
                "Save Transaction"
            }
        }
    }
}

fn errors_for<'a>(failure: Option<&'a ValidationFailure>, field: &str) -> &'a [String] {
    match failure {
        Some(failure) => failure.errors_for(field),
        None => &[],
    }
}

fn field_errors(messages: &[String]) -> Markup {
    html! {
        @for message in messages {
            p class=(FORM_ERROR_STYLE) { (message) }
        }
    }
}
