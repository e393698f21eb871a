//! Validation and normalization of untrusted transaction input.
//!
//! Input arrives as an untyped record, either a JSON body or the fields of an
//! HTML form. [validate_transaction] checks every field independently and
//! either produces a normalized [TransactionInput] or a [ValidationFailure]
//! listing the messages for every field that failed.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::Value;
use time::{
    Date, Time, UtcOffset, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::transaction::core::{Category, TransactionInput, TransactionType};

/// The maximum length of a description in UTF-16 code units.
pub const DESCRIPTION_MAX_LENGTH: usize = 120;
/// The maximum length of a note in UTF-16 code units.
pub const NOTE_MAX_LENGTH: usize = 240;
/// The largest accepted amount, which keeps dashboard totals finite.
pub const AMOUNT_MAX: f64 = 1_000_000_000.0;
/// The top level message of every [ValidationFailure].
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// Maps a field name to the messages describing why it is invalid.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A single untyped value from a JSON document or form.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number, which may be NaN or infinite when it did not come from JSON.
    Number(f64),
    /// A string.
    Text(String),
    /// An array or object.
    Compound,
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawValue::Null,
            Value::Bool(value) => RawValue::Bool(value),
            Value::Number(number) => number.as_f64().map_or(RawValue::Null, RawValue::Number),
            Value::String(text) => RawValue::Text(text),
            Value::Array(_) | Value::Object(_) => RawValue::Compound,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_owned())
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

/// An untyped record of input fields, possibly with missing or extra keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInput {
    fields: HashMap<String, RawValue>,
}

impl RawInput {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a JSON value.
    ///
    /// Anything other than a JSON object produces an empty record, which
    /// then fails validation on every required field.
    pub fn from_json(value: Value) -> Self {
        let fields = match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(key, value)| (key, RawValue::from(value)))
                .collect(),
            _ => HashMap::new(),
        };

        Self { fields }
    }

    /// Set the field `key` to `value`, returning the updated record.
    pub fn with(mut self, key: &str, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set the field `key` to `value`.
    pub fn insert(&mut self, key: &str, value: impl Into<RawValue>) {
        self.fields.insert(key.to_owned(), value.into());
    }

    /// Get the value of the field `key`, `None` if the field is absent.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.fields.get(key)
    }
}

/// The reasons why an input record could not be turned into a transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    /// Always [VALIDATION_FAILED_MESSAGE].
    pub message: &'static str,
    /// The messages for every field that failed, fields that passed are absent.
    pub field_errors: FieldErrors,
}

impl ValidationFailure {
    /// The messages for `field`, empty if the field passed.
    pub fn errors_for(&self, field: &str) -> &[String] {
        self.field_errors
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// A one line description of every failed field, for logging.
    pub fn summary(&self) -> String {
        self.field_errors
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

type FieldResult<T> = Result<T, Vec<String>>;

/// Validate and normalize an untyped transaction record.
///
/// All fields are checked, so a single call reports every invalid field.
/// Strings are trimmed, the date is kept as entered, and keys other than
/// `description`, `amount`, `type`, `category`, `date` and `note` are dropped.
///
/// # Errors
/// Returns a [ValidationFailure] with the messages for each invalid field.
pub fn validate_transaction(raw: &RawInput) -> Result<TransactionInput, ValidationFailure> {
    let description = validate_description(raw.get("description"));
    let amount = validate_amount(raw.get("amount"));
    let transaction_type = validate_type(raw.get("type"));
    let category = validate_category(raw.get("category"));
    let date = validate_date(raw.get("date"));
    let note = validate_note(raw.get("note"));

    let mut field_errors = FieldErrors::new();
    let mut collect = |field: &str, messages: Option<Vec<String>>| {
        if let Some(messages) = messages {
            field_errors.insert(field.to_owned(), messages);
        }
    };

    collect("description", description.as_ref().err().cloned());
    collect("amount", amount.as_ref().err().cloned());
    collect("type", transaction_type.as_ref().err().cloned());
    collect("category", category.as_ref().err().cloned());
    collect("date", date.as_ref().err().cloned());
    collect("note", note.as_ref().err().cloned());

    match (description, amount, transaction_type, category, date, note) {
        (Ok(description), Ok(amount), Ok(transaction_type), Ok(category), Ok(date), Ok(note)) => {
            Ok(TransactionInput {
                description,
                amount,
                transaction_type,
                category,
                date,
                note,
            })
        }
        _ => Err(ValidationFailure {
            message: VALIDATION_FAILED_MESSAGE,
            field_errors,
        }),
    }
}

fn fail<T>(message: &str) -> FieldResult<T> {
    Err(vec![message.to_owned()])
}

fn validate_description(value: Option<&RawValue>) -> FieldResult<String> {
    let text = match value {
        None => return fail("Description is required"),
        Some(RawValue::Text(text)) => text.trim(),
        Some(_) => return fail("Description must be a string"),
    };

    if text.is_empty() {
        return fail("Description is required");
    }

    if text_length(text) > DESCRIPTION_MAX_LENGTH {
        return fail("Description must be 120 characters or fewer");
    }

    Ok(text.to_owned())
}

fn validate_amount(value: Option<&RawValue>) -> FieldResult<f64> {
    let amount = match value {
        None => return fail("Amount is required"),
        Some(RawValue::Number(amount)) => *amount,
        Some(_) => return fail("Amount must be a number"),
    };

    if !amount.is_finite() {
        return fail("Amount must be a finite number");
    }

    if amount <= 0.0 {
        return fail("Amount must be greater than 0");
    }

    if amount > AMOUNT_MAX {
        return fail("Amount must be 1,000,000,000 or less");
    }

    Ok(amount)
}

fn validate_type(value: Option<&RawValue>) -> FieldResult<TransactionType> {
    match value {
        None => fail("Type is required"),
        Some(RawValue::Text(name)) => {
            TransactionType::from_name(name).ok_or_else(|| vec![type_enum_message()])
        }
        Some(_) => Err(vec![type_enum_message()]),
    }
}

fn type_enum_message() -> String {
    let names = TransactionType::ALL.map(|kind| kind.as_str()).join(", ");
    format!("Type must be one of: {names}")
}

fn validate_category(value: Option<&RawValue>) -> FieldResult<Category> {
    match value {
        None => fail("Category is required"),
        Some(RawValue::Text(name)) => {
            Category::from_name(name).ok_or_else(|| vec![category_enum_message()])
        }
        Some(_) => Err(vec![category_enum_message()]),
    }
}

fn category_enum_message() -> String {
    let names = Category::ALL.map(|category| category.as_str()).join(", ");
    format!("Category must be one of: {names}")
}

fn validate_date(value: Option<&RawValue>) -> FieldResult<String> {
    let text = match value {
        None => return fail("Date is required"),
        Some(RawValue::Text(text)) => text.trim(),
        Some(_) => return fail("Date must be a string"),
    };

    if text.is_empty() {
        return fail("Date is required");
    }

    if !is_parseable_date(text) {
        return fail("Date must be a valid date");
    }

    Ok(text.to_owned())
}

/// Whether `text` is a date in the ECMAScript date time string format.
///
/// The date is `YYYY`, `YYYY-MM` or `YYYY-MM-DD`. It may be followed by `T`
/// or a space and a time of `HH:mm`, `HH:mm:ss` or `HH:mm:ss.sss`, which may
/// end in `Z` or a `+HH:mm`/`-HH:mm` offset.
pub fn is_parseable_date(text: &str) -> bool {
    parse_calendar_date(text).is_some()
}

/// Parse the calendar date from a date accepted by [is_parseable_date],
/// ignoring the time of day. A missing month or day is the first one.
pub fn parse_calendar_date(text: &str) -> Option<Date> {
    let (date, time_of_day) = match text.split_once(['T', ' ']) {
        Some((date, time_of_day)) => (date, Some(time_of_day)),
        None => (text, None),
    };

    if let Some(time_of_day) = time_of_day {
        parse_time_of_day(time_of_day)?;
    }

    parse_date_part(date)
}

fn parse_date_part(text: &str) -> Option<Date> {
    let parts: Vec<&str> = text.split('-').collect();

    if !parts
        .iter()
        .all(|part| part.bytes().all(|byte| byte.is_ascii_digit()))
    {
        return None;
    }

    let widths: Vec<usize> = parts.iter().map(|part| part.len()).collect();
    let full_date = match widths.as_slice() {
        [4] => format!("{text}-01-01"),
        [4, 2] => format!("{text}-01"),
        [4, 2, 2] => text.to_owned(),
        _ => return None,
    };

    Date::parse(&full_date, format_description!("[year]-[month]-[day]")).ok()
}

const TIME_OF_DAY_FORMATS: [&[BorrowedFormatItem<'static>]; 3] = [
    format_description!("[hour]:[minute]"),
    format_description!("[hour]:[minute]:[second]"),
    format_description!("[hour]:[minute]:[second].[subsecond]"),
];

fn parse_time_of_day(text: &str) -> Option<Time> {
    let clock = match text.strip_suffix('Z') {
        Some(clock) => clock,
        None => match split_offset(text) {
            Some((clock, offset)) => {
                UtcOffset::parse(
                    offset,
                    format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
                )
                .ok()?;
                clock
            }
            None => text,
        },
    };

    TIME_OF_DAY_FORMATS
        .iter()
        .find_map(|format| Time::parse(clock, *format).ok())
}

/// Split a trailing `+HH:mm` or `-HH:mm` offset from the clock time.
fn split_offset(text: &str) -> Option<(&str, &str)> {
    let start = text.len().checked_sub(6)?;

    if !text.is_char_boundary(start) {
        return None;
    }

    let (clock, offset) = text.split_at(start);
    offset.starts_with(['+', '-']).then_some((clock, offset))
}

/// The length of `text` in UTF-16 code units, as counted by `maxlength` in the browser.
fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

fn validate_note(value: Option<&RawValue>) -> FieldResult<Option<String>> {
    let text = match value {
        None => return Ok(None),
        Some(RawValue::Text(text)) => text.trim(),
        Some(_) => return fail("Note must be a string"),
    };

    if text_length(text) > NOTE_MAX_LENGTH {
        return fail("Note must be 240 characters or fewer");
    }

    Ok(Some(text.to_owned()))
}
