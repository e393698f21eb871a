//! The transactions the store starts with.

use std::{fs, path::Path};

use serde_json::Value;

use crate::{
    Error,
    config::SeedSource,
    transaction::{Category, Transaction, TransactionInput, TransactionStore, TransactionType},
};

/// Build the store for `source`.
///
/// # Errors
/// Returns an error if the seed file cannot be read, is not a JSON array, or
/// repeats a transaction ID.
pub fn seed_store(source: &SeedSource) -> Result<TransactionStore, Error> {
    let transactions = match source {
        SeedSource::Example => example_transactions(),
        SeedSource::File(path) => load_seed_file(path)?,
        SeedSource::Empty => Vec::new(),
    };

    tracing::info!("starting with {} transactions", transactions.len());

    TransactionStore::with_transactions(transactions)
}

/// A salary payment, a grocery shop and a power bill from February 2026.
pub fn example_transactions() -> Vec<Transaction> {
    let transaction = |id: &str,
                       description: &str,
                       amount: f64,
                       transaction_type: TransactionType,
                       category: Category,
                       date: &str,
                       note: &str| {
        Transaction::new(
            id.to_owned(),
            TransactionInput {
                description: description.to_owned(),
                amount,
                transaction_type,
                category,
                date: date.to_owned(),
                note: Some(note.to_owned()),
            },
        )
    };

    vec![
        transaction(
            "seed-1",
            "Monthly Salary",
            4800.0,
            TransactionType::Income,
            Category::Salary,
            "2026-02-01",
            "Primary job",
        ),
        transaction(
            "seed-2",
            "Groceries",
            128.44,
            TransactionType::Expense,
            Category::Food,
            "2026-02-03",
            "Weekly",
        ),
        transaction(
            "seed-3",
            "Electric Bill",
            92.11,
            TransactionType::Expense,
            Category::Utilities,
            "2026-02-05",
            "",
        ),
    ]
}

/// Read the transactions from a JSON file holding an array of records.
///
/// Records that are not valid transactions are skipped with a warning.
///
/// # Errors
/// Returns [Error::SeedFile] if the file cannot be read or is not a JSON array.
pub fn load_seed_file(path: &Path) -> Result<Vec<Transaction>, Error> {
    let display_path = path.display().to_string();

    let text = fs::read_to_string(path)
        .map_err(|error| Error::SeedFile(display_path.clone(), error.to_string()))?;

    parse_seed_records(&text).map_err(|error| Error::SeedFile(display_path, error))
}

fn parse_seed_records(text: &str) -> Result<Vec<Transaction>, String> {
    let records: Vec<Value> = serde_json::from_str(text).map_err(|error| error.to_string())?;

    let transactions = records
        .iter()
        .filter_map(|record| {
            Transaction::from_record(record)
                .inspect_err(|error| tracing::warn!("skipping seed record: {error}"))
                .ok()
        })
        .collect();

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::{
        Error,
        config::SeedSource,
        seed::{example_transactions, load_seed_file, parse_seed_records, seed_store},
        transaction::{Category, TransactionType},
    };

    #[test]
    fn example_data_has_three_valid_transactions() {
        let transactions = example_transactions();

        let ids: Vec<_> = transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["seed-1", "seed-2", "seed-3"]);
        assert_eq!(transactions[0].transaction_type, TransactionType::Income);
        assert_eq!(transactions[1].category, Category::Food);
        assert_eq!(transactions[2].amount, 92.11);
    }

    #[test]
    fn seed_store_follows_source() {
        assert_eq!(seed_store(&SeedSource::Example).unwrap().len(), 3);
        assert!(seed_store(&SeedSource::Empty).unwrap().is_empty());
    }

    #[test]
    fn invalid_records_are_skipped() {
        let text = r#"[
            {"id": "a", "description": "Rent", "amount": 1500, "type": "expense",
             "category": "housing", "date": "2026-03-01"},
            {"id": "b", "description": "Bad", "amount": -1, "type": "expense",
             "category": "housing", "date": "2026-03-01"},
            {"description": "No ID", "amount": 1, "type": "income",
             "category": "other", "date": "2026-03-01"}
        ]"#;

        let transactions = parse_seed_records(text).unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, "a");
        assert_eq!(transactions[0].note, None);
    }

    #[test]
    fn non_array_seed_is_an_error() {
        assert!(parse_seed_records(r#"{"id": "a"}"#).is_err());
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let result = load_seed_file(Path::new("does/not/exist.json"));

        assert!(matches!(result, Err(Error::SeedFile(_, _))));
    }
}
