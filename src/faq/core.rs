//! The frequently asked questions and how they are searched.

use serde::Serialize;

use crate::transaction::validation::FieldErrors;

/// The section of the help center a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FaqCategory {
    #[serde(rename = "Getting Started")]
    GettingStarted,
    Account,
    Billing,
}

impl FaqCategory {
    /// The display name, also used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            FaqCategory::GettingStarted => "Getting Started",
            FaqCategory::Account => "Account",
            FaqCategory::Billing => "Billing",
        }
    }
}

/// A question and its answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Faq {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: FaqCategory,
}

/// Which category of questions to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FaqCategoryFilter {
    #[default]
    All,
    Only(FaqCategory),
}

impl FaqCategoryFilter {
    /// Every filter in the order they are offered on the page.
    pub const OPTIONS: [FaqCategoryFilter; 4] = [
        FaqCategoryFilter::All,
        FaqCategoryFilter::Only(FaqCategory::GettingStarted),
        FaqCategoryFilter::Only(FaqCategory::Account),
        FaqCategoryFilter::Only(FaqCategory::Billing),
    ];

    /// Parse the `category` query parameter.
    ///
    /// A missing or empty value and "All" select every category. Category
    /// names must match exactly.
    ///
    /// # Errors
    /// Returns a message keyed by "category" for any other value.
    pub fn parse(value: Option<&str>) -> Result<Self, FieldErrors> {
        let value = value.map(str::trim).unwrap_or_default();

        if value.is_empty() {
            return Ok(FaqCategoryFilter::All);
        }

        Self::OPTIONS
            .into_iter()
            .find(|filter| filter.as_str() == value)
            .ok_or_else(|| {
                FieldErrors::from([(
                    "category".to_owned(),
                    vec![
                        "Category must be one of: All, Getting Started, Account, Billing"
                            .to_owned(),
                    ],
                )])
            })
    }

    /// The label shown on the filter tab, also used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            FaqCategoryFilter::All => "All",
            FaqCategoryFilter::Only(category) => category.as_str(),
        }
    }
}

/// Every question in the help center.
pub const FAQS: [Faq; 8] = [
    Faq {
        id: "faq-1",
        category: FaqCategory::GettingStarted,
        question: "How do I add my first transaction?",
        answer: "Open the dashboard and fill in the Add Transaction form. Enter the \
            amount, type, category, and date, then save to include it in your totals.",
    },
    Faq {
        id: "faq-2",
        category: FaqCategory::GettingStarted,
        question: "Can I track both income and expenses?",
        answer: "Yes. Choose income or expense when creating a transaction. The \
            dashboard automatically updates balance, charts, and recent activity.",
    },
    Faq {
        id: "faq-3",
        category: FaqCategory::GettingStarted,
        question: "What categories should I use first?",
        answer: "Start with broad categories like food, housing, transportation, and \
            salary. You can adjust your approach later as your reporting needs evolve.",
    },
    Faq {
        id: "faq-4",
        category: FaqCategory::Account,
        question: "How do I update my account details?",
        answer: "Go to account settings from the dashboard navigation. From there, you \
            can edit profile details and save your changes.",
    },
    Faq {
        id: "faq-5",
        category: FaqCategory::Account,
        question: "I forgot my password. What should I do?",
        answer: "Use the password reset option on the sign-in screen. Follow the reset \
            link sent to your email to create a new password.",
    },
    Faq {
        id: "faq-6",
        category: FaqCategory::Account,
        question: "How can I secure my account?",
        answer: "Use a unique password, keep recovery details current, and enable extra \
            verification methods if they are available in your settings.",
    },
    Faq {
        id: "faq-7",
        category: FaqCategory::Billing,
        question: "Where can I view billing invoices?",
        answer: "Open the billing section in your dashboard to review invoices, payment \
            history, and current plan details.",
    },
    Faq {
        id: "faq-8",
        category: FaqCategory::Billing,
        question: "What payment methods are supported?",
        answer: "Most major debit and credit cards are supported. Availability can vary \
            by region and account configuration.",
    },
];

/// The questions in `category` that contain `search`.
///
/// The search ignores case and surrounding whitespace, and matches against
/// the question, the answer and the category name. An empty search matches
/// every question.
pub fn filter_faqs(faqs: &[Faq], category: FaqCategoryFilter, search: &str) -> Vec<Faq> {
    let needle = search.trim().to_lowercase();

    faqs.iter()
        .filter(|faq| match category {
            FaqCategoryFilter::All => true,
            FaqCategoryFilter::Only(category) => faq.category == category,
        })
        .filter(|faq| {
            needle.is_empty()
                || format!("{} {} {}", faq.question, faq.answer, faq.category.as_str())
                    .to_lowercase()
                    .contains(&needle)
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{FAQS, FaqCategory, FaqCategoryFilter, filter_faqs};

    fn ids(category: FaqCategoryFilter, search: &str) -> Vec<&'static str> {
        filter_faqs(&FAQS, category, search)
            .into_iter()
            .map(|faq| faq.id)
            .collect()
    }

    #[test]
    fn all_with_empty_search_returns_everything() {
        assert_eq!(ids(FaqCategoryFilter::All, "").len(), 8);
        assert_eq!(ids(FaqCategoryFilter::All, "   ").len(), 8);
    }

    #[test]
    fn filters_by_category() {
        assert_eq!(
            ids(FaqCategoryFilter::Only(FaqCategory::Billing), ""),
            ["faq-7", "faq-8"]
        );
    }

    #[test]
    fn search_ignores_case() {
        assert_eq!(ids(FaqCategoryFilter::All, "PASSWORD"), ["faq-5", "faq-6"]);
    }

    #[test]
    fn search_matches_category_name() {
        assert_eq!(ids(FaqCategoryFilter::All, "getting started").len(), 3);
    }

    #[test]
    fn search_and_category_combine() {
        assert_eq!(
            ids(FaqCategoryFilter::Only(FaqCategory::GettingStarted), "password"),
            Vec::<&str>::new()
        );
    }

    #[test]
    fn parses_category_names_exactly() {
        assert_eq!(FaqCategoryFilter::parse(None), Ok(FaqCategoryFilter::All));
        assert_eq!(FaqCategoryFilter::parse(Some("All")), Ok(FaqCategoryFilter::All));
        assert_eq!(
            FaqCategoryFilter::parse(Some("Getting Started")),
            Ok(FaqCategoryFilter::Only(FaqCategory::GettingStarted))
        );
        assert!(FaqCategoryFilter::parse(Some("billing")).is_err());
    }
}
