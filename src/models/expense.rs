use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Icon;

/// Format used for the display `date` on every expense.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    /// Display date, `YYYY-MM-DD`.
    pub date: String,
    /// When the expense was recorded. Range filters look at this, not `date`.
    #[serde(rename = "englishDate")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub icon: Icon,
}

impl Expense {
    /// The display date parsed back into a calendar date.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// `YYYY-MM` prefix of the display date.
    pub fn month(&self) -> &str {
        self.date.get(..7).unwrap_or(&self.date)
    }
}

/// Raw user input for a new expense, before validation.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub category: String,
    pub amount: String,
    pub description: String,
    /// `YYYY-MM-DD`; today when absent.
    pub date: Option<String>,
}

impl ExpenseDraft {
    pub fn new(category: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount: amount.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}
