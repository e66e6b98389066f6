use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use crate::models::{
    Category, CategoryDraft, Expense, ExpenseDraft, Icon, Profile, DATE_FORMAT,
};

/// Largest amount or budget accepted from input.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Rejected user input. The operation that produced it changed nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ValidationError {
    MissingCategory,
    MissingAmount,
    InvalidAmount(String),
    NegativeAmount(String),
    InvalidDate(String),
    MissingCategoryName,
    InvalidBudget(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCategory | Self::MissingAmount => write!(
                f,
                "Missing information: please select a category and enter an amount"
            ),
            Self::InvalidAmount(raw) => write!(f, "Invalid amount: {raw}"),
            Self::NegativeAmount(raw) => write!(f, "Amount cannot be negative: {raw}"),
            Self::InvalidDate(raw) => write!(f, "Invalid date '{raw}', expected YYYY-MM-DD"),
            Self::MissingCategoryName => write!(f, "Missing name: please enter a category name"),
            Self::InvalidBudget(raw) => write!(f, "Invalid budget: {raw}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate `draft` and prepend the resulting expense to `expenses`.
///
/// The icon comes from the category of the same name in `categories`,
/// defaulting to `MoreHorizontal`.
pub(crate) fn add_expense<Tz: TimeZone>(
    expenses: &[Expense],
    draft: &ExpenseDraft,
    categories: &[Category],
    now: &DateTime<Tz>,
) -> Result<(Vec<Expense>, Expense), ValidationError> {
    let category = draft.category.trim();
    if category.is_empty() {
        return Err(ValidationError::MissingCategory);
    }
    let amount = parse_amount(&draft.amount)?;

    let date = match draft.date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(raw.to_string()))?,
        _ => now.date_naive(),
    };

    let icon = Category::find_by_name(categories, category)
        .map(|c| c.icon)
        .unwrap_or_default();

    let expense = Expense {
        id: Uuid::new_v4().to_string(),
        category: category.to_string(),
        amount,
        description: draft.description.trim().to_string(),
        date: date.format(DATE_FORMAT).to_string(),
        timestamp: now.with_timezone(&Utc),
        icon,
    };

    let mut updated = Vec::with_capacity(expenses.len() + 1);
    updated.push(expense.clone());
    updated.extend(expenses.iter().cloned());
    Ok((updated, expense))
}

/// Drop the expense with `id`. Unknown ids leave the list as it was.
pub(crate) fn delete_expense(expenses: &[Expense], id: &str) -> Vec<Expense> {
    expenses.iter().filter(|e| e.id != id).cloned().collect()
}

pub(crate) fn add_custom_category(
    profile: &Profile,
    draft: &CategoryDraft,
) -> Result<(Profile, Category), ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingCategoryName);
    }
    let icon = draft.icon.as_deref().map(Icon::parse).unwrap_or_default();
    let category = Category::custom(format!("custom-{}", Uuid::new_v4()), name.to_string(), icon);

    let mut updated = profile.clone();
    updated.custom_categories.push(category.clone());
    Ok((updated, category))
}

pub(crate) fn set_budget(profile: &Profile, raw: &str) -> Result<Profile, ValidationError> {
    let trimmed = raw.trim();
    let amount = Decimal::from_str(trimmed)
        .map_err(|_| ValidationError::InvalidBudget(raw.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::InvalidBudget(raw.to_string()));
    }
    // Paisa precision keeps the percentage division in range.
    if amount > MAX_AMOUNT || amount.normalize().scale() > 2 {
        return Err(ValidationError::InvalidBudget(raw.to_string()));
    }
    Ok(Profile {
        monthly_budget: amount,
        ..profile.clone()
    })
}

pub(crate) fn toggle_dark_mode(profile: &Profile) -> Profile {
    Profile {
        dark_mode: !profile.dark_mode,
        ..profile.clone()
    }
}

fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    let amount = Decimal::from_str(trimmed)
        .map_err(|_| ValidationError::InvalidAmount(raw.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::NegativeAmount(raw.to_string()));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::InvalidAmount(raw.to_string()));
    }
    Ok(amount)
}
