//! Aggregates over the expense list.
//!
//! Everything here is a pure function of its inputs. "Today" is always passed
//! in, never read from the clock.

mod ops;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

use crate::models::{Expense, Profile, DATE_FORMAT};

pub(crate) use ops::{
    add_custom_category, add_expense, delete_expense, set_budget, toggle_dark_mode,
    ValidationError,
};

/// Spending above this in one day raises the daily alert.
pub(crate) const DAILY_LIMIT: Decimal = Decimal::ONE_THOUSAND;

/// Sum of every expense dated `today`.
pub(crate) fn today_total(expenses: &[Expense], today: NaiveDate) -> Decimal {
    let key = today.format(DATE_FORMAT).to_string();
    sum_amounts(expenses.iter().filter(|e| e.date == key))
}

/// Sum over the whole list, whatever the dates.
pub(crate) fn period_total(expenses: &[Expense]) -> Decimal {
    sum_amounts(expenses)
}

/// Saturating sum. Stored documents are not bounded by input validation.
pub(crate) fn sum_amounts<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Decimal {
    expenses
        .into_iter()
        .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount))
}

/// Expenses whose display date falls in the same calendar month as `today`.
pub(crate) fn in_month(expenses: &[Expense], today: NaiveDate) -> Vec<Expense> {
    let month = today.format("%Y-%m").to_string();
    expenses
        .iter()
        .filter(|e| e.month() == month)
        .cloned()
        .collect()
}

/// Sum over the calendar month containing `today`.
pub(crate) fn month_total(expenses: &[Expense], today: NaiveDate) -> Decimal {
    period_total(&in_month(expenses, today))
}

/// Budget left after `total`. Goes negative on overspend.
pub(crate) fn remaining_budget(budget: Decimal, total: Decimal) -> Decimal {
    budget.saturating_sub(total)
}

/// Share of the budget still available, in percent, one decimal place.
///
/// A zero budget has nothing remaining, so this returns 0 rather than dividing.
pub(crate) fn percent_remaining(remaining: Decimal, budget: Decimal) -> Decimal {
    share_percent(remaining, budget)
}

/// `part` as a percentage of `whole`, one decimal place. Zero when `whole` is
/// zero; saturates instead of overflowing.
pub(crate) fn share_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    let percent = part
        .checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));
    match percent {
        Some(percent) => round_one(percent),
        None if part.is_sign_negative() != whole.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

pub(crate) fn round_one(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Partition by display date. Within a group the list order is kept.
pub(crate) fn group_by_date(expenses: &[Expense]) -> BTreeMap<&str, Vec<&Expense>> {
    let mut groups: BTreeMap<&str, Vec<&Expense>> = BTreeMap::new();
    for expense in expenses {
        groups.entry(expense.date.as_str()).or_default().push(expense);
    }
    groups
}

/// Per-category sums, in the order each category first appears.
pub(crate) fn totals_by_category(expenses: &[Expense]) -> Vec<(String, Decimal)> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|(name, _)| *name == expense.category) {
            Some((_, total)) => *total = total.saturating_add(expense.amount),
            None => totals.push((expense.category.clone(), expense.amount)),
        }
    }
    totals
}

pub(crate) fn is_overspending(today_total: Decimal) -> bool {
    today_total > DAILY_LIMIT
}

/// How healthy the remaining budget looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetLevel {
    Healthy,
    Caution,
    Critical,
}

impl BudgetLevel {
    pub(crate) fn from_percentage(percentage: Decimal) -> Self {
        if percentage > Decimal::from(50) {
            Self::Healthy
        } else if percentage > Decimal::from(20) {
            Self::Caution
        } else {
            Self::Critical
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Caution => "Caution",
            Self::Critical => "Critical",
        }
    }
}

/// Everything the dashboard and tips need, computed together.
#[derive(Debug, Clone)]
pub(crate) struct Summary {
    pub(crate) budget: Decimal,
    pub(crate) today_total: Decimal,
    pub(crate) month_total: Decimal,
    pub(crate) remaining: Decimal,
    pub(crate) percentage: Decimal,
    pub(crate) level: BudgetLevel,
    pub(crate) overspending: bool,
    pub(crate) category_totals: Vec<(String, Decimal)>,
}

impl Summary {
    pub(crate) fn compute(expenses: &[Expense], profile: &Profile, today: NaiveDate) -> Self {
        let today_total = today_total(expenses, today);
        let month_total = month_total(expenses, today);
        let remaining = remaining_budget(profile.monthly_budget, month_total);
        let percentage = percent_remaining(remaining, profile.monthly_budget);

        Self {
            budget: profile.monthly_budget,
            today_total,
            month_total,
            remaining,
            percentage,
            level: BudgetLevel::from_percentage(percentage),
            overspending: is_overspending(today_total),
            category_totals: totals_by_category(&in_month(expenses, today)),
        }
    }
}

#[cfg(test)]
mod tests;
