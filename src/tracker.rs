//! The single owner of the expense list and the profile.
//!
//! Every mutation computes the new state with the pure functions in
//! [`crate::ledger`], saves it, and only then replaces the in-memory copy.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone};

use crate::db::{Store, EXPENSES_KEY, PROFILE_KEY};
use crate::ledger::{self, Summary};
use crate::models::{Category, CategoryDraft, Expense, ExpenseDraft, Profile};
use crate::seed;

pub(crate) struct Tracker {
    store: Store,
    expenses: Vec<Expense>,
    profile: Profile,
}

impl Tracker {
    /// Read both documents, falling back to the sample week and the default
    /// profile. Fallbacks are written back straight away.
    pub(crate) fn load<Tz: TimeZone>(store: Store, now: &DateTime<Tz>) -> Result<Self> {
        let expenses = match store.load_json::<Vec<Expense>>(EXPENSES_KEY)? {
            Some(expenses) => expenses,
            None => {
                tracing::info!("no saved expenses, seeding sample week");
                let seeded = seed::sample_expenses(now);
                store.save_json(EXPENSES_KEY, &seeded)?;
                seeded
            }
        };

        let profile = match store.load_json::<Profile>(PROFILE_KEY)? {
            Some(profile) => profile,
            None => {
                tracing::info!("no saved profile, using defaults");
                let profile = Profile::default();
                store.save_json(PROFILE_KEY, &profile)?;
                profile
            }
        };

        tracing::debug!(expenses = expenses.len(), "tracker loaded");
        Ok(Self {
            store,
            expenses,
            profile,
        })
    }

    pub(crate) fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub(crate) fn profile(&self) -> &Profile {
        &self.profile
    }

    pub(crate) fn categories(&self) -> Vec<Category> {
        self.profile.all_categories()
    }

    pub(crate) fn summary(&self, today: NaiveDate) -> Summary {
        Summary::compute(&self.expenses, &self.profile, today)
    }

    pub(crate) fn find_expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub(crate) fn add_expense<Tz: TimeZone>(
        &mut self,
        draft: &ExpenseDraft,
        now: &DateTime<Tz>,
    ) -> Result<Expense> {
        let (updated, expense) =
            ledger::add_expense(&self.expenses, draft, &self.categories(), now)?;
        self.commit_expenses(updated)?;
        tracing::info!(id = %expense.id, category = %expense.category, amount = %expense.amount, "added expense");
        Ok(expense)
    }

    /// Returns whether anything was removed.
    pub(crate) fn delete_expense(&mut self, id: &str) -> Result<bool> {
        let updated = ledger::delete_expense(&self.expenses, id);
        if updated.len() == self.expenses.len() {
            return Ok(false);
        }
        self.commit_expenses(updated)?;
        tracing::info!(id, "deleted expense");
        Ok(true)
    }

    pub(crate) fn add_custom_category(&mut self, draft: &CategoryDraft) -> Result<Category> {
        let (updated, category) = ledger::add_custom_category(&self.profile, draft)?;
        self.commit_profile(updated)?;
        tracing::info!(name = %category.name, icon = %category.icon, "added category");
        Ok(category)
    }

    pub(crate) fn set_budget(&mut self, raw: &str) -> Result<()> {
        let updated = ledger::set_budget(&self.profile, raw)?;
        self.commit_profile(updated)
    }

    /// Returns the new dark-mode setting.
    pub(crate) fn toggle_dark_mode(&mut self) -> Result<bool> {
        let updated = ledger::toggle_dark_mode(&self.profile);
        self.commit_profile(updated)?;
        Ok(self.profile.dark_mode)
    }

    fn commit_expenses(&mut self, updated: Vec<Expense>) -> Result<()> {
        self.store.save_json(EXPENSES_KEY, &updated)?;
        self.expenses = updated;
        Ok(())
    }

    fn commit_profile(&mut self, updated: Profile) -> Result<()> {
        self.store.save_json(PROFILE_KEY, &updated)?;
        self.profile = updated;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
