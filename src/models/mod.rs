mod category;
mod expense;
mod icon;
mod profile;

pub use category::{Category, CategoryDraft};
pub use expense::{Expense, ExpenseDraft, DATE_FORMAT};
pub use icon::Icon;
pub use profile::Profile;

#[cfg(test)]
mod tests;
