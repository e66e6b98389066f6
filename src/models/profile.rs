use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, Icon};

/// The single budget profile: monthly ceiling, custom categories and theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_budget: Decimal,
    #[serde(default)]
    pub custom_categories: Vec<Category>,
    #[serde(default)]
    pub dark_mode: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            monthly_budget: Decimal::new(15000, 0),
            custom_categories: vec![
                Category::custom("custom1".into(), "Entertainment".into(), Icon::Tv),
                Category::custom("custom2".into(), "Clothing".into(), Icon::Shirt),
            ],
            dark_mode: false,
        }
    }
}

impl Profile {
    /// Built-in categories followed by this profile's custom ones.
    pub fn all_categories(&self) -> Vec<Category> {
        let mut all = Category::builtins();
        all.extend(self.custom_categories.iter().cloned());
        all
    }
}
