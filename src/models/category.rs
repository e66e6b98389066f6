use serde::{Deserialize, Serialize};

use super::Icon;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Icon,
    /// Hex color, e.g. `#22c55e`. Only built-in categories carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Category {
    /// A user-defined category. These never get a palette color.
    pub fn custom(id: String, name: String, icon: Icon) -> Self {
        Self {
            id,
            name,
            icon,
            color: None,
        }
    }

    fn builtin(id: &str, name: &str, icon: Icon, color: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon,
            color: Some(color.into()),
        }
    }

    /// The fixed set of categories every profile starts with.
    pub fn builtins() -> Vec<Category> {
        vec![
            Self::builtin("food", "Food", Icon::Utensils, "#22c55e"),
            Self::builtin("groceries", "Groceries", Icon::ShoppingCart, "#3b82f6"),
            Self::builtin("stationery", "Stationery", Icon::BookOpen, "#a855f7"),
            Self::builtin("transport", "Transport", Icon::Bus, "#f59e0b"),
            Self::builtin("education", "Education", Icon::GraduationCap, "#ec4899"),
            Self::builtin("internet", "Internet", Icon::Wifi, "#06b6d4"),
            Self::builtin("health", "Health", Icon::Heart, "#ef4444"),
            Self::builtin("other", "Other", Icon::MoreHorizontal, "#6b7280"),
        ]
    }

    /// Find a category by exact name in a slice.
    pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        categories.iter().find(|c| c.name == name)
    }

    /// Find a category by name ignoring case, for typed input.
    pub fn find_by_name_loose<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        let lower = name.to_lowercase();
        categories.iter().find(|c| c.name.to_lowercase() == lower)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// User input for a new custom category.
#[derive(Debug, Clone, Default)]
pub struct CategoryDraft {
    pub name: String,
    pub icon: Option<String>,
}
