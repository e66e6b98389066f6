#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use super::*;

fn make_expense() -> Expense {
    Expense {
        id: "exp-1".into(),
        category: "Food".into(),
        amount: dec!(450),
        description: "Lunch at college canteen".into(),
        date: "2024-01-15".into(),
        timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 6, 30, 0).unwrap(),
        icon: Icon::Utensils,
    }
}

// ── Icon ──────────────────────────────────────────────────────

#[test]
fn test_icon_parse_known() {
    assert_eq!(Icon::parse("Utensils"), Icon::Utensils);
    assert_eq!(Icon::parse("graduationcap"), Icon::GraduationCap);
    assert_eq!(Icon::parse(" Tv "), Icon::Tv);
}

#[test]
fn test_icon_parse_unknown_falls_back() {
    assert_eq!(Icon::parse("Rocket"), Icon::MoreHorizontal);
    assert_eq!(Icon::parse(""), Icon::MoreHorizontal);
    assert!(Icon::find("Rocket").is_none());
}

#[test]
fn test_icon_roundtrip_names() {
    for icon in Icon::picker() {
        assert_eq!(Icon::parse(icon.as_str()), *icon, "Roundtrip failed for {icon}");
    }
    assert_eq!(Icon::parse("MoreHorizontal"), Icon::MoreHorizontal);
}

#[test]
fn test_icon_picker_size() {
    assert_eq!(Icon::picker().len(), 36);
    assert!(!Icon::picker().contains(&Icon::MoreHorizontal));
}

#[test]
fn test_icon_search() {
    let found = Icon::search("ph");
    assert!(found.contains(&Icon::Smartphone));
    assert!(found.contains(&Icon::Phone));
    assert!(found.contains(&Icon::Headphones));
    assert!(!found.contains(&Icon::Bus));

    assert_eq!(Icon::search("").len(), Icon::picker().len());
    assert!(Icon::search("zzz").is_empty());
}

#[test]
fn test_icon_serializes_as_name() {
    let json = serde_json::to_string(&Icon::ShoppingCart).unwrap();
    assert_eq!(json, "\"ShoppingCart\"");
    let back: Icon = serde_json::from_str("\"Rocket\"").unwrap();
    assert_eq!(back, Icon::MoreHorizontal);
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_builtins_fixed_order_and_colors() {
    let names: Vec<String> = Category::builtins().into_iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        [
            "Food",
            "Groceries",
            "Stationery",
            "Transport",
            "Education",
            "Internet",
            "Health",
            "Other"
        ]
    );
    assert!(Category::builtins().iter().all(|c| c.color.is_some()));
}

#[test]
fn test_custom_category_has_no_color() {
    let cat = Category::custom("custom-x".into(), "Pets".into(), Icon::Heart);
    assert!(cat.color.is_none());
    assert_eq!(format!("{cat}"), "Pets");
}

#[test]
fn test_find_by_name() {
    let cats = Category::builtins();
    assert_eq!(Category::find_by_name(&cats, "Bus"), None);
    assert_eq!(
        Category::find_by_name(&cats, "Transport").map(|c| c.icon),
        Some(Icon::Bus)
    );
    assert!(Category::find_by_name(&cats, "transport").is_none());
    assert!(Category::find_by_name_loose(&cats, "transport").is_some());
}

// ── Expense ───────────────────────────────────────────────────

#[test]
fn test_expense_json_shape() {
    let json = serde_json::to_value(make_expense()).unwrap();
    assert_eq!(json["amount"], serde_json::json!(450.0));
    assert_eq!(json["englishDate"], "2024-01-15T06:30:00Z");
    assert_eq!(json["icon"], "Utensils");
    assert_eq!(json["date"], "2024-01-15");
}

#[test]
fn test_expense_json_roundtrip() {
    let expense = make_expense();
    let text = serde_json::to_string(&expense).unwrap();
    let back: Expense = serde_json::from_str(&text).unwrap();
    assert_eq!(back, expense);
}

#[test]
fn test_expense_missing_optional_fields() {
    let text = r#"{"id":"a","category":"Food","amount":12.5,"date":"2024-02-01","englishDate":"2024-02-01T00:00:00Z"}"#;
    let expense: Expense = serde_json::from_str(text).unwrap();
    assert_eq!(expense.amount, dec!(12.5));
    assert!(expense.description.is_empty());
    assert_eq!(expense.icon, Icon::MoreHorizontal);
}

#[test]
fn test_expense_month_and_date() {
    let expense = make_expense();
    assert_eq!(expense.month(), "2024-01");
    assert_eq!(
        expense.naive_date(),
        chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
    );
}

// ── Profile ───────────────────────────────────────────────────

#[test]
fn test_profile_defaults() {
    let profile = Profile::default();
    assert_eq!(profile.monthly_budget, dec!(15000));
    assert!(!profile.dark_mode);
    let names: Vec<&str> = profile
        .custom_categories
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["Entertainment", "Clothing"]);
}

#[test]
fn test_profile_all_categories_builtins_first() {
    let all = Profile::default().all_categories();
    assert_eq!(all.len(), 10);
    assert_eq!(all[0].name, "Food");
    assert_eq!(all[8].name, "Entertainment");
    assert_eq!(all[9].icon, Icon::Shirt);
}
