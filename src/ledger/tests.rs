#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Category, CategoryDraft, ExpenseDraft, Icon, Profile};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_expense(id: &str, category: &str, amount: Decimal, date: &str) -> Expense {
    Expense {
        id: id.into(),
        category: category.into(),
        amount,
        description: String::new(),
        date: date.into(),
        timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        icon: Icon::MoreHorizontal,
    }
}

fn sample() -> Vec<Expense> {
    vec![
        make_expense("1", "Food", dec!(450), "2024-01-15"),
        make_expense("2", "Transport", dec!(120), "2024-01-15"),
        make_expense("3", "Food", dec!(350), "2024-01-14"),
        make_expense("4", "Internet", dec!(600), "2024-01-13"),
        make_expense("5", "Groceries", dec!(850), "2023-12-31"),
    ]
}

// ── Totals ────────────────────────────────────────────────────

#[test]
fn test_today_total() {
    assert_eq!(today_total(&sample(), day(2024, 1, 15)), dec!(570));
    assert_eq!(today_total(&sample(), day(2024, 1, 14)), dec!(350));
}

#[test]
fn test_today_total_empty() {
    assert_eq!(today_total(&[], day(2024, 1, 15)), Decimal::ZERO);
    assert_eq!(today_total(&sample(), day(2030, 1, 1)), Decimal::ZERO);
}

#[test]
fn test_period_total_sums_everything() {
    assert_eq!(period_total(&sample()), dec!(2370));
    assert_eq!(period_total(&[]), Decimal::ZERO);
}

#[test]
fn test_period_total_order_independent() {
    let forward = sample();
    let mut reversed = sample();
    reversed.reverse();
    let mut rotated = sample();
    rotated.rotate_left(2);
    assert_eq!(period_total(&forward), period_total(&reversed));
    assert_eq!(period_total(&forward), period_total(&rotated));
}

#[test]
fn test_month_total_ignores_other_months() {
    assert_eq!(month_total(&sample(), day(2024, 1, 20)), dec!(1520));
    assert_eq!(month_total(&sample(), day(2023, 12, 1)), dec!(850));
    assert_eq!(month_total(&sample(), day(2024, 2, 1)), Decimal::ZERO);
}

#[test]
fn test_remaining_budget() {
    assert_eq!(remaining_budget(dec!(15000), dec!(2370)), dec!(12630));
    assert_eq!(remaining_budget(dec!(1000), dec!(1000)), Decimal::ZERO);
}

#[test]
fn test_remaining_budget_goes_negative() {
    assert_eq!(remaining_budget(dec!(1000), dec!(1500.50)), dec!(-500.50));
}

// ── Percentage ────────────────────────────────────────────────

#[test]
fn test_percent_remaining_one_decimal() {
    assert_eq!(percent_remaining(dec!(12630), dec!(15000)), dec!(84.2));
    assert_eq!(percent_remaining(dec!(1), dec!(3)), dec!(33.3));
    assert_eq!(percent_remaining(dec!(2), dec!(3)), dec!(66.7));
}

#[test]
fn test_percent_remaining_negative() {
    assert_eq!(percent_remaining(dec!(-500), dec!(1000)), dec!(-50.0));
}

#[test]
fn test_percent_remaining_zero_budget() {
    assert_eq!(percent_remaining(dec!(-200), Decimal::ZERO), Decimal::ZERO);
    assert_eq!(percent_remaining(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn test_percent_remaining_saturates() {
    let tiny = Decimal::new(1, 28);
    assert_eq!(percent_remaining(dec!(5000), tiny), Decimal::MAX);
    assert_eq!(percent_remaining(dec!(-5000), tiny), Decimal::MIN);
}

#[test]
fn test_share_percent() {
    assert_eq!(share_percent(dec!(1), dec!(3)), dec!(33.3));
    assert_eq!(share_percent(dec!(5), Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn test_totals_saturate_on_huge_amounts() {
    let list = vec![
        make_expense("1", "Food", Decimal::MAX, "2024-01-15"),
        make_expense("2", "Food", Decimal::MAX, "2024-01-15"),
    ];
    assert_eq!(period_total(&list), Decimal::MAX);
    assert_eq!(today_total(&list, day(2024, 1, 15)), Decimal::MAX);
    assert_eq!(totals_by_category(&list), vec![("Food".to_string(), Decimal::MAX)]);
}

#[test]
fn test_summary_survives_stored_extremes() {
    let list = vec![
        make_expense("1", "Food", Decimal::MAX, "2024-01-15"),
        make_expense("2", "Food", Decimal::MAX, "2024-01-15"),
    ];
    let summary = Summary::compute(&list, &Profile::default(), day(2024, 1, 15));
    assert_eq!(summary.month_total, Decimal::MAX);
    assert_eq!(summary.level, BudgetLevel::Critical);
    assert!(summary.overspending);

    let profile = Profile {
        monthly_budget: Decimal::new(1, 28),
        ..Profile::default()
    };
    let spent = vec![make_expense("1", "Food", dec!(5000), "2024-01-15")];
    let summary = Summary::compute(&spent, &profile, day(2024, 1, 15));
    assert_eq!(summary.percentage, Decimal::MIN);
    assert_eq!(summary.level, BudgetLevel::Critical);
}

#[test]
fn test_budget_level_thresholds() {
    assert_eq!(BudgetLevel::from_percentage(dec!(84.2)), BudgetLevel::Healthy);
    assert_eq!(BudgetLevel::from_percentage(dec!(50)), BudgetLevel::Caution);
    assert_eq!(BudgetLevel::from_percentage(dec!(20.1)), BudgetLevel::Caution);
    assert_eq!(BudgetLevel::from_percentage(dec!(20)), BudgetLevel::Critical);
    assert_eq!(BudgetLevel::from_percentage(dec!(-5)), BudgetLevel::Critical);
}

#[test]
fn test_overspending_threshold() {
    assert!(!is_overspending(dec!(1000)));
    assert!(is_overspending(dec!(1000.01)));
}

// ── Grouping ──────────────────────────────────────────────────

#[test]
fn test_group_by_date_keeps_order_within_group() {
    let list = sample();
    let groups = group_by_date(&list);
    assert_eq!(groups.len(), 4);
    let ids: Vec<&str> = groups["2024-01-15"].iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[test]
fn test_group_by_date_newest_first_when_reversed() {
    let list = sample();
    let groups = group_by_date(&list);
    let dates: Vec<&str> = groups.keys().rev().copied().collect();
    assert_eq!(dates, ["2024-01-15", "2024-01-14", "2024-01-13", "2023-12-31"]);
}

#[test]
fn test_group_by_date_flatten_recovers_records() {
    let list = sample();
    let groups = group_by_date(&list);
    let mut flattened: Vec<&str> = groups
        .values()
        .flat_map(|g| g.iter().map(|e| e.id.as_str()))
        .collect();
    flattened.sort();
    assert_eq!(flattened, ["1", "2", "3", "4", "5"]);
}

#[test]
fn test_group_by_date_empty() {
    assert!(group_by_date(&[]).is_empty());
}

#[test]
fn test_totals_by_category_first_seen_order() {
    let totals = totals_by_category(&sample());
    assert_eq!(
        totals,
        vec![
            ("Food".to_string(), dec!(800)),
            ("Transport".to_string(), dec!(120)),
            ("Internet".to_string(), dec!(600)),
            ("Groceries".to_string(), dec!(850)),
        ]
    );
}

#[test]
fn test_totals_by_category_sum_matches_period_total() {
    let list = sample();
    let sum: Decimal = totals_by_category(&list).iter().map(|(_, t)| *t).sum();
    assert_eq!(sum, period_total(&list));
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summary_uses_current_month() {
    let profile = Profile {
        monthly_budget: dec!(2000),
        ..Profile::default()
    };
    let summary = Summary::compute(&sample(), &profile, day(2024, 1, 15));
    assert_eq!(summary.today_total, dec!(570));
    assert_eq!(summary.month_total, dec!(1520));
    assert_eq!(summary.remaining, dec!(480));
    assert_eq!(summary.percentage, dec!(24.0));
    assert_eq!(summary.level, BudgetLevel::Caution);
    assert!(!summary.overspending);
    assert!(summary.category_totals.iter().all(|(name, _)| name != "Groceries"));
}

// ── Mutations ─────────────────────────────────────────────────

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
}

#[test]
fn test_add_expense_to_empty_list() {
    let cats = Category::builtins();
    let (list, added) = add_expense(&[], &ExpenseDraft::new("Food", "450"), &cats, &now()).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].amount, dec!(450));
    assert_eq!(list[0].category, "Food");
    assert_eq!(list[0].icon, Icon::Utensils);
    assert_eq!(list[0].date, "2024-01-15");
    assert_eq!(list[0].timestamp, now());
    assert_eq!(added, list[0]);
    assert!(!added.id.is_empty());
}

#[test]
fn test_add_expense_prepends() {
    let existing = sample();
    let draft = ExpenseDraft::new("Transport", "80").with_description("Taxi");
    let (list, added) = add_expense(&existing, &draft, &Category::builtins(), &now()).unwrap();
    assert_eq!(list.len(), existing.len() + 1);
    assert_eq!(list[0].id, added.id);
    assert_eq!(list[0].description, "Taxi");
    assert_eq!(&list[1..], existing.as_slice());
}

#[test]
fn test_add_expense_unique_ids() {
    let cats = Category::builtins();
    let draft = ExpenseDraft::new("Food", "10");
    let (list, first) = add_expense(&[], &draft, &cats, &now()).unwrap();
    let (_, second) = add_expense(&list, &draft, &cats, &now()).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn test_add_expense_explicit_date() {
    let draft = ExpenseDraft::new("Food", "99.50").with_date("2024-01-10");
    let (_, added) = add_expense(&[], &draft, &Category::builtins(), &now()).unwrap();
    assert_eq!(added.date, "2024-01-10");
    assert_eq!(added.amount, dec!(99.50));
}

#[test]
fn test_add_expense_unknown_category_default_icon() {
    let draft = ExpenseDraft::new("Pets", "300");
    let (_, added) = add_expense(&[], &draft, &Category::builtins(), &now()).unwrap();
    assert_eq!(added.icon, Icon::MoreHorizontal);
    assert_eq!(added.category, "Pets");
}

#[test]
fn test_add_expense_missing_category() {
    let existing = sample();
    let err = add_expense(&existing, &ExpenseDraft::new("  ", "450"), &[], &now()).unwrap_err();
    assert_eq!(err, ValidationError::MissingCategory);
    assert!(err.to_string().contains("Missing information"));
}

#[test]
fn test_add_expense_missing_amount() {
    let err = add_expense(&[], &ExpenseDraft::new("Food", ""), &[], &now()).unwrap_err();
    assert_eq!(err, ValidationError::MissingAmount);
}

#[test]
fn test_add_expense_non_numeric_amount() {
    let err = add_expense(&[], &ExpenseDraft::new("Food", "abc"), &[], &now()).unwrap_err();
    assert_eq!(err, ValidationError::InvalidAmount("abc".into()));
}

#[test]
fn test_add_expense_negative_amount() {
    let err = add_expense(&[], &ExpenseDraft::new("Food", "-5"), &[], &now()).unwrap_err();
    assert_eq!(err, ValidationError::NegativeAmount("-5".into()));
}

#[test]
fn test_add_expense_zero_amount_allowed() {
    let (list, _) = add_expense(&[], &ExpenseDraft::new("Food", "0"), &[], &now()).unwrap();
    assert_eq!(list[0].amount, Decimal::ZERO);
}

#[test]
fn test_add_expense_rejects_amount_above_ceiling() {
    let huge = "79228162514264337593543950335";
    let err = add_expense(&[], &ExpenseDraft::new("Food", huge), &[], &now()).unwrap_err();
    assert_eq!(err, ValidationError::InvalidAmount(huge.into()));

    let (list, _) = add_expense(&[], &ExpenseDraft::new("Food", "1000000000000"), &[], &now()).unwrap();
    assert_eq!(list[0].amount, ops::MAX_AMOUNT);
    assert!(add_expense(&[], &ExpenseDraft::new("Food", "1000000000000.01"), &[], &now()).is_err());
}

#[test]
fn test_add_expense_bad_date() {
    let draft = ExpenseDraft::new("Food", "10").with_date("15/01/2024");
    let err = add_expense(&[], &draft, &[], &now()).unwrap_err();
    assert_eq!(err, ValidationError::InvalidDate("15/01/2024".into()));
}

#[test]
fn test_delete_expense() {
    let list = delete_expense(&sample(), "3");
    assert_eq!(list.len(), 4);
    assert!(list.iter().all(|e| e.id != "3"));
}

#[test]
fn test_delete_expense_absent_id_is_noop() {
    let before = sample();
    assert_eq!(delete_expense(&before, "missing"), before);
}

#[test]
fn test_add_custom_category() {
    let profile = Profile::default();
    let draft = CategoryDraft {
        name: "Pets".into(),
        icon: Some("Heart".into()),
    };
    let (updated, added) = add_custom_category(&profile, &draft).unwrap();
    assert_eq!(updated.custom_categories.len(), 3);
    assert_eq!(updated.custom_categories[2], added);
    assert_eq!(added.icon, Icon::Heart);
    assert!(added.color.is_none());
    assert!(added.id.starts_with("custom-"));
    assert_eq!(profile.custom_categories.len(), 2);
}

#[test]
fn test_add_custom_category_default_icon() {
    let draft = CategoryDraft {
        name: "Gym".into(),
        icon: None,
    };
    let (_, added) = add_custom_category(&Profile::default(), &draft).unwrap();
    assert_eq!(added.icon, Icon::MoreHorizontal);
}

#[test]
fn test_add_custom_category_missing_name() {
    let err = add_custom_category(&Profile::default(), &CategoryDraft::default()).unwrap_err();
    assert_eq!(err, ValidationError::MissingCategoryName);
}

#[test]
fn test_set_budget() {
    let updated = set_budget(&Profile::default(), "20000").unwrap();
    assert_eq!(updated.monthly_budget, dec!(20000));
    assert_eq!(updated.custom_categories, Profile::default().custom_categories);
}

#[test]
fn test_set_budget_rejects_bad_input() {
    assert!(matches!(
        set_budget(&Profile::default(), "lots"),
        Err(ValidationError::InvalidBudget(_))
    ));
    assert!(matches!(
        set_budget(&Profile::default(), "-1"),
        Err(ValidationError::InvalidBudget(_))
    ));
}

#[test]
fn test_set_budget_rejects_out_of_range() {
    for raw in ["0.0000000000000000000000000001", "0.001", "1000000000000.01", "79228162514264337593543950335"] {
        assert_eq!(
            set_budget(&Profile::default(), raw),
            Err(ValidationError::InvalidBudget(raw.into())),
            "{raw}"
        );
    }
}

#[test]
fn test_set_budget_accepts_paisa() {
    assert_eq!(set_budget(&Profile::default(), "15000.50").unwrap().monthly_budget, dec!(15000.50));
    assert_eq!(set_budget(&Profile::default(), "20000.000").unwrap().monthly_budget, dec!(20000));
    assert_eq!(set_budget(&Profile::default(), "1000000000000").unwrap().monthly_budget, ops::MAX_AMOUNT);
}

#[test]
fn test_toggle_dark_mode() {
    let dark = toggle_dark_mode(&Profile::default());
    assert!(dark.dark_mode);
    assert!(!toggle_dark_mode(&dark).dark_mode);
}
