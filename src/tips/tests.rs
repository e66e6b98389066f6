#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn totals(pairs: &[(&str, Decimal)]) -> Vec<(String, Decimal)> {
    pairs.iter().map(|(n, t)| (n.to_string(), *t)).collect()
}

fn tips_for(percentage: Decimal, pairs: &[(&str, Decimal)]) -> Vec<Tip> {
    let category_totals = totals(pairs);
    let total_spent = category_totals.iter().map(|(_, t)| *t).sum();
    generate(&TipContext {
        percentage,
        remaining: dec!(1000),
        total_spent,
        category_totals: &category_totals,
    })
}

fn titles(tips: &[Tip]) -> Vec<&str> {
    tips.iter().map(|t| t.title.as_str()).collect()
}

const GENERAL: [&str; 3] = ["Track Daily Spending", "Set Category Limits", "Emergency Fund"];

#[test]
fn test_low_budget_food_heavy_scenario() {
    let tips = tips_for(dec!(15), &[("Food", dec!(4000)), ("Transport", dec!(500))]);
    assert_eq!(tips.len(), 5);

    assert_eq!(tips[0].kind, TipKind::Alert);
    assert_eq!(tips[0].title, "Budget Running Low!");

    assert_eq!(tips[1].kind, TipKind::Tip);
    assert_eq!(tips[1].title, "Reduce Food Expenses");
    assert_eq!(tips[1].savings, Some(dec!(600)));
    assert!(tips[1].body.contains("88.9%"));

    assert_eq!(titles(&tips[2..]), GENERAL);
    assert!(tips.iter().all(|t| t.title != "Optimize Transportation"));
}

#[test]
fn test_success_tier() {
    let tips = tips_for(dec!(84.2), &[]);
    assert_eq!(tips[0].kind, TipKind::Success);
    assert_eq!(tips[0].title, "Great Job!");
    assert_eq!(tips.len(), 4);
}

#[test]
fn test_info_tier() {
    let tips = tips_for(dec!(45), &[]);
    assert_eq!(tips[0].kind, TipKind::Info);
    assert_eq!(tips[0].title, "On Track");

    let at_sixty = tips_for(dec!(60), &[]);
    assert_eq!(at_sixty[0].title, "On Track");
}

#[test]
fn test_tier_gap_between_twenty_and_thirty() {
    for pct in [dec!(20), dec!(25), dec!(30)] {
        let tips = tips_for(pct, &[]);
        assert_eq!(titles(&tips), GENERAL, "unexpected tier tip at {pct}");
    }
}

#[test]
fn test_tier_boundaries() {
    assert_eq!(tips_for(dec!(19.9), &[])[0].kind, TipKind::Alert);
    assert_eq!(tips_for(dec!(30.1), &[])[0].kind, TipKind::Info);
    assert_eq!(tips_for(dec!(60.1), &[])[0].kind, TipKind::Success);
    assert_eq!(tips_for(dec!(-12), &[])[0].kind, TipKind::Alert);
}

#[test]
fn test_entertainment_and_clothing() {
    let tips = tips_for(
        dec!(25),
        &[
            ("Entertainment", dec!(500)),
            ("Clothing", dec!(500)),
            ("Groceries", dec!(1200)),
        ],
    );
    assert_eq!(
        titles(&tips),
        [
            "Watch Entertainment Spending",
            "Watch Clothing Spending",
            "Track Daily Spending",
            "Set Category Limits",
            "Emergency Fund",
        ]
    );
    assert_eq!(tips[0].savings, Some(dec!(100)));
    assert_eq!(tips[1].savings, Some(dec!(100)));
}

#[test]
fn test_transport_rule() {
    let tips = tips_for(dec!(25), &[("Transport", dec!(300)), ("Health", dec!(700))]);
    assert_eq!(tips[0].title, "Optimize Transportation");
    assert_eq!(tips[0].savings, Some(dec!(30)));
}

#[test]
fn test_education_rule_has_no_savings() {
    let tips = tips_for(dec!(25), &[("Education", dec!(1200)), ("Food", dec!(1800))]);
    let education = tips.iter().find(|t| t.title == "Education Investment").unwrap();
    assert_eq!(education.kind, TipKind::Info);
    assert!(education.savings.is_none());
    // Food share is 60%, so its tip comes after Education (category order).
    assert_eq!(tips[0].title, "Education Investment");
    assert_eq!(tips[1].title, "Reduce Food Expenses");
}

#[test]
fn test_share_uses_rounded_value() {
    // 35.04% rounds to 35.0, which is not above the Food threshold.
    let tips = tips_for(dec!(25), &[("Food", dec!(3504)), ("Other", dec!(6496))]);
    assert_eq!(titles(&tips), GENERAL);
}

#[test]
fn test_no_spend_skips_category_rules() {
    let tips = tips_for(dec!(100), &[("Food", Decimal::ZERO)]);
    assert_eq!(tips.len(), 4);
}

#[test]
fn test_general_tips_always_present() {
    for pct in [dec!(-50), dec!(0), dec!(25), dec!(99)] {
        let tips = tips_for(pct, &[("Food", dec!(10))]);
        let all = titles(&tips);
        assert_eq!(all[all.len() - 3..], GENERAL);
    }
}

#[test]
fn test_from_summary() {
    let expenses = vec![];
    let profile = crate::models::Profile::default();
    let today = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let summary = Summary::compute(&expenses, &profile, today);
    let tips = generate(&TipContext::from_summary(&summary));
    assert_eq!(tips[0].title, "Great Job!");
    assert!(tips[0].body.contains("100.0%"));
    assert!(tips[0].body.contains("₨15000.00"));
}

#[test]
fn test_quote_is_stable_per_day() {
    let day = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert_eq!(quote_for(day), quote_for(day));
    assert!(QUOTES.contains(&quote_for(day)));
}
