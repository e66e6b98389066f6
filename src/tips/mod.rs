//! Rule-based savings advice.
//!
//! The output is fully determined by the budget percentage, the remaining
//! amount, total spend and the per-category totals. Order: at most one budget
//! tier tip, then category tips in category order, then the general tips.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::ledger::{share_percent, Summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TipKind {
    Alert,
    Success,
    Info,
    Tip,
}

impl TipKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Alert => "Alert",
            Self::Success => "Success",
            Self::Info => "Info",
            Self::Tip => "Tip",
        }
    }
}

impl std::fmt::Display for TipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tip {
    pub(crate) kind: TipKind,
    pub(crate) title: String,
    pub(crate) body: String,
    /// Estimated monthly saving if the advice is followed.
    pub(crate) savings: Option<Decimal>,
}

impl Tip {
    fn new(kind: TipKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
            savings: None,
        }
    }

    fn with_savings(mut self, savings: Decimal) -> Self {
        self.savings = Some(savings);
        self
    }
}

/// The aggregate state the rules look at.
#[derive(Debug, Clone)]
pub(crate) struct TipContext<'a> {
    pub(crate) percentage: Decimal,
    pub(crate) remaining: Decimal,
    pub(crate) total_spent: Decimal,
    pub(crate) category_totals: &'a [(String, Decimal)],
}

impl<'a> TipContext<'a> {
    pub(crate) fn from_summary(summary: &'a Summary) -> Self {
        Self {
            percentage: summary.percentage,
            remaining: summary.remaining,
            total_spent: summary.month_total,
            category_totals: &summary.category_totals,
        }
    }
}

pub(crate) fn generate(ctx: &TipContext<'_>) -> Vec<Tip> {
    let mut tips = Vec::new();
    tips.extend(budget_tier(ctx));
    if !ctx.total_spent.is_zero() {
        for (category, total) in ctx.category_totals {
            tips.extend(category_tips(category, *total, ctx.total_spent));
        }
    }
    tips.extend(general_tips());
    tips
}

fn budget_tier(ctx: &TipContext<'_>) -> Option<Tip> {
    let pct = ctx.percentage;
    let remaining = money(ctx.remaining);
    if pct < Decimal::from(20) {
        Some(Tip::new(
            TipKind::Alert,
            "Budget Running Low!",
            format!(
                "You have only {pct:.1}% of your monthly budget remaining (₨{remaining}). \
                 Consider reducing non-essential spending for the rest of the month."
            ),
        ))
    } else if pct > Decimal::from(60) {
        Some(Tip::new(
            TipKind::Success,
            "Great Job!",
            format!(
                "You're doing well! You have {pct:.1}% of your budget remaining (₨{remaining}). \
                 Keep up the good spending habits!"
            ),
        ))
    } else if pct > Decimal::from(30) {
        Some(Tip::new(
            TipKind::Info,
            "On Track",
            format!(
                "You have {pct:.1}% of your budget remaining (₨{remaining}). \
                 You're managing your expenses reasonably well."
            ),
        ))
    } else {
        // 20..=30 has no tier message.
        None
    }
}

fn category_tips(category: &str, total: Decimal, total_spent: Decimal) -> Vec<Tip> {
    let share = share_percent(total, total_spent);
    let spent = money(total);
    let mut tips = Vec::new();

    if category == "Food" && share > Decimal::from(35) {
        tips.push(
            Tip::new(
                TipKind::Tip,
                "Reduce Food Expenses",
                format!(
                    "You spent {share:.1}% of your budget on Food (₨{spent}). \
                     Consider meal prepping or eating at home more often."
                ),
            )
            .with_savings(portion(total, 15)),
        );
    }

    if (category == "Entertainment" || category == "Clothing") && share > Decimal::from(20) {
        tips.push(
            Tip::new(
                TipKind::Tip,
                format!("Watch {category} Spending"),
                format!(
                    "You spent {share:.1}% of your budget on {category} (₨{spent}). \
                     Consider reducing discretionary expenses."
                ),
            )
            .with_savings(portion(total, 20)),
        );
    }

    if category == "Transport" && share > Decimal::from(25) {
        tips.push(
            Tip::new(
                TipKind::Tip,
                "Optimize Transportation",
                format!(
                    "You spent {share:.1}% on Transport (₨{spent}). Consider carpooling, \
                     using public transport, or walking short distances."
                ),
            )
            .with_savings(portion(total, 10)),
        );
    }

    if category == "Education" && share > Decimal::from(30) {
        tips.push(Tip::new(
            TipKind::Info,
            "Education Investment",
            format!(
                "You spent {share:.1}% on Education (₨{spent}). While this is a valuable \
                 investment, look for free online resources or library materials when possible."
            ),
        ));
    }

    tips
}

fn general_tips() -> [Tip; 3] {
    [
        Tip::new(
            TipKind::Tip,
            "Track Daily Spending",
            "Try to limit daily expenses to ₨1000 or less. This helps you stay within your \
             monthly budget and build better spending habits.",
        ),
        Tip::new(
            TipKind::Tip,
            "Set Category Limits",
            "Allocate specific amounts to each category (e.g., 30% for Food, 20% for \
             Transport) and track your progress weekly.",
        ),
        Tip::new(
            TipKind::Tip,
            "Emergency Fund",
            "Try to save at least 10-15% of your monthly budget for unexpected expenses. \
             Small savings add up over time!",
        ),
    ]
}

/// `percent`% of `total`, to the paisa.
fn portion(total: Decimal, percent: u32) -> Decimal {
    (total * Decimal::new(percent as i64, 2))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn money(value: Decimal) -> String {
    format!("{:.2}", value)
}

const QUOTES: &[&str] = &[
    "Small savings today, big dreams tomorrow! 🌱",
    "Every rupee saved is a rupee earned! 💚",
    "Track your spending, grow your future! 📈",
    "Financial discipline leads to freedom! 🎯",
    "Save today for a better tomorrow! ✨",
    "Your future self will thank you! 🙏",
];

/// Motivational line for the header; stable for a given day.
pub(crate) fn quote_for(date: NaiveDate) -> &'static str {
    QUOTES[date.ordinal0() as usize % QUOTES.len()]
}

#[cfg(test)]
mod tests;
