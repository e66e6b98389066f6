//! Range filtering and the two chart series (per-day bars, category shares).

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};
use rust_decimal::Decimal;

use crate::ledger::{period_total, share_percent, sum_amounts, totals_by_category};
use crate::models::Expense;

/// Slice colors, cycled when there are more categories than entries.
pub(crate) const PALETTE: [&str; 10] = [
    "#22c55e", "#3b82f6", "#f59e0b", "#ec4899", "#8b5cf6", "#06b6d4", "#ef4444", "#64748b",
    "#10b981", "#f97316",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum RangeMode {
    /// Sunday through Saturday of the current week
    #[value(name = "week")]
    ThisWeek,
    /// The six days before today, and today
    #[default]
    #[value(name = "last7")]
    Last7Days,
}

impl RangeMode {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::ThisWeek => "This Week",
            Self::Last7Days => "Last 7 Days",
        }
    }

    pub(crate) fn toggle(&self) -> Self {
        match self {
            Self::ThisWeek => Self::Last7Days,
            Self::Last7Days => Self::ThisWeek,
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "week" | "thisweek" | "this-week" => Some(Self::ThisWeek),
            "last7" | "last7days" | "last-7-days" => Some(Self::Last7Days),
            _ => None,
        }
    }
}

impl std::fmt::Display for RangeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Seven consecutive days, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateRange {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
}

impl DateRange {
    pub(crate) fn for_mode(mode: RangeMode, today: NaiveDate) -> Self {
        let start = match mode {
            RangeMode::ThisWeek => {
                today - Duration::days(i64::from(today.weekday().num_days_from_sunday()))
            }
            RangeMode::Last7Days => today - Duration::days(6),
        };
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub(crate) fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(|d| *d <= self.end)
    }
}

/// Expenses whose timestamp, read in `tz`, falls on a day inside `range`.
pub(crate) fn filter_in_range<Tz: TimeZone>(
    expenses: &[Expense],
    range: &DateRange,
    tz: &Tz,
) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| range.contains(local_day(e, tz)))
        .cloned()
        .collect()
}

fn local_day<Tz: TimeZone>(expense: &Expense, tz: &Tz) -> NaiveDate {
    expense.timestamp.with_timezone(tz).date_naive()
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DayBucket {
    pub(crate) date: NaiveDate,
    /// Short weekday name, e.g. "Sun".
    pub(crate) label: String,
    pub(crate) total: Decimal,
}

pub(crate) fn daily_series<Tz: TimeZone>(
    filtered: &[Expense],
    range: &DateRange,
    tz: &Tz,
) -> Vec<DayBucket> {
    range
        .days()
        .map(|date| DayBucket {
            date,
            label: date.format("%a").to_string(),
            total: sum_amounts(filtered.iter().filter(|e| local_day(e, tz) == date)),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategorySlice {
    pub(crate) name: String,
    pub(crate) total: Decimal,
    /// Share of the filtered total, one decimal place.
    pub(crate) percent: Decimal,
    pub(crate) color: &'static str,
}

pub(crate) fn category_distribution(filtered: &[Expense]) -> Vec<CategorySlice> {
    let grand_total = period_total(filtered);
    totals_by_category(filtered)
        .into_iter()
        .enumerate()
        .map(|(i, (name, total))| CategorySlice {
            percent: share_percent(total, grand_total),
            name,
            total,
            color: PALETTE[i % PALETTE.len()],
        })
        .collect()
}

/// Everything the charts screen draws for one range.
#[derive(Debug, Clone)]
pub(crate) struct ChartData {
    pub(crate) mode: RangeMode,
    pub(crate) range: DateRange,
    pub(crate) total: Decimal,
    pub(crate) count: usize,
    pub(crate) daily: Vec<DayBucket>,
    pub(crate) categories: Vec<CategorySlice>,
}

impl ChartData {
    pub(crate) fn build<Tz: TimeZone>(expenses: &[Expense], mode: RangeMode, now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let range = DateRange::for_mode(mode, now.date_naive());
        let filtered = filter_in_range(expenses, &range, &tz);
        Self {
            mode,
            range,
            total: period_total(&filtered),
            count: filtered.len(),
            daily: daily_series(&filtered, &range, &tz),
            categories: category_distribution(&filtered),
        }
    }

    pub(crate) fn daily_average(&self) -> Decimal {
        (self.total / Decimal::from(7)).round_dp(2)
    }
}
