//! Sample week of expenses for a first run.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::{Expense, Icon, DATE_FORMAT};

/// (days before today, category, amount, description, icon)
const SAMPLES: &[(i64, &str, i64, &str, Icon)] = &[
    (0, "Food", 450, "Lunch at college canteen", Icon::Utensils),
    (0, "Transport", 120, "Bus fare", Icon::Bus),
    (1, "Stationery", 280, "Notebooks and pens", Icon::BookOpen),
    (1, "Food", 350, "Snacks", Icon::Utensils),
    (2, "Internet", 600, "Monthly data pack", Icon::Wifi),
    (3, "Food", 400, "Dinner with friends", Icon::Utensils),
    (3, "Transport", 80, "Taxi", Icon::Bus),
    (4, "Education", 1200, "Course materials", Icon::GraduationCap),
    (5, "Groceries", 850, "Weekly groceries", Icon::ShoppingCart),
    (6, "Entertainment", 500, "Movie tickets", Icon::Tv),
    (6, "Food", 300, "Breakfast", Icon::Utensils),
];

/// Expenses for the seven days ending on `now`'s date, stamped at local
/// midnight of each day.
pub(crate) fn sample_expenses<Tz: TimeZone>(now: &DateTime<Tz>) -> Vec<Expense> {
    let today = now.date_naive();
    let tz = now.timezone();
    let millis = now.timestamp_millis();

    let mut per_day = 0;
    let mut last_offset = -1;
    SAMPLES
        .iter()
        .map(|&(offset, category, amount, description, icon)| {
            per_day = if offset == last_offset { per_day + 1 } else { 1 };
            last_offset = offset;

            let date = today - Duration::days(offset);
            Expense {
                id: format!("exp-{millis}-{offset}-{per_day}"),
                category: category.to_string(),
                amount: Decimal::from(amount),
                description: description.to_string(),
                date: date.format(DATE_FORMAT).to_string(),
                timestamp: local_midnight(&tz, date),
                icon,
            }
        })
        .collect()
}

fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}
