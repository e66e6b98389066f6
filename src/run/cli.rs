use anyhow::Result;
use chrono::Local;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::Path;

use crate::args::Command;
use crate::charts::{ChartData, RangeMode};
use crate::ledger::{group_by_date, sum_amounts};
use crate::models::{CategoryDraft, ExpenseDraft, Icon};
use crate::tips::{self, TipContext};
use crate::tracker::Tracker;
use crate::ui::util::format_amount;

pub(crate) fn as_cli(command: &Command, tracker: &mut Tracker, data_dir: &Path) -> Result<()> {
    match command {
        Command::Add {
            category,
            amount,
            description,
            date,
        } => cli_add(tracker, category, amount, description.as_deref(), date.as_deref()),
        Command::Delete { id } => cli_delete(tracker, id),
        Command::List => cli_list(tracker),
        Command::Summary => cli_summary(tracker),
        Command::Tips => cli_tips(tracker),
        Command::Chart { range } => cli_chart(tracker, *range),
        Command::Category { name, icon } => cli_category(tracker, name, icon.as_deref()),
        Command::Budget { amount } => {
            tracker.set_budget(amount)?;
            println!(
                "Monthly budget set to {}",
                format_amount(tracker.profile().monthly_budget)
            );
            Ok(())
        }
        Command::Theme => {
            let dark = tracker.toggle_dark_mode()?;
            println!("Dark mode {}", if dark { "on" } else { "off" });
            Ok(())
        }
        Command::Export { path } => cli_export(tracker, path.as_deref(), data_dir),
        Command::Icons { query } => {
            cli_icons(query.as_deref());
            Ok(())
        }
    }
}

fn cli_add(
    tracker: &mut Tracker,
    category: &str,
    amount: &str,
    description: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    let mut draft = ExpenseDraft::new(category, amount);
    if let Some(description) = description {
        draft = draft.with_description(description);
    }
    if let Some(date) = date {
        draft = draft.with_date(date);
    }
    let expense = tracker.add_expense(&draft, &Local::now())?;
    println!(
        "Added {} {} {} on {} ({})",
        expense.icon.glyph(),
        expense.category,
        format_amount(expense.amount),
        expense.date,
        expense.id
    );
    Ok(())
}

fn cli_delete(tracker: &mut Tracker, id: &str) -> Result<()> {
    let Some(expense) = tracker.find_expense(id).cloned() else {
        anyhow::bail!("No expense with id {id}");
    };
    tracker.delete_expense(id)?;
    println!(
        "Deleted {} {} from {}",
        expense.category,
        format_amount(expense.amount),
        expense.date
    );
    Ok(())
}

fn cli_list(tracker: &Tracker) -> Result<()> {
    let groups = group_by_date(tracker.expenses());
    if groups.is_empty() {
        println!("No expenses yet");
        return Ok(());
    }

    for (date, expenses) in groups.iter().rev() {
        let total = sum_amounts(expenses.iter().copied());
        let weekday = expenses
            .first()
            .and_then(|e| e.naive_date())
            .map(|d| d.format("%a").to_string())
            .unwrap_or_default();
        println!("{date} {weekday}  {}", format_amount(total));
        for e in expenses {
            println!(
                "  {} {:<14} {:>12}  {:<28} {}",
                e.icon.glyph(),
                e.category,
                format_amount(e.amount),
                e.description,
                e.id
            );
        }
    }
    Ok(())
}

fn cli_summary(tracker: &Tracker) -> Result<()> {
    let today = Local::now().date_naive();
    let summary = tracker.summary(today);

    println!("LekhaJokha: {}", today.format("%B %Y"));
    println!("{}", "─".repeat(40));
    println!("  Monthly budget: {}", format_amount(summary.budget));
    println!("  Spent today:    {}", format_amount(summary.today_total));
    println!("  Spent (month):  {}", format_amount(summary.month_total));
    println!("  Remaining:      {}", format_amount(summary.remaining));
    println!(
        "  Left:           {:.1}% ({})",
        summary.percentage,
        summary.level.as_str()
    );
    if summary.overspending {
        println!();
        println!(
            "  ⚠ Daily spending alert: {} today is above {}",
            format_amount(summary.today_total),
            format_amount(crate::ledger::DAILY_LIMIT)
        );
    }

    if !summary.category_totals.is_empty() {
        println!();
        println!("Spending by Category:");
        for (name, amount) in &summary.category_totals {
            println!("  {name:<24} {}", format_amount(*amount));
        }
    }
    Ok(())
}

fn cli_tips(tracker: &Tracker) -> Result<()> {
    let today = Local::now().date_naive();
    let summary = tracker.summary(today);

    println!("{}", tips::quote_for(today));
    println!();
    for tip in tips::generate(&TipContext::from_summary(&summary)) {
        println!("[{}] {}", tip.kind, tip.title);
        println!("  {}", tip.body);
        if let Some(savings) = tip.savings {
            println!("  Potential savings: {}", format_amount(savings));
        }
        println!();
    }
    Ok(())
}

fn cli_chart(tracker: &Tracker, range: RangeMode) -> Result<()> {
    let data = ChartData::build(tracker.expenses(), range, &Local::now());
    println!(
        "{}: {} to {}",
        data.mode, data.range.start, data.range.end
    );
    println!(
        "Total {} over {} expenses, {} per day",
        format_amount(data.total),
        data.count,
        format_amount(data.daily_average())
    );
    println!();

    const WIDTH: f64 = 30.0;
    let max = data
        .daily
        .iter()
        .map(|b| b.total)
        .max()
        .unwrap_or(Decimal::ZERO);
    for bucket in &data.daily {
        let ratio = bucket
            .total
            .checked_div(max)
            .and_then(|r| r.to_f64())
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);
        let bar = "█".repeat((ratio * WIDTH).round() as usize);
        println!(
            "  {} {}  {:<30} {}",
            bucket.label,
            bucket.date.format("%m-%d"),
            bar,
            format_amount(bucket.total)
        );
    }

    if !data.categories.is_empty() {
        println!();
        println!("By Category:");
        for slice in &data.categories {
            println!(
                "  {:<16} {:>12} {:>6.1}%",
                slice.name,
                format_amount(slice.total),
                slice.percent
            );
        }
    }
    Ok(())
}

fn cli_category(tracker: &mut Tracker, name: &str, icon: Option<&str>) -> Result<()> {
    if let Some(icon) = icon {
        if Icon::find(icon).is_none() {
            tracing::warn!(icon, "unknown icon, using default");
        }
    }
    let category = tracker.add_custom_category(&CategoryDraft {
        name: name.to_string(),
        icon: icon.map(str::to_string),
    })?;
    println!(
        "Added category {} {} ({})",
        category.icon.glyph(),
        category.name,
        category.icon
    );
    Ok(())
}

fn cli_export(tracker: &Tracker, target: Option<&Path>, data_dir: &Path) -> Result<()> {
    let path = super::export_path(target, data_dir, Local::now().date_naive());
    let count = crate::export::write_file(tracker.expenses(), &path)?;
    if count == 0 {
        println!("No expenses to export, wrote header to {}", path.display());
    } else {
        println!("Exported {count} expenses to {}", path.display());
    }
    Ok(())
}

fn cli_icons(query: Option<&str>) {
    let icons = match query {
        Some(q) => Icon::search(q),
        None => Icon::picker().to_vec(),
    };
    if icons.is_empty() {
        println!("No icons match");
        return;
    }
    for icon in icons {
        println!("  {} {}", icon.glyph(), icon);
    }
}
