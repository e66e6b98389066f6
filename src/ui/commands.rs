use chrono::Local;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use super::app::{App, Screen};
use crate::charts::RangeMode;
use crate::models::{Category, CategoryDraft, ExpenseDraft, Icon};
use crate::tracker::Tracker;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Tracker) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit LekhaJokha", cmd_quit, r);
    register_command!("quit", "Quit LekhaJokha", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("c", "Go to Charts", cmd_charts, r);
    register_command!("charts", "Go to Charts", cmd_charts, r);
    register_command!("t", "Go to Tips", cmd_tips, r);
    register_command!("tips", "Go to Tips", cmd_tips, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add expense (e.g. :add Food 450 Lunch @2024-01-15)",
        cmd_add,
        r
    );
    register_command!("a", "Add expense (e.g. :a Food 450 Lunch)", cmd_add, r);
    register_command!("delete", "Delete selected expense", cmd_delete, r);
    register_command!(
        "category",
        "Add custom category (e.g. :category Rent Home)",
        cmd_category,
        r
    );
    register_command!(
        "budget",
        "Set monthly budget (e.g. :budget 20000)",
        cmd_budget,
        r
    );
    register_command!(
        "export",
        "Export expenses to CSV (e.g. :export ~/expenses.csv)",
        cmd_export,
        r
    );
    register_command!(
        "range",
        "Chart range: week, last7, or toggle",
        cmd_range,
        r
    );
    register_command!("theme", "Toggle dark mode", cmd_theme, r);
    register_command!(
        "icons",
        "List icon names (e.g. :icons cart)",
        cmd_icons,
        r
    );

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    tracker: &mut Tracker,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        tracing::debug!(cmd_name, args, "running command");
        (cmd.run)(args, app, tracker)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn refresh(app: &mut App, tracker: &Tracker) {
    app.refresh(tracker, &Local::now());
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _tracker: &mut Tracker) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, _tracker: &mut Tracker) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_charts(_args: &str, app: &mut App, _tracker: &mut Tracker) -> anyhow::Result<()> {
    app.screen = Screen::Charts;
    Ok(())
}

fn cmd_tips(_args: &str, app: &mut App, _tracker: &mut Tracker) -> anyhow::Result<()> {
    app.screen = Screen::Tips;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _tracker: &mut Tracker) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

/// Split `:add` arguments into a draft.
///
/// The category is the longest leading run of words naming a known category
/// (any case), otherwise the first word. Then comes the amount, then the
/// description. A trailing `@YYYY-MM-DD` word sets the date.
pub(crate) fn parse_add_args(args: &str, categories: &[Category]) -> ExpenseDraft {
    let mut words: Vec<&str> = args.split_whitespace().collect();
    let date = match words.last() {
        Some(last) if last.starts_with('@') && last.len() > 1 => {
            let date = last[1..].to_string();
            words.pop();
            Some(date)
        }
        _ => None,
    };

    let (category, rest) = (1..words.len())
        .rev()
        .find_map(|n| {
            Category::find_by_name_loose(categories, &words[..n].join(" "))
                .map(|c| (c.name.clone(), &words[n..]))
        })
        .unwrap_or_else(|| match words.split_first() {
            Some((first, rest)) => (first.to_string(), rest),
            None => (String::new(), &[]),
        });

    let amount = rest.first().copied().unwrap_or_default();
    let description = rest.get(1..).unwrap_or_default().join(" ");

    let mut draft = ExpenseDraft::new(category, amount).with_description(description);
    draft.date = date;
    draft
}

fn cmd_add(args: &str, app: &mut App, tracker: &mut Tracker) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :add <category> <amount> [description] [@YYYY-MM-DD]");
        return Ok(());
    }

    let draft = parse_add_args(args, &tracker.categories());
    let expense = tracker.add_expense(&draft, &Local::now())?;
    refresh(app, tracker);
    app.expense_index = app
        .expenses
        .iter()
        .position(|e| e.id == expense.id)
        .unwrap_or(0);
    app.set_status(format!(
        "Added {} {} {} on {}",
        expense.icon.glyph(),
        expense.category,
        super::util::format_amount(expense.amount),
        expense.date
    ));
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App, _tracker: &mut Tracker) -> anyhow::Result<()> {
    if app.screen != Screen::Dashboard {
        app.set_status("Go to the Dashboard and select an expense first");
        return Ok(());
    }
    app.request_delete();
    Ok(())
}

fn cmd_category(args: &str, app: &mut App, tracker: &mut Tracker) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :category <name> [icon]. See :icons for icon names");
        return Ok(());
    }

    // A trailing word that names an icon is the icon.
    let draft = match args.rsplit_once(' ') {
        Some((name, icon)) if Icon::find(icon).is_some() => CategoryDraft {
            name: name.trim().to_string(),
            icon: Some(icon.to_string()),
        },
        _ => CategoryDraft {
            name: args.to_string(),
            icon: None,
        },
    };

    let category = tracker.add_custom_category(&draft)?;
    refresh(app, tracker);
    app.set_status(format!(
        "Added category {} {}",
        category.icon.glyph(),
        category.name
    ));
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, tracker: &mut Tracker) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!(
            "Monthly budget is {}. Usage: :budget <amount>",
            super::util::format_amount(tracker.profile().monthly_budget)
        ));
        return Ok(());
    }

    tracker.set_budget(args)?;
    refresh(app, tracker);
    app.set_status(format!(
        "Monthly budget set to {}",
        super::util::format_amount(tracker.profile().monthly_budget)
    ));
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, tracker: &mut Tracker) -> anyhow::Result<()> {
    let target = (!args.is_empty()).then(|| Path::new(args));
    let path = crate::run::export_path(target, &app.data_dir, app.today);
    let count = crate::export::write_file(tracker.expenses(), &path)?;
    app.set_status(format!("Exported {count} expenses to {}", path.display()));
    Ok(())
}

fn cmd_range(args: &str, app: &mut App, tracker: &mut Tracker) -> anyhow::Result<()> {
    let mode = if args.is_empty() {
        app.range_mode.toggle()
    } else {
        match RangeMode::parse(args) {
            Some(mode) => mode,
            None => {
                app.set_status("Usage: :range [week|last7]");
                return Ok(());
            }
        }
    };
    app.range_mode = mode;
    app.screen = Screen::Charts;
    refresh(app, tracker);
    app.set_status(format!("Showing {mode}"));
    Ok(())
}

fn cmd_theme(_args: &str, app: &mut App, tracker: &mut Tracker) -> anyhow::Result<()> {
    let dark = tracker.toggle_dark_mode()?;
    refresh(app, tracker);
    app.set_status(if dark { "Dark mode" } else { "Light mode" });
    Ok(())
}

fn cmd_icons(args: &str, app: &mut App, _tracker: &mut Tracker) -> anyhow::Result<()> {
    let icons = if args.is_empty() {
        Icon::picker().to_vec()
    } else {
        Icon::search(args)
    };
    if icons.is_empty() {
        app.set_status(format!("No icons match '{args}'"));
        return Ok(());
    }
    let names: Vec<String> = icons
        .iter()
        .map(|i| format!("{} {}", i.glyph(), i))
        .collect();
    app.set_status(names.join("  "));
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
