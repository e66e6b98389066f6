use chrono::{DateTime, NaiveDate, TimeZone};
use std::path::PathBuf;

use super::theme::{self, Palette};
use super::util::clamp_index;
use crate::charts::{ChartData, RangeMode};
use crate::ledger::{group_by_date, Summary};
use crate::models::{Category, Expense};
use crate::tips::{self, Tip, TipContext};
use crate::tracker::Tracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Charts,
    Tips,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Charts, Self::Tips]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Charts => write!(f, "Charts"),
            Self::Tips => write!(f, "Tips"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteExpense { id: String, label: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) data_dir: PathBuf,
    pub(crate) today: NaiveDate,
    pub(crate) dark_mode: bool,

    // Dashboard
    pub(crate) summary: Summary,
    /// Newest date group first, list order inside a group.
    pub(crate) expenses: Vec<Expense>,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,
    pub(crate) categories: Vec<Category>,

    // Charts
    pub(crate) range_mode: RangeMode,
    pub(crate) chart: ChartData,

    // Tips
    pub(crate) tips: Vec<Tip>,
    pub(crate) tip_scroll: usize,
    pub(crate) quote: &'static str,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new<Tz: TimeZone>(
        tracker: &Tracker,
        data_dir: PathBuf,
        now: &DateTime<Tz>,
    ) -> Self {
        let today = now.date_naive();
        let range_mode = RangeMode::default();
        let summary = tracker.summary(today);

        let mut app = Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            data_dir,
            today,
            dark_mode: tracker.profile().dark_mode,

            summary,
            expenses: Vec::new(),
            expense_index: 0,
            expense_scroll: 0,
            categories: Vec::new(),

            range_mode,
            chart: ChartData::build(tracker.expenses(), range_mode, now),

            tips: Vec::new(),
            tip_scroll: 0,
            quote: tips::quote_for(today),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        };
        app.refresh(tracker, now);
        app
    }

    /// Recompute every derived view from the tracker. Nothing is read from
    /// disk; the tracker already holds the state.
    pub(crate) fn refresh<Tz: TimeZone>(&mut self, tracker: &Tracker, now: &DateTime<Tz>) {
        self.today = now.date_naive();
        self.dark_mode = tracker.profile().dark_mode;
        self.summary = tracker.summary(self.today);

        self.expenses = display_order(tracker.expenses());
        clamp_index(
            &mut self.expense_index,
            &mut self.expense_scroll,
            self.expenses.len(),
        );
        self.categories = tracker.categories();

        self.chart = ChartData::build(tracker.expenses(), self.range_mode, now);

        self.tips = tips::generate(&TipContext::from_summary(&self.summary));
        self.tip_scroll = self.tip_scroll.min(self.tips.len().saturating_sub(1));
        self.quote = tips::quote_for(self.today);
    }

    pub(crate) fn selected_expense(&self) -> Option<&Expense> {
        self.expenses.get(self.expense_index)
    }

    pub(crate) fn palette(&self) -> &'static Palette {
        theme::palette(self.dark_mode)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// Ask for confirmation before deleting the highlighted expense.
    pub(crate) fn request_delete(&mut self) {
        let Some(expense) = self.selected_expense() else {
            self.set_status("No expense selected");
            return;
        };
        let id = expense.id.clone();
        let label = if expense.description.is_empty() {
            format!("{} {}", expense.category, super::util::format_amount(expense.amount))
        } else {
            format!(
                "{} {} ({})",
                expense.category,
                super::util::format_amount(expense.amount),
                expense.description
            )
        };
        self.confirm_message = format!("Delete {label}?");
        self.pending_action = Some(PendingAction::DeleteExpense { id, label });
        self.input_mode = InputMode::Confirm;
    }
}

/// Expenses as the dashboard lists them: date groups newest first.
pub(crate) fn display_order(expenses: &[Expense]) -> Vec<Expense> {
    group_by_date(expenses)
        .into_iter()
        .rev()
        .flat_map(|(_, group)| group.into_iter().cloned())
        .collect()
}
