use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::ledger::DAILY_LIMIT;
use crate::models::Category;
use crate::ui::app::App;
use crate::ui::theme::Palette;
use crate::ui::util::{format_amount, hex_color, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let banner_height = if app.summary.overspending { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height), // Daily alert
            Constraint::Length(6),             // Balance
            Constraint::Length(3),             // Category strip
            Constraint::Min(5),                // Expense list
        ])
        .split(area);

    if app.summary.overspending {
        render_alert(f, chunks[0], app);
    }
    render_balance(f, chunks[1], app);
    render_category_strip(f, chunks[2], app);
    render_expense_list(f, chunks[3], app);
}

fn titled_block<'a>(title: String, p: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(title, p.title_style()))
}

fn render_alert(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let text = Paragraph::new(Line::from(vec![
        Span::styled(
            "Daily limit exceeded! ",
            Style::default().fg(p.red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "You've spent {} today. Try to keep daily spending under {}.",
                format_amount(app.summary.today_total),
                format_amount(DAILY_LIMIT)
            ),
            p.normal_style(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.red)),
    );
    f.render_widget(text, area);
}

fn render_balance(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let s = &app.summary;
    let color = p.level_color(s.level);

    let block = titled_block(" Remaining Balance ".into(), p);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amounts
            Constraint::Length(1), // Gauge
            Constraint::Length(1),
            Constraint::Min(1), // Quote
        ])
        .split(inner);

    let headline = Paragraph::new(Line::from(vec![
        Span::styled(
            format_amount(s.remaining),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  of {}  |  spent {} this month  |  {} today",
                format_amount(s.budget),
                format_amount(s.month_total),
                format_amount(s.today_total)
            ),
            p.dim_style(),
        ),
    ]));
    f.render_widget(headline, rows[0]);

    let ratio = (s.percentage.to_f64().unwrap_or(0.0) / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(p.surface))
        .ratio(ratio)
        .label(Span::styled(
            format!("{}% left, {}", s.percentage, s.level.as_str()),
            Style::default().fg(p.text).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(gauge, rows[1]);

    let quote = Paragraph::new(Line::from(Span::styled(
        format!("\"{}\"", app.quote),
        Style::default()
            .fg(p.text_dim)
            .add_modifier(Modifier::ITALIC),
    )));
    f.render_widget(quote, rows[3]);
}

fn render_category_strip(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let block = titled_block(" This Month by Category ".into(), p);

    if app.summary.category_totals.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Nothing spent yet this month",
            p.dim_style(),
        )))
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let mut spans = Vec::new();
    for (name, total) in &app.summary.category_totals {
        let color = Category::find_by_name(&app.categories, name)
            .and_then(|c| c.color.as_deref())
            .and_then(hex_color)
            .unwrap_or(p.accent);
        spans.push(Span::styled("\u{25a0} ", Style::default().fg(color)));
        spans.push(Span::styled(format!("{name} "), p.normal_style()));
        spans.push(Span::styled(
            format!("{}   ", format_amount(*total)),
            p.dim_style(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_expense_list(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let title = format!(" Expenses ({}) ", app.expenses.len());

    if app.expenses.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expenses yet", p.dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a or type :add Food 450 Lunch",
                p.dim_style(),
            )),
        ];
        f.render_widget(
            Paragraph::new(msg).centered().block(titled_block(title, p)),
            area,
        );
        return;
    }

    let header_cells = ["Date", "", "Category", "Description", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(p.header_style()));
    let header = Row::new(header_cells).height(1);

    // The list gets less height than visible_rows assumes; keep the cursor in view.
    let rows_visible = area.height.saturating_sub(3).max(1) as usize;
    let start = if app.expense_index >= app.expense_scroll + rows_visible {
        app.expense_index + 1 - rows_visible
    } else {
        app.expense_scroll.min(app.expense_index)
    };

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .enumerate()
        .skip(start)
        .take(rows_visible)
        .map(|(i, e)| {
            // Date shown once per group.
            let first_of_day = i == start || app.expenses[i - 1].date != e.date;
            let date_cell = if first_of_day {
                e.date.clone()
            } else {
                String::new()
            };
            let style = if i == app.expense_index {
                p.selected_style()
            } else {
                p.normal_style()
            };
            Row::new(vec![
                Cell::from(date_cell),
                Cell::from(e.icon.glyph()),
                Cell::from(truncate(&e.category, 16)),
                Cell::from(truncate(&e.description, 40)),
                Cell::from(Span::styled(
                    format_amount(e.amount),
                    if i == app.expense_index {
                        Style::default()
                    } else {
                        p.expense_style()
                    },
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(3),
        Constraint::Length(16),
        Constraint::Min(20),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(titled_block(title, p));
    f.render_widget(table, area);
}
