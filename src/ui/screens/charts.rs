use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::ui::app::App;
use crate::ui::theme::Palette;
use crate::ui::util::{format_amount, hex_color, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Range and totals
            Constraint::Min(8),    // Charts
        ])
        .split(area);

    render_header(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_daily_chart(f, body[0], app);
    render_distribution(f, body[1], app);
}

fn block<'a>(title: &'a str, p: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(title, p.title_style()))
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let chart = &app.chart;
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", chart.mode),
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{} to {}",
                chart.range.start.format("%b %d"),
                chart.range.end.format("%b %d")
            ),
            p.dim_style(),
        ),
        Span::styled("   Total ", p.dim_style()),
        Span::styled(
            format_amount(chart.total),
            Style::default().fg(p.red).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Daily average ", p.dim_style()),
        Span::styled(format_amount(chart.daily_average()), p.normal_style()),
        Span::styled(format!("   {} expenses", chart.count), p.dim_style()),
    ]);
    f.render_widget(Paragraph::new(line).block(block(" Range ", p)), area);
}

fn render_daily_chart(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();

    let bars: Vec<Bar> = app
        .chart
        .daily
        .iter()
        .map(|day| {
            let style = if day.date == app.today {
                Style::default().fg(p.yellow)
            } else {
                Style::default().fg(p.accent)
            };
            Bar::default()
                .value(day.total.to_u64().unwrap_or(0))
                .text_value(day.total.round_dp(0).to_string())
                .label(Line::from(day.label.clone()))
                .style(style)
                .value_style(
                    Style::default()
                        .fg(p.header_bg)
                        .bg(p.accent)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    // Seven bars share the width; leave room for borders and gaps.
    let bar_width = (area.width.saturating_sub(2 + 6) / 7).clamp(3, 12);

    let chart = BarChart::default()
        .block(block(" Daily Spending ", p))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .label_style(p.dim_style());

    f.render_widget(chart, area);
}

fn render_distribution(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let slices = &app.chart.categories;

    if slices.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No expenses in this range", p.dim_style())),
            Line::from(""),
            Line::from(Span::styled("Press r to switch range", p.dim_style())),
        ])
        .centered()
        .block(block(" By Category ", p));
        f.render_widget(msg, area);
        return;
    }

    // Bar of 20 cells scaled to the slice's share.
    let lines: Vec<Line> = slices
        .iter()
        .map(|slice| {
            let color = hex_color(slice.color).unwrap_or(p.accent);
            let filled = (slice.percent.to_f64().unwrap_or(0.0) / 5.0).round() as usize;
            Line::from(vec![
                Span::styled("\u{25a0} ", Style::default().fg(color)),
                Span::styled(format!("{:<14}", truncate(&slice.name, 14)), p.normal_style()),
                Span::styled(
                    format!("{:<20}", "\u{2588}".repeat(filled.min(20))),
                    Style::default().fg(color),
                ),
                Span::styled(format!(" {:>5}% ", slice.percent), p.dim_style()),
                Span::styled(format_amount(slice.total), p.normal_style()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block(" By Category ", p)), area);
}
