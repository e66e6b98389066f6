use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tips::TipKind;
use crate::ui::app::App;
use crate::ui::theme::Palette;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Overview
            Constraint::Min(5),    // Tips
        ])
        .split(area);

    render_overview(f, chunks[0], app);
    render_tips(f, chunks[1], app);
}

fn kind_color(kind: TipKind, p: &Palette) -> Color {
    match kind {
        TipKind::Alert => p.red,
        TipKind::Success => p.green,
        TipKind::Info => p.accent,
        TipKind::Tip => p.yellow,
    }
}

fn render_overview(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let s = &app.summary;
    let line = Line::from(vec![
        Span::styled(" Budget left ", p.dim_style()),
        Span::styled(
            format!("{}%", s.percentage),
            Style::default()
                .fg(p.level_color(s.level))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Remaining ", p.dim_style()),
        Span::styled(format_amount(s.remaining), p.normal_style()),
        Span::styled("   Spent this month ", p.dim_style()),
        Span::styled(format_amount(s.month_total), p.normal_style()),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(" Overview ", p.title_style()));
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_tips(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let mut lines = Vec::new();

    for tip in app.tips.iter().skip(app.tip_scroll) {
        let color = kind_color(tip.kind, p);
        let mut title = vec![
            Span::styled(
                format!(" {:<8}", tip.kind.as_str()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(tip.title.clone(), p.normal_style().add_modifier(Modifier::BOLD)),
        ];
        if let Some(savings) = tip.savings {
            title.push(Span::styled(
                format!("  save ~{}/month", format_amount(savings)),
                Style::default().fg(p.green),
            ));
        }
        lines.push(Line::from(title));
        lines.push(Line::from(Span::styled(
            format!("          {}", tip.body),
            p.dim_style(),
        )));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(
            format!(" Savings Tips ({}) ", app.tips.len()),
            p.title_style(),
        ));
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
