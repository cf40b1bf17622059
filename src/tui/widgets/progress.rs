use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::WeekStatus;
use crate::progress::ParticipantReport;
use crate::tui::theme;
use crate::utils::format::{format_rate, rate_bar};

const BAR_WIDTH: usize = 16;

pub fn render(frame: &mut Frame, area: Rect, report: &ParticipantReport) {
    let block = Block::default()
        .title(Span::styled(" Progress ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let overall = &report.status.overall;
    let pacing_style = if report.pacing.is_behind() {
        theme::amber()
    } else {
        theme::green()
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Overall  ", theme::bold()),
            Span::styled(
                format_rate(overall.completion_rate),
                theme::accent().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  ", theme::dim()),
            Span::styled(rate_bar(overall.completion_rate, BAR_WIDTH), theme::accent()),
            Span::styled(
                format!("  {}/{} days", overall.total_written, overall.total_goal),
                theme::dim(),
            ),
        ]),
        Line::from(Span::styled(format!("  {}", report.pacing), pacing_style)),
        Line::from(""),
    ];

    for week in &report.status.weeks {
        lines.extend(week_lines(week, report.today));
    }

    if report.wrote_today() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  ✓ Today's writing is in",
            theme::green(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn week_lines(week: &WeekStatus, today: NaiveDate) -> Vec<Line<'static>> {
    let range = format!("{} ~ {}", week.start.format("%m/%d"), week.end.format("%m/%d"));

    if !week.is_graded {
        return vec![Line::from(vec![
            Span::styled(format!("  {} ", week.name), theme::sky()),
            Span::styled(format!("{}  ", range), theme::dim()),
            Span::styled(format!("{} days (warm-up)", week.written), theme::sky()),
        ])];
    }

    let (marker, name_style) = if week.goal_met() {
        ("●", theme::green())
    } else if week.is_current {
        ("◉", theme::accent().add_modifier(Modifier::BOLD))
    } else if week.is_upcoming(today) {
        ("○", theme::dim())
    } else {
        ("✗", theme::red())
    };
    let bar_style = if week.goal_met() {
        theme::green()
    } else {
        theme::accent()
    };

    vec![
        Line::from(vec![
            Span::styled(format!("  {} ", marker), name_style),
            Span::styled(format!("{} ", week.name), name_style),
            Span::styled(range, theme::dim()),
        ]),
        Line::from(vec![
            Span::styled("    ", theme::dim()),
            Span::styled(rate_bar(week.rate, BAR_WIDTH), bar_style),
            Span::styled(
                format!("  {}/{} ({})", week.written, week.goal, format_rate(week.rate)),
                theme::dim(),
            ),
        ]),
    ]
}
