use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
    Frame,
};

use crate::admin::{rank, today_sheet, BoardRow, RankKey};
use crate::tui::theme;
use crate::utils::format::format_rate;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    rows: &[BoardRow],
    key: &RankKey,
    today: NaiveDate,
    total_goal: u32,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_today(frame, columns[0], rows, today, total_goal);
    render_ranking(frame, columns[1], rows, key);
}

fn panel(title: String) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface())
}

fn render_today(frame: &mut Frame, area: Rect, rows: &[BoardRow], today: NaiveDate, total_goal: u32) {
    let header = Row::new(vec![
        Cell::from("Participant"),
        Cell::from("Today"),
        Cell::from(format!("Total/{}", total_goal)),
        Cell::from("Rate"),
    ])
    .style(theme::dim());

    let body: Vec<Row> = today_sheet(rows)
        .into_iter()
        .map(|row| {
            if let Some(err) = &row.error {
                return Row::new(vec![
                    Cell::from(row.participant.clone()),
                    Cell::from(Span::styled(err.clone(), theme::red())),
                ]);
            }
            let today_cell = if row.wrote_today {
                Cell::from(Span::styled("✓", theme::green()))
            } else {
                Cell::from(Span::styled("✗", theme::red()))
            };
            Row::new(vec![
                Cell::from(Span::styled(row.participant.clone(), theme::bold())),
                today_cell,
                Cell::from(row.total_written.to_string()),
                Cell::from(format_rate(row.completion_rate)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(7),
    ];
    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(1)
        .block(panel(format!(" Writing today · {} ", today.format("%m/%d"))));
    frame.render_widget(table, area);
}

fn render_ranking(frame: &mut Frame, area: Rect, rows: &[BoardRow], key: &RankKey) {
    let score_title = match key {
        RankKey::Overall => "Rate",
        RankKey::Week(_) => "Days",
    };
    let header = Row::new(vec![Cell::from("#"), Cell::from("Participant"), Cell::from(score_title)])
        .style(theme::dim());

    let body: Vec<Row> = rank(rows, key)
        .into_iter()
        .filter(|row| row.error.is_none())
        .enumerate()
        .map(|(place, row)| {
            let score = match key {
                RankKey::Overall => format_rate(row.completion_rate),
                RankKey::Week(name) => row.written_in(name).to_string(),
            };
            let style = if place == 0 {
                theme::accent().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            Row::new(vec![
                Cell::from((place + 1).to_string()),
                Cell::from(row.participant.clone()),
                Cell::from(score),
            ])
            .style(style)
        })
        .collect();

    let widths = [Constraint::Length(3), Constraint::Min(12), Constraint::Length(7)];
    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(1)
        .block(panel(format!(" Ranking · {} ", key.label())));
    frame.render_widget(table, area);
}
