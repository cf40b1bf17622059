use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::progress::{Calendar, CellState, DayCell};
use crate::tui::theme;
use crate::utils::format::pad_width;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn state_style(state: CellState) -> Style {
    match state {
        CellState::Complete => theme::green(),
        CellState::Missed => theme::red(),
        CellState::Today => theme::sky().add_modifier(Modifier::BOLD),
        CellState::Future => theme::dim(),
    }
}

fn mark(state: CellState) -> &'static str {
    match state {
        CellState::Complete => "●",
        CellState::Missed => "✗",
        CellState::Today => "◌",
        CellState::Future => "·",
    }
}

/// Two text lines per week: day numbers, then a preview of what was written.
pub fn render(frame: &mut Frame, area: Rect, calendar: &Calendar, cursor: NaiveDate) {
    let block = Block::default()
        .title(Span::styled(" Calendar ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(true))
        .style(theme::surface());

    let inner_width = area.width.saturating_sub(2) as usize;
    let col = (inner_width / 7).max(4);

    let mut lines = vec![Line::from(
        WEEKDAYS
            .iter()
            .map(|d| Span::styled(pad_width(d, col), theme::dim()))
            .collect::<Vec<_>>(),
    )];

    for row in &calendar.rows {
        let mut numbers = Vec::with_capacity(7);
        let mut previews = Vec::with_capacity(7);
        for slot in row {
            match slot {
                None => {
                    numbers.push(Span::raw(" ".repeat(col)));
                    previews.push(Span::raw(" ".repeat(col)));
                }
                Some(cell) => {
                    let (number, preview) = cell_spans(cell, col, cell.date == cursor);
                    numbers.push(number);
                    previews.push(preview);
                }
            }
        }
        lines.push(Line::from(numbers));
        lines.push(Line::from(previews));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("● written  ", theme::green()),
        Span::styled("✗ missed  ", theme::red()),
        Span::styled("◌ today  ", theme::sky()),
        Span::styled("· upcoming", theme::dim()),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn cell_spans(cell: &DayCell, col: usize, selected: bool) -> (Span<'static>, Span<'static>) {
    let mut style = state_style(cell.state);
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let number = format!("{:>2}{}", cell.date.day(), mark(cell.state));
    let preview_style = if cell.contents.is_empty() {
        theme::dim()
    } else {
        theme::bold()
    };
    // One column of gap between cells
    let preview = pad_width(&cell.preview(), col.saturating_sub(1));

    (
        Span::styled(pad_width(&number, col), style),
        Span::styled(format!("{} ", preview), preview_style),
    )
}
