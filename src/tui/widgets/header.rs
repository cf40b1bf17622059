use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, title: &str, today: NaiveDate, weekly_goal: u32) {
    let date_str = today.format("%A, %b %d, %Y").to_string();

    let title_line = Line::from(vec![
        Span::styled("  ✎ dailywrite  ", theme::accent().add_modifier(Modifier::BOLD)),
        Span::styled("·  ", theme::dim()),
        Span::styled(title, theme::bold()),
    ]);

    let date_line = Line::from(vec![
        Span::styled(date_str, theme::dim()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(format!("weekly goal {} days", weekly_goal), theme::sky()),
    ]);

    let text = vec![title_line, Line::from(""), date_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::accent().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

const BANNER: &str = "DAILY WRITE";

/// Large block-letter title for the home screen. Needs four rows.
pub fn render_banner(frame: &mut Frame, area: Rect) {
    // Quadrant glyphs are four cells wide
    let width = (BANNER.len() as u16) * 4;
    let [centered] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);

    let banner = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(theme::accent())
        .lines(vec![Line::from(BANNER)])
        .build();
    frame.render_widget(banner, centered);
}
