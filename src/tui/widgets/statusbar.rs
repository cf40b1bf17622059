use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

/// Key hints, or the pending notice when there is one.
pub fn render(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], notice: Option<&str>) {
    let line = match notice {
        Some(text) => Line::from(Span::styled(text, theme::sky())),
        None => {
            let mut spans = Vec::new();
            for (key, label) in hints {
                spans.push(Span::styled(*key, theme::accent()));
                spans.push(Span::styled(format!(" {}  ", label), theme::dim()));
            }
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
