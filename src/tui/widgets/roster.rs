use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, members: &[String], selected: usize) {
    let block = Block::default()
        .title(Span::styled(" Participants ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(true))
        .style(theme::surface());

    if members.is_empty() {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled("  Nobody is on the roster yet.", theme::amber())),
            Line::from(Span::styled(
                "  Add names under [roster] members in config.toml",
                theme::dim(),
            )),
        ];
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let items: Vec<ListItem> = members
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let line = if i == selected {
                Line::from(vec![
                    Span::styled("  ▸ ", theme::accent()),
                    Span::styled(name.as_str(), theme::accent().add_modifier(Modifier::BOLD)),
                ])
            } else {
                Line::from(vec![
                    Span::styled("    ", theme::dim()),
                    Span::styled(name.as_str(), theme::bold()),
                ])
            };
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
