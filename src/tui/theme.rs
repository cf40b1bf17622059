use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(16, 15, 28);
pub const SURFACE: Color = Color::Rgb(26, 24, 48);
pub const BORDER: Color = Color::Rgb(38, 35, 97);
pub const TEXT: Color = Color::Rgb(236, 234, 244);
pub const TEXT_DIM: Color = Color::Rgb(128, 124, 156);
pub const ORANGE: Color = Color::Rgb(255, 107, 53);
pub const SKY: Color = Color::Rgb(58, 187, 248);
pub const GREEN: Color = Color::Rgb(27, 191, 0);
pub const AMBER: Color = Color::Rgb(240, 170, 60);
pub const RED: Color = Color::Rgb(214, 72, 72);
pub const EMPTY: Color = Color::Rgb(52, 48, 80);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn accent() -> Style {
    Style::default().fg(ORANGE)
}

pub fn sky() -> Style {
    Style::default().fg(SKY)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn empty() -> Style {
    Style::default().fg(EMPTY)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn border(focused: bool) -> Style {
    if focused {
        accent()
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}
