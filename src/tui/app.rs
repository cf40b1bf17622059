use anyhow::Result;
use chrono::{Duration, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    DefaultTerminal, Frame,
};
use rusqlite::Connection;

use crate::admin::{collect_board, BoardRow, RankKey};
use crate::config::AppConfig;
use crate::db::repository::EntryRepo;
use crate::progress::ParticipantReport;
use crate::state::{AppState, View};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{board, calendar, header, progress, roster, statusbar};
use crate::utils::dates::{self, format_iso};
use crate::utils::format::fit_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Writing,
    Searching,
    DayDetail,
}

pub struct App {
    pub state: AppState,
    pub config: AppConfig,
    pub today: NaiveDate,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub input_error: Option<String>, // shown in the active popup
    pub roster_idx: usize,

    // Loaded for the current view
    pub report: Option<ParticipantReport>,
    pub load_error: Option<String>,
    pub cursor: NaiveDate,
    pub board: Vec<BoardRow>,
    pub rank_key: RankKey,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let today = dates::today();
        App {
            state: AppState::default(),
            config,
            today,
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_error: None,
            roster_idx: 0,
            report: None,
            load_error: None,
            cursor: today,
            board: Vec::new(),
            rank_key: RankKey::default(),
        }
    }

    /// Re-read whatever the current view shows.
    pub fn reload(&mut self, conn: &Connection) {
        match self.state.view().clone() {
            View::Challenge { participant } => self.load_report(conn, &participant),
            View::AdminDashboard => {
                self.board = collect_board(conn, &self.config, self.today);
            }
            View::Home | View::AdminLogin => {}
        }
    }

    fn load_report(&mut self, conn: &Connection, participant: &str) {
        match ParticipantReport::load(conn, &self.config.challenge, participant, self.today) {
            Ok(report) => {
                self.report = Some(report);
                self.load_error = None;
            }
            Err(err) => {
                warn!("could not load log for {}: {}", participant, err);
                self.report = None;
                self.load_error = Some(format!("Could not load {}'s log: {}", participant, err));
            }
        }
    }

    pub fn tick(&mut self, conn: &Connection) {
        // Roll over at midnight
        let now = dates::today();
        if now != self.today {
            info!("date changed to {}", now);
            self.today = now;
            self.reload(conn);
        }
    }

    fn clamp_to_window(&self, date: NaiveDate) -> NaiveDate {
        let weeks = &self.config.challenge.weeks;
        date.clamp(weeks.start(), weeks.end())
    }

    pub fn handle_key(&mut self, key: KeyEvent, conn: &Connection) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Writing => self.handle_writing_key(key, conn),
            InputMode::Searching => self.handle_search_key(key),
            InputMode::DayDetail => {
                // Any key closes the day popup
                self.input_mode = InputMode::Normal;
            }
            InputMode::Normal => {
                if self.state.notice().is_some() {
                    self.state = self.state.without_notice();
                }
                match self.state.view() {
                    View::Home => self.handle_home_key(key, conn),
                    View::Challenge { .. } => self.handle_challenge_key(key),
                    View::AdminLogin => self.handle_login_key(key, conn),
                    View::AdminDashboard => self.handle_dashboard_key(key, conn),
                }
            }
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent, conn: &Connection) {
        let members = &self.config.roster.members;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.roster_idx = self.roster_idx.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.roster_idx + 1 < members.len() {
                    self.roster_idx += 1;
                }
            }
            KeyCode::Enter => self.open_selected(conn),
            KeyCode::Char('a') => {
                self.state = self.state.request_admin();
                self.input_buffer.clear();
                self.input_error = None;
            }
            _ => {}
        }
    }

    fn open_selected(&mut self, conn: &Connection) {
        let Some(name) = self.config.roster.members.get(self.roster_idx).cloned() else {
            return;
        };
        match self.state.open_challenge(&name, &self.config.roster.members) {
            Ok(next) => {
                self.state = next;
                self.cursor = self.clamp_to_window(self.today);
                self.load_report(conn, &name);
            }
            Err(err) => {
                self.state = self.state.with_notice(err.to_string());
            }
        }
    }

    fn go_home(&mut self) {
        self.state = self.state.go_home();
        self.report = None;
        self.load_error = None;
        self.board.clear();
    }

    fn handle_challenge_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('h') => self.go_home(),
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-7),
            KeyCode::Down => self.move_cursor(7),
            KeyCode::Enter => {
                let clickable = self
                    .report
                    .as_ref()
                    .and_then(|r| r.calendar.cell(self.cursor))
                    .is_some_and(|cell| cell.clickable);
                if clickable {
                    self.input_mode = InputMode::DayDetail;
                }
            }
            KeyCode::Char('w') => {
                if self.report.is_none() {
                    return;
                }
                if self.cursor > self.today {
                    self.state = self
                        .state
                        .with_notice(format!("{} hasn't come yet", format_iso(self.cursor)));
                    return;
                }
                self.input_mode = InputMode::Writing;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Char('/') => {
                if self.report.is_some() {
                    self.input_mode = InputMode::Searching;
                    self.input_buffer.clear();
                }
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, days: i64) {
        let moved = self
            .cursor
            .checked_add_signed(Duration::days(days))
            .unwrap_or(self.cursor);
        self.cursor = self.clamp_to_window(moved);
    }

    fn handle_writing_key(&mut self, key: KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                self.input_buffer.push('\n');
            }
            KeyCode::Enter => self.save_entry(conn),
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.input_error = None;
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                self.input_error = None;
            }
            _ => {}
        }
    }

    fn save_entry(&mut self, conn: &Connection) {
        let Some(participant) = self.state.participant().map(str::to_string) else {
            return;
        };
        if self.input_buffer.trim().is_empty() {
            self.input_error = Some("Write something first".to_string());
            return;
        }

        let date = self.cursor;
        if let Err(err) = EntryRepo::append(conn, &participant, date, &self.input_buffer) {
            warn!("saving entry for {} failed: {}", participant, err);
            self.input_error = Some(format!("Could not save: {}", err));
            return;
        }

        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.input_error = None;
        self.load_report(conn, &participant);

        let notice = match &self.report {
            Some(report) => format!("Saved for {}. {}", format_iso(date), report.pacing),
            None => format!("Saved for {}", format_iso(date)),
        };
        self.state = self.state.with_notice(notice);
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.input_buffer.clear();
                self.input_error = None;
                self.go_home();
            }
            KeyCode::Enter => {
                let result = self.state.admin_login(
                    &self.input_buffer,
                    self.today,
                    &self.config.admin.password_suffix,
                );
                self.input_buffer.clear();
                match result {
                    Ok(next) => {
                        info!("organizer dashboard opened");
                        self.state = next;
                        self.input_error = None;
                        self.rank_key = RankKey::default();
                        self.reload(conn);
                    }
                    Err(err) => {
                        self.input_error = Some(err.to_string());
                    }
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                self.input_error = None;
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('h') => self.go_home(),
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.rank_key = self.next_rank_key();
            }
            KeyCode::Char('u') => self.reload(conn),
            _ => {}
        }
    }

    /// Overall, then each graded week in order, then back to overall.
    fn next_rank_key(&self) -> RankKey {
        let keys: Vec<RankKey> = std::iter::once(RankKey::Overall)
            .chain(
                self.config
                    .challenge
                    .weeks
                    .graded_weeks()
                    .map(|w| RankKey::Week(w.name.clone())),
            )
            .collect();
        let pos = keys.iter().position(|k| *k == self.rank_key).unwrap_or(0);
        keys[(pos + 1) % keys.len()].clone()
    }

    // ─── Drawing ─────────────────────────────────────────────────────────────

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            chunks[0],
            self.state.view().title(),
            self.today,
            self.config.challenge.weeks.weekly_goal(),
        );

        match self.state.view() {
            View::Home => self.draw_home(frame, chunks[1]),
            View::Challenge { .. } => self.draw_challenge(frame, chunks[1]),
            View::AdminLogin => self.draw_login(frame, chunks[1]),
            View::AdminDashboard => board::render(
                frame,
                chunks[1],
                &self.board,
                &self.rank_key,
                self.today,
                self.config.challenge.total_goal,
            ),
        }

        statusbar::render(frame, chunks[2], self.hints(), self.state.notice());

        match self.input_mode {
            InputMode::Writing => self.draw_write_popup(frame),
            InputMode::Searching => self.draw_search_popup(frame),
            InputMode::DayDetail => self.draw_day_popup(frame),
            InputMode::Normal => {}
        }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.view() {
            View::Home => &[
                ("[↑ ↓]", "choose"),
                ("[Enter]", "open"),
                ("[a]", "organizer"),
                ("[q]", "quit"),
            ],
            View::Challenge { .. } => &[
                ("[← → ↑ ↓]", "move"),
                ("[Enter]", "read day"),
                ("[w]", "write"),
                ("[/]", "search"),
                ("[Esc]", "home"),
            ],
            View::AdminLogin => &[("[Enter]", "log in"), ("[Esc]", "back")],
            View::AdminDashboard => &[
                ("[r]", "rank by"),
                ("[u]", "refresh"),
                ("[Esc]", "home"),
            ],
        }
    }

    fn draw_home(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(4), // banner
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        header::render_banner(frame, rows[1]);

        let list_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(50),
                Constraint::Percentage(25),
            ])
            .split(rows[3])[1];
        roster::render(frame, list_area, &self.config.roster.members, self.roster_idx);
    }

    fn draw_challenge(&self, frame: &mut Frame, area: Rect) {
        let Some(report) = &self.report else {
            let message = self
                .load_error
                .clone()
                .unwrap_or_else(|| "Loading…".to_string());
            let paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(format!("  {}", message), theme::red())),
                Line::from(""),
                Line::from(Span::styled("  [Esc] back to the roster", theme::dim())),
            ]);
            frame.render_widget(paragraph, area);
            return;
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        progress::render(frame, columns[0], report);
        calendar::render(frame, columns[1], &report.calendar, self.cursor);
    }

    fn draw_login(&self, frame: &mut Frame, area: Rect) {
        let height = if self.input_error.is_some() { 8 } else { 6 };
        let popup = centered(area, 50, height);

        let masked = "•".repeat(self.input_buffer.chars().count());
        let mut text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Password: ", theme::dim()),
                Span::styled(masked, theme::accent().add_modifier(Modifier::BOLD)),
                Span::styled("█", theme::amber()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  Today's date as YYYYMMDD plus the organizer word",
                theme::dim(),
            )),
        ];
        if let Some(err) = &self.input_error {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(format!("  ✗ {}", err), theme::red())));
        }

        let block = popup_block(" Organizer login ", self.input_error.is_some());
        frame.render_widget(Paragraph::new(text).block(block), popup);
    }

    fn draw_write_popup(&self, frame: &mut Frame) {
        let popup = centered(frame.area(), 60, 12);
        frame.render_widget(Clear, popup);

        let mut text = vec![Line::from(vec![
            Span::styled("  Writing for ", theme::dim()),
            Span::styled(format_iso(self.cursor), theme::accent()),
        ])];
        text.push(Line::from(""));

        let mut body: Vec<Line> = self
            .input_buffer
            .split('\n')
            .map(|l| Line::from(Span::styled(format!("  {}", l), theme::bold())))
            .collect();
        if let Some(last) = body.last_mut() {
            last.push_span(Span::styled("█", theme::amber()));
        }
        text.extend(body);

        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            "  [Enter] save  ·  [Alt+Enter] new line  ·  [Esc] cancel",
            theme::dim(),
        )));
        if let Some(err) = &self.input_error {
            text.push(Line::from(Span::styled(format!("  ✗ {}", err), theme::red())));
        }

        let block = popup_block(" Today's writing ", self.input_error.is_some());
        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup);
    }

    fn draw_search_popup(&self, frame: &mut Frame) {
        let Some(report) = &self.report else {
            return;
        };
        let area = frame.area();
        let popup = centered(area, 70, area.height.saturating_sub(4).min(20));
        frame.render_widget(Clear, popup);

        let mut text = vec![
            Line::from(vec![
                Span::styled("  Search: ", theme::dim()),
                Span::styled(self.input_buffer.as_str(), theme::accent()),
                Span::styled("█", theme::amber()),
            ]),
            Line::from(""),
        ];

        let text_cols = (popup.width as usize).saturating_sub(18);
        if self.input_buffer.trim().is_empty() {
            text.push(Line::from(Span::styled(
                "  Type a keyword to search past entries",
                theme::dim(),
            )));
        } else {
            let hits = report.search(&self.input_buffer);
            if hits.is_empty() {
                text.push(Line::from(Span::styled(
                    format!("  No entries match '{}'", self.input_buffer),
                    theme::amber(),
                )));
            }
            for entry in hits {
                let first_line = entry.text.trim().lines().next().unwrap_or("");
                text.push(Line::from(vec![
                    Span::styled(format!("  {}  ", format_iso(entry.date)), theme::sky()),
                    Span::styled(fit_width(first_line, text_cols), theme::bold()),
                ]));
            }
        }

        let block = popup_block(" Search entries ", false);
        frame.render_widget(Paragraph::new(text).block(block), popup);
    }

    fn draw_day_popup(&self, frame: &mut Frame) {
        let Some(cell) = self
            .report
            .as_ref()
            .and_then(|r| r.calendar.cell(self.cursor))
        else {
            return;
        };
        let area = frame.area();
        let popup = centered(area, 60, area.height.saturating_sub(4).min(18));
        frame.render_widget(Clear, popup);

        let mut text = vec![Line::from(vec![
            Span::styled(
                format!("  {}", cell.date.format("%A, %b %d")),
                theme::accent().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", cell.state.label()), theme::dim()),
        ])];

        if cell.contents.is_empty() {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled("  Nothing written this day", theme::dim())));
        }
        for content in &cell.contents {
            text.push(Line::from(""));
            for line in content.lines() {
                text.push(Line::from(Span::styled(format!("  {}", line), theme::bold())));
            }
        }
        text.push(Line::from(""));
        text.push(Line::from(Span::styled("  [any key] close", theme::dim())));

        let block = popup_block(" Entries ", false);
        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup);
    }
}

fn popup_block(title: &'static str, failed: bool) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if failed { theme::red() } else { theme::amber() })
        .style(theme::surface())
}

/// A box `percent_x` wide and `height` tall in the middle of `area`.
fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Run the TUI event loop.
pub fn run(conn: Connection, config: AppConfig) -> Result<()> {
    let mut app = App::new(config);
    info!(
        "starting TUI with {} roster members",
        app.config.roster.members.len()
    );

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &conn);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, conn: &Connection) -> Result<()> {
    let events = EventHandler::new(1000);

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key, conn);
                if app.should_quit {
                    break;
                }
            }
            Event::Resize => {}
            Event::Tick => app.tick(conn),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::db::repository::ParticipantRepo;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, conn: &Connection, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)), conn);
        }
    }

    fn setup() -> (App, Connection) {
        let mut config = AppConfig::default();
        config.roster.members = vec!["alice".into(), "bob".into()];
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        ParticipantRepo::sync_roster(&conn, &config.roster.members).unwrap();

        let mut app = App::new(config);
        // Pin the clock inside the default window
        app.today = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        (app, conn)
    }

    #[test]
    fn enter_opens_selected_participant() {
        let (mut app, conn) = setup();
        app.handle_key(key(KeyCode::Down), &conn);
        app.handle_key(key(KeyCode::Enter), &conn);
        assert_eq!(app.state.participant(), Some("bob"));
        assert!(app.report.is_some());
        assert_eq!(app.cursor, app.today);

        app.handle_key(key(KeyCode::Esc), &conn);
        assert_eq!(app.state.view(), &View::Home);
        assert!(app.report.is_none());
    }

    #[test]
    fn writing_saves_for_cursor_day_and_leaves_notice() {
        let (mut app, conn) = setup();
        app.handle_key(key(KeyCode::Enter), &conn);
        app.handle_key(key(KeyCode::Left), &conn);
        app.handle_key(key(KeyCode::Char('w')), &conn);
        assert_eq!(app.input_mode, InputMode::Writing);

        app.handle_key(key(KeyCode::Enter), &conn);
        assert_eq!(app.input_error.as_deref(), Some("Write something first"));

        type_text(&mut app, &conn, "first draft");
        app.handle_key(key(KeyCode::Enter), &conn);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.state.notice().is_some_and(|n| n.starts_with("Saved for 2025-12-09")));

        let entries = EntryRepo::load(&conn, "alice").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "first draft");
        let report = app.report.as_ref().unwrap();
        assert!(report.written.contains(&NaiveDate::from_ymd_opt(2025, 12, 9).unwrap()));
    }

    #[test]
    fn future_days_cannot_be_written() {
        let (mut app, conn) = setup();
        app.handle_key(key(KeyCode::Enter), &conn);
        app.handle_key(key(KeyCode::Down), &conn);
        app.handle_key(key(KeyCode::Char('w')), &conn);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.state.notice().is_some());
    }

    #[test]
    fn cursor_stays_inside_window() {
        let (mut app, conn) = setup();
        app.handle_key(key(KeyCode::Enter), &conn);
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Up), &conn);
        }
        assert_eq!(app.cursor, app.config.challenge.weeks.start());
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Down), &conn);
        }
        assert_eq!(app.cursor, app.config.challenge.weeks.end());
    }

    #[test]
    fn organizer_login_and_rank_cycling() {
        let (mut app, conn) = setup();
        app.handle_key(key(KeyCode::Char('a')), &conn);
        assert_eq!(app.state.view(), &View::AdminLogin);

        type_text(&mut app, &conn, "nope");
        app.handle_key(key(KeyCode::Enter), &conn);
        assert!(app.input_error.is_some());
        assert_eq!(app.state.view(), &View::AdminLogin);

        type_text(&mut app, &conn, "20251210pen");
        app.handle_key(key(KeyCode::Enter), &conn);
        assert_eq!(app.state.view(), &View::AdminDashboard);
        assert_eq!(app.board.len(), 2);

        app.handle_key(key(KeyCode::Char('r')), &conn);
        assert_eq!(app.rank_key, RankKey::Week("Week 1".into()));
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Char('r')), &conn);
        }
        assert_eq!(app.rank_key, RankKey::Overall);
    }

    #[test]
    fn centered_box_fits_small_areas() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = centered(area, 50, 12);
        assert_eq!(popup, Rect::new(5, 0, 10, 5));
    }
}
