use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use rusqlite::Connection;

use crate::admin::{collect_board, rank, today_sheet, verify_password, RankKey};
use crate::config::AppConfig;
use crate::db::repository::{EntryRepo, ParticipantRepo};
use crate::models::{Entry, WeekStatus};
use crate::progress::{CellState, ParticipantReport, Pacing};
use crate::utils::dates::{self, format_iso};
use crate::utils::format::{fit_width, format_rate, pad_width, rate_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const ORANGE: &str = "\x1b[38;2;255;107;53m";
const SKY: &str = "\x1b[38;2;58;187;248m";

const BAR_WIDTH: usize = 24;

// ─── Init ────────────────────────────────────────────────────────────────────

pub fn handle_init() -> Result<()> {
    let path = AppConfig::config_path()?;
    if path.exists() {
        println!("  Config already exists at {}", path.display());
        return Ok(());
    }
    AppConfig::default().save_to(&path)?;
    println_colored!(GREEN, "  ✓ Wrote default config to {}", path.display());
    println_colored!(DIM, "  Add participants under [roster] members = [...]");
    Ok(())
}

// ─── Members ─────────────────────────────────────────────────────────────────

pub fn handle_members(conn: &Connection, config: &AppConfig) -> Result<()> {
    let members = ParticipantRepo::list(conn).context("Listing participants")?;
    println!();
    if config.roster.members.is_empty() {
        println_colored!(AMBER, "  The roster is empty. Add names to [roster] in config.toml");
        if let Ok(path) = AppConfig::config_path() {
            println_colored!(DIM, "  {}", path.display());
        }
    } else {
        println_colored!(ORANGE, "  Participants ({})", config.roster.members.len());
        println!();
        for name in config.roster.members.iter().filter(|m| members.contains(m)) {
            println!("  {}", name);
        }
    }
    println!();
    Ok(())
}

// ─── Write ───────────────────────────────────────────────────────────────────

pub fn handle_write(
    conn: &Connection,
    config: &AppConfig,
    participant: &str,
    text: &str,
    date: Option<NaiveDate>,
) -> Result<()> {
    let today = dates::today();
    let date = date.unwrap_or(today);
    if date > today {
        bail!("Cannot write for {}: it is after today ({})", date, today);
    }
    if text.trim().is_empty() {
        bail!("Entry text is empty");
    }

    EntryRepo::append(conn, participant, date, text)
        .with_context(|| format!("Saving entry for {}", participant))?;

    let report = ParticipantReport::load(conn, &config.challenge, participant, today)
        .with_context(|| format!("Loading entries for {}", participant))?;

    println_colored!(GREEN, "  ✓ Saved entry for {}", format_iso(date));
    let schedule = &config.challenge.weeks;
    if date < schedule.start() || date > schedule.end() {
        println_colored!(DIM, "  (outside the challenge window, so it won't count toward goals)");
    }
    print_pacing(&report.pacing);
    Ok(())
}

// ─── Status ──────────────────────────────────────────────────────────────────

pub fn handle_status(
    conn: &Connection,
    config: &AppConfig,
    participant: &str,
    today: Option<NaiveDate>,
) -> Result<()> {
    let today = today.unwrap_or_else(dates::today);
    let report = ParticipantReport::load(conn, &config.challenge, participant, today)
        .with_context(|| format!("Loading entries for {}", participant))?;
    let overall = &report.status.overall;

    println!();
    println_colored!(
        ORANGE,
        "  {}'s challenge progress  (weekly goal: {} days)",
        participant,
        config.challenge.weeks.weekly_goal()
    );
    println!();
    println_colored!(BOLD, "  Overall completion   {}", format_rate(overall.completion_rate));
    println!(
        "  {}  {} / {} days",
        rate_bar(overall.completion_rate, BAR_WIDTH),
        overall.total_written,
        overall.total_goal
    );
    print_pacing(&report.pacing);
    match report.status.current_week() {
        Some(week) if week.is_graded => {
            println_colored!(DIM, "  Now in {}: {} of {} days so far", week.name, week.written, week.goal);
        }
        Some(week) => println_colored!(DIM, "  Now in {} (warm-up)", week.name),
        None => {}
    }

    println!();
    println_colored!(DIM, "  Weeks");
    for week in &report.status.weeks {
        print_week(week, today);
    }
    println!();
    Ok(())
}

fn week_label(week: &WeekStatus) -> String {
    format!(
        "[{}] {} ~ {}",
        week.name,
        week.start.format("%m/%d"),
        week.end.format("%m/%d")
    )
}

fn print_week(week: &WeekStatus, today: NaiveDate) {
    let label = week_label(week);
    if !week.is_graded {
        println_colored!(SKY, "  {}: {} days written (warm-up)", label, week.written);
        return;
    }

    let suffix = if week.is_upcoming(today) {
        " (upcoming)"
    } else if week.is_current {
        " (current week)"
    } else {
        ""
    };
    let color = if week.goal_met() {
        GREEN
    } else if week.is_current {
        BOLD
    } else {
        DIM
    };
    println_colored!(color, "  {}{}", label, suffix);
    println!(
        "  {}  {}/{} days ({})",
        rate_bar(week.rate, BAR_WIDTH),
        week.written,
        week.goal,
        format_rate(week.rate)
    );
}

fn print_pacing(pacing: &Pacing) {
    let color = if pacing.is_behind() { AMBER } else { GREEN };
    println_colored!(color, "  {}", pacing);
}

// ─── Calendar ────────────────────────────────────────────────────────────────

pub fn handle_calendar(
    conn: &Connection,
    config: &AppConfig,
    participant: &str,
    today: Option<NaiveDate>,
) -> Result<()> {
    let today = today.unwrap_or_else(dates::today);
    let report = ParticipantReport::load(conn, &config.challenge, participant, today)
        .with_context(|| format!("Loading entries for {}", participant))?;

    println!();
    println_colored!(ORANGE, "  {}'s writing calendar", participant);
    println!();
    println_colored!(DIM, "   Sun  Mon  Tue  Wed  Thu  Fri  Sat");

    for row in &report.calendar.rows {
        let mut line = String::from("  ");
        for slot in row {
            match slot {
                None => line.push_str("     "),
                Some(cell) => {
                    let (mark, color) = match cell.state {
                        CellState::Complete => ("●", GREEN),
                        CellState::Missed => ("✗", RED),
                        CellState::Today => ("◌", SKY),
                        CellState::Future => ("·", DIM),
                    };
                    line.push_str(&format!(
                        " {}{:>2}{}\x1b[0m ",
                        color,
                        cell.date.day(),
                        mark
                    ));
                }
            }
        }
        println!("{}", line);
    }

    println!();
    println_colored!(DIM, "  ● written   ✗ missed   ◌ today   · upcoming");

    let written: Vec<_> = report
        .calendar
        .days()
        .filter(|c| !c.contents.is_empty())
        .collect();
    if !written.is_empty() {
        println!();
        for cell in written {
            let extra = cell.contents.len().saturating_sub(1);
            if extra > 0 {
                println!("  {}  {}  (+{} more)", format_iso(cell.date), cell.preview(), extra);
            } else {
                println!("  {}  {}", format_iso(cell.date), cell.preview());
            }
        }
    }
    println!();
    Ok(())
}

// ─── Search ──────────────────────────────────────────────────────────────────

pub fn handle_search(
    conn: &Connection,
    config: &AppConfig,
    participant: &str,
    query: &str,
) -> Result<()> {
    let report = ParticipantReport::load(conn, &config.challenge, participant, dates::today())
        .with_context(|| format!("Loading entries for {}", participant))?;

    println!();
    if query.trim().is_empty() {
        println_colored!(DIM, "  Type a keyword to search past entries");
        println!();
        return Ok(());
    }

    let hits = report.search(query);
    if hits.is_empty() {
        println_colored!(AMBER, "  No entries match '{}'", query);
    } else {
        println_colored!(GREEN, "  Found {} entries matching '{}'", hits.len(), query);
        println!();
        for entry in hits {
            print_entry_line(entry, 60);
        }
    }
    println!();
    Ok(())
}

fn print_entry_line(entry: &Entry, width: usize) {
    let first_line = entry.text.trim().lines().next().unwrap_or("");
    println!("  {}  {}", format_iso(entry.date), fit_width(first_line, width));
}

// ─── Admin ───────────────────────────────────────────────────────────────────

pub fn handle_admin(
    conn: &Connection,
    config: &AppConfig,
    password: &str,
    rank_by: &str,
    today: Option<NaiveDate>,
) -> Result<()> {
    let real_today = dates::today();
    if !verify_password(password, real_today, &config.admin.password_suffix) {
        bail!(
            "Wrong password. Combine today's date ({}) with the organizer suffix",
            real_today.format("%Y%m%d")
        );
    }

    let key = RankKey::from(rank_by);
    if let RankKey::Week(name) = &key {
        match config.challenge.weeks.find(name) {
            Some(week) if week.graded => {}
            _ => {
                let graded: Vec<&str> = config
                    .challenge
                    .weeks
                    .graded_weeks()
                    .map(|w| w.name.as_str())
                    .collect();
                bail!("Unknown graded week '{}'. Use overall or one of: {}", name, graded.join(", "));
            }
        }
    }

    let today = today.unwrap_or(real_today);
    let rows = collect_board(conn, config, today);
    let goal = config.challenge.total_goal;
    let name_width = rows
        .iter()
        .map(|r| unicode_width::UnicodeWidthStr::width(r.participant.as_str()))
        .max()
        .unwrap_or(0)
        .max(11);

    println!();
    println_colored!(ORANGE, "  Writing today ({})", format_iso(today));
    println!();
    println_colored!(
        DIM,
        "  {}  Today  Total/{}  Rate",
        pad_width("Participant", name_width),
        goal
    );
    for row in today_sheet(&rows) {
        if let Some(err) = &row.error {
            println_colored!(RED, "  {}  {}", pad_width(&row.participant, name_width), err);
            continue;
        }
        let mark = if row.wrote_today {
            format!("{}✓\x1b[0m", GREEN)
        } else {
            format!("{}✗\x1b[0m", RED)
        };
        println!(
            "  {}  {}      {:>8}  {}",
            pad_width(&row.participant, name_width),
            mark,
            row.total_written,
            format_rate(row.completion_rate)
        );
    }

    println!();
    println_colored!(ORANGE, "  Ranking by {}", key.label());
    println!();
    let ranked = rank(&rows, &key).into_iter().filter(|row| row.error.is_none());
    for (place, row) in ranked.enumerate() {
        let score = match &key {
            RankKey::Overall => format_rate(row.completion_rate),
            RankKey::Week(name) => format!("{} days", row.written_in(name)),
        };
        println!(
            "  {:>2}. {}  {}",
            place + 1,
            pad_width(&row.participant, name_width),
            score
        );
    }
    println!();
    Ok(())
}

// ─── Entries / Export ────────────────────────────────────────────────────────

pub fn handle_entries(conn: &Connection, config: &AppConfig, participant: &str) -> Result<()> {
    let report = ParticipantReport::load(conn, &config.challenge, participant, dates::today())
        .with_context(|| format!("Loading entries for {}", participant))?;

    println!();
    println_colored!(ORANGE, "  {}'s entries ({})", participant, report.entries.len());
    for entry in report.entries_newest_first() {
        println!();
        println_colored!(BOLD, "  {}", format_iso(entry.date));
        for line in entry.text.lines() {
            println!("    {}", line);
        }
    }
    println!();
    Ok(())
}

pub fn handle_export(conn: &Connection, participant: &str) -> Result<()> {
    let entries = EntryRepo::load_by_date(conn, participant)
        .with_context(|| format!("Loading entries for {}", participant))?;
    let json = serde_json::to_string_pretty(&entries).context("Serializing entries")?;
    println!("{}", json);
    Ok(())
}
