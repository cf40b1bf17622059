pub mod aggregate;
pub mod calculator;
pub mod calendar;
pub mod pacing;
pub mod report;
pub mod search;

pub use aggregate::{aggregate, WrittenDays};
pub use calculator::compute_status;
pub use calendar::{build_calendar, Calendar, CellState, DayCell};
pub use pacing::{motivate, Pacing};
pub use report::ParticipantReport;
pub use search::search;
