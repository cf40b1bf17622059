pub mod entry;
pub mod stats;
pub mod week;

pub use entry::Entry;
pub use stats::{ChallengeStatus, OverallProgress, WeekStatus};
pub use week::{Schedule, ScheduleError, WeekDefinition};
