pub mod dates;
pub mod format;
