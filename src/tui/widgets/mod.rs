pub mod board;
pub mod calendar;
pub mod header;
pub mod progress;
pub mod roster;
pub mod statusbar;
