pub mod auth;
pub mod board;

pub use auth::{daily_password, verify_password};
pub use board::{collect_board, rank, today_sheet, BoardRow, RankKey};
