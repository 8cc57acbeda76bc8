/// ANSI color helper utilities for terminal output.
use crate::models::RowStatus;

pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";

/// Row color mirroring the spreadsheet fills:
/// absent → red, missing punch → yellow, normal → reset
pub fn color_for_status(status: RowStatus) -> &'static str {
    match status {
        RowStatus::Absent => RED,
        RowStatus::MissingPunch => YELLOW,
        RowStatus::Normal => RESET,
    }
}
