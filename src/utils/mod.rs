pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use date::normalize_date;
pub use time::{format_minutes, hours_to_hhmm, parse_time};
