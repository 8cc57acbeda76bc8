pub mod lateness;
pub mod overtime;
pub mod schedule;

pub use lateness::{compute_lateness, compute_lateness_for};
pub use overtime::{OvertimeRules, compute_overtime};
pub use schedule::{ShiftSchedule, ShiftWindow, resolve_schedule};
