use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{detail, info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Writes the default configuration (overtime cutoffs, credit threshold,
/// default output format) to `path`, creating the directory if missing.
pub fn handle(path: &Path) -> AppResult<()> {
    info("Initializing rAttendance…");

    Config::init_all(path)?;

    let cfg = Config::load(path)?;
    detail("Config file", path.display());
    detail("Early cutoff", &cfg.early_cutoff);
    detail("Late cutoff", &cfg.late_cutoff);
    detail("Min overtime", format!("{} min", cfg.min_overtime_minutes));
    detail("Output format", cfg.default_format.as_str());

    success("rAttendance initialization completed!");
    Ok(())
}
