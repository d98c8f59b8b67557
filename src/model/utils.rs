use chrono::Duration as ChronoDuration;

#[must_use]
pub fn format_uptime(td: ChronoDuration) -> String {
    let secs = td.num_seconds().max(0);
    let minutes = secs / 60;
    let seconds = secs % 60;
    format!("{minutes}m, {seconds}s")
}
