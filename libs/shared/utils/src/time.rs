use chrono::NaiveTime;

/// Formats a time of day the way the front desk displays it, e.g.
/// "09:45 AM" or "02:00 PM".
pub fn clock_label(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}
