//! Opening hours display formatting

use super::catalog::WEEK_DAYS;
use crate::contract::{DayHours, SettingsRecord};

/// Format a record's hours fields into one line per day, Monday to Sunday.
///
/// Times are wall-clock `HH:MM` strings. A closing time earlier than the
/// opening time is rendered as-is, without any next-day marker.
pub fn format_hours_for_display(settings: &SettingsRecord) -> Vec<DayHours> {
    WEEK_DAYS
        .iter()
        .map(|(day, name)| {
            let closed = settings
                .get(&format!("{day}_closed"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false);

            let hours = if closed {
                "Closed".to_string()
            } else {
                let open = time_field(settings, &format!("{day}_open"));
                let close = time_field(settings, &format!("{day}_close"));
                format!("{} - {}", to_12_hour(open), to_12_hour(close))
            };

            DayHours {
                day: (*name).to_string(),
                hours,
            }
        })
        .collect()
}

fn time_field<'a>(settings: &'a SettingsRecord, field_id: &str) -> &'a str {
    settings
        .get(field_id)
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

/// `"18:05"` -> `"6:05 PM"`. Unparseable input is returned unchanged.
fn to_12_hour(time: &str) -> String {
    let Some((hours, minutes)) = time.split_once(':') else {
        return time.to_string();
    };
    let Ok(hour) = hours.parse::<u32>() else {
        return time.to_string();
    };

    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minutes} {period}")
}
