/// Completion times arrive as fractional seconds.
pub fn format_time(seconds: Option<f64>) -> String {
    match seconds {
        Some(seconds) => format!("{:.3}s", seconds),
        None => "N/A".to_string(),
    }
}

/// Truncates an ISO-8601 timestamp to its date: "2025-05-04T08:18:45.000Z"
/// becomes "2025-05-04". Values without the separator are shown as-is.
pub fn format_date(timestamp: &str) -> String {
    match timestamp.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => timestamp.to_string(),
    }
}

/// Truncates an ISO-8601 timestamp to second precision and replaces the
/// separator with a space: "2025-05-04T08:18:45.000Z" becomes
/// "2025-05-04 08:18:45". Values without the separator are shown as-is.
pub fn format_date_time(timestamp: &str) -> String {
    if !timestamp.contains('T') {
        return timestamp.to_string();
    }

    let seconds = timestamp.split_once('.').map(|(head, _)| head).unwrap_or(timestamp);
    seconds.replace('T', " ")
}

pub fn format_finished_at(finished_at: Option<&str>) -> String {
    match finished_at {
        Some(timestamp) => format_date_time(timestamp),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_is_rendered_with_three_decimals() {
        assert_eq!(format_time(Some(12.5)), "12.500s");
        assert_eq!(format_time(Some(41.2061)), "41.206s");
    }

    #[test]
    fn missing_time_renders_the_sentinel() {
        assert_eq!(format_time(None), "N/A");
    }

    #[test]
    fn date_truncates_at_the_separator() {
        assert_eq!(format_date("2025-05-04T08:18:45.000Z"), "2025-05-04");
    }

    #[test]
    fn date_passes_non_iso_values_through() {
        assert_eq!(format_date("N/A"), "N/A");
        assert_eq!(format_date("1714809525"), "1714809525");
    }

    #[test]
    fn date_time_drops_subseconds() {
        assert_eq!(format_date_time("2025-05-04T08:18:45.000Z"), "2025-05-04 08:18:45");
    }

    #[test]
    fn date_time_without_subseconds_keeps_the_tail() {
        assert_eq!(format_date_time("2025-05-04T08:18:45Z"), "2025-05-04 08:18:45Z");
    }

    #[test]
    fn date_time_passes_non_iso_values_through() {
        assert_eq!(format_date_time("just now"), "just now");
    }

    #[test]
    fn finished_at_falls_back_to_the_sentinel() {
        assert_eq!(format_finished_at(None), "N/A");
        assert_eq!(
            format_finished_at(Some("2025-05-04T08:18:45.000Z")),
            "2025-05-04 08:18:45"
        );
    }
}
