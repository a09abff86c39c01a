use json::JsonValue;

pub mod leaderboard;
pub mod level;
pub mod run;

// The API occasionally serves numbers where strings are expected; those are
// kept by dumping their JSON representation instead of being dropped.
fn as_display_string(value: &JsonValue) -> Option<String> {
    if value.is_null() {
        return None;
    }
    match value.as_str() {
        Some(s) => Some(s.to_string()),
        None => Some(value.dump()),
    }
}
