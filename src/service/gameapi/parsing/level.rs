use json::JsonValue;

use crate::model::level::LevelInfo;

use super::as_display_string;

/// Level metadata sits under the "levelInfo" key; missing or malformed
/// fields fall back to the display defaults.
pub fn parse_level_info(json: &JsonValue) -> LevelInfo {
    let info = &json["levelInfo"];

    LevelInfo {
        name: info["name"].as_str().unwrap_or("Unknown").to_string(),
        author: info["author"].as_str().unwrap_or("Unknown").to_string(),
        created_at: as_display_string(&info["created_at"]).unwrap_or_else(|| "N/A".to_string()),
        likes: info["like_count"].as_u32().unwrap_or(0),
    }
}
