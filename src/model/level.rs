#[derive(Debug, Clone)]
pub struct LevelInfo {
    pub name: String,
    pub author: String,
    pub created_at: String,
    pub likes: u32,
}

impl Default for LevelInfo {
    // Shown when level details are unavailable while the leaderboard is not.
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            author: "Unknown".to_string(),
            created_at: "N/A".to_string(),
            likes: 0,
        }
    }
}
