use super::ids::RunId;

/// One leaderboard entry. Fields the upstream omits or garbles are filled
/// with display defaults during normalization.
#[derive(Debug, Clone)]
pub struct Run {
    pub id: Option<RunId>,
    pub username: String,
    pub completion_time: Option<f64>,
    pub arrow_name: String,
}

/// Per-run detail record; only the finish timestamp is of interest. The raw
/// string is kept as served, formatting happens at display time.
#[derive(Debug, Clone)]
pub struct RunDetails {
    pub finished_at: Option<String>,
}
