use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RunDetailsResponse {
    #[serde(rename = "finishedAt")]
    pub finished_at: String,
}
