use json::JsonValue;

use crate::model::run::RunDetails;

use super::as_display_string;

pub fn parse_run_details(json: &JsonValue) -> RunDetails {
    RunDetails {
        finished_at: as_display_string(&json["finishedAt"]),
    }
}
