use json::JsonValue;

use crate::model::{ids::RunId, run::Run};

use super::as_display_string;

/// The live API serves leaderboards in two shapes: a JSON array of run
/// objects, or an object whose keys are entry indices as digit strings.
/// Array order is kept as-is; object entries are ordered by ascending key,
/// with non-numeric keys dropped. Any other shape has no runs.
pub fn normalize_leaderboard(json: &JsonValue) -> Vec<Run> {
    match json {
        JsonValue::Array(entries) => entries.iter().map(normalize_run).collect(),
        JsonValue::Object(object) => {
            let mut keyed = object
                .iter()
                .filter(|(key, _)| !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()))
                .filter_map(|(key, value)| key.parse::<u64>().ok().map(|index| (index, value)))
                .collect::<Vec<_>>();
            keyed.sort_by_key(|(index, _)| *index);

            keyed.into_iter().map(|(_, value)| normalize_run(value)).collect()
        }
        _ => Vec::new(),
    }
}

fn normalize_run(value: &JsonValue) -> Run {
    Run {
        id: run_id(value),
        username: value["username"].as_str().unwrap_or("Unknown").to_string(),
        completion_time: value["completion_time"].as_f64(),
        arrow_name: value["arrow_name"].as_str().unwrap_or("N/A").to_string(),
    }
}

// The upstream is mid-migration and serves both identifier spellings.
fn run_id(value: &JsonValue) -> Option<RunId> {
    ["runId", "run_id"]
        .into_iter()
        .find_map(|key| as_display_string(&value[key]))
        .map(RunId::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_input_keeps_order() {
        let json = json::parse(
            r#"[
                {"run_id": "a", "username": "one", "completion_time": 10.0, "arrow_name": "Standard"},
                {"run_id": "b", "username": "two", "completion_time": 9.0, "arrow_name": "Standard"}
            ]"#,
        )
        .unwrap();

        let runs = normalize_leaderboard(&json);
        let names = runs.iter().map(|run| run.username.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["one", "two"]);
    }

    #[test]
    fn object_input_orders_by_numeric_key_and_drops_the_rest() {
        let json = json::parse(
            r#"{
                "0": {"username": "a"},
                "2": {"username": "b"},
                "1": {"username": "c"},
                "x": {"username": "d"}
            }"#,
        )
        .unwrap();

        let runs = normalize_leaderboard(&json);
        let names = runs.iter().map(|run| run.username.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "c", "b"]);
    }

    #[test]
    fn object_keys_sort_numerically_not_lexically() {
        let json = json::parse(r#"{"10": {"username": "late"}, "2": {"username": "early"}}"#).unwrap();

        let runs = normalize_leaderboard(&json);
        let names = runs.iter().map(|run| run.username.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["early", "late"]);
    }

    #[test]
    fn both_identifier_spellings_are_supported() {
        let json = json::parse(r#"[{"runId": "new-style"}, {"run_id": "old-style"}]"#).unwrap();

        let runs = normalize_leaderboard(&json);
        assert_eq!(runs[0].id.as_ref().unwrap().as_str(), "new-style");
        assert_eq!(runs[1].id.as_ref().unwrap().as_str(), "old-style");
    }

    #[test]
    fn new_spelling_wins_when_both_are_present() {
        let json = json::parse(r#"[{"runId": "new", "run_id": "old"}]"#).unwrap();

        let runs = normalize_leaderboard(&json);
        assert_eq!(runs[0].id.as_ref().unwrap().as_str(), "new");
    }

    #[test]
    fn numeric_identifiers_are_stringified() {
        let json = json::parse(r#"[{"runId": 42}]"#).unwrap();

        let runs = normalize_leaderboard(&json);
        assert_eq!(runs[0].id.as_ref().unwrap().as_str(), "42");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let json = json::parse(r#"[{}]"#).unwrap();

        let runs = normalize_leaderboard(&json);
        assert!(runs[0].id.is_none());
        assert_eq!(runs[0].username, "Unknown");
        assert_eq!(runs[0].completion_time, None);
        assert_eq!(runs[0].arrow_name, "N/A");
    }

    #[test]
    fn scalar_input_yields_no_runs() {
        let json = json::parse(r#""not a leaderboard""#).unwrap();
        assert!(normalize_leaderboard(&json).is_empty());
    }
}
