use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use narrowarrow::{
    model::ids::{LevelId, RunId},
    service::{data_manager::DataManager, format::format_finished_at},
};
use tokio::task;

use crate::{model::RunDetailsResponse, render};

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../templates/index.html"))
}

/// Level details degrade to defaults; a missing leaderboard renders the
/// error page. The blocking client must stay off the async runtime, so the
/// whole upstream exchange runs on a blocking task.
pub async fn view_leaderboard(Path(level_id): Path<String>) -> Response {
    let page = task::spawn_blocking(move || {
        let level_id = LevelId::from(level_id);
        let manager = match DataManager::new() {
            Ok(manager) => manager,
            Err(error) => {
                tracing::error!("Failed to set up API client: {}", error);
                return render::error_page("Failed to fetch leaderboard data");
            }
        };

        let level_info = manager.get_level_info(&level_id).unwrap_or_default();
        match manager.get_leaderboard(&level_id) {
            Ok(runs) => render::leaderboard_page(&level_id, &level_info, &runs),
            Err(error) => {
                tracing::error!("Failed to fetch leaderboard for level {}: {}", level_id, error);
                render::error_page("Failed to fetch leaderboard data")
            }
        }
    })
    .await;

    match page {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            tracing::error!("Leaderboard task failed: {}", error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render::error_page("Internal server error")),
            )
                .into_response()
        }
    }
}

pub async fn api_run_details(Path(run_id): Path<String>) -> Json<RunDetailsResponse> {
    let finished_at = task::spawn_blocking(move || {
        let run_id = RunId::from(run_id);
        let manager = DataManager::new().ok()?;
        let details = manager.get_run_details(&run_id).ok()?;
        details.finished_at
    })
    .await
    .ok()
    .flatten();

    Json(RunDetailsResponse {
        finished_at: format_finished_at(finished_at.as_deref()),
    })
}
