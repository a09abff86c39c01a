use narrowarrow::{
    model::{ids::LevelId, level::LevelInfo, run::Run},
    service::format::{format_date, format_time},
};

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 60rem; margin: 2rem auto; padding: 0 1rem; color: #222; }\
table { border-collapse: collapse; width: 100%; }\
th, td { text-align: left; padding: 0.4rem 0.8rem; border-bottom: 1px solid #ddd; }\
th { background: #f5f5f5; }\
p.meta, p.empty { color: #666; }\
p.error { color: #b00020; }\
button.load-finish { cursor: pointer; }";

// The Finished At column is filled lazily from /api/run-details/{id}; one
// upstream request per run is too slow to do inline while the page loads.
const FINISH_TIME_SCRIPT: &str = r#"<script>
document.querySelectorAll('.load-finish').forEach((button) => {
  button.addEventListener('click', async () => {
    button.disabled = true;
    const cell = button.closest('.finished');
    try {
      const response = await fetch('/api/run-details/' + encodeURIComponent(button.dataset.runId));
      const details = await response.json();
      cell.textContent = details.finishedAt;
    } catch {
      cell.textContent = 'N/A';
    }
  });
});
</script>"#;

pub fn leaderboard_page(level_id: &LevelId, level_info: &LevelInfo, runs: &[Run]) -> String {
    let mut rows = String::new();
    for (index, run) in runs.iter().enumerate() {
        let (finished_cell, run_id_cell) = match &run.id {
            Some(id) => (
                format!(
                    r#"<button class="load-finish" data-run-id="{}">load</button>"#,
                    escape(id.as_str())
                ),
                escape(id.as_str()),
            ),
            None => ("N/A".to_string(), "N/A".to_string()),
        };

        rows.push_str(&format!(
            "<tr><td>{rank}</td><td>{player}</td><td>{time}</td><td>{arrow}</td>\
             <td class=\"finished\">{finished}</td><td>{run_id}</td></tr>\n",
            rank = index + 1,
            player = escape(&run.username),
            time = format_time(run.completion_time),
            arrow = escape(&run.arrow_name),
            finished = finished_cell,
            run_id = run_id_cell,
        ));
    }

    let table = if runs.is_empty() {
        "<p class=\"empty\">No runs found for this level</p>".to_string()
    } else {
        format!(
            "<table>\n<tr><th>Rank</th><th>Player</th><th>Time</th><th>Arrow</th>\
             <th>Finished At</th><th>Run ID</th></tr>\n{}</table>\n{}",
            rows, FINISH_TIME_SCRIPT
        )
    };

    page(
        &format!("Leaderboard - {}", level_info.name),
        &format!(
            "<h1>{name}</h1>\n\
             <p class=\"meta\">Created by: {author} | Created: {created} | Likes: {likes} | Level ID: {level}</p>\n\
             {table}\n\
             <p><a href=\"/\">Back to home</a></p>",
            name = escape(&level_info.name),
            author = escape(&level_info.author),
            created = escape(&format_date(&level_info.created_at)),
            likes = level_info.likes,
            level = escape(level_id.as_str()),
            table = table,
        ),
    )
}

pub fn error_page(message: &str) -> String {
    page(
        "Error",
        &format!(
            "<h1>Something went wrong</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to home</a></p>",
            escape(message)
        ),
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
