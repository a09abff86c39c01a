use std::io::{stdout, Write};

use crossterm::style::Stylize;

use crate::{
    model::{
        ids::LevelId,
        level::LevelInfo,
        run::{Run, RunDetails},
    },
    service::{
        data_manager::DataManager,
        format::{format_date, format_finished_at, format_time},
    },
};

pub struct LeaderboardView<'a> {
    manager: &'a DataManager,
}

impl<'a> LeaderboardView<'a> {
    pub fn new(manager: &'a DataManager) -> Self {
        Self { manager }
    }

    /// A missing leaderboard aborts the view; missing level details only
    /// cost the header.
    pub fn show_level(&self, level_id: &LevelId) {
        println!("{}", "Fetching level details...".dark_grey());
        let level_info = match self.manager.get_level_info(level_id) {
            Ok(info) => Some(info),
            Err(error) => {
                println!("{}", format!("Error fetching level details: {}", error).dark_red());
                None
            }
        };

        println!("{}", format!("Fetching leaderboard for level {}...", level_id).cyan());
        let runs = match self.manager.get_leaderboard(level_id) {
            Ok(runs) => runs,
            Err(error) => {
                println!("{}", format!("Error fetching leaderboard: {}", error).red());
                println!("{}", format!("Failed to fetch leaderboard for level {}", level_id).red());
                return;
            }
        };

        println!();
        if let Some(info) = &level_info {
            Self::print_level_info(info);
        }

        self.print_leaderboard(&runs);
    }

    fn print_level_info(info: &LevelInfo) {
        println!("{}", info.name.clone().white().bold());
        println!(
            "{} {}   {} {}   {} {}",
            "Created by:".dark_grey(),
            info.author.clone().green(),
            "Created:".dark_grey(),
            format_date(&info.created_at).cyan(),
            "Likes:".dark_grey(),
            info.likes.to_string().yellow()
        );
        println!();
    }

    fn print_leaderboard(&self, runs: &[Run]) {
        if runs.is_empty() {
            println!("{}", "No runs found for this level".yellow());
            return;
        }

        let details = self.fetch_run_details(runs);

        let header = format!(
            "{:<6}{:<22}{:>12}  {:<17}{:<21}{}",
            "Rank", "Player", "Time", "Arrow", "Finished At", "Run ID"
        );
        println!("{}", header.clone().magenta().bold());
        println!("{}", "─".repeat(header.len()).dark_grey());

        for (index, (run, details)) in runs.iter().zip(&details).enumerate() {
            let run_id = match &run.id {
                Some(id) => id.to_string(),
                None => "N/A".to_string(),
            };
            let finished_at = format_finished_at(details.as_ref().and_then(|d| d.finished_at.as_deref()));

            println!(
                "{}{}{}  {}{}{}",
                format!("{:<6}", index + 1).cyan(),
                format!("{:<22}", truncated(&run.username, 20)).green(),
                format!("{:>12}", format_time(run.completion_time)),
                format!("{:<17}", truncated(&run.arrow_name, 15)).yellow(),
                format!("{:<21}", finished_at).dark_grey(),
                run_id.dark_grey()
            );
        }

        println!();
        println!("{}", format!("Total runs: {}", runs.len()).dark_grey());
    }

    // One request per run, sequentially; the detail record is only needed
    // for its finish timestamp. Runs without an identifier are skipped.
    fn fetch_run_details(&self, runs: &[Run]) -> Vec<Option<RunDetails>> {
        println!("{}", format!("Fetching run details for {} runs...", runs.len()).cyan());

        let mut all_details = Vec::with_capacity(runs.len());
        for (index, run) in runs.iter().enumerate() {
            let details = run.id.as_ref().and_then(|run_id| {
                print!("\rFetching run {}/{}...", index + 1, runs.len());
                let _ = stdout().flush();
                self.manager.get_run_details(run_id).ok()
            });
            all_details.push(details);
        }
        print!("\r{:<50}\r", "");

        all_details
    }
}

fn truncated(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
