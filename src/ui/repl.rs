use std::io::{stdin, stdout, Write};

use crossterm::{execute, style::Stylize, terminal::SetTitle};

use crate::{model::ids::LevelId, service::data_manager::DataManager, ui::views::leaderboard::LeaderboardView};

use super::ReplError;

pub fn run(manager: DataManager, initial_level: Option<String>) -> Result<(), ReplError> {
    let _ = execute!(stdout(), SetTitle("Narrow Arrow Leaderboard Viewer"));
    print_banner();

    let view = LeaderboardView::new(&manager);

    if let Some(level_id) = initial_level {
        view.show_level(&LevelId::from(level_id));
        println!();
    }

    loop {
        let input = prompt()?;
        let level_id = input.trim();

        if level_id.is_empty() || matches!(level_id.to_lowercase().as_str(), "q" | "quit" | "exit") {
            println!("{}", "Goodbye!".yellow());
            break;
        }

        view.show_level(&LevelId::from(level_id));
        println!();
    }

    Ok(())
}

fn print_banner() {
    println!("{}", "══════════════════════════════════════════════".dark_green());
    println!("  {}", "Narrow Arrow Leaderboard Viewer".green().bold());
    println!("  {}", "api.narrowarrow.xyz".dark_grey());
    println!("{}", "══════════════════════════════════════════════".dark_green());
}

fn prompt() -> Result<String, ReplError> {
    print!("\n{}", "Enter level ID (or press Enter to quit): ".cyan());
    stdout().flush()?;

    // EOF reads as empty input and ends the loop.
    let mut input = String::new();
    stdin().read_line(&mut input)?;
    Ok(input)
}
