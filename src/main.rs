use std::{env, io::stdin};

use narrowarrow::{service::data_manager::DataManager, ui::repl};

fn main() {
    let initial_level = env::args().nth(1);

    match DataManager::new() {
        Ok(manager) => match repl::run(manager, initial_level) {
            Ok(_) => return,
            Err(error) => println!("Error occured while running REPL:\n{}\n", error),
        },
        Err(error) => println!("Error occured while initializing:\n{}\n", error),
    };

    let mut s = String::new();
    println!("Press Enter to exit");
    let _ = stdin().read_line(&mut s);
}
