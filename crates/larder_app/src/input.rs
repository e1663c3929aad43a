use std::io::{self, BufRead};
use std::sync::mpsc;

use larder_core::{Category, Msg};

pub enum Intent {
    Core(Msg),
    ShowFavorites,
    Quit,
}

/// Reads stdin lines and forwards parsed intents until EOF or the
/// receiver goes away.
pub fn read_loop(tx: mpsc::Sender<Intent>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(intent) = parse(&line) else { continue };
        if tx.send(intent).is_err() {
            break;
        }
    }
    let _ = tx.send(Intent::Quit);
}

/// Maps an input line onto a user intent. Keyword commands come first;
/// anything else edits the search query.
pub fn parse(line: &str) -> Option<Intent> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "quit" | "exit" => Some(Intent::Quit),
        "favs" => Some(Intent::ShowFavorites),
        "more" => Some(Intent::Core(Msg::EndReached)),
        "back" => Some(Intent::Core(Msg::DetailClosed)),
        "cat" => match Category::parse(rest) {
            Some(category) => Some(Intent::Core(Msg::CategoryTapped(category))),
            None => {
                println!("Unknown category {:?}; pick one of: {}", rest, category_names());
                None
            }
        },
        "fav" if !rest.is_empty() => Some(Intent::Core(Msg::FavoriteToggled {
            id: rest.to_owned(),
        })),
        "open" if !rest.is_empty() => Some(Intent::Core(Msg::MealOpened {
            id: rest.to_owned(),
        })),
        _ => Some(Intent::Core(Msg::QueryEdited(line.to_owned()))),
    }
}

fn category_names() -> String {
    Category::ALL
        .iter()
        .map(|category| category.name())
        .collect::<Vec<_>>()
        .join(", ")
}
