//! Terminal driver for rickdex.
//!
//! Reads one command per line from stdin, turns it into store operations and
//! prints the resulting views. Fetch results and debounced searches arrive
//! between commands and trigger a re-render on their own.
//!
//! # Usage
//!
//! ```text
//! rickdex [--config <path>]
//! ```
//!
//! # Commands
//!
//! - `n` / `p`: next / previous page
//! - `g <page>`: go to page
//! - `/ <text>`: search by name (debounced; `/` alone clears the search)
//! - `f <n>`: toggle favorite for the n-th listed character
//! - `x <id>`: remove favorite by character id
//! - `i <id>`: show character details
//! - `c <red|green|blue>`: favorites color
//! - `clear`: remove all favorites
//! - `r`: reload page 1
//! - `h`: help
//! - `q`: quit

#![allow(clippy::multiple_crate_versions)]

use rickdex::domain::FavoriteColor;
use rickdex::observability::init_tracing;
use rickdex::ui::{Renderer, Theme};
use rickdex::{initialize, Config, RickdexError};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
commands: n next | p previous | g <page> | / <text> search | f <n> toggle favorite
          x <id> unfavorite | i <id> details | c <red|green|blue> | clear | r reload | q quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Next,
    Previous,
    GoTo(u32),
    Search(String),
    ToggleFavorite(usize),
    RemoveFavorite(u32),
    Details(u32),
    Color(FavoriteColor),
    ClearFavorites,
    Refresh,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if let Some(text) = line.strip_prefix('/') {
        return Ok(Command::Search(text.trim().to_string()));
    }

    let (verb, arg) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(v, a)| (v, a.trim()));

    let number = |what: &str| -> Result<u32, String> {
        arg.parse::<u32>()
            .map_err(|_| format!("{verb}: expected {what}, got {arg:?}"))
    };

    match verb {
        "n" => Ok(Command::Next),
        "p" => Ok(Command::Previous),
        "g" => number("a page number").map(Command::GoTo),
        "f" => number("a list position")
            .and_then(|n| usize::try_from(n).map_err(|e| e.to_string()))
            .map(Command::ToggleFavorite),
        "x" => number("a character id").map(Command::RemoveFavorite),
        "i" => number("a character id").map(Command::Details),
        "c" => arg
            .parse::<FavoriteColor>()
            .map(Command::Color)
            .map_err(|e| e.to_string()),
        "clear" => Ok(Command::ClearFavorites),
        "r" => Ok(Command::Refresh),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "" => Err(String::new()),
        other => Err(format!("unknown command {other:?} (h for help)")),
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>, RickdexError> {
    let mut config_path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| RickdexError::Config("--config needs a path".to_string()))?;
                config_path = Some(PathBuf::from(path));
            }
            other => {
                return Err(RickdexError::Config(format!("unexpected argument {other:?}")));
            }
        }
    }
    Ok(config_path)
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rickdex: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> rickdex::Result<()> {
    let config = match parse_args(std::env::args().skip(1))? {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    }
    .apply_env();

    init_tracing(&config);
    tracing::info!(api = %config.api_base_url, "starting rickdex");

    let mut store = initialize(&config)?;
    let renderer = Renderer::new(Theme::default(), std::io::stdout().is_terminal());

    store.load_initial();
    println!("{}", renderer.render(store.state()));
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = match parse_command(&line) {
                    Ok(command) => command,
                    Err(message) => {
                        if !message.is_empty() {
                            println!("{message}");
                        }
                        continue;
                    }
                };

                let render = match command {
                    Command::Quit => break,
                    Command::Help => {
                        println!("{HELP}");
                        false
                    }
                    Command::Next => store.next_page(),
                    Command::Previous => store.previous_page(),
                    Command::GoTo(page) => store.go_to_page(page),
                    Command::Search(text) => {
                        store.input_search(text);
                        false
                    }
                    Command::ToggleFavorite(position) => {
                        let character = position
                            .checked_sub(1)
                            .and_then(|i| store.state().catalog.characters().get(i))
                            .cloned();
                        match character {
                            Some(character) => store.toggle_favorite(character),
                            None => {
                                println!("no character at position {position}");
                                false
                            }
                        }
                    }
                    Command::RemoveFavorite(id) => {
                        let favorite = store
                            .state()
                            .favorites
                            .characters()
                            .iter()
                            .find(|c| c.id == id)
                            .cloned();
                        match favorite {
                            Some(character) => store.remove_from_favorites(character),
                            None => {
                                println!("character {id} is not a favorite");
                                false
                            }
                        }
                    }
                    Command::Details(id) => {
                        match store.state().compute_detail(id) {
                            Some(detail) => print!("{}", renderer.render_detail(&detail)),
                            None => println!("character {id} is not on screen or in favorites"),
                        }
                        false
                    }
                    Command::Color(color) => store.set_favorite_color(color),
                    Command::ClearFavorites => store.clear_favorites(),
                    Command::Refresh => store.refresh(),
                };

                if render {
                    println!("{}", renderer.render(store.state()));
                }
            }
            Some(render) = store.next(), if store.is_busy() => {
                if render {
                    println!("{}", renderer.render(store.state()));
                }
            }
        }
    }

    store.cancel_search();
    tracing::info!("rickdex exiting");
    Ok(())
}
