//! Interactive search box.
//!
//! Plain lines replace the input text. Lines starting with `:` are
//! commands; see [`HELP`].

use crate::commands::{open_search_box, runtime, scrolled_to_bottom, settle_limit, step};
use crate::render;
use anyhow::Result;
use lookahead_core::{Config, Query};
use lookahead_fetch::CollegeItem;
use lookahead_session::{Key, PointerTarget, SearchCallbacks, SearchEvent};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use std::sync::mpsc;

const HELP: &str = "\
<text>        replace the input with <text> (empty line clears it)
:more         scroll the dropdown to the bottom
:esc          press Escape
:enter        press Enter
:click [in]   pointer down outside the box (or inside with `in`)
:select N     choose row N
:show         print the dropdown again
:help         this text
:quit         exit";

#[derive(Debug, PartialEq)]
enum Action {
    Send(SearchEvent),
    Show,
    Help,
    Quit,
}

fn parse(line: &str) -> std::result::Result<Action, String> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(Action::Send(SearchEvent::Input(line.to_string())));
    };
    let words = shlex::split(command).ok_or_else(|| "unbalanced quotes".to_string())?;
    let mut words = words.iter().map(String::as_str);
    match (words.next(), words.next()) {
        (Some("more"), None) => Ok(Action::Send(SearchEvent::Scroll(Default::default()))),
        (Some("esc"), None) => Ok(Action::Send(SearchEvent::Key(Key::Escape))),
        (Some("enter"), None) => Ok(Action::Send(SearchEvent::Key(Key::Enter))),
        (Some("click"), None) => Ok(Action::Send(SearchEvent::PointerDown(PointerTarget::Outside))),
        (Some("click"), Some("in")) => Ok(Action::Send(SearchEvent::PointerDown(PointerTarget::Input))),
        (Some("select"), Some(n)) => match n.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(Action::Send(SearchEvent::Select(n - 1))),
            _ => Err(format!("not a row number: {}", n)),
        },
        (Some("show"), None) => Ok(Action::Show),
        (Some("help"), None) => Ok(Action::Help),
        (Some("quit" | "q"), None) => Ok(Action::Quit),
        _ => Err(format!("unknown command :{} (try :help)", command.trim())),
    }
}

fn history_path(config: &Config) -> Option<PathBuf> {
    config.identity_path.parent().map(|dir| dir.join("history"))
}

pub fn run(config: &Config) -> Result<()> {
    let rt = runtime()?;
    let _guard = rt.enter();
    let limit = settle_limit(config);

    let (notice_tx, notices) = mpsc::channel::<String>();
    let select_tx = notice_tx.clone();
    let callbacks = SearchCallbacks::<CollegeItem>::new()
        .on_select(move |item| {
            let _ = select_tx.send(format!(
                "selected {} -> /college/{}",
                item.record.name,
                item.record.key()
            ));
        })
        .on_submit(move |query: Query| {
            let _ = notice_tx.send(format!("submitted \"{}\"", query));
        });
    let search = open_search_box(config, callbacks)?;

    let mut editor = DefaultEditor::new()?;
    let history = history_path(config);
    if let Some(path) = &history {
        let _ = editor.load_history(path);
    }
    println!("Type to search. :help for commands.");

    loop {
        let line = match editor.readline("search> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        if !line.trim().is_empty() {
            let _ = editor.add_history_entry(line.as_str());
        }

        let event = match parse(&line) {
            Ok(Action::Send(event)) => event,
            Ok(Action::Show) => {
                println!("{}", render::dropdown(&search.view()));
                continue;
            }
            Ok(Action::Help) => {
                println!("{}", HELP);
                continue;
            }
            Ok(Action::Quit) => break,
            Err(message) => {
                eprintln!("{}", message);
                continue;
            }
        };
        let event = match event {
            SearchEvent::Scroll(_) => SearchEvent::Scroll(scrolled_to_bottom(&search.view())),
            other => other,
        };

        let view = rt.block_on(step(&search, limit, |s| s.send(event)))?;
        for notice in notices.try_iter() {
            println!("{}", notice);
        }
        println!("{}", render::dropdown(&view));
    }

    if let Some(path) = &history {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Err(e) = editor.save_history(path) {
            tracing::debug!(target: "lookahead::cli", error = %e, "Could not save history");
        }
    }
    rt.block_on(search.close());
    Ok(())
}
