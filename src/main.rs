use checklist::command::{self, Command};
use checklist::{ListStore, ListView};
use clap::Parser;
use colored::Colorize;
use eyre::{Result, eyre};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "checklist")]
#[command(about = "Interactive in-memory grocery checklist with search, sort, and edit-in-place")]
#[command(version)]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    plain: bool,

    /// Items to preload into the list
    #[arg(value_name = "ITEM")]
    items: Vec<String>,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.plain {
        colored::control::set_override(false);
    }

    let mut store = ListStore::new();
    for item in &cli.items {
        store.add(item);
    }

    println!("{}", "Grocery Shopping List".bold());
    println!("Type help for commands, quit to leave.\n");
    render(&store);

    run(&mut store)
}

/// Read-dispatch-render loop: one line per event, processed to completion
/// before the next is read.
fn run(store: &mut ListStore) -> Result<()> {
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        prompt(store)?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Ok(()); // EOF
        }
        let line = input.trim_end_matches(['\r', '\n']);

        // While an edit session is open, the line is the replacement text,
        // not a command (except cancel/quit).
        if store.is_editing() {
            if !handle_edit_line(store, line)? {
                return Ok(());
            }
            continue;
        }

        match command::parse(line).and_then(|cmd| dispatch(store, cmd)) {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(e) => eprintln!("{}", format!("{e:#}").red()),
        }
    }
}

fn prompt(store: &ListStore) -> Result<()> {
    if let Some(session) = store.edit_session() {
        print!("{} [{}]> ", "edit".yellow(), session.scratch());
    } else {
        print!("> ");
    }
    io::stdout().flush()?;
    Ok(())
}

/// Returns false when the session (the program, not the edit) should end.
fn handle_edit_line(store: &mut ListStore, line: &str) -> Result<bool> {
    match line.trim() {
        "cancel" => {
            store.cancel_edit();
            render(store);
        }
        "quit" | "exit" => return Ok(false),
        text => {
            store.set_edit_scratch(text)?;
            if store.save_edit()? {
                render(store);
            } else {
                // Refused empty save: the session stays open
                eprintln!("{}", "item text cannot be empty (cancel to abort)".red());
            }
        }
    }
    Ok(true)
}

fn dispatch(store: &mut ListStore, cmd: Command) -> Result<bool> {
    match cmd {
        Command::Add(text) => {
            // Blank input is silently ignored, so only re-render on change
            if store.add(&text).is_some() {
                render(store);
            }
        }
        Command::Toggle(row) => {
            let position = resolve_row(store, row)?;
            store.toggle_complete(position)?;
            render(store);
        }
        Command::Edit(row) => {
            let position = resolve_row(store, row)?;
            store.start_edit(position)?;
        }
        Command::Cancel => store.cancel_edit(),
        Command::Delete(row) => {
            let position = resolve_row(store, row)?;
            let removed = store.delete(position)?;
            println!("removed {}", removed.text);
            render(store);
        }
        Command::DeleteAll => {
            // Mirrors the UI contract: the control only exists for lists
            // with more than one item
            if store.len() <= 1 {
                return Err(eyre!("clear needs a list with more than one item"));
            }
            store.delete_all();
            render(store);
        }
        Command::Sort => {
            if store.len() < 2 {
                return Err(eyre!("nothing to sort"));
            }
            if !store.sort() {
                return Err(eyre!("cannot sort while editing"));
            }
            render(store);
        }
        Command::Search(term) => {
            store.set_search(&term);
            render(store);
        }
        Command::List => render(store),
        Command::Json => {
            println!("{}", serde_json::to_string_pretty(store.entries())?);
        }
        Command::Help => print_help(),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Map a 1-based on-screen row number to its underlying list position.
fn resolve_row(store: &ListStore, row: usize) -> Result<usize> {
    let view = ListView::project(store);
    view.rows
        .get(row - 1)
        .map(|r| r.position)
        .ok_or_else(|| eyre!("no item {} on screen", row))
}

fn render(store: &ListStore) {
    let view = ListView::project(store);

    if !store.search_term().is_empty() {
        println!("{} {}", "filter:".dimmed(), store.search_term());
    }

    if view.no_matches {
        println!("{}", "no items found".red());
        return;
    }

    if view.rows.is_empty() {
        println!("{}", "(list is empty)".dimmed());
        return;
    }

    for (row, r) in view.rows.iter().enumerate() {
        let marker = if r.completed { "[x]" } else { "[ ]" };
        let text = if r.completed {
            r.text.strikethrough().dimmed().to_string()
        } else if r.editing {
            format!("{} {}", r.text, "(editing)".yellow())
        } else {
            r.text.clone()
        };
        println!("{:>3} {} {}", row + 1, marker, text);
    }
}

fn print_help() {
    println!("add <text>    add an item");
    println!("done <n>      toggle item n complete");
    println!("edit <n>      edit item n (type the new text, or cancel)");
    println!("rm <n>        delete item n");
    println!("clear         delete all items (needs more than one)");
    println!("sort          sort alphabetically, numbers compared by value");
    println!("find <text>   filter the list; find alone clears the filter");
    println!("ls            show the list");
    println!("json          print the list as JSON");
    println!("quit          leave");
    println!();
    println!("item numbers refer to the rows currently shown");
}
