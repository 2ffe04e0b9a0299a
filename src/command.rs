// Line-oriented command grammar for the interactive session

use eyre::{Result, eyre};

/// One user event, parsed from an input line.
///
/// Row numbers are 1-based and refer to the rows currently on screen (the
/// filtered view); the dispatcher remaps them to underlying list positions
/// before calling into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a new entry. Blank text is accepted here and no-ops in the
    /// store, matching the add-input policy.
    Add(String),
    /// Toggle the completed flag of a displayed row.
    Toggle(usize),
    /// Open an edit session for a displayed row.
    Edit(usize),
    /// Close the open edit session without saving.
    Cancel,
    /// Delete a displayed row.
    Delete(usize),
    /// Delete every entry.
    DeleteAll,
    /// Sort the list alphabetically (natural order).
    Sort,
    /// Set the search term; empty clears it.
    Search(String),
    /// Re-render the list.
    List,
    /// Print the list as JSON.
    Json,
    Help,
    Quit,
}

/// Parse one input line into a [`Command`].
pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match word {
        "add" => Ok(Command::Add(rest.to_string())),
        "done" => Ok(Command::Toggle(parse_row(word, rest)?)),
        "edit" => Ok(Command::Edit(parse_row(word, rest)?)),
        "cancel" => Ok(Command::Cancel),
        "rm" => Ok(Command::Delete(parse_row(word, rest)?)),
        "clear" => Ok(Command::DeleteAll),
        "sort" => Ok(Command::Sort),
        "find" => Ok(Command::Search(rest.to_string())),
        "ls" => Ok(Command::List),
        "json" => Ok(Command::Json),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Ok(Command::List),
        other => Err(eyre!("unknown command: {} (try help)", other)),
    }
}

fn parse_row(word: &str, rest: &str) -> Result<usize> {
    let n: usize = rest
        .parse()
        .map_err(|_| eyre!("usage: {} <item number>", word))?;
    if n == 0 {
        return Err(eyre!("item numbers start at 1"));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_keeps_rest_of_line() {
        assert_eq!(
            parse("add whole milk").unwrap(),
            Command::Add("whole milk".to_string())
        );
        // Bare "add" parses; the store treats the empty text as a no-op
        assert_eq!(parse("add").unwrap(), Command::Add(String::new()));
    }

    #[test]
    fn test_parse_row_commands() {
        assert_eq!(parse("done 3").unwrap(), Command::Toggle(3));
        assert_eq!(parse("edit 1").unwrap(), Command::Edit(1));
        assert_eq!(parse("rm 2").unwrap(), Command::Delete(2));
    }

    #[test]
    fn test_parse_row_rejects_garbage_and_zero() {
        assert!(parse("done").is_err());
        assert!(parse("done x").is_err());
        assert!(parse("rm 0").is_err());
    }

    #[test]
    fn test_parse_find_takes_full_term() {
        assert_eq!(
            parse("find oat milk").unwrap(),
            Command::Search("oat milk".to_string())
        );
        // Bare "find" clears the search
        assert_eq!(parse("find").unwrap(), Command::Search(String::new()));
    }

    #[test]
    fn test_parse_bare_words() {
        assert_eq!(parse("sort").unwrap(), Command::Sort);
        assert_eq!(parse("clear").unwrap(), Command::DeleteAll);
        assert_eq!(parse("cancel").unwrap(), Command::Cancel);
        assert_eq!(parse("ls").unwrap(), Command::List);
        assert_eq!(parse("json").unwrap(), Command::Json);
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("quit").unwrap(), Command::Quit);
        assert_eq!(parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_trims_and_defaults() {
        assert_eq!(parse("  sort  ").unwrap(), Command::Sort);
        // An empty line just re-renders
        assert_eq!(parse("").unwrap(), Command::List);
        assert_eq!(parse("   ").unwrap(), Command::List);
    }

    #[test]
    fn test_parse_unknown_word_is_an_error() {
        assert!(parse("frobnicate").is_err());
    }
}
