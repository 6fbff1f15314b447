//! Line based command shell used by the interactive mode

use std::path::PathBuf;

use crate::Command;

pub const HELP: &str = "\
commands:
  search <keyword>   search the collection
  random             search a random keyword
  hover <x> <y>      move the pointer, shows the tooltip of the tile under it
  leave              pointer left the canvas
  click <x> <y>      open the tile under the point in the browser
  list               list the current tiles
  status             show the status line
  snapshot <file>    write the grid as png
  help               show this text
  quit               exit";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Gallery(Command),
    List,
    Status,
    Snapshot(PathBuf),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(pub String);

/// Parse one input line. Empty lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" => {
            if rest.is_empty() {
                return Err(ParseError("usage: search <keyword>".to_string()));
            }
            ShellCommand::Gallery(Command::Search(rest.to_string()))
        }
        "random" | "r" => ShellCommand::Gallery(Command::RandomKeyword),
        "hover" | "move" => {
            let (x, y) = parse_point(rest)?;
            ShellCommand::Gallery(Command::PointerMoved { x, y })
        }
        "leave" => ShellCommand::Gallery(Command::PointerLeft),
        "click" => {
            let (x, y) = parse_point(rest)?;
            ShellCommand::Gallery(Command::Click { x, y })
        }
        "list" | "ls" => ShellCommand::List,
        "status" => ShellCommand::Status,
        "snapshot" => {
            if rest.is_empty() {
                return Err(ParseError("usage: snapshot <file.png>".to_string()));
            }
            ShellCommand::Snapshot(PathBuf::from(rest))
        }
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        _ => return Err(ParseError(format!("unknown command '{}', try 'help'", verb))),
    };
    Ok(Some(command))
}

fn parse_point(args: &str) -> Result<(f32, f32), ParseError> {
    let mut parts = args.split_whitespace().map(str::parse::<f32>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Ok((x, y)),
        _ => Err(ParseError(format!("expected two coordinates, got '{}'", args))),
    }
}
