//! REPL command parsing

use std::path::PathBuf;

use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the images on the current page
    List,

    /// Select an image
    Select(String),

    /// Go back to the category list
    Reset,

    /// Add an image with its text to the current page
    Add {
        /// Image location
        image_loc: String,
        /// Spoken text, or the category name at the top level
        text: String,
    },

    /// Print the current category
    Where,

    /// Print the current page as JSON
    Json,

    /// Save the board, optionally to another path
    Save(Option<PathBuf>),

    /// Print the command list
    Help,

    /// Leave the REPL
    Quit,
}

/// Input that is not a valid command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A command was given without its required arguments
    #[error("usage: {usage}")]
    MissingArgument {
        /// Usage line for the command
        usage: &'static str,
    },

    /// Several words that don't start with a known command
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
}

/// Help text printed by the `help` command.
pub const HELP: &str = "\
commands:
  ls                     list images on this page
  select <image>         select an image (or just type the image)
  back | reset           return to the category list
  add <image> <text>     add an image (a category at the top level)
  where                  show the current category
  json                   print this page as JSON
  save [path]            save the board
  help                   show this help
  quit | exit            leave";

impl Command {
    /// Parse a line of input. Blank lines parse to `None`.
    ///
    /// A single word that is not a command is taken as an image to select.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "ls" | "list" => Command::List,
            "select" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        usage: "select <image>",
                    });
                }
                Command::Select(rest.to_string())
            }
            "back" | "reset" => Command::Reset,
            "add" => {
                let (image_loc, text) =
                    rest.split_once(char::is_whitespace)
                        .ok_or(CommandError::MissingArgument {
                            usage: "add <image> <text>",
                        })?;
                Command::Add {
                    image_loc: image_loc.to_string(),
                    text: text.trim().to_string(),
                }
            }
            "where" => Command::Where,
            "json" => Command::Json,
            "save" => Command::Save((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ if rest.is_empty() => Command::Select(word.to_string()),
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(Some(command))
    }
}
