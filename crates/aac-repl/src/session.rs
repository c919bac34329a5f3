//! A REPL session over one board

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

use aac::{Board, EditablePage, Page};

use crate::command::{Command, HELP};
use crate::view::PageView;

/// Whether the REPL keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop the session
    Quit,
}

/// The board being browsed and where `save` writes it.
#[derive(Debug)]
pub struct Session {
    board: Board,
    save_to: PathBuf,
}

impl Session {
    /// Start a session. `save_to` is the default `save` path, before the
    /// board's extension is appended.
    pub fn new(board: Board, save_to: impl Into<PathBuf>) -> Self {
        Self {
            board,
            save_to: save_to.into(),
        }
    }

    /// The board being browsed.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Prompt showing where on the board we are.
    pub fn prompt(&self) -> String {
        match self.board.category() {
            "" => "aac> ".to_string(),
            name => format!("aac/{}> ", name),
        }
    }

    /// Run one command, writing its output to `out`.
    ///
    /// Board-level failures (unknown images, failed saves) are printed, not
    /// returned; only write failures on `out` are errors.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::List => self.list(out)?,
            Command::Select(image_loc) => match self.board.select(&image_loc) {
                Ok(text) if text.is_empty() => self.list(out)?,
                Ok(text) => writeln!(out, "{}", text)?,
                Err(err) => writeln!(out, "{}", err)?,
            },
            Command::Reset => {
                self.board.reset();
                self.list(out)?;
            }
            Command::Add { image_loc, text } => {
                self.board.add_item(&image_loc, &text);
                if !self.board.has_image(&image_loc) {
                    writeln!(out, "could not add {:?}", image_loc)?;
                }
            }
            Command::Where => match self.board.category() {
                "" => writeln!(out, "(top)")?,
                name => writeln!(out, "{}", name)?,
            },
            Command::Json => {
                let json = serde_json::to_string_pretty(&PageView::of(&self.board))?;
                writeln!(out, "{}", json)?;
            }
            Command::Save(path) => {
                let path = path.unwrap_or_else(|| self.save_to.clone());
                self.save(&path, out)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        let view = PageView::of(&self.board);
        if view.images.is_empty() {
            writeln!(out, "(no images)")?;
        }
        for image in &view.images {
            writeln!(out, "  {}  {}", image.image_loc, image.label)?;
        }
        Ok(())
    }

    fn save<W: Write>(&self, path: &Path, out: &mut W) -> Result<()> {
        match self.board.try_write_to_file(path) {
            Ok(written) => writeln!(out, "saved to {}", written.display())?,
            Err(err) => writeln!(out, "could not save: {}", err)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const FOOD: &str = "img/food/plate.png food\n>img/food/fries.png fries\n";

    fn run(session: &mut Session, line: &str) -> String {
        let mut out = Vec::new();
        let command = Command::parse(line).unwrap().unwrap();
        session.execute(command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_select_category_lists_items() {
        let mut session = Session::new(Board::parse(FOOD), "board");
        assert_eq!(run(&mut session, "ls"), "  img/food/plate.png  food\n");
        assert_eq!(
            run(&mut session, "img/food/plate.png"),
            "  img/food/fries.png  fries\n"
        );
        assert_eq!(session.prompt(), "aac/food> ");
        assert_eq!(run(&mut session, "img/food/fries.png"), "fries\n");
    }

    #[test]
    fn test_select_unknown_reports_error() {
        let mut session = Session::new(Board::parse(FOOD), "board");
        assert_eq!(
            run(&mut session, "select img/nope.png"),
            "no such image: \"img/nope.png\"\n"
        );
        assert_eq!(session.prompt(), "aac> ");
    }

    #[test]
    fn test_where_and_back() {
        let mut session = Session::new(Board::parse(FOOD), "board");
        assert_eq!(run(&mut session, "where"), "(top)\n");
        run(&mut session, "img/food/plate.png");
        assert_eq!(run(&mut session, "where"), "food\n");
        run(&mut session, "back");
        assert!(session.board().is_at_top());
    }

    #[test]
    fn test_add_then_save() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("board");
        let mut session = Session::new(Board::parse(FOOD), &base);

        run(&mut session, "add img/clothing/hanger.png clothing");
        let output = run(&mut session, "save");
        assert!(output.starts_with("saved to "));

        let saved = std::fs::read_to_string(dir.path().join("board.txt")).unwrap();
        assert_eq!(saved, format!("{}img/clothing/hanger.png clothing\n", FOOD));
    }

    #[test]
    fn test_save_failure_is_printed() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(Board::parse(FOOD), dir.path().join("missing/dir/board"));
        assert!(run(&mut session, "save").starts_with("could not save: "));
    }

    #[test]
    fn test_quit() {
        let mut session = Session::new(Board::new(), "board");
        let mut out = Vec::new();
        assert_eq!(session.execute(Command::Quit, &mut out).unwrap(), Flow::Quit);
        assert!(out.is_empty());
    }
}
