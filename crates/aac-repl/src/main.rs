mod command;
mod session;
mod view;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use aac::{Board, BoardConfig};
use command::Command;
use session::{Flow, Session};

#[derive(Parser)]
#[command(name = "aac-repl")]
#[command(about = "Browse and edit an AAC board from the terminal")]
#[command(version)]
struct Cli {
    /// Board file to load (a missing file starts an empty board)
    file: PathBuf,

    /// Extension appended to the path when saving
    #[arg(long, default_value = aac::DEFAULT_EXTENSION)]
    extension: String,

    /// Default path for `save`, before the extension is appended
    /// [default: FILE without its extension]
    #[arg(long)]
    save_to: Option<PathBuf>,

    /// Log more (-v debug, -vv trace); otherwise RUST_LOG or `warn`
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = BoardConfig::with_extension(cli.extension);
    let board = Board::from_file_with_config(&cli.file, config);
    let save_to = cli
        .save_to
        .unwrap_or_else(|| cli.file.with_extension(""));
    let mut session = Session::new(board, save_to);
    tracing::info!(
        file = %cli.file.display(),
        categories = session.board().category_count(),
        "board ready"
    );

    let mut editor = DefaultEditor::new().context("failed to start line editor")?;
    let mut out = io::stdout();
    session.execute(Command::List, &mut out)?;

    loop {
        match editor.readline(&session.prompt()) {
            Ok(line) => {
                if let Err(err) = editor.add_history_entry(line.as_str()) {
                    tracing::debug!(error = %err, "could not record history entry");
                }
                match Command::parse(&line) {
                    Ok(Some(command)) => {
                        if session.execute(command, &mut out)? == Flow::Quit {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(err) => writeln!(out, "{}", err)?,
                }
                out.flush()?;
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        }
    }

    Ok(())
}
