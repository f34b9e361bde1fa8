//! mdecorate - Main Entry Point
//!
//! Applies markdown decorations to a file from the command line, using the
//! in-memory buffer as the editor host.

use clap::{Parser, Subcommand};
use log::{error, info, warn};
use markdown_decorator::config::{get_config_file_path, load_config, save_config, Settings};
use markdown_decorator::editor::{Selection, TextBuffer, TextEditor};
use markdown_decorator::markdown::{goto_line, insert_heading_at, MarkdownCommand};
use markdown_decorator::ui::{HeadlessUi, MarkdownEdit};
use markdown_decorator::{Error, Result};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Application name constant.
const APP_NAME: &str = "mdecorate";

#[derive(Parser, Debug)]
#[command(name = APP_NAME, version, about = "Apply markdown decorations to text files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply one decoration (h1-h6, bold, italic, code, link, image) to a file
    Apply {
        /// Decoration to apply
        decoration: MarkdownCommand,

        /// Markdown file to edit
        file: PathBuf,

        /// Cursor position in characters
        #[arg(long, conflicts_with = "select")]
        cursor: Option<usize>,

        /// Selection as START..END in characters
        #[arg(long, value_parser = parse_range)]
        select: Option<Selection>,

        /// Move the cursor to this zero-based line first
        #[arg(long, conflicts_with_all = ["cursor", "select"])]
        line: Option<usize>,

        /// Write the result back to FILE instead of printing it
        #[arg(long)]
        in_place: bool,
    },

    /// Show the menu and toolbar layout registered with the current settings
    Actions,

    /// Print the settings file location and its effective contents
    Config {
        /// Write the effective settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

/// Parse `START..END` into a selection anchored at START.
fn parse_range(s: &str) -> Result<Selection> {
    let (start, end) = s
        .split_once("..")
        .ok_or_else(|| Error::InvalidRange(s.to_string()))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidRange(s.to_string()))
    };
    Ok(Selection::new(parse(start)?, parse(end)?))
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_config();
    execute(cli.command, &settings)
}

fn execute(command: Command, settings: &Settings) -> Result<()> {
    match command {
        Command::Actions => {
            let mut ui = HeadlessUi::full();
            let mut buffer = TextBuffer::default();
            MarkdownEdit::attach(settings, &mut buffer, &mut ui);
            print!("{}", ui);
            Ok(())
        }
        Command::Config { init } => {
            let path = get_config_file_path()?;
            if init {
                save_config(settings)?;
            }
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(settings)?);
            Ok(())
        }
        Command::Apply {
            decoration,
            file,
            cursor,
            select,
            line,
            in_place,
        } => {
            let text = fs::read_to_string(&file).map_err(|source| Error::FileRead {
                path: file.clone(),
                source,
            })?;
            let mut buffer = TextBuffer::new(text);
            let plugin = MarkdownEdit::new(settings);
            let missing_line = |line| Error::LineOutOfRange {
                path: file.clone(),
                line,
            };

            let applied = match (decoration, line) {
                (MarkdownCommand::Heading(level), Some(line)) => {
                    if !insert_heading_at(&mut buffer, line, level) {
                        return Err(missing_line(line));
                    }
                    true
                }
                (_, Some(line)) => {
                    if !goto_line(&mut buffer, line, 0) {
                        return Err(missing_line(line));
                    }
                    plugin.trigger(&mut buffer, decoration)
                }
                (_, None) => {
                    if let Some(selection) = select {
                        buffer.set_selection(selection.anchor, selection.cursor);
                    } else if let Some(pos) = cursor {
                        buffer.set_position(pos);
                    }
                    plugin.trigger(&mut buffer, decoration)
                }
            };
            if !applied {
                warn!("{} had no effect", decoration);
            }

            let sel = buffer.selection();
            if sel.is_empty() {
                info!("Applied {}: cursor at {}", decoration, sel.cursor);
            } else {
                info!(
                    "Applied {}: selection {}..{}",
                    decoration,
                    sel.start(),
                    sel.end()
                );
            }

            let text = buffer.into_text();
            if in_place {
                fs::write(&file, text).map_err(|source| Error::FileWrite {
                    path: file.clone(),
                    source,
                })?;
                info!("Wrote {}", file.display());
            } else {
                print!("{}", text);
            }
            Ok(())
        }
    }
}
