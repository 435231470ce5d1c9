// SPDX-License-Identifier: MIT
//
// lined — a line-oriented terminal text editor.
//
// This binary is the thin outer shell around the crates:
//
//   lined-core   → lines, buffer, cursor coordination, commands, prompt
//   lined-syntax → tokenizer and the category→style table
//
// It parses the command line, points the log facade at a file (the
// interactive screen leaves nowhere for stderr to go), loads the
// requested file into a Buffer, and paints the result once through the
// render adapter. The interactive terminal frontend is a separate layer
// that drives the very same surface: Buffer::keypress for key events,
// CommandRegistry::execute for prompt submissions, styled_rows +
// cursor_position for painting.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use lined_core::buffer::Buffer;
use lined_core::render::styled_rows;
use lined_syntax::style::RESET;
use lined_syntax::StyleTable;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "lined", about, version)]
struct Cli {
    /// File to open.
    file: PathBuf,

    /// Where to write the debug log.
    #[arg(long, value_name = "PATH", default_value = "lined.log")]
    log_file: PathBuf,
}

/// Route the `log` facade to a file.
fn init_logging(path: &Path) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {}: {}",
                record.level(),
                record.target(),
                message
            ));
        })
        .chain(fern::log_file(path)?)
        .apply()?;
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut buffer = Buffer::new();
    buffer
        .open_file(&cli.file)
        .with_context(|| format!("cannot open {}", cli.file.display()))?;

    let table = StyleTable::default();
    let mut stdout = io::stdout().lock();
    for row in styled_rows(&buffer, &table) {
        for span in row {
            write!(stdout, "{}{}", span.style.sgr(), span.text)?;
        }
        writeln!(stdout, "{RESET}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli.log_file) {
        eprintln!("lined: logging setup failed: {err}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("lined: {err:#}");
            ExitCode::FAILURE
        }
    }
}
