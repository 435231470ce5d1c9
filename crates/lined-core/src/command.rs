//! Commands — named, buffer-mutating operations invoked from the prompt.
//!
//! Free text submitted at the prompt resolves against a [`CommandRegistry`]
//! into a typed [`Command`], which then executes synchronously against the
//! buffer. Resolution is by prefix: `sa` finds `save` as long as no other
//! registered name also starts with `sa` (first registered wins on
//! ambiguity).
//!
//! # Registration
//!
//! The registry is built explicitly at startup — [`with_builtins`]
//! registers every known command. Names are unique: registering a
//! duplicate is a configuration error that fails immediately rather than
//! silently shadowing an earlier command.
//!
//! [`with_builtins`]: CommandRegistry::with_builtins
//!
//! # Supported commands
//!
//! | Command        | Action                                              |
//! |----------------|-----------------------------------------------------|
//! | `open <path>`  | Replace the buffer with the contents of `<path>`    |
//! | `save`         | Write the buffer to its path (default: `workfile`)  |
//! | `save <path>`  | Write the buffer to `<path>`                        |

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::buffer::Buffer;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a command could not be resolved or executed.
///
/// None of these are fatal: the editor stays interactive, the message is
/// shown at the prompt, and — for everything except a successful `open` —
/// the buffer is untouched.
#[derive(Debug, Error)]
pub enum CommandError {
    /// File open/read/write failure.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The command needs an argument it did not get.
    #[error("`{name}` requires an argument")]
    MissingArgument { name: &'static str },

    /// No registered command name starts with the given word.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    /// The submitted input was empty or all whitespace.
    #[error("empty command")]
    EmptyInput,
}

/// Startup-time registry configuration error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two commands were registered under the same name.
    #[error("duplicate command name `{0}`")]
    DuplicateName(&'static str),
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A resolved, typed command ready to run against the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `open <path>` — load a file into the buffer.
    Open(PathBuf),

    /// `save [path]` — write the buffer out. Without a path the buffer's
    /// recorded path is used, falling back to the documented default
    /// (see [`DEFAULT_SAVE_PATH`](crate::buffer::DEFAULT_SAVE_PATH)).
    Save(Option<PathBuf>),
}

impl Command {
    /// Execute against a buffer, immediately and synchronously.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Io`] on file failures; the buffer is left
    /// as it was (a failed `open` never destroys existing content).
    pub fn execute(&self, buffer: &mut Buffer) -> Result<CommandOutcome, CommandError> {
        match self {
            Self::Open(path) => {
                buffer.open_file(path)?;
                Ok(CommandOutcome::Opened(path.clone()))
            }
            Self::Save(path) => {
                let written = buffer.save_file(path.as_deref())?;
                Ok(CommandOutcome::Saved(written))
            }
        }
    }
}

/// What a successful command did — the prompt shows its `Display` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Opened(PathBuf),
    Saved(PathBuf),
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opened(path) => write!(f, "opened {}", path.display()),
            Self::Saved(path) => write!(f, "saved {}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Parses a command's argument text into a [`Command`].
type ParseFn = fn(&str) -> Result<Command, CommandError>;

/// One registered command: its unique name and its argument parser.
struct CommandSpec {
    name: &'static str,
    parse: ParseFn,
}

/// The command-name table, in registration order.
///
/// Built once at startup, read on every prompt submission, never mutated
/// during normal operation.
#[derive(Default)]
pub struct CommandRegistry {
    specs: Vec<CommandSpec>,
}

impl CommandRegistry {
    /// An empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// A registry with every built-in command registered.
    ///
    /// # Panics
    ///
    /// Panics if the built-in command names collide — a startup-time
    /// configuration error, impossible to recover from at runtime.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register("open", parse_open)
            .expect("builtin command names must be unique");
        registry
            .register("save", parse_save)
            .expect("builtin command names must be unique");
        registry
    }

    /// Register a command under a unique name.
    ///
    /// # Errors
    ///
    /// Fails with [`RegistryError::DuplicateName`] if the name is already
    /// taken — duplicates never silently shadow each other.
    pub fn register(&mut self, name: &'static str, parse: ParseFn) -> Result<(), RegistryError> {
        if self.specs.iter().any(|spec| spec.name == name) {
            return Err(RegistryError::DuplicateName(name));
        }
        self.specs.push(CommandSpec { name, parse });
        Ok(())
    }

    /// Registered command names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|spec| spec.name)
    }

    /// Resolve free-form prompt input into a typed command.
    ///
    /// The input splits on the first whitespace run into a name and the
    /// argument rest. The name matches by prefix against registered
    /// names; the first registered match wins.
    ///
    /// # Errors
    ///
    /// [`CommandError::EmptyInput`] for blank input,
    /// [`CommandError::UnknownCommand`] when nothing matches, plus
    /// whatever the matched command's argument parser reports.
    pub fn resolve(&self, input: &str) -> Result<Command, CommandError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CommandError::EmptyInput);
        }

        let (name, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(name, rest)| (name, rest.trim_start()));

        for spec in &self.specs {
            if spec.name.starts_with(name) {
                log::debug!("resolved {name:?} to `{}`", spec.name);
                return (spec.parse)(rest);
            }
        }
        Err(CommandError::UnknownCommand(name.to_string()))
    }

    /// Resolve and execute in one step. Errors never mutate the buffer.
    ///
    /// # Errors
    ///
    /// Everything [`resolve`](Self::resolve) and [`Command::execute`]
    /// report.
    pub fn execute(
        &self,
        input: &str,
        buffer: &mut Buffer,
    ) -> Result<CommandOutcome, CommandError> {
        self.resolve(input)?.execute(buffer)
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Built-in argument parsers
// ---------------------------------------------------------------------------

/// `open` takes its path positionally and requires it.
fn parse_open(args: &str) -> Result<Command, CommandError> {
    let path = args
        .split_whitespace()
        .next()
        .ok_or(CommandError::MissingArgument { name: "open" })?;
    Ok(Command::Open(PathBuf::from(path)))
}

/// `save` takes an optional path.
fn parse_save(args: &str) -> Result<Command, CommandError> {
    Ok(Command::Save(args.split_whitespace().next().map(PathBuf::from)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
