//! # lined-core — Editor core for lined
//!
//! The editing heart of the editor, with no terminal I/O of its own:
//!
//! - **[`key`]** — the input contract: `Key` events and the
//!   consumed/pass-through outcome of dispatching one
//! - **[`line`]** — `Line`, one row of text with its own cursor column
//! - **[`cursor`]** — `CursorCoordinator`, vertical/horizontal movement
//!   with a sticky column across lines of different lengths
//! - **[`buffer`]** — `Buffer`, the ordered line sequence, focus index,
//!   keypress dispatch, line split/join, and file load/save
//! - **[`prompt`]** — the single-line command input field
//! - **[`command`]** — the command registry and the `open`/`save` commands
//! - **[`render`]** — styled spans, the surface the external painter reads
//!
//! The painting layer and the interactive input loop live outside this
//! crate; they drive [`buffer::Buffer::keypress`] and
//! [`command::CommandRegistry::execute`] and read back styled rows.

pub mod buffer;
pub mod command;
pub mod cursor;
pub mod key;
pub mod line;
pub mod prompt;
pub mod render;

pub use buffer::Buffer;
pub use command::{Command, CommandError, CommandOutcome, CommandRegistry};
pub use key::{Key, KeyOutcome};
pub use line::Line;
