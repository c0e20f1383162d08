//! A tiny console interpreter for playback commands.
//!
//! Each input line is checked to contain only ASCII letters and dashes,
//! lowercased, and looked up in a fixed table of six commands: play, pause,
//! rewind, fast-forward, stop and quit. Each command is accepted either as a
//! single letter (`p`, `a`, `r`, `f`, `s`, `q`) or as its full word.
//!
//! The main entry point is [`Interpreter`], which evaluates single lines or runs
//! a prompt loop over any [`io_adapters::LineReader`]. The building blocks
//! ([`validate()`], [`normalize`], [`CommandTable`]) are public for reuse.

mod command;
mod error;
mod interpreter;
pub mod io_adapters;
mod validate;

pub use command::{Action, CommandTable, ExitCode};
pub use error::CommandError;
pub use interpreter::{
    BANNER, FAREWELL, INTERRUPTED_EXIT_CODE, Interpreter, PROMPT, READER_FAILURE_EXIT_CODE, Step,
};
pub use validate::{is_valid, normalize, validate};
