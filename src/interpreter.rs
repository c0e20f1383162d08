use crate::command::{Action, CommandTable, ExitCode};
use crate::error::CommandError;
use crate::io_adapters::{Input, LineReader};
use crate::validate::{normalize, validate};
use anyhow::{Context, Result};
use std::io::Write;

pub const BANNER: &str = "Welcome to the Command Validator!";
pub const PROMPT: &str = "P)lay, pA)use, R)ewind, F)ast-forward, S)top, or Q)uit?: ";
pub const FAREWELL: &str = "Goodbye!";

/// Exit code reported when the prompt is interrupted with Ctrl-C.
pub const INTERRUPTED_EXIT_CODE: ExitCode = 130;
/// Exit code reported when the line reader itself fails.
pub const READER_FAILURE_EXIT_CODE: ExitCode = 1;

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep prompting.
    Continue,
    /// Stop the loop and exit the process with the given code.
    Terminate(ExitCode),
}

/// Reads playback commands line by line and reports what was recognized.
///
/// The interpreter never exits the process on its own: quitting is reported as
/// [`Step::Terminate`] and it is up to the caller to act on it.
///
/// Example
/// ```
/// use playback_commands::{Interpreter, Step};
/// let sh = Interpreter::default();
/// let mut out = Vec::new();
/// let step = sh.execute_line("Play", &mut out).unwrap();
/// assert_eq!(step, Step::Continue);
/// assert_eq!(String::from_utf8(out).unwrap(), "play\n\n");
/// ```
pub struct Interpreter {
    table: CommandTable,
    show_banner: bool,
}

impl Interpreter {
    pub fn new(table: CommandTable) -> Self {
        Self {
            table,
            show_banner: true,
        }
    }

    /// Enable or disable the welcome banner printed by [`Interpreter::repl`].
    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// Validate, normalize and dispatch a raw line.
    ///
    /// Returns `Ok(None)` for an empty line. Errors carry `raw` as typed.
    pub fn interpret(&self, raw: &str) -> Result<Option<Action>, CommandError> {
        if raw.is_empty() {
            return Ok(None);
        }
        let normalized = normalize(validate(raw)?);
        self.table
            .dispatch(&normalized)
            .map(Some)
            .map_err(|err| err.with_input(raw))
    }

    /// Handle one line and write the user-facing result to `out`.
    pub fn execute_line(&self, raw: &str, out: &mut dyn Write) -> Result<Step> {
        let step = match self.interpret(raw) {
            Ok(None) => {
                log::debug!("empty line, nothing to do");
                Step::Continue
            }
            Ok(Some(action)) => {
                log::debug!("{raw:?} dispatched to {action:?}");
                writeln!(out, "{action}\n")?;
                if action.is_terminal() {
                    writeln!(out, "{FAREWELL}\n")?;
                    Step::Terminate(0)
                } else {
                    Step::Continue
                }
            }
            Err(err) => {
                log::debug!("rejected {:?}: {err:?}", err.input());
                writeln!(out, "{err}\n")?;
                Step::Continue
            }
        };
        out.flush().context("can't flush output")?;
        Ok(step)
    }

    /// Prompt, read and execute lines until the user quits or input runs out.
    ///
    /// Returns the exit code the process should terminate with.
    pub fn repl(&self, reader: &mut dyn LineReader, out: &mut dyn Write) -> Result<ExitCode> {
        if self.show_banner {
            writeln!(out, "{BANNER}\n")?;
            out.flush()?;
        }

        loop {
            let line = match reader.read_line(PROMPT) {
                Ok(Input::Line(line)) => line,
                Ok(Input::Eof) => {
                    log::info!("end of input");
                    return Ok(0);
                }
                Ok(Input::Interrupted) => {
                    log::info!("interrupted");
                    return Ok(INTERRUPTED_EXIT_CODE);
                }
                Err(err) => {
                    log::error!("failed to read input: {err:#}");
                    return Ok(READER_FAILURE_EXIT_CODE);
                }
            };

            if let Step::Terminate(code) = self.execute_line(&line, out)? {
                return Ok(code);
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(CommandTable::default())
    }
}
