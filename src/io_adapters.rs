use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::cell::RefCell;
use std::io::{BufRead, Result as IoResult, Write};
use std::rc::Rc;

/// Outcome of asking a [`LineReader`] for the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line with its terminator stripped. May be empty.
    Line(String),
    /// The input source is exhausted (Ctrl-D, closed pipe).
    Eof,
    /// The user interrupted the prompt (Ctrl-C).
    Interrupted,
}

/// Source of user input lines for the interpreter loop.
///
/// Implementations are responsible for showing `prompt` before blocking.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

/// Interactive reader backed by the `rustyline` line editor.
///
/// Entered lines are kept in the editor's in-memory history for the session.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("can't initialize line editor")?;
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(err) => Err(anyhow::anyhow!(err).context("readline failed")),
        }
    }
}

/// Plain reader over any buffered input, writing the prompt to `prompt_out`.
///
/// Used for `--plain` mode and for driving the loop from in-memory scripts.
pub struct PlainReader<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> PlainReader<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineReader for PlainReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("can't read line from input")?;
        if n == 0 {
            return Ok(Input::Eof);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Input::Line(line))
    }
}

/// Memory-backed writer for capturing interpreter output.
///
/// Clones share the same buffer, so a prompt writer and an output writer can
/// record into one transcript.
///
/// Example
/// ```
/// use playback_commands::Interpreter;
/// use playback_commands::io_adapters::{MemWriter, PlainReader};
/// use std::io::Cursor;
///
/// let out = MemWriter::new();
/// let mut reader = PlainReader::new(Cursor::new("stop\nQ\n"), out.clone());
/// let code = Interpreter::default()
///     .with_banner(false)
///     .repl(&mut reader, &mut out.clone())
///     .unwrap();
/// assert_eq!(code, 0);
/// let transcript = out.contents();
/// assert!(transcript.contains("stop\n\n"));
/// assert!(transcript.ends_with("quit\n\nGoodbye!\n\n"));
/// ```
#[derive(Clone, Default)]
pub struct MemWriter {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl MemWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.borrow()).into_owned()
    }
}

impl Write for MemWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}
