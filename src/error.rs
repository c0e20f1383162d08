/// Errors reported back to the user by the interpreter loop.
///
/// Both kinds are recoverable: the loop prints the message and prompts again.
/// Each variant carries the input exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The line contains a character that is neither an ASCII letter nor a dash.
    #[error("Bad string: {input}")]
    InvalidCharacter { input: String },

    /// The line is well-formed but matches no entry of the command table.
    #[error("Unrecognized command exception: {input}")]
    UnrecognizedCommand { input: String },
}

impl CommandError {
    /// Text the user entered that caused this error.
    pub fn input(&self) -> &str {
        match self {
            CommandError::InvalidCharacter { input } => input,
            CommandError::UnrecognizedCommand { input } => input,
        }
    }

    /// Same error kind, reporting `input` instead of the text it was built with.
    pub(crate) fn with_input(self, input: &str) -> Self {
        let input = input.to_string();
        match self {
            CommandError::InvalidCharacter { .. } => CommandError::InvalidCharacter { input },
            CommandError::UnrecognizedCommand { .. } => CommandError::UnrecognizedCommand { input },
        }
    }
}
