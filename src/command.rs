use crate::error::CommandError;
use std::fmt;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// One of the six playback commands the interpreter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Play,
    Pause,
    Rewind,
    FastForward,
    Stop,
    Quit,
}

impl Action {
    /// Every action, in table order.
    pub const ALL: [Action; 6] = [
        Action::Play,
        Action::Pause,
        Action::Rewind,
        Action::FastForward,
        Action::Stop,
        Action::Quit,
    ];

    /// Single-letter form accepted at the prompt.
    pub fn shorthand(self) -> &'static str {
        match self {
            Action::Play => "p",
            Action::Pause => "a",
            Action::Rewind => "r",
            Action::FastForward => "f",
            Action::Stop => "s",
            Action::Quit => "q",
        }
    }

    /// Full-word form accepted at the prompt. Also used as the printed label.
    pub fn word(self) -> &'static str {
        match self {
            Action::Play => "play",
            Action::Pause => "pause",
            Action::Rewind => "rewind",
            Action::FastForward => "fast-forward",
            Action::Stop => "stop",
            Action::Quit => "quit",
        }
    }

    /// Whether running this action ends the session.
    pub fn is_terminal(self) -> bool {
        self == Action::Quit
    }

    fn matches(self, token: &str) -> bool {
        token == self.shorthand() || token == self.word()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// Fixed lookup table from normalized tokens to actions.
///
/// The table is read-only; lookups walk it in order and the first entry whose
/// shorthand or word equals the token wins.
#[derive(Debug, Clone, Copy)]
pub struct CommandTable {
    entries: &'static [Action],
}

impl CommandTable {
    pub fn new() -> Self {
        Self {
            entries: &Action::ALL,
        }
    }

    /// Resolve an already normalized token to its action.
    ///
    /// Comparison is exact: `"pl"` or `"plays"` do not match `play`.
    pub fn dispatch(&self, normalized: &str) -> Result<Action, CommandError> {
        self.entries
            .iter()
            .copied()
            .find(|action| action.matches(normalized))
            .ok_or_else(|| CommandError::UnrecognizedCommand {
                input: normalized.to_string(),
            })
    }

    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}
