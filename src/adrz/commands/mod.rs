//! Command layer: the business logic behind each subcommand.
//!
//! Commands take plain arguments, mutate the record directory, and return a
//! structured [`CmdResult`]. They never print and never choose exit codes;
//! that is the CLI layer's job.

use std::path::PathBuf;

pub mod create;
pub mod regen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// Outcome of a command: what was written, plus user-facing messages.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub created: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_created(mut self, path: PathBuf) -> Self {
        self.created = Some(path);
        self
    }
}
