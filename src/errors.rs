use std::io;

use activity_config::ConfigError;
use activity_core::CoreError;
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::cli::guided::GuidedError;
use crate::cli::prompts::PromptError;

/// Failures that end the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),
}

/// Failures of a single shell command. Reported, then the loop carries on.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

impl From<GuidedError> for CommandError {
    fn from(err: GuidedError) -> Self {
        match err {
            GuidedError::Core(err) => CommandError::Core(err),
            GuidedError::Prompt(err) => CommandError::Prompt(err),
        }
    }
}
