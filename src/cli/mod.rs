pub mod commands;
pub mod guided;
pub mod output;
pub mod prompts;
pub mod registry;
pub mod shell;
pub mod shell_context;
pub mod style;
pub mod test_mode;
pub mod views;

pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};
