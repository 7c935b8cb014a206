use std::{
    borrow::Cow,
    env,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;
use tracing::info;

use activity_core::FieldRef;

use crate::errors::CliError;

use super::output;
use super::shell_context::{CliMode, LoopControl, ShellContext};

/// Set to read commands from stdin without a line editor.
pub const SCRIPT_ENV: &str = "ACTIVITY_FORM_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    info!(?mode, "activity form shell started");

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    output::section("Create new Activity");
    output::hint("Type `help` for commands or `guided` to answer field by field.");
    context.render();

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();

                match context.process_line(trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err),
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        if line.trim_start().starts_with('#') {
            continue;
        }
        match context.process_line(&line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParseError {
    pub message: String,
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: format!("Could not parse `{}`: {}", input.trim(), err),
    })
}

/// Completes command names in first position and field keys after
/// `set`, `clear` and `options`.
struct CommandHelper {
    commands: Vec<String>,
    fields: Vec<&'static str>,
}

const FIELD_COMMANDS: [&str; 3] = ["set", "clear", "options"];

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_string).collect();
        commands.sort();
        commands.dedup();
        Self {
            commands,
            fields: FieldRef::all().map(FieldRef::key).collect(),
        }
    }

    fn candidates(&self, prefix: &str) -> Vec<Pair> {
        let words: Vec<&str> = prefix.split_whitespace().collect();
        let starting_word = prefix.ends_with(char::is_whitespace) || prefix.is_empty();
        let position = if starting_word {
            words.len()
        } else {
            words.len().saturating_sub(1)
        };
        let needle = if starting_word {
            String::new()
        } else {
            words.last().map(|word| word.to_ascii_lowercase()).unwrap_or_default()
        };

        let pool: Vec<&str> = match position {
            0 => self.commands.iter().map(String::as_str).collect(),
            1 if FIELD_COMMANDS.contains(&words[0].to_ascii_lowercase().as_str()) => {
                self.fields.clone()
            }
            _ => Vec::new(),
        };

        pool.into_iter()
            .filter(|name| name.to_ascii_lowercase().starts_with(&needle))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect()
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        Ok((start, self.candidates(prefix)))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}
