use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{self, ClearType},
    ExecutableCommand,
};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use thiserror::Error;

use super::test_mode::{self, TextTestInput};

const BACK_LABEL: &str = "← Back";

/// What the person answered at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Value(String),
    /// Leave the current value as it is.
    Keep,
    /// Return to the previous field.
    Back,
    /// Abandon the guided run.
    Cancel,
}

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

pub type PromptResult = Result<PromptResponse, PromptError>;

fn scripted(label: &str) -> Option<PromptResponse> {
    test_mode::next_text_input(label).map(|input| match input {
        TextTestInput::Value(value) => PromptResponse::Value(value),
        TextTestInput::Keep => PromptResponse::Keep,
        TextTestInput::Back => PromptResponse::Back,
        TextTestInput::Cancel => PromptResponse::Cancel,
    })
}

/// Free text. `:back`, `:cancel` and `:clear` are commands; an empty answer
/// keeps the current value.
pub fn text_input(label: &str, current: &str) -> PromptResult {
    if let Some(response) = scripted(label) {
        return Ok(response);
    }

    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(interpret_text(&answer, current))
}

fn interpret_text(answer: &str, current: &str) -> PromptResponse {
    let trimmed = answer.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        ":back" => PromptResponse::Back,
        ":cancel" => PromptResponse::Cancel,
        ":clear" => PromptResponse::Value(String::new()),
        "" if current.is_empty() => PromptResponse::Value(String::new()),
        "" => PromptResponse::Keep,
        _ => PromptResponse::Value(answer.to_string()),
    }
}

/// Arrow-key selection. Escape cancels; the trailing entry goes back.
pub fn choice_input(label: &str, options: &[String], current: Option<usize>) -> PromptResult {
    if let Some(response) = scripted(label) {
        return Ok(response);
    }

    let mut items: Vec<&str> = options.iter().map(String::as_str).collect();
    items.push(BACK_LABEL);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .items(&items)
        .default(current.unwrap_or(0))
        .interact_opt()?;

    Ok(match selection {
        None => PromptResponse::Cancel,
        Some(index) if index == options.len() => PromptResponse::Back,
        Some(index) => PromptResponse::Value(options[index].clone()),
    })
}

/// Raw-mode entry that only ever accepts digits, up to `max_len` of them.
pub fn digits_input(label: &str, current: &str, max_len: Option<usize>) -> PromptResult {
    if let Some(response) = scripted(label) {
        return Ok(response);
    }

    let mut stdout = io::stdout();
    writeln!(stdout, "{label} (digits only, Esc to cancel, Ctrl-B to go back)")?;
    let mut guard = RawModeGuard::activate()?;
    let mut buffer: String = current.chars().filter(char::is_ascii_digit).collect();
    redraw_input(&mut stdout, &buffer)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    guard.deactivate();
                    writeln!(stdout)?;
                    return Ok(PromptResponse::Cancel);
                }
                KeyCode::Char('b') => {
                    guard.deactivate();
                    writeln!(stdout)?;
                    return Ok(PromptResponse::Back);
                }
                KeyCode::Char('u') => {
                    buffer.clear();
                    redraw_input(&mut stdout, &buffer)?;
                }
                _ => {}
            }
            continue;
        }

        match key.code {
            KeyCode::Esc => {
                guard.deactivate();
                writeln!(stdout)?;
                return Ok(PromptResponse::Cancel);
            }
            KeyCode::Enter => {
                guard.deactivate();
                writeln!(stdout)?;
                return Ok(PromptResponse::Value(buffer));
            }
            KeyCode::Backspace => {
                buffer.pop();
                redraw_input(&mut stdout, &buffer)?;
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                if max_len.map_or(true, |cap| buffer.len() < cap) {
                    buffer.push(ch);
                    redraw_input(&mut stdout, &buffer)?;
                }
            }
            _ => {}
        }
    }
}

fn redraw_input(stdout: &mut io::Stdout, buffer: &str) -> io::Result<()> {
    stdout.execute(cursor::MoveToColumn(0))?;
    stdout.execute(terminal::Clear(ClearType::CurrentLine))?;
    write!(stdout, "> {}", buffer)?;
    stdout.flush()
}

struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    fn activate() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { active: true })
    }

    fn deactivate(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answer_keeps_an_existing_value() {
        assert_eq!(interpret_text("  ", "Chess"), PromptResponse::Keep);
        assert_eq!(
            interpret_text("", ""),
            PromptResponse::Value(String::new())
        );
    }

    #[test]
    fn colon_commands_navigate() {
        assert_eq!(interpret_text(":BACK", "x"), PromptResponse::Back);
        assert_eq!(interpret_text(":cancel", ""), PromptResponse::Cancel);
        assert_eq!(
            interpret_text(":clear", "x"),
            PromptResponse::Value(String::new())
        );
        assert_eq!(
            interpret_text("Quiz night", ""),
            PromptResponse::Value("Quiz night".into())
        );
    }
}
