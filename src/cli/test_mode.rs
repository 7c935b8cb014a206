//! Scripted answers for guided prompts, read from `ACTIVITY_FORM_TEST_INPUTS`.
//!
//! Answers are separated by `|`. `<BLANK>` is an empty answer, `<KEEP>` keeps
//! the current value, `<BACK>` returns to the previous field and `<CANCEL>`
//! abandons the guided run.

use once_cell::sync::Lazy;
use std::{
    collections::VecDeque,
    env,
    sync::{Mutex, MutexGuard, PoisonError},
};

pub const TEST_INPUTS_ENV: &str = "ACTIVITY_FORM_TEST_INPUTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextTestInput {
    Value(String),
    Keep,
    Back,
    Cancel,
}

struct TextQueue {
    enabled: bool,
    inputs: VecDeque<TextTestInput>,
}

impl TextQueue {
    fn from_env() -> Self {
        match env::var(TEST_INPUTS_ENV) {
            Ok(raw) => Self {
                enabled: true,
                inputs: parse_text_sequences(&raw),
            },
            Err(_) => Self {
                enabled: false,
                inputs: VecDeque::new(),
            },
        }
    }
}

static TEXT_INPUTS: Lazy<Mutex<TextQueue>> = Lazy::new(|| Mutex::new(TextQueue::from_env()));

fn queue() -> MutexGuard<'static, TextQueue> {
    TEXT_INPUTS.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn is_enabled() -> bool {
    queue().enabled
}

/// Next scripted answer, or `None` when prompts should hit the terminal.
/// An exhausted script cancels rather than blocking on stdin.
pub fn next_text_input(label: &str) -> Option<TextTestInput> {
    let mut guard = queue();
    if !guard.enabled {
        return None;
    }
    Some(guard.inputs.pop_front().unwrap_or_else(|| {
        tracing::warn!(prompt = label, "scripted inputs exhausted");
        TextTestInput::Cancel
    }))
}

fn parse_text_input(token: &str) -> TextTestInput {
    match token.to_ascii_uppercase().as_str() {
        "<CANCEL>" | "<ESC>" => TextTestInput::Cancel,
        "<BACK>" => TextTestInput::Back,
        "<KEEP>" => TextTestInput::Keep,
        "<BLANK>" | "<EMPTY>" => TextTestInput::Value(String::new()),
        _ => TextTestInput::Value(token.to_string()),
    }
}

fn parse_text_sequences(raw: &str) -> VecDeque<TextTestInput> {
    raw.split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_text_input)
        .collect()
}

pub fn install_text_inputs(inputs: Vec<TextTestInput>) {
    let mut guard = queue();
    guard.enabled = true;
    guard.inputs = inputs.into();
}

pub fn reset_text_inputs() {
    let mut guard = queue();
    guard.enabled = false;
    guard.inputs.clear();
}
