//! Field-by-field walk through the current wizard step.
//!
//! The runner owns no state of its own: every answer goes through the input
//! masks and then `Wizard::edit`, exactly like the `set` command. Prompting is
//! behind [`StepInteraction`] so tests can script the answers.

use activity_core::{
    mask_contact_number, mask_member_count, CoreError, FieldRef, StepKind, SubmissionSink,
    Transition, Wizard, CONTACT_NUMBER_DIGITS,
};
use activity_domain::{ActivityField, FieldInput, LocationField};
use tracing::debug;

use super::output;
use super::prompts::{self, PromptResponse, PromptResult};

/// Everything a prompt needs to present one field.
#[derive(Debug, Clone)]
pub struct FieldPrompt {
    pub field: FieldRef,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: FieldInput,
    pub required: bool,
    pub current: String,
    pub options: Vec<String>,
    pub error: Option<String>,
    pub position: usize,
    pub total: usize,
}

impl FieldPrompt {
    pub fn title(&self) -> String {
        let marker = if self.required { " *" } else { "" };
        format!(
            "[{}/{}] {}{}",
            self.position + 1,
            self.total,
            self.label,
            marker
        )
    }
}

pub trait StepInteraction {
    fn prompt_text(&mut self, prompt: &FieldPrompt) -> PromptResult;
    fn prompt_choice(&mut self, prompt: &FieldPrompt) -> PromptResult;
    fn prompt_digits(&mut self, prompt: &FieldPrompt, max_len: Option<usize>) -> PromptResult;
    /// Feedback about a rejected answer; the same field is asked again.
    fn notify(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuidedOutcome {
    /// Every field was visited and the step action ran.
    Finished(Transition),
    Cancelled,
}

/// Fields to visit on the current step. The free-text category only appears
/// while `Other` is selected, so the list is recomputed after every answer.
fn step_fields(wizard: &Wizard) -> Vec<FieldRef> {
    match wizard.step_kind() {
        StepKind::ActivityDetails => ActivityField::ALL
            .into_iter()
            .filter(|field| {
                *field != ActivityField::OtherCategory || wizard.activity().wants_other_category()
            })
            .map(FieldRef::Activity)
            .collect(),
        StepKind::LocationDetails => LocationField::ALL
            .into_iter()
            .map(FieldRef::Location)
            .collect(),
        StepKind::Completed => Vec::new(),
    }
}

fn build_prompt(wizard: &Wizard, field: FieldRef, position: usize, total: usize) -> FieldPrompt {
    let reference = wizard.reference();
    let (placeholder, input, required, current, options) = match field {
        FieldRef::Activity(field) => (
            field.placeholder(),
            field.input(),
            field.required(),
            wizard.activity().value(field),
            field.options().into_iter().map(String::from).collect(),
        ),
        FieldRef::Location(field) => {
            let current = match field {
                LocationField::CountryCode => reference
                    .country(&wizard.location().country_code)
                    .map(|entry| entry.display_label())
                    .unwrap_or_default(),
                _ => wizard.location().value(field),
            };
            (
                field.placeholder(),
                field.input(),
                field.required(),
                current,
                field.options(reference),
            )
        }
    };
    let errors = match field {
        FieldRef::Activity(_) => wizard.activity_errors(),
        FieldRef::Location(_) => wizard.location_errors(),
    };
    let error_key = match field {
        FieldRef::Activity(ActivityField::OtherCategory) => ActivityField::Category.key(),
        other => other.key(),
    };

    FieldPrompt {
        field,
        label: field.label(),
        placeholder,
        input,
        required,
        current,
        options,
        error: errors.get(error_key).map(str::to_string),
        position,
        total,
    }
}

/// Applies the input masks. `Err` carries the message for a refused answer.
fn masked_value(wizard: &Wizard, prompt: &FieldPrompt, raw: String) -> Result<String, String> {
    match prompt.input {
        FieldInput::Count => mask_member_count(&raw)
            .ok_or_else(|| format!("{} accepts whole numbers only", prompt.label)),
        FieldInput::Phone => mask_contact_number(&raw).ok_or_else(|| {
            format!(
                "{} accepts at most {} digits",
                prompt.label, CONTACT_NUMBER_DIGITS
            )
        }),
        FieldInput::Choice
            if prompt.field == FieldRef::Location(LocationField::CountryCode) =>
        {
            // Menu entries carry the display label; store the dialing code.
            Ok(wizard
                .reference()
                .country_codes
                .iter()
                .find(|entry| entry.display_label() == raw)
                .map(|entry| entry.code.to_string())
                .unwrap_or(raw))
        }
        _ => Ok(raw),
    }
}

fn ask<I: StepInteraction>(interaction: &mut I, prompt: &FieldPrompt) -> PromptResult {
    match prompt.input {
        FieldInput::Choice => interaction.prompt_choice(prompt),
        FieldInput::Count => interaction.prompt_digits(prompt, None),
        FieldInput::Phone => interaction.prompt_digits(prompt, Some(CONTACT_NUMBER_DIGITS)),
        FieldInput::Text | FieldInput::LongText => interaction.prompt_text(prompt),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GuidedError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Prompt(#[from] prompts::PromptError),
}

/// Walks the current step, then continues (activity) or submits (location).
pub fn run_guided<I, S>(
    wizard: &mut Wizard,
    sink: &mut S,
    interaction: &mut I,
) -> Result<GuidedOutcome, GuidedError>
where
    I: StepInteraction,
    S: SubmissionSink + ?Sized,
{
    let step = wizard.step_kind();
    if step == StepKind::Completed {
        return Err(CoreError::InvalidTransition {
            action: "start a guided run",
            step,
        }
        .into());
    }

    let mut index = 0;
    loop {
        let fields = step_fields(wizard);
        let Some(field) = fields.get(index).copied() else {
            break;
        };
        let prompt = build_prompt(wizard, field, index, fields.len());

        match ask(interaction, &prompt)? {
            PromptResponse::Cancel => {
                debug!(field = field.key(), "guided run cancelled");
                return Ok(GuidedOutcome::Cancelled);
            }
            PromptResponse::Back => index = index.saturating_sub(1),
            PromptResponse::Keep => index += 1,
            PromptResponse::Value(raw) => {
                let value = match masked_value(wizard, &prompt, raw) {
                    Ok(value) => value,
                    Err(message) => {
                        interaction.notify(&message);
                        continue;
                    }
                };
                match wizard.edit(field.key(), &value) {
                    Ok(_) => index += 1,
                    Err(CoreError::InvalidChoice(err)) => interaction.notify(&err.to_string()),
                    Err(err) => return Err(err.into()),
                }
            }
        }
    }

    let transition = match step {
        StepKind::ActivityDetails => wizard.advance()?,
        _ => wizard.submit(sink)?,
    };
    Ok(GuidedOutcome::Finished(transition))
}

/// Prompts on the real terminal.
pub struct TerminalInteraction;

impl TerminalInteraction {
    fn announce(prompt: &FieldPrompt) {
        if let Some(error) = &prompt.error {
            output::warning(error);
        }
    }
}

impl StepInteraction for TerminalInteraction {
    fn prompt_text(&mut self, prompt: &FieldPrompt) -> PromptResult {
        Self::announce(prompt);
        prompts::text_input(&prompt.title(), &prompt.current)
    }

    fn prompt_choice(&mut self, prompt: &FieldPrompt) -> PromptResult {
        Self::announce(prompt);
        let current = prompt
            .options
            .iter()
            .position(|option| *option == prompt.current);
        prompts::choice_input(&prompt.title(), &prompt.options, current)
    }

    fn prompt_digits(&mut self, prompt: &FieldPrompt, max_len: Option<usize>) -> PromptResult {
        Self::announce(prompt);
        prompts::digits_input(&prompt.title(), &prompt.current, max_len)
    }

    fn notify(&mut self, message: &str) {
        output::warning(message);
    }
}
