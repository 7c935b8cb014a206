use thiserror::Error;

use activity_domain::ParseChoiceError;

use crate::submission::SinkError;
use crate::wizard::StepKind;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Cannot {action} while on {step}")]
    InvalidTransition { action: &'static str, step: StepKind },
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error(transparent)]
    InvalidChoice(#[from] ParseChoiceError),
    #[error("Submission failed: {0}")]
    Submission(#[from] SinkError),
}
