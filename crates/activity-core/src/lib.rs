//! activity-core
//!
//! Validation rules and the two-step wizard state machine for activity
//! submissions. Depends on activity-domain. No terminal I/O; the submission
//! effect is reached only through the [`SubmissionSink`] trait.

pub mod error;
pub mod error_map;
pub mod masks;
pub mod submission;
pub mod validation;
pub mod wizard;


pub use error::CoreError;
pub use error_map::ErrorMap;
pub use masks::{digit_count, mask_contact_number, mask_member_count, CONTACT_NUMBER_DIGITS};
pub use submission::*;
pub use validation::*;
pub use wizard::*;
