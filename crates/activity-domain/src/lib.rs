//! activity-domain
//!
//! Pure data for the activity submission wizard: drafts, choice enums, field
//! identifiers, static reference tables, and the merged submission record.
//! No I/O, no CLI, no validation policy.

pub mod choices;
pub mod draft;
pub mod record;
pub mod reference;

pub use choices::*;
pub use draft::*;
pub use record::*;
pub use reference::*;
