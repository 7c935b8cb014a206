#![doc(test(attr(deny(warnings))))]

//! Activity Form collects an activity submission in two steps (activity
//! details, then location and contact details) and hands the merged record to
//! a pluggable sink. The wizard itself lives in `activity-core`; this crate
//! adds the terminal shell, the text views and the concrete sinks.

pub mod cli;
pub mod errors;
pub mod sinks;
pub mod utils;

pub use activity_config as config;
pub use activity_core as wizard;
pub use activity_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Activity Form tracing initialized.");
    });
}
