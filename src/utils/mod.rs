pub mod build_info;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVES: &str = "activity_form=info,activity_core=info";

/// Installs the global subscriber. `RUST_LOG` wins over the defaults; output
/// goes to stderr so stdout only carries views and JSON submissions.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        if let Err(err) = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
        {
            eprintln!("tracing subscriber not installed: {err}");
        }
    });
}
