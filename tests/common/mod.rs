pub mod script_server;

use std::sync::Once;

static LOGGING: Once = Once::new();

/// Routes the client's tracing events to stderr for this test binary.
pub fn init_logging() {
    LOGGING.call_once(recurl::logging::init_stderr_logging);
}
