pub mod fixtures;

use std::sync::Once;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

static INIT: Once = Once::new();

/// Initializes env_logger once for the whole test binary; honors RUST_LOG.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
