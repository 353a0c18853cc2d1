use std::sync::Once;

static INIT: Once = Once::new();

/// Routes engine diagnostics to the test output. Safe to call from every test.
pub fn setup_test_environment() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing_core::Level::TRACE)
            .with_file(true)
            .with_line_number(true)
            .with_test_writer()
            .init();
    });
}
