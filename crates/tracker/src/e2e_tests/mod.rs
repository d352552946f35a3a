//! Full-flow integration tests.
//!
//! These drive the tracker the way a view binding would: construct an
//! `App`, subscribe, and perform user actions end to end.
//!
//! ```bash
//! cargo test -p btltrkr-tracker --lib e2e_tests
//! ```


/// Install a test subscriber so `RUST_LOG`-style filtering works under
/// `cargo test -- --nocapture`. Safe to call from every test.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
