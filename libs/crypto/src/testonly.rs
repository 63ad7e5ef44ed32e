//! Helpers for tests of this crate and its dependents.
use std::io::IsTerminal as _;

/// Installs a global `tracing` subscriber writing to the test output.
/// The filter is taken from `RUST_LOG`. Safe to call from every test,
/// only the first call has an effect.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .with_ansi(std::env::var("NO_COLOR").is_err() && std::io::stdout().is_terminal())
        .with_line_number(true)
        .try_init();
}

/// Checks that `s` is exactly `len` lowercase hex digits.
pub fn is_lower_hex(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
