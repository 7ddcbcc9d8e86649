//! Logger setup for hosts that do not install their own `log` backend.

/// Installs `env_logger` (filtered by `RUST_LOG`).
///
/// Safe to call more than once; if a logger is already set the call only
/// reports that on stderr.
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            eprintln!("Warning: Could not initialize logger: {}", e);
        } else {
            log::debug!("logging initialized");
        }
    }
}
