//! Tracing subscriber setup for the `budgie` binary
//!
//! Filter precedence: `BUDGIE_LOG`, then `-v` flags, then the settings file.
//! Output goes to stderr so that exported data on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "BUDGIE_LOG";

/// Pick the filter directive for a run
pub fn filter_directive(env_value: Option<&str>, verbosity: u8, configured: &str) -> String {
    if let Some(directive) = env_value.map(str::trim).filter(|d| !d.is_empty()) {
        return directive.to_string();
    }

    let level = match verbosity {
        0 => return format!("budgie={}", configured.trim()),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("budgie={}", level)
}

/// Install the global fmt subscriber; a second call is a no-op
pub fn init_logging(verbosity: u8, configured: &str) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(env_value.as_deref(), verbosity, configured);

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("budgie=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
