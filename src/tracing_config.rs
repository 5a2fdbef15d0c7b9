use std::{env, io};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the log format (`json` or `pretty`).
pub const LOG_FORMAT_VAR: &str = "PACKWIZ_LOG_FORMAT";

/// Initialize tracing for the generator
///
/// Uses the RUST_LOG environment variable if set, otherwise defaults to
/// "info". Output goes to stderr so Markdown printed on stdout stays
/// clean. `PACKWIZ_LOG_FORMAT=json` switches to JSON lines.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let format = env::var(LOG_FORMAT_VAR).unwrap_or_else(|_| "pretty".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}
