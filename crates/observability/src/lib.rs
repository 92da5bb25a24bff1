//! Tracing/logging (shared setup).

/// Environment variable selecting the log output format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "AUTOLOT_LOG_FORMAT";

/// Initialize logging with the format named by [`LOG_FORMAT_ENV`].
///
/// An unrecognised value falls back to JSON and is reported once logging is up.
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init_from_env() {
    let parsed = std::env::var(LOG_FORMAT_ENV)
        .ok()
        .map(|raw| raw.parse::<LogFormat>());

    let format = match &parsed {
        Some(Ok(format)) => *format,
        _ => LogFormat::default(),
    };
    tracing::init(format);

    if let Some(Err(error)) = parsed {
        ::tracing::warn!(%error, "{LOG_FORMAT_ENV} not recognised; using json");
    }
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;
