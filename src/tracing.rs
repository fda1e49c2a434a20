//! Logging for the helper engine and the `taghelper` CLI
//!
//! Two sinks are installed. Stderr carries whatever `RUST_LOG` selects and
//! stays at `warn` otherwise, so CLI output on stdout is never mixed with
//! logs. The file sink under `logs/taghelper.log` (see [`crate::config_paths`])
//! always records `debug`, rotated daily.
//!
//! Useful targets:
//! - `taghelper::update` - session start, commit and cancel decisions
//! - `taghelper::span` - fragment walks while resolving a typed token
//! - `taghelper::emitter` - replacements, insert fallbacks and host vetoes
//! - `taghelper::store` - tag file reads, writes and imports
//!
//! e.g. `RUST_LOG=taghelper::span=trace,taghelper::emitter=debug taghelper replay ...`

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE: &str = "taghelper.log";

/// Install the stderr and file subscribers
///
/// A missing or unwritable logs directory only disables the file sink.
pub fn init() {
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")));

    let file = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => Some(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug")),
        ),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            None
        }
    };

    tracing_subscriber::registry().with(stderr).with(file).init();
}
