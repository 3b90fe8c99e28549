//! Command-line interface for silabeo
//!
//! Provides transcription, syllabification, hyphenation and pattern compilation.

pub mod args;
pub mod commands;
pub mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use args::{Cli, Commands, OutputArgs, SerializationFormat};
pub use commands::execute;
pub use config::CliConfig;

/// Install the global log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity count. Logs go to stderr so
/// transcriptions on stdout stay clean.
pub fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "silabeo=warn",
        1 => "silabeo=debug",
        _ => "silabeo=trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
