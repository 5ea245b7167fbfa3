/// Diagnostic logging setup (`tracing` events, written to stderr).
use clap::ValueEnum;

/// Log verbosity selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    /// No subscriber is installed at all.
    Silent,
}

impl LogLevel {
    #[must_use]
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            Self::Debug => Some(tracing::Level::DEBUG),
            Self::Info => Some(tracing::Level::INFO),
            Self::Warn => Some(tracing::Level::WARN),
            Self::Error => Some(tracing::Level::ERROR),
            Self::Silent => None,
        }
    }
}

/// Install the global fmt subscriber. Stdout stays reserved for command output.
pub fn init(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
