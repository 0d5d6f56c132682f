use tracing::Level;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn tracing_level(self) -> Level {
        match self {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Sets up a global subscriber that writes to stderr, so logs don't mix
/// with lint output on stdout.
pub fn init_logging(log_level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(log_level.tracing_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
