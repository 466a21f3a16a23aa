use super::*;
use tracing::Level;

#[test]
fn test_default_filter_directives() {
    assert_eq!(Logger::default_filter(LogLevel::Debug), "buildorder=debug,warn");
    assert_eq!(Logger::default_filter(LogLevel::Error), "buildorder=error,warn");
}

#[test]
fn test_default_filter_parses() {
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        assert!(EnvFilter::try_new(Logger::default_filter(level)).is_ok());
    }
}

#[test]
fn test_default_filter_covers_library_targets() {
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(Logger::default_filter(LogLevel::Debug)));

    tracing::subscriber::with_default(subscriber, || {
        assert!(tracing::enabled!(target: "buildorder_lib::graph", Level::DEBUG));
        assert!(tracing::enabled!(target: "buildorder", Level::DEBUG));
        assert!(!tracing::enabled!(target: "petgraph", Level::DEBUG));
        assert!(tracing::enabled!(target: "petgraph", Level::WARN));
    });
}

#[test]
fn test_second_init_is_rejected() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        color: false,
    };

    // The first call can fail if another subscriber is already installed;
    // the second must fail either way.
    let _ = Logger::init(config.clone());
    assert!(Logger::init(config).is_err());
}
