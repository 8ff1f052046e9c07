use crate::config::AppConfig;
use std::io;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber, logging to stdout (server mode)
///
/// RUST_LOG takes precedence over `log_level` from the config.
pub fn init_logging(config: &AppConfig) {
    subscriber(config, io::stdout).init();
}

/// Same as `init_logging` but on stderr, keeping stdout for the CLI report
pub fn init_cli_logging(config: &AppConfig) {
    subscriber(config, io::stderr).init();
}

fn subscriber<W>(config: &AppConfig, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let (json_layer, text_layer) = if config.use_json {
        let layer = fmt::layer()
            .json()
            .with_target(true) // Keep target in JSON for structured queries
            .with_writer(writer)
            .with_ansi(false);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_target(false)
            .with_writer(writer)
            .with_ansi(true);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured(config: &AppConfig) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let sub = subscriber(config, move || writer.clone());

        tracing::subscriber::with_default(sub, || {
            tracing::error!("transfer document rejected");
        });

        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_logs_go_to_given_writer() {
        let output = captured(&AppConfig::default());
        assert!(output.contains("transfer document rejected"));
    }

    #[test]
    fn test_json_logs() {
        let config = AppConfig {
            use_json: true,
            ..AppConfig::default()
        };
        let output = captured(&config);
        let line: serde_json::Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
        assert_eq!(line["fields"]["message"], "transfer document rejected");
    }
}
