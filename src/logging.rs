//! Tracing setup shared by all CLI commands.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter from RUST_LOG, or `default_filter` when it is unset or invalid
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into())
}

/// Registry with `filter` and a timestamp-free fmt layer writing to `writer`
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(writer))
}

/// Install the global subscriber, logging to stderr
pub fn init(default_filter: &str) {
    subscriber(env_filter(default_filter), std::io::stderr).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppConfig;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_config_parse_warning_is_written() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode: [not, a, mode").unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = subscriber(EnvFilter::new("visidiff=warn"), move || writer.clone());

        let config = tracing::subscriber::with_default(subscriber, || {
            AppConfig::load(Some(file.path()))
        });

        assert_eq!(config, AppConfig::default());
        let output = captured.text();
        assert!(output.contains("WARN"), "got {output:?}");
        assert!(output.contains("Failed to parse config"), "got {output:?}");
    }

    #[test]
    fn test_filter_hides_info() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode: heatmap").unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = subscriber(EnvFilter::new("visidiff=warn"), move || writer.clone());

        tracing::subscriber::with_default(subscriber, || AppConfig::load(Some(file.path())));

        assert!(captured.text().is_empty(), "got {:?}", captured.text());
    }
}
