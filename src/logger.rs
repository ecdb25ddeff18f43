use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "quiz_deck=info";

/// Route `tracing` output to `path`. The terminal belongs to the UI, so nothing goes to stdout.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_init() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz_deck.log");
        init(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_logger_init_twice() {
        let dir = tempfile::tempdir().unwrap();
        init(&dir.path().join("a.log")).unwrap();
        init(&dir.path().join("b.log")).unwrap();
        tracing::info!("Test log message");
    }

    #[test]
    fn test_logger_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(init(&dir.path().join("missing").join("x.log")).is_err());
    }
}
