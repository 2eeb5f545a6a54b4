use std::fs;
use tempfile::tempdir;
use zoo_logger::{LevelFilter, Logger};

#[test]
fn file_logging_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder("zoo-file-logging")
        .console(false)
        .level(LevelFilter::INFO)
        .files(&log_dir)
        .keep(2)
        .json(true)
        .init()?;

    assert!(logger.writes_files());
    tracing::info!(animal = "Bugs", "animal admitted");
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("animal admitted"));
    assert!(contents.contains("\"animal\":\"Bugs\""));

    Ok(())
}
