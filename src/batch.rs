// Batch translation: run every line of a file through the sentence
// translator with buffered async I/O and per-run statistics.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tracing::{debug, warn};

use crate::translator::SentenceTranslator;

/// Configuration for batch translation behavior
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Whether to fail fast on the first read error or record it and stop
    pub fail_fast: bool,
    /// Buffer size for async reading
    pub buffer_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for one batch translation run
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BatchStats {
    /// Input file path as given on the command line
    pub input_path: String,
    /// Lines translated successfully
    pub lines_translated: u64,
    /// Empty lines passed through unchanged
    pub lines_passed_through: u64,
    /// Characters read from input lines
    pub chars_processed: u64,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
    /// Throughput in characters per second
    pub chars_per_sec: f64,
    /// Error message if reading stopped early
    pub read_error: Option<String>,
}

/// Line-by-line file translator writing to stdout or an output file
pub struct BatchTranslator {
    config: BatchConfig,
}

impl BatchTranslator {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Translate every line of `input_path` in order. Empty lines pass
    /// through unchanged; a read error ends the run with partial stats
    /// unless `fail_fast` is set.
    pub async fn translate_file(
        &self,
        translator: &SentenceTranslator,
        input_path: &Path,
        output_path: Option<&Path>,
    ) -> Result<BatchStats> {
        let start_time = std::time::Instant::now();

        debug!("Starting batch translation of: {}", input_path.display());

        let file = match File::open(input_path).await {
            Ok(file) => file,
            Err(e) => {
                let error_msg = format!("Failed to open file {}: {}", input_path.display(), e);
                warn!("{}", error_msg);

                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error_msg));
                }
                return Ok(self.stats_for(input_path, 0, 0, 0, start_time, Some(error_msg)));
            }
        };

        let sink: Box<dyn AsyncWrite + Unpin> = match output_path {
            Some(path) => Box::new(File::create(path).await?),
            None => Box::new(tokio::io::stdout()),
        };
        let mut writer = BufWriter::new(sink);

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();

        let mut lines_translated = 0u64;
        let mut lines_passed_through = 0u64;
        let mut chars_processed = 0u64;
        let mut read_error = None;

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    chars_processed += line.chars().count() as u64;

                    // The translator rejects only empty input, which batch
                    // mode treats as pass-through rather than a failure.
                    match translator.translate_sentence(&line) {
                        Ok(translated) => {
                            lines_translated += 1;
                            writer.write_all(translated.as_bytes()).await?;
                        }
                        Err(_) => {
                            lines_passed_through += 1;
                            writer.write_all(line.as_bytes()).await?;
                        }
                    }
                    writer.write_all(b"\n").await?;
                }
                Ok(None) => break,
                Err(e) => {
                    let error_msg = format!(
                        "Read error in {} at line {}: {}",
                        input_path.display(),
                        lines_translated + lines_passed_through + 1,
                        e
                    );
                    warn!("{}", error_msg);

                    if self.config.fail_fast {
                        return Err(anyhow::anyhow!(error_msg));
                    }
                    read_error = Some(error_msg);
                    break;
                }
            }
        }

        writer.flush().await?;

        let stats = self.stats_for(
            input_path,
            lines_translated,
            lines_passed_through,
            chars_processed,
            start_time,
            read_error,
        );

        debug!(
            "Batch translation finished: {} lines, {} chars, {:.0} chars/sec",
            stats.lines_translated, stats.chars_processed, stats.chars_per_sec
        );

        Ok(stats)
    }

    fn stats_for(
        &self,
        input_path: &Path,
        lines_translated: u64,
        lines_passed_through: u64,
        chars_processed: u64,
        start_time: std::time::Instant,
        read_error: Option<String>,
    ) -> BatchStats {
        let elapsed = start_time.elapsed();
        let chars_per_sec = if elapsed.as_secs_f64() > 0.0 {
            chars_processed as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        BatchStats {
            input_path: input_path.display().to_string(),
            lines_translated,
            lines_passed_through,
            chars_processed,
            duration_ms: elapsed.as_millis() as u64,
            chars_per_sec,
            read_error,
        }
    }
}

/// Write run statistics as pretty-printed JSON
pub async fn write_stats(stats: &BatchStats, stats_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    tokio::fs::write(stats_path, json).await?;
    Ok(())
}
