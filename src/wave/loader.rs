//! Reader for open-meteo marine CSV exports.
//!
//! The export starts with a location metadata block (`latitude,longitude,...` and one
//! value row), a blank line, then the `time,wave_height (m),...` header and hourly rows.
//! Only rows with a timestamp and four numeric columns become samples; everything else
//! is skipped and counted.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use super::WaveSample;
use crate::error::DatasetError;

/// Samples parsed from a CSV body plus the number of rejected rows
#[derive(Debug, Clone, Default)]
pub struct ParsedRecord {
    pub samples: Vec<WaveSample>,
    pub skipped: usize,
}

/// Parse CSV text into samples, skipping metadata, headers and malformed rows
pub fn parse_wave_csv(text: &str) -> ParsedRecord {
    let mut record = ParsedRecord::default();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("latitude") || line.starts_with("time") {
            continue;
        }
        match parse_row(line) {
            Some(sample) => record.samples.push(sample),
            None => {
                debug!("Skipping malformed wave row {}: {:?}", line_no + 1, line);
                record.skipped += 1;
            }
        }
    }

    record
}

fn parse_row(line: &str) -> Option<WaveSample> {
    let mut fields = line.split(',').map(str::trim);
    let timestamp = fields.next().filter(|t| !t.is_empty())?;
    let mut number = || fields.next()?.parse::<f32>().ok();

    Some(WaveSample {
        timestamp: timestamp.to_string(),
        wave_height: number()?,
        wave_direction: number()?,
        wave_period: number()?,
        current_speed: number()?,
    })
}

/// Read and parse a wave record from disk
pub fn load_wave_csv(path: &Path) -> Result<Vec<WaveSample>, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let ParsedRecord { samples, skipped } = parse_wave_csv(&text);
    if samples.is_empty() {
        return Err(DatasetError::NoSamples {
            path: path.to_path_buf(),
            skipped,
        });
    }
    if skipped > 0 {
        warn!("Skipped {} malformed rows in {}", skipped, path.display());
    }
    info!("Loaded {} wave samples from {}", samples.len(), path.display());

    Ok(samples)
}
