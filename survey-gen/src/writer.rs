use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use csv::{Terminator, WriterBuilder};
use log::{debug, info};
use rand::Rng;

use crate::error::GenError;
use crate::generator::SurveyGenerator;
use crate::survey::HEADER;

pub const DEFAULT_RECORD_COUNT: u32 = 500_001;
pub const DEFAULT_PROGRESS_INTERVAL: u32 = 50_000;
pub const DEFAULT_OUTPUT_PATH: &str = "data/surveys.csv";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Number of records; customer ids run from 1 to `count`
    pub count: u32,
    /// Report progress every this many records
    pub progress_interval: u32,
}

/// Records written so far and the time it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub records: u32,
    pub elapsed: Duration,
}

/// Outcome of [`export_to_path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub progress: Progress,
    pub bytes: u64,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            count: DEFAULT_RECORD_COUNT,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl WriteOptions {
    /// # Errors
    /// Errors when `progress_interval` is zero
    pub fn validate(&self) -> Result<(), GenError> {
        if self.progress_interval == 0 {
            return Err(GenError::InvalidOptions("progress interval must be positive"));
        }
        Ok(())
    }
}

impl Progress {
    /// Records per second, or zero when no time has elapsed.
    #[must_use]
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            f64::from(self.records) / secs
        } else {
            0.0
        }
    }
}

impl Summary {
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn megabytes(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_MB
    }
}

/// Writes the header and then `options.count` generated records to `sink`.
///
/// `on_progress` is called every `options.progress_interval` records.
///
/// # Errors
/// Errors when the options are invalid or when a record can't be written
pub fn write_surveys<W, R, F>(
    sink: W,
    generator: &mut SurveyGenerator<R>,
    options: WriteOptions,
    mut on_progress: F,
) -> Result<Progress, GenError>
where
    W: io::Write,
    R: Rng,
    F: FnMut(&Progress),
{
    options.validate()?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(sink);
    writer.write_record(HEADER)?;

    let start = Instant::now();
    for customer_id in 1..=options.count {
        writer.serialize(generator.generate(customer_id))?;

        if customer_id % options.progress_interval == 0 {
            let progress = Progress {
                records: customer_id,
                elapsed: start.elapsed(),
            };
            debug!("{} records written in {:.2?}", progress.records, progress.elapsed);
            on_progress(&progress);
        }
    }
    writer.flush()?;

    Ok(Progress {
        records: options.count,
        elapsed: start.elapsed(),
    })
}

/// Writes a survey file at `path`, creating its directory when missing and
/// replacing any existing file.
///
/// # Errors
/// Errors when the directory or file can't be created or written
pub fn export_to_path<P, R, F>(
    path: P,
    generator: &mut SurveyGenerator<R>,
    options: WriteOptions,
    on_progress: F,
) -> Result<Summary, GenError>
where
    P: AsRef<Path>,
    R: Rng,
    F: FnMut(&Progress),
{
    let path = path.as_ref();
    options.validate()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!("Creating output directory {}", parent.display());
        }
        fs::create_dir_all(parent)?;
    }

    info!("Writing {} survey records to {}", options.count, path.display());
    let file = File::create(path)?;
    let progress = write_surveys(file, generator, options, on_progress)?;
    let bytes = fs::metadata(path)?.len();
    info!(
        "Wrote {} records ({} bytes) in {:.2?}",
        progress.records, bytes, progress.elapsed
    );

    Ok(Summary { progress, bytes })
}
