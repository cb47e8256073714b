use std::error::Error;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use survey_gen::generator::SurveyGenerator;
use survey_gen::writer::{
    export_to_path, Progress, WriteOptions, DEFAULT_OUTPUT_PATH, DEFAULT_PROGRESS_INTERVAL,
    DEFAULT_RECORD_COUNT,
};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The CSV file to write
    #[clap(default_value = DEFAULT_OUTPUT_PATH)]
    pub(crate) output_file: String,
    /// How many survey records to generate
    #[clap(long, default_value_t = DEFAULT_RECORD_COUNT)]
    pub(crate) records: u32,
    /// Print a progress line every this many records
    #[clap(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub(crate) progress_interval: u32,
    /// Seed for reproducible output
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut generator = match cli.seed {
        Some(seed) => SurveyGenerator::from_seed(seed)?,
        None => SurveyGenerator::new(StdRng::from_entropy())?,
    };
    let options = WriteOptions {
        count: cli.records,
        progress_interval: cli.progress_interval,
    };

    println!("Generating {} survey records...", separated(u64::from(options.count)));
    println!("Output file: {}", cli.output_file);

    let summary = export_to_path(&cli.output_file, &mut generator, options, |progress: &Progress| {
        println!(
            "  {} records generated ({} records/sec)",
            separated(u64::from(progress.records)),
            separated_rate(progress.rate())
        );
    })?;

    println!();
    println!("[OK] Generation complete!");
    println!("  Total records: {}", separated(u64::from(summary.progress.records)));
    println!("  Total time: {:.2} seconds", summary.progress.elapsed.as_secs_f64());
    println!("  Average rate: {} records/sec", separated_rate(summary.progress.rate()));
    println!("  File size: {:.2} MB", summary.megabytes());
    println!();
    println!("File written: {}", cli.output_file);

    Ok(())
}

/// Formats `n` with comma thousands separators, e.g. `500,001`.
fn separated(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn separated_rate(rate: f64) -> String {
    separated(rate.round() as u64)
}
