use std::io;

use rand::distributions::WeightedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV Error")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    /// Raised while building the rating distribution from its weights
    #[error("Invalid rating weights")]
    WeightError(#[from] WeightedError),
    #[error("Rating {0} is outside of 1..=5")]
    InvalidRating(u8),
    #[error("Invalid write options: {0}")]
    InvalidOptions(&'static str),
}
