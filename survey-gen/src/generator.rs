use chrono::{Duration, Local, NaiveDate};
use log::debug;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Country, Product, COUNTRIES, FIRST_NAMES, LAST_NAMES, PRODUCTS};
use crate::error::GenError;
use crate::survey::{SurveyRecord, RATINGS};

/// Relative weights of ratings 1 through 5.
pub const RATING_WEIGHTS: [u32; 5] = [5, 10, 20, 35, 30];

/// Survey dates fall within this many days before the reference date.
pub const SURVEY_WINDOW_DAYS: i64 = 730;

/// Builds [`SurveyRecord`]s from independent random draws over the catalog.
#[derive(Debug)]
pub struct SurveyGenerator<R> {
    rng: R,
    ratings: WeightedIndex<u32>,
    today: NaiveDate,
}

impl<R: Rng> SurveyGenerator<R> {
    /// Creates a generator whose survey window ends at the current local date.
    ///
    /// # Errors
    /// Errors when [`RATING_WEIGHTS`] cannot form a weighted distribution
    pub fn new(rng: R) -> Result<Self, GenError> {
        Self::with_today(rng, Local::now().date_naive())
    }

    /// # Errors
    /// Errors when [`RATING_WEIGHTS`] cannot form a weighted distribution
    pub fn with_today(rng: R, today: NaiveDate) -> Result<Self, GenError> {
        let ratings = WeightedIndex::new(RATING_WEIGHTS)?;
        debug!("Survey dates will end the day before {}", today);
        Ok(SurveyGenerator {
            rng,
            ratings,
            today,
        })
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn generate(&mut self, customer_id: u32) -> SurveyRecord {
        let product: &Product = pick(&mut self.rng, &PRODUCTS);
        let country: &Country = pick(&mut self.rng, &COUNTRIES);
        let city = *pick(&mut self.rng, country.cities);

        let rating = RATINGS[self.ratings.sample(&mut self.rng)];
        let sentiment = self.rng.gen_range(rating.sentiment_range());
        let comment = *pick(&mut self.rng, rating.tier().pool());

        let customer_name = format!(
            "{} {}",
            pick(&mut self.rng, &FIRST_NAMES),
            pick(&mut self.rng, &LAST_NAMES)
        );
        let survey_date = self.survey_date();

        SurveyRecord {
            product_id: product.id,
            product_name: product.name,
            category: product.category,
            customer_id,
            customer_name,
            country: country.name,
            city,
            survey_date,
            rating,
            sentiment,
            comment,
        }
    }

    /// One of the [`SURVEY_WINDOW_DAYS`] days preceding `today`, uniformly.
    fn survey_date(&mut self) -> NaiveDate {
        let offset = self.rng.gen_range(0..SURVEY_WINDOW_DAYS);
        self.today - Duration::days(SURVEY_WINDOW_DAYS) + Duration::days(offset)
    }
}

impl SurveyGenerator<StdRng> {
    /// A [`StdRng`] seeded generator. The same seed yields the same records
    /// for the same reference date.
    ///
    /// # Errors
    /// Errors when [`RATING_WEIGHTS`] cannot form a weighted distribution
    pub fn from_seed(seed: u64) -> Result<Self, GenError> {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
