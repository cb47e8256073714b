use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::{
    find_country, NEGATIVE_COMMENTS, NEUTRAL_COMMENTS, POSITIVE_COMMENTS, PRODUCTS,
};
use crate::error::GenError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column order of the generated file. Matches the field order of [`SurveyRecord`].
pub const HEADER: [&str; 11] = [
    "ProductId",
    "ProductName",
    "Category",
    "CustomerId",
    "CustomerName",
    "Country",
    "City",
    "SurveyDate",
    "Rating",
    "Sentiment",
    "Comment",
];

/// A satisfaction score, 1 (worst) to 5 (best).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8")]
pub struct Rating(u8);

/// Every rating, ordered from worst to best.
pub const RATINGS: [Rating; 5] = [Rating(1), Rating(2), Rating(3), Rating(4), Rating(5)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentTier {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SurveyRecord {
    pub product_id: u32,
    pub product_name: &'static str,
    pub category: &'static str,
    pub customer_id: u32,
    pub customer_name: String,
    pub country: &'static str,
    pub city: &'static str,
    #[serde(serialize_with = "serialize_date")]
    pub survey_date: NaiveDate,
    pub rating: Rating,
    pub sentiment: i8,
    pub comment: &'static str,
}

/// A row read back from a generated file.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SurveyRow {
    pub product_id: u32,
    pub product_name: String,
    pub category: String,
    pub customer_id: u32,
    pub customer_name: String,
    pub country: String,
    pub city: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub survey_date: NaiveDate,
    pub rating: Rating,
    pub sentiment: i8,
    pub comment: String,
}

impl TryFrom<u8> for Rating {
    type Error = GenError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=5).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(GenError::InvalidRating(value))
        }
    }
}

impl Rating {
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// The sentiment scores a record with this rating may carry.
    #[must_use]
    pub fn sentiment_range(self) -> RangeInclusive<i8> {
        match self.0 {
            5 => 80..=100,
            4 => 40..=79,
            3 => -20..=39,
            2 => -60..=-21,
            _ => -100..=-61,
        }
    }

    #[must_use]
    pub fn tier(self) -> CommentTier {
        match self.0 {
            4..=5 => CommentTier::Positive,
            3 => CommentTier::Neutral,
            _ => CommentTier::Negative,
        }
    }
}

impl CommentTier {
    #[must_use]
    pub fn pool(self) -> &'static [&'static str] {
        match self {
            CommentTier::Positive => &POSITIVE_COMMENTS,
            CommentTier::Neutral => &NEUTRAL_COMMENTS,
            CommentTier::Negative => &NEGATIVE_COMMENTS,
        }
    }
}

impl SurveyRow {
    /// Checks the row against the catalog and the rating rules: a known product,
    /// a city inside its country, a sentiment inside the rating's range and a
    /// comment from the rating's tier.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let known_product = PRODUCTS.iter().any(|p| {
            p.id == self.product_id && p.name == self.product_name && p.category == self.category
        });
        let known_city = find_country(&self.country).is_some_and(|c| c.contains_city(&self.city));

        known_product
            && known_city
            && self.rating.sentiment_range().contains(&self.sentiment)
            && self.rating.tier().pool().contains(&self.comment.as_str())
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(de::Error::custom)
}
