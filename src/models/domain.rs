use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point-of-interest candidate collected from an upstream provider
///
/// Candidates are produced per request by the provider collectors (maps,
/// tour board, web search, LLM) and have already been normalized to this
/// shape. They may contain duplicates and partially filled fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "operatingHours", default)]
    pub operating_hours: Option<String>,
    #[serde(rename = "priceRange", default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(rename = "travelStyle", default)]
    pub travel_style: Option<String>,
    #[serde(rename = "timeBlock", default)]
    pub time_block: Option<String>,
    #[serde(default)]
    pub day: Option<u8>,
    #[serde(rename = "recommendTime", default)]
    pub recommend_time: Option<String>,
}

impl Place {
    /// Both coordinate components, when the pair is usable
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Helper to check for a blank name (invalid candidates are dropped)
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Travel style slot collected by the conversational layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TravelStyle {
    Relaxation,
    Adventure,
    Cultural,
    Foodie,
    Shopping,
    Nature,
}

/// Budget tier slot collected by the conversational layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Budget {
    Low,
    Medium,
    High,
    Unlimited,
}

/// User preferences driving one filtering pass
///
/// Validated by the slot-filling layer before reaching this engine; the
/// engine itself does not re-validate preference semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(rename = "travelStyle")]
    pub travel_style: TravelStyle,
    pub budget: Budget,
    #[serde(rename = "preferredCategories", default)]
    pub preferred_categories: Vec<String>,
    #[serde(rename = "travelDates", default)]
    pub travel_dates: Option<DateRange>,
    #[serde(rename = "tripDays")]
    pub trip_days: u8,
    #[serde(rename = "partySize")]
    pub party_size: u8,
}

/// Error building a [`DateRange`]
#[derive(Debug, Error)]
pub enum DateRangeError {
    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

/// Inclusive travel date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "startDate")]
    pub start: NaiveDate,
    #[serde(rename = "endDate")]
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if end < start {
            return Err(DateRangeError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse a range from `YYYY-MM-DD` strings
    pub fn parse(start: &str, end: &str) -> Result<Self, DateRangeError> {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")?;
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")?;
        Self::new(start, end)
    }

    /// Whether any day in the range falls on a Monday
    pub fn spans_monday(&self) -> bool {
        if self.days() >= 7 {
            return true;
        }
        self.start
            .iter_days()
            .take_while(|d| *d <= self.end)
            .any(|d| d.weekday() == Weekday::Mon)
    }

    /// Number of days in the range, inclusive
    pub fn days(&self) -> u32 {
        (self.end - self.start).num_days() as u32 + 1
    }
}

/// Weights for the composite place score
///
/// Deserializable so the orchestration layer can tune them without a code
/// change; each field falls back to its default when omitted.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    #[serde(default = "default_completeness_weight")]
    pub completeness: f64,
    #[serde(default = "default_category_weight")]
    pub category: f64,
    #[serde(default = "default_tags_weight")]
    pub tags: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            rating: default_rating_weight(),
            completeness: default_completeness_weight(),
            category: default_category_weight(),
            tags: default_tags_weight(),
        }
    }
}

fn default_rating_weight() -> f64 { 0.4 }
fn default_completeness_weight() -> f64 { 0.3 }
fn default_category_weight() -> f64 { 0.2 }
fn default_tags_weight() -> f64 { 0.1 }

/// A named geographic sub-region with a style profile
///
/// Catalog entries are fixed at startup; see [`crate::ClusterCatalog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "centerLat")]
    pub center_lat: f64,
    #[serde(rename = "centerLng")]
    pub center_lng: f64,
    /// Collection radius in meters
    #[serde(rename = "radiusMeters")]
    pub radius_m: u32,
    pub styles: Vec<String>,
    #[serde(rename = "ageGroup")]
    pub age_group: String,
    pub budget: Budget,
    pub characteristics: Vec<String>,
    pub description: String,
}
