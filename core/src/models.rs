use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair, used both in requests and in business listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components are non-zero
    pub fn is_set(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }
}

/// A business listing as returned by the search endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Business {
    pub id: String,
    pub alias: String,
    pub name: String,
    pub image_url: String,
    pub is_closed: bool,
    pub url: String,
    pub review_count: u32,
    pub categories: Vec<Category>,
    pub rating: f64,
    pub coordinates: Coordinates,
    pub transactions: Vec<String>,
    /// Price level, one of `$`, `$$`, `$$$` and `$$$$`
    pub price: String,
    pub location: Location,
    pub phone: String,
    pub display_phone: String,
    /// Metres from the search location; only present for searches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Street address of a business
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub address1: String,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city: String,
    pub zip_code: String,
    /// ISO 3166-1 alpha-2
    pub country: String,
    /// ISO 3166-2
    pub state: String,
}

/// Location of a business on the details endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedLocation {
    #[serde(flatten)]
    pub address: Location,
    pub display_address: Vec<String>,
    pub cross_streets: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Use this, not the title, when filtering searches by category
    pub alias: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hours {
    pub open: Vec<OpenSlot>,
    /// Currently always `REGULAR`
    pub hours_type: String,
    pub is_open_now: bool,
}

/// One opening window. Times are 24-hour `HHMM` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenSlot {
    /// `end` is earlier than `start` when true
    pub is_overnight: bool,
    pub start: String,
    pub end: String,
    /// 0 = Monday .. 6 = Sunday
    pub day: u8,
}

/// Date-specific hours overriding the regular ones
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialHours {
    /// ISO 8601 date
    pub date: String,
    pub is_closed: Option<bool>,
    pub start: String,
    pub end: String,
    pub is_overnight: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messaging {
    pub url: String,
    pub use_case_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub id: String,
    pub rating: u8,
    pub user: User,
    pub text: String,
    /// Local time of the business, `YYYY-MM-DD HH:MM:SS`
    pub time_created: String,
    pub url: String,
}

impl Review {
    /// Parse `time_created`; `None` if the upstream format is not recognised
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.time_created, "%Y-%m-%d %H:%M:%S").ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub profile_url: String,
    pub image_url: Option<String>,
    pub name: String,
}

/// Autocomplete keyword suggestion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Term {
    pub text: String,
}

/// Autocomplete business suggestion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessSuggestion {
    pub id: String,
    pub name: String,
}
