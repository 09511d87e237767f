use serde::{Deserialize, Serialize};
use yelp_fusion_core::models::{
    Business, BusinessSuggestion, Category, Coordinates, DetailedLocation, Hours, Messaging,
    Review, SpecialHours, Term,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessSearchResponse {
    pub total: u32,
    pub businesses: Vec<Business>,
    /// Suggested map area for the results
    pub region: Option<Region>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub center: Coordinates,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessDetailsResponse {
    pub id: String,
    pub alias: String,
    pub name: String,
    pub image_url: String,
    /// Claimed by the business owner
    pub is_claimed: bool,
    pub is_closed: bool,
    pub url: String,
    pub phone: String,
    pub display_phone: String,
    pub review_count: u32,
    pub categories: Vec<Category>,
    pub rating: f64,
    pub location: DetailedLocation,
    pub coordinates: Coordinates,
    /// Up to three photo URLs
    pub photos: Vec<String>,
    pub price: String,
    pub hours: Vec<Hours>,
    pub transactions: Vec<String>,
    pub special_hours: Vec<SpecialHours>,
    /// Only present for businesses with messaging enabled
    pub messaging: Option<Messaging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneSearchResponse {
    pub total: u32,
    pub businesses: Vec<Business>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
    pub total: u32,
    pub possible_languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionSearchResponse {
    pub total: u32,
    pub businesses: Vec<Business>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteResponse {
    pub terms: Vec<Term>,
    pub businesses: Vec<BusinessSuggestion>,
    pub categories: Vec<Category>,
}
