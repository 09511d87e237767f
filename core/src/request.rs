//! Request payloads for each API operation.
//!
//! Every struct implements `Default`; set the fields you need and leave the
//! rest at their zero value, which the client treats as "not specified".

use crate::error::{Result, YelpError};
use crate::models::Coordinates;
use crate::params::QueryParams;

/// Upper bound on `limit` accepted by the search endpoint
pub const MAX_SEARCH_LIMIT: u32 = 50;
/// Upper bound on `radius`, in metres
pub const MAX_SEARCH_RADIUS: u32 = 40_000;

/// Operation-specific validation and parameter marshaling
pub trait ApiRequest {
    /// Fail before any I/O if a required field is missing or out of range
    fn validate(&self) -> Result<()>;

    /// Non-zero fields as query parameters
    fn query_params(&self) -> QueryParams;
}

fn required(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        return Err(YelpError::validation(format!("{} is required", field)));
    }
    Ok(())
}

/// `GET /businesses/search`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessSearchRequest {
    /// e.g. "food", "restaurants" or a business name
    pub term: String,
    /// Free-form address; required unless `latitude`/`longitude` are set
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Suggested radius in metres
    pub radius: u32,
    /// Comma-delimited category aliases
    pub categories: String,
    pub locale: String,
    pub limit: u32,
    pub offset: u32,
    /// best_match, rating, review_count or distance
    pub sort_by: String,
    /// Comma-delimited price levels, "1, 2, 3"
    pub price: String,
    pub open_now: bool,
    /// Unix time in the search location's timezone
    pub open_at: i64,
    pub attributes: String,
}

impl ApiRequest for BusinessSearchRequest {
    fn validate(&self) -> Result<()> {
        if self.location.is_empty() && (self.latitude == 0.0 || self.longitude == 0.0) {
            return Err(YelpError::validation(
                "location or latitude and longitude is required",
            ));
        }
        if self.limit > MAX_SEARCH_LIMIT {
            return Err(YelpError::validation(format!(
                "limit must not exceed {}",
                MAX_SEARCH_LIMIT
            )));
        }
        if self.radius > MAX_SEARCH_RADIUS {
            return Err(YelpError::validation(format!(
                "radius must not exceed {} metres",
                MAX_SEARCH_RADIUS
            )));
        }
        if self.open_now && self.open_at != 0 {
            return Err(YelpError::validation(
                "open_now and open_at cannot be used together",
            ));
        }
        Ok(())
    }

    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .insert("term", &self.term)
            .insert("location", &self.location)
            .insert("latitude", &self.latitude)
            .insert("longitude", &self.longitude)
            .insert("radius", &self.radius)
            .insert("categories", &self.categories)
            .insert("locale", &self.locale)
            .insert("limit", &self.limit)
            .insert("offset", &self.offset)
            .insert("sort_by", &self.sort_by)
            .insert("price", &self.price)
            .insert("open_now", &self.open_now)
            .insert("open_at", &self.open_at)
            .insert("attributes", &self.attributes);
        params
    }
}

/// `GET /businesses/{id}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessDetailsRequest {
    /// Business id or alias
    pub id: String,
    pub locale: String,
}

impl BusinessDetailsRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl ApiRequest for BusinessDetailsRequest {
    fn validate(&self) -> Result<()> {
        required(&self.id, "id")
    }

    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert("locale", &self.locale);
        params
    }
}

/// `GET /businesses/search/phone`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneSearchRequest {
    /// Must start with `+` and the country code, e.g. "+14159083801"
    pub phone: String,
    pub locale: String,
}

impl PhoneSearchRequest {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            ..Default::default()
        }
    }
}

impl ApiRequest for PhoneSearchRequest {
    fn validate(&self) -> Result<()> {
        required(&self.phone, "phone number")
    }

    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .insert("phone", &self.phone)
            .insert("locale", &self.locale);
        params
    }
}

/// `GET /businesses/{id}/reviews`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewsRequest {
    /// Business id or alias
    pub id: String,
    pub locale: String,
    pub limit: u32,
    pub offset: u32,
    /// yelp_sort or newest
    pub sort_by: String,
}

impl ReviewsRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl ApiRequest for ReviewsRequest {
    fn validate(&self) -> Result<()> {
        required(&self.id, "business id")
    }

    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .insert("locale", &self.locale)
            .insert("limit", &self.limit)
            .insert("offset", &self.offset)
            .insert("sort_by", &self.sort_by);
        params
    }
}

/// `GET /transactions/delivery/search`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionSearchRequest {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ApiRequest for TransactionSearchRequest {
    fn validate(&self) -> Result<()> {
        if self.location.is_empty() && (self.latitude == 0.0 || self.longitude == 0.0) {
            return Err(YelpError::validation(
                "latitude and longitude is required if location is not specified",
            ));
        }
        Ok(())
    }

    /// Location wins; coordinates are only sent without one
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if self.location.is_empty() {
            params
                .insert("latitude", &self.latitude)
                .insert("longitude", &self.longitude);
        } else {
            params.insert("location", &self.location);
        }
        params
    }
}

/// `GET /autocomplete`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutocompleteRequest {
    pub text: String,
    pub coordinates: Coordinates,
    pub locale: String,
}

impl ApiRequest for AutocompleteRequest {
    fn validate(&self) -> Result<()> {
        required(&self.text, "text")?;
        if self.coordinates.latitude == 0.0 {
            return Err(YelpError::validation("latitude is required"));
        }
        if self.coordinates.longitude == 0.0 {
            return Err(YelpError::validation("longitude is required"));
        }
        Ok(())
    }

    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .insert("text", &self.text)
            .insert("latitude", &self.coordinates.latitude)
            .insert("longitude", &self.coordinates.longitude)
            .insert("locale", &self.locale);
        params
    }
}
