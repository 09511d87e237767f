//! Shared types for the Yelp Fusion API client: request payloads with their
//! validation rules, response entities and the error type.

pub mod error;
pub mod models;
pub mod params;
pub mod request;

pub use error::{Result, YelpError};
pub use params::{QueryParams, QueryValue};
pub use request::ApiRequest;
