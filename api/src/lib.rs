//! Async client for the Yelp Fusion API.
//!
//! ```no_run
//! use yelp_fusion_api::{ClientOptions, YelpClient};
//! use yelp_fusion_core::request::BusinessSearchRequest;
//!
//! # async fn run() -> yelp_fusion_core::Result<()> {
//! let client = YelpClient::new(ClientOptions::new("my-api-key"))?;
//! let results = client
//!     .business_search(&BusinessSearchRequest {
//!         term: "ramen".to_string(),
//!         location: "Toronto, ON".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} businesses", results.total);
//! # Ok(())
//! # }
//! ```

pub mod client;
mod endpoints;
pub mod types;

pub use client::{ClientOptions, YelpClient, API_BASE_URL};
pub use yelp_fusion_core::{models, request, Result, YelpError};
