use yelp_fusion_core::request::{
    AutocompleteRequest, BusinessDetailsRequest, BusinessSearchRequest, PhoneSearchRequest,
    ReviewsRequest, TransactionSearchRequest,
};
use yelp_fusion_core::{ApiRequest, Result};

use crate::client::YelpClient;
use crate::types::{
    AutocompleteResponse, BusinessDetailsResponse, BusinessSearchResponse, PhoneSearchResponse,
    ReviewsResponse, TransactionSearchResponse,
};

const BUSINESSES: &str = "/businesses";
const BUSINESS_SEARCH: &str = "/businesses/search";
const PHONE_SEARCH: &str = "/businesses/search/phone";
const DELIVERY_SEARCH: &str = "/transactions/delivery/search";
const AUTOCOMPLETE: &str = "/autocomplete";

fn business_path(id: &str) -> String {
    format!("{}/{}", BUSINESSES, urlencoding::encode(id))
}

impl YelpClient {
    /// Search businesses by keyword, category, location, price level, etc.
    pub async fn business_search(
        &self,
        request: &BusinessSearchRequest,
    ) -> Result<BusinessSearchResponse> {
        request.validate()?;
        self.dispatch(BUSINESS_SEARCH, &request.query_params()).await
    }

    /// Full details for one business, including hours and photos
    pub async fn business_details(
        &self,
        request: &BusinessDetailsRequest,
    ) -> Result<BusinessDetailsResponse> {
        request.validate()?;
        self.dispatch(&business_path(&request.id), &request.query_params())
            .await
    }

    pub async fn phone_search(&self, request: &PhoneSearchRequest) -> Result<PhoneSearchResponse> {
        request.validate()?;
        self.dispatch(PHONE_SEARCH, &request.query_params()).await
    }

    /// Up to three review excerpts for a business
    pub async fn business_reviews(&self, request: &ReviewsRequest) -> Result<ReviewsResponse> {
        request.validate()?;
        let endpoint = format!("{}/reviews", business_path(&request.id));
        self.dispatch(&endpoint, &request.query_params()).await
    }

    /// Businesses that support food delivery near a location
    pub async fn transaction_search(
        &self,
        request: &TransactionSearchRequest,
    ) -> Result<TransactionSearchResponse> {
        request.validate()?;
        self.dispatch(DELIVERY_SEARCH, &request.query_params()).await
    }

    pub async fn autocomplete(&self, request: &AutocompleteRequest) -> Result<AutocompleteResponse> {
        request.validate()?;
        self.dispatch(AUTOCOMPLETE, &request.query_params()).await
    }
}
