//! Typed client for the external profile/catalog store.
//!
//! The backend speaks a PostgREST-style JSON API. Each operation here is a
//! single request/response call; errors surface to the caller, which is
//! responsible for user-visible messaging.

use crate::{FetchClient, FetchError};
use serde::{Deserialize, Serialize};
use verde_commerce::catalog::Product;
use verde_commerce::cart::WishlistItem;
use verde_commerce::ids::{ProductId, UserId};
use verde_commerce::search::EsgFilters;

/// A user profile as returned by the external store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub display_name: String,
    /// Saved filter set, if the user persisted one.
    pub esg_filters: Option<EsgFilters>,
    /// Unix timestamp of account creation.
    pub created_at: i64,
}

/// Client for the profile/catalog store.
pub struct StoreClient {
    client: FetchClient,
}

impl StoreClient {
    /// Create a store client for a base URL and API key.
    ///
    /// The key travels both as `apikey` and as a bearer token, the way the
    /// hosted backend expects it.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let client = FetchClient::new()
            .with_base_url(base_url)
            .with_default_header("apikey", api_key.clone())
            .with_default_header("Authorization", format!("Bearer {}", api_key));
        Self { client }
    }

    /// Fetch the product catalog.
    ///
    /// When filters are given, the numeric thresholds are forwarded as query
    /// parameters so the store can pre-trim the result; the caller still
    /// runs the full client-side pipeline over whatever comes back.
    pub async fn get_products(
        &self,
        filters: Option<&EsgFilters>,
    ) -> Result<Vec<Product>, FetchError> {
        let mut req = self.client.get("/products");
        if let Some(f) = filters {
            req = req
                .query("min_sustainability_score", f.min_sustainability_score.to_string())
                .query("max_carbon_footprint_kg", f.max_carbon_footprint_kg.to_string())
                .query("max_water_usage_liters", f.max_water_usage_liters.to_string())
                .query("min_ethics_rating", f.min_ethics_rating.to_string());
        }

        tracing::debug!("fetching products");
        let response = req.send().await?.error_for_status()?;
        response.json()
    }

    /// Fetch a user profile. `Ok(None)` means the profile does not exist.
    pub async fn get_profile(&self, user_id: &UserId) -> Result<Option<Profile>, FetchError> {
        let response = self
            .client
            .get("/profiles")
            .query("id", format!("eq.{}", user_id))
            .send()
            .await?;

        if response.status == 404 {
            return Ok(None);
        }
        let response = response.error_for_status()?;
        let mut profiles: Vec<Profile> = response.json()?;
        Ok(if profiles.is_empty() {
            None
        } else {
            Some(profiles.remove(0))
        })
    }

    /// Persist a wishlist entry and return the stored item.
    pub async fn add_to_wishlist(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        mood: &str,
        occasion: Option<&str>,
        notes: Option<&str>,
    ) -> Result<WishlistItem, FetchError> {
        #[derive(Serialize)]
        struct NewEntry<'a> {
            user_id: &'a str,
            product_id: &'a str,
            mood: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            occasion: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            notes: Option<&'a str>,
        }

        let body = NewEntry {
            user_id: user_id.as_str(),
            product_id: product_id.as_str(),
            mood,
            occasion,
            notes,
        };

        tracing::debug!(user = %user_id, product = %product_id, "adding wishlist entry");
        let response = self
            .client
            .post("/wishlist_items")
            .json(&body)?
            .send()
            .await?
            .error_for_status()?;
        response.json()
    }

    /// Set a cart line's quantity on the server.
    ///
    /// Mirrors the local reducer: a quantity of zero or below deletes the
    /// line instead of patching it.
    pub async fn update_cart_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), FetchError> {
        let selector = |req: crate::ClientRequestBuilder| {
            req.query("user_id", format!("eq.{}", user_id))
                .query("product_id", format!("eq.{}", product_id))
        };

        if quantity <= 0 {
            tracing::debug!(user = %user_id, product = %product_id, "removing cart line");
            selector(self.client.delete("/cart_items"))
                .send()
                .await?
                .error_for_status()?;
            return Ok(());
        }

        #[derive(Serialize)]
        struct Patch {
            quantity: i64,
        }

        tracing::debug!(user = %user_id, product = %product_id, quantity, "updating cart line");
        selector(self.client.patch("/cart_items"))
            .json(&Patch { quantity })?
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StoreClient {
        StoreClient::new("https://project.supabase.co/rest/v1", "anon-key")
    }

    #[test]
    fn test_auth_headers_on_every_request() {
        let store = client();
        let req = store.client.get("/products");
        assert_eq!(
            req.inner().headers.get("apikey").map(String::as_str),
            Some("anon-key")
        );
        assert_eq!(
            req.inner().headers.get("Authorization").map(String::as_str),
            Some("Bearer anon-key")
        );
    }

    #[test]
    fn test_filter_thresholds_become_query_params() {
        let store = client();
        let filters = EsgFilters::default()
            .with_min_sustainability_score(80.0)
            .with_max_carbon_footprint(2.5);

        // Build the same request get_products builds.
        let req = store
            .client
            .get("/products")
            .query("min_sustainability_score", filters.min_sustainability_score.to_string())
            .query("max_carbon_footprint_kg", filters.max_carbon_footprint_kg.to_string());
        let url = req.inner().full_url();
        assert!(url.contains("min_sustainability_score=80"));
        assert!(url.contains("max_carbon_footprint_kg=2.5"));
    }

    #[test]
    fn test_profile_selector_shape() {
        let store = client();
        let user = UserId::new("user-1");
        let req = store
            .client
            .get("/profiles")
            .query("id", format!("eq.{}", user));
        assert!(req.inner().full_url().ends_with("/profiles?id=eq.user-1"));
    }
}
