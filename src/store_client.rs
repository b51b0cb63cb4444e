use crate::errors::AppError;
use crate::models::KycProfile;
use reqwest;
use std::time::Duration;
use tracing;

/// Client for the remote KYC document store.
///
/// One collection, documents keyed by customer id. The client is constructed
/// once at startup and passed explicitly wherever a save or read is needed.
#[derive(Clone)]
pub struct ProfileStoreClient {
    client: reqwest::Client,
    base_url: String,
    collection: String,
    token: String,
}

impl ProfileStoreClient {
    /// Creates a new `ProfileStoreClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the document store.
    /// * `collection` - The collection holding KYC profile documents.
    /// * `token` - The API token for authentication.
    pub fn new(base_url: String, collection: String, token: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::StoreError(format!("Failed to create store client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            collection,
            token,
        })
    }

    fn document_url(&self, customer_id: &str) -> String {
        format!(
            "{}/v1/collections/{}/documents/{}",
            self.base_url, self.collection, customer_id
        )
    }

    /// Idempotent create-or-replace of the profile document keyed by customer id.
    ///
    /// Any remote failure (network, non-2xx, serialization) collapses into a
    /// single store-error condition; the caller decides how to surface it.
    ///
    /// # Arguments
    ///
    /// * `profile` - The validated profile record to persist.
    pub async fn upsert_profile(&self, profile: &KycProfile) -> Result<(), AppError> {
        let url = self.document_url(&profile.customer_id);
        tracing::info!(
            "Upserting KYC profile {} into collection '{}'",
            profile.customer_id,
            self.collection
        );

        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(profile)
            .send()
            .await
            .map_err(|e| AppError::StoreError(format!("Store request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::StoreError(format!(
                "Store returned {}: {}",
                status, error_text
            )));
        }

        tracing::info!("✓ Profile {} upserted successfully", profile.customer_id);
        Ok(())
    }

    /// Fetches the stored profile for a customer, if any.
    ///
    /// Returns `None` on 404 so the review step can distinguish "not yet
    /// saved" from an actual store failure.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - The document id to read.
    pub async fn fetch_profile(&self, customer_id: &str) -> Result<Option<KycProfile>, AppError> {
        let url = self.document_url(customer_id);
        tracing::info!("Fetching KYC profile {} from store", customer_id);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(|e| AppError::StoreError(format!("Store request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::StoreError(format!(
                "Store returned {}: {}",
                status, error_text
            )));
        }

        let profile = response
            .json()
            .await
            .map_err(|e| AppError::StoreError(format!("Failed to parse store response: {}", e)))?;

        Ok(Some(profile))
    }
}
