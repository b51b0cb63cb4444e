use crate::catalog;
use crate::consent;
use crate::errors::{AppError, ResultExt};
use crate::models::*;
use crate::store_client::ProfileStoreClient;
use crate::submission::{CustomerRefs, SubmitSession};
use crate::validation;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use moka::future::Cache;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the remote document store.
    pub store_client: ProfileStoreClient,
    /// In-flight save guard: customer id -> save start timestamp.
    /// Excludes a second concurrent save for the same customer.
    pub saving_customers_cache: Cache<String, i64>,
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
#[utoipa::path(get, path = "/health", responses((status = 200, description = "Service healthy")))]
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "rust-kyc-api",
            "version": "0.1.0"
        })),
    )
}

/// GET /api/v1/catalog/nationalities
///
/// Fixed nationality list for the picker.
#[utoipa::path(get, path = "/api/v1/catalog/nationalities", tag = "Catalog", responses((status = 200, body = Vec<String>)))]
pub async fn get_nationalities() -> Json<Vec<&'static str>> {
    Json(catalog::NATIONALITIES.to_vec())
}

/// GET /api/v1/catalog/countries
///
/// Fixed residence-country list for the picker.
#[utoipa::path(get, path = "/api/v1/catalog/countries", tag = "Catalog", responses((status = 200, body = Vec<String>)))]
pub async fn get_countries() -> Json<Vec<&'static str>> {
    Json(catalog::COUNTRIES.to_vec())
}

/// GET /api/v1/consent/kvkk
///
/// The KVKK disclosure text, its version, and its checksum.
#[utoipa::path(get, path = "/api/v1/consent/kvkk", tag = "Consent", responses((status = 200, body = KvkkDisclosure)))]
pub async fn get_kvkk_disclosure() -> Json<KvkkDisclosure> {
    Json(consent::disclosure())
}

/// POST /api/v1/kyc/validate
///
/// Pure validation of in-flight form state. The screen calls this after
/// field changes; nothing is persisted and nothing is cached.
#[utoipa::path(post, path = "/api/v1/kyc/validate", tag = "KYC", request_body = KycFormState, responses((status = 200, body = ValidationReport)))]
pub async fn validate_profile(Json(form): Json<KycFormState>) -> Json<ValidationReport> {
    let today = chrono::Utc::now().date_naive();
    Json(validation::validate_form(&form, today))
}

/// POST /api/v1/kyc/profiles
///
/// Submit flow: allow-set and national-id checks, validity gate, in-flight
/// guard, profile construction, store upsert.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `payload` - Identity references plus the form state to persist.
#[utoipa::path(post, path = "/api/v1/kyc/profiles", tag = "KYC", request_body = SubmitRequest, responses((status = 200, body = SubmitResponse), (status = 400, description = "Malformed identity or unknown catalog value")))]
pub async fn submit_profile(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    tracing::info!("POST /kyc/profiles - customer_id: {}", payload.customer_id);

    if payload.customer_id.trim().is_empty() {
        return Err(AppError::BadRequest("customer_id is required".to_string()));
    }
    if !validation::is_valid_national_id(&payload.national_id) {
        return Err(AppError::BadRequest(
            "national_id must be exactly 11 digits".to_string(),
        ));
    }
    if !catalog::is_known_nationality(&payload.form.nationality) {
        return Err(AppError::BadRequest(format!(
            "Unknown nationality: {}",
            payload.form.nationality
        )));
    }
    if !catalog::is_known_country(&payload.form.residence_country) {
        return Err(AppError::BadRequest(format!(
            "Unknown residence country: {}",
            payload.form.residence_country
        )));
    }

    let now = chrono::Utc::now();
    let report = validation::validate_form(&payload.form, now.date_naive());
    if !report.valid {
        // An invalid form never reaches the store; the submit control is
        // hidden client-side, so this path only fires for misbehaving callers.
        tracing::warn!(
            "Submit for {} rejected, form not valid: {:?}",
            payload.customer_id,
            report
        );
        return Ok(Json(SubmitResponse {
            success: false,
            message: "Form is not valid; save was not attempted".to_string(),
            attempt_id: Uuid::new_v4(),
            profile: None,
        }));
    }

    // In-flight guard: at most one save per customer at a time.
    if let Some(saving_since) = state.saving_customers_cache.get(&payload.customer_id).await {
        let seconds_ago = now.timestamp() - saving_since;
        tracing::warn!(
            "⏭ DUPLICATE SUBMIT BLOCKED - customer {} already saving ({} seconds ago)",
            payload.customer_id,
            seconds_ago
        );
        return Ok(Json(SubmitResponse {
            success: false,
            message: format!(
                "Save already in progress (started {} seconds ago). Duplicate request blocked.",
                seconds_ago
            ),
            attempt_id: Uuid::new_v4(),
            profile: None,
        }));
    }
    state
        .saving_customers_cache
        .insert(payload.customer_id.clone(), now.timestamp())
        .await;

    let refs = CustomerRefs {
        customer_id: payload.customer_id.clone(),
        national_id: payload.national_id.clone(),
    };

    let mut session = SubmitSession::new();
    let profile = session
        .save(&refs, &payload.form, &state.store_client, now)
        .await;

    // Completed either way; the customer may resubmit after a failure.
    state
        .saving_customers_cache
        .invalidate(&payload.customer_id)
        .await;

    let response = if session.did_save {
        SubmitResponse {
            success: true,
            message: "Profile saved".to_string(),
            attempt_id: session.attempt_id,
            profile,
        }
    } else {
        SubmitResponse {
            success: false,
            message: session
                .error_message
                .unwrap_or_else(|| "Save was not attempted".to_string()),
            attempt_id: session.attempt_id,
            profile: None,
        }
    };

    Ok(Json(response))
}

/// GET /api/v1/kyc/profiles/{customer_id}
///
/// Read-through to the store for the review step.
// TODO: extend the review payload with PEP/FATCA flags once step 2 lands.
#[utoipa::path(get, path = "/api/v1/kyc/profiles/{customer_id}", tag = "KYC", params(("customer_id" = String, Path, description = "Customer identity reference")), responses((status = 200, body = KycProfile), (status = 404, description = "No profile saved for this customer")))]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<String>,
) -> Result<Json<KycProfile>, AppError> {
    tracing::info!("GET /kyc/profiles/{}", customer_id);

    let profile = state
        .store_client
        .fetch_profile(&customer_id)
        .await
        .context(format!("Review read for customer {}", customer_id))?
        .ok_or_else(|| {
            AppError::NotFound(format!("No KYC profile for customer {}", customer_id))
        })?;

    Ok(Json(profile))
}
