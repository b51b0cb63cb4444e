//! Submit flow for a single screen instance.
//!
//! A [`SubmitSession`] drives one save attempt through
//! `Idle → Saving → {Saved | Failed}`. A failed save returns the session to
//! a resubmittable state with the error message retained until the next
//! attempt; the form state itself is never touched here.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::consent;
use crate::models::{KycFormState, KycProfile};
use crate::store_client::ProfileStoreClient;
use crate::validation;

/// Generic message surfaced to the user when the remote save fails.
///
/// No transient/permanent distinction is made; the user simply retries.
pub const SAVE_FAILED_MESSAGE: &str = "Bilgiler kaydedilemedi. Lütfen tekrar deneyin.";

/// Identity references fixed for the lifetime of a screen instance.
///
/// These arrive from the preceding onboarding step; they are never editable
/// form fields.
#[derive(Debug, Clone)]
pub struct CustomerRefs {
    pub customer_id: String,
    pub national_id: String,
}

/// State of the submit affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// No save attempted, or the last failure was acknowledged.
    Idle,
    /// A save is in flight; repeat submission is excluded.
    Saving,
    /// The profile was persisted.
    Saved,
    /// The last save failed; resubmittable.
    Failed,
}

/// One screen instance's submission lifecycle.
#[derive(Debug)]
pub struct SubmitSession {
    /// Id of this attempt sequence, for log correlation.
    pub attempt_id: Uuid,
    state: SubmitState,
    /// Retained until the next attempt after a failure.
    pub error_message: Option<String>,
    /// True once a save has succeeded.
    pub did_save: bool,
}

impl SubmitSession {
    pub fn new() -> Self {
        Self {
            attempt_id: Uuid::new_v4(),
            state: SubmitState::Idle,
            error_message: None,
            did_save: false,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Validates the form and, if valid, upserts a freshly built profile.
    ///
    /// An invalid form never reaches the store and produces no error
    /// message. On store failure the generic localized message is retained
    /// and the session becomes resubmittable. Returns the persisted profile
    /// on success.
    ///
    /// # Arguments
    ///
    /// * `refs` - The customer identity references for this screen.
    /// * `form` - The current form state.
    /// * `store` - The document store client, passed explicitly.
    /// * `now` - The submission instant; also the consent-granted time.
    pub async fn save(
        &mut self,
        refs: &CustomerRefs,
        form: &KycFormState,
        store: &ProfileStoreClient,
        now: DateTime<Utc>,
    ) -> Option<KycProfile> {
        let report = validation::validate_form(form, now.date_naive());
        if !report.valid {
            tracing::debug!(
                "Save for {} skipped, form not valid: {:?}",
                refs.customer_id,
                report
            );
            return None;
        }

        if self.state == SubmitState::Saving {
            tracing::warn!(
                "Save for {} already in flight (attempt {})",
                refs.customer_id,
                self.attempt_id
            );
            return None;
        }

        self.state = SubmitState::Saving;
        self.error_message = None;

        let profile = build_profile(refs, form, now);

        match store.upsert_profile(&profile).await {
            Ok(()) => {
                self.state = SubmitState::Saved;
                self.did_save = true;
                tracing::info!(
                    "✓ KYC profile {} saved (attempt {})",
                    refs.customer_id,
                    self.attempt_id
                );
                Some(profile)
            }
            Err(e) => {
                tracing::error!(
                    "✗ KYC profile {} save failed (attempt {}): {}",
                    refs.customer_id,
                    self.attempt_id,
                    e
                );
                self.state = SubmitState::Failed;
                self.error_message = Some(SAVE_FAILED_MESSAGE.to_string());
                None
            }
        }
    }
}

impl Default for SubmitSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the profile record from identity references and validated form state.
///
/// `kvkk_accepted_at` is set to `now` iff consent is granted, which keeps the
/// presence-iff-accepted invariant; the text version is recorded regardless,
/// since the text was shown either way.
pub fn build_profile(refs: &CustomerRefs, form: &KycFormState, now: DateTime<Utc>) -> KycProfile {
    let consent_receipt = form.kvkk_accepted.then(|| consent::grant(now));

    KycProfile {
        customer_id: refs.customer_id.clone(),
        national_id: refs.national_id.clone(),
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        birth_date: form.birth_date,
        phone: form.phone.clone(),
        email: form.email.clone(),
        address: form.address.clone(),
        nationality: form.nationality.clone(),
        residence_country: form.residence_country.clone(),
        gender: form.gender,
        has_criminal_record: form.has_criminal_record,
        kvkk_accepted: form.kvkk_accepted,
        kvkk_accepted_at: consent_receipt.as_ref().map(|r| r.accepted_at),
        kvkk_version: Some(consent::KVKK_VERSION.to_string()),
    }
}
