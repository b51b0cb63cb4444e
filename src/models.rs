use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::validation;

// ============ Domain Models ============

/// Gender of the customer.
///
/// Serialized with the Turkish labels the document store convention uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    /// Male.
    #[serde(rename = "Erkek")]
    Male,
    /// Female.
    #[serde(rename = "Kadın")]
    Female,
}

/// A completed KYC profile record.
///
/// This is the document body upserted into the remote store. Identity is
/// `customer_id`; the store document id is always derived from it and never
/// assigned independently. Derived values (full name, age, format signals)
/// are methods, not fields, so they are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct KycProfile {
    /// Stable external customer identity reference.
    pub customer_id: String,
    /// Government id (T.C. Kimlik No).
    pub national_id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Phone number as entered (formatting preserved).
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Free-form postal address.
    pub address: String,
    /// Nationality, from the fixed catalog.
    pub nationality: String,
    /// Country of residence, from the fixed catalog.
    pub residence_country: String,
    /// Gender.
    pub gender: Gender,
    /// Self-declared criminal record flag.
    pub has_criminal_record: bool,
    /// Whether the KVKK data-protection notice was accepted.
    pub kvkk_accepted: bool,
    /// When consent was granted. `Some` iff `kvkk_accepted` was true at save time.
    pub kvkk_accepted_at: Option<DateTime<Utc>>,
    /// Version of the consent text that was shown.
    pub kvkk_version: Option<String>,
}

impl KycProfile {
    /// First and last name joined, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Whole-year age as of `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        validation::age_on(self.birth_date, today)
    }

    /// Loose email format signal.
    pub fn is_email_like(&self) -> bool {
        validation::is_email_like(&self.email)
    }

    /// Loose phone format signal.
    pub fn is_phone_like(&self) -> bool {
        validation::is_phone_like(&self.phone)
    }
}

/// In-flight form state as the screen holds it.
///
/// The validator consumes this on every field change; nothing here is
/// persisted until a submit passes validation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KycFormState {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Free-form postal address.
    pub address: String,
    /// Nationality selection.
    pub nationality: String,
    /// Residence country selection.
    pub residence_country: String,
    /// Gender selection.
    pub gender: Gender,
    /// Self-declared criminal record flag.
    pub has_criminal_record: bool,
    /// KVKK consent flag.
    pub kvkk_accepted: bool,
}

// ============ API Request/Response Models ============

/// Request payload for submitting a KYC profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitRequest {
    /// Stable external customer identity reference.
    pub customer_id: String,
    /// Government id (T.C. Kimlik No).
    pub national_id: String,
    /// The form state to validate and persist.
    pub form: KycFormState,
}

/// Response payload for profile submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    /// Whether the save succeeded.
    pub success: bool,
    /// Message describing the result.
    pub message: String,
    /// Id of this save attempt, for log correlation.
    pub attempt_id: Uuid,
    /// The persisted profile, on success.
    pub profile: Option<KycProfile>,
}

/// Per-rule validity signals plus derived fields.
///
/// One entry per validator rule so a reactive UI can bind field indicators
/// individually; `valid` is the conjunction.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ValidationReport {
    /// All rules hold.
    pub valid: bool,
    /// Required fields are non-empty after trimming.
    pub required_fields_present: bool,
    /// Phone contains at least 10 digit characters.
    pub phone_digits_ok: bool,
    /// Email contains both `@` and `.`.
    pub email_like: bool,
    /// Computed age is at least 18.
    pub adult: bool,
    /// KVKK consent flag is set.
    pub kvkk_accepted: bool,
    /// Derived: whole-year age.
    pub age: i32,
    /// Derived: first and last name joined, trimmed.
    pub full_name: String,
}

/// KVKK disclosure payload served to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct KvkkDisclosure {
    /// Version of the consent text.
    pub version: String,
    /// The disclosure text itself.
    pub text: String,
    /// SHA-256 checksum (hex) of the text, so clients can verify what was shown.
    pub checksum: String,
}
