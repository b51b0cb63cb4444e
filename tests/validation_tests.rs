/// Unit tests for form validation and profile construction
/// Tests required-field, phone, email, age, and consent rules plus derived fields
use chrono::{NaiveDate, TimeZone, Utc};
use rust_kyc_api::models::{Gender, KycFormState};
use rust_kyc_api::submission::{build_profile, CustomerRefs};
use rust_kyc_api::validation::{
    age_on, is_email_like, is_phone_like, is_valid_national_id, phone_digit_count, validate_form,
};

/// Fixed "today" so age assertions do not depend on the wall clock.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// The worked example: a fully valid form (birth date 20 years before `today`).
fn sample_form() -> KycFormState {
    KycFormState {
        first_name: "Ali".to_string(),
        last_name: "Veli".to_string(),
        birth_date: NaiveDate::from_ymd_opt(2005, 6, 15).unwrap(),
        phone: "5551234567".to_string(),
        email: "a@b.com".to_string(),
        address: "X".to_string(),
        nationality: "Türk".to_string(),
        residence_country: "Türkiye".to_string(),
        gender: Gender::Male,
        has_criminal_record: false,
        kvkk_accepted: true,
    }
}

#[cfg(test)]
mod required_field_tests {
    use super::*;

    #[test]
    fn test_fully_valid_form() {
        let report = validate_form(&sample_form(), today());
        assert!(report.valid);
        assert!(report.required_fields_present);
        assert_eq!(report.age, 20);
        assert_eq!(report.full_name, "Ali Veli");
    }

    #[test]
    fn test_each_missing_required_field_invalidates() {
        let blank_outs: Vec<fn(&mut KycFormState)> = vec![
            |f| f.first_name = "   ".to_string(),
            |f| f.last_name = String::new(),
            |f| f.phone = " ".to_string(),
            |f| f.email = String::new(),
            |f| f.address = "\n  \n".to_string(),
            |f| f.nationality = String::new(),
            |f| f.residence_country = String::new(),
        ];

        for blank in blank_outs {
            let mut form = sample_form();
            blank(&mut form);
            let report = validate_form(&form, today());
            assert!(!report.required_fields_present);
            assert!(!report.valid);
        }
    }

    #[test]
    fn test_whitespace_only_address_rejected() {
        let mut form = sample_form();
        form.address = " \t \n ".to_string();
        assert!(!validate_form(&form, today()).valid);
    }
}

#[cfg(test)]
mod phone_rule_tests {
    use super::*;

    #[test]
    fn test_digit_count_ignores_separators() {
        assert_eq!(phone_digit_count("555 123 45 67"), 10);
        assert_eq!(phone_digit_count("(555) 123-4567"), 10);
        assert_eq!(phone_digit_count("+90 555 123 45 67"), 12);
        assert_eq!(phone_digit_count("no digits"), 0);
    }

    #[test]
    fn test_ten_digits_pass_regardless_of_formatting() {
        assert!(is_phone_like("5551234567"));
        assert!(is_phone_like("(555) 123-45-67"));
        assert!(is_phone_like("+90 555 123 45 67"));
    }

    #[test]
    fn test_fewer_than_ten_digits_fail() {
        assert!(!is_phone_like("555123456"));
        assert!(!is_phone_like("(555) 123-456"));
        assert!(!is_phone_like(""));

        let mut form = sample_form();
        form.phone = "555 123 456".to_string();
        let report = validate_form(&form, today());
        assert!(!report.phone_digits_ok);
        assert!(!report.valid);
    }
}

#[cfg(test)]
mod email_rule_tests {
    use super::*;

    #[test]
    fn test_loose_email_heuristic() {
        assert!(is_email_like("a@b.com"));
        assert!(is_email_like("user.name@example.co.uk"));
        // Deliberately permissive: any @ plus any . passes
        assert!(is_email_like(".@"));
    }

    #[test]
    fn test_missing_at_or_dot_rejected() {
        assert!(!is_email_like("ab.com"));
        assert!(!is_email_like("a@bcom"));
        assert!(!is_email_like(""));

        let mut form = sample_form();
        form.email = "ali@examplecom".to_string();
        let report = validate_form(&form, today());
        assert!(!report.email_like);
        assert!(!report.valid);
    }
}

#[cfg(test)]
mod age_rule_tests {
    use super::*;

    #[test]
    fn test_age_is_anniversary_based() {
        let birth = NaiveDate::from_ymd_opt(2007, 6, 15).unwrap();
        // Birthday is today: exactly 18
        assert_eq!(age_on(birth, today()), 18);
        // Day before the birthday: still 17
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()), 17);
    }

    #[test]
    fn test_eighteenth_birthday_passes() {
        let mut form = sample_form();
        form.birth_date = NaiveDate::from_ymd_opt(2007, 6, 15).unwrap();
        let report = validate_form(&form, today());
        assert!(report.adult);
        assert!(report.valid);
    }

    #[test]
    fn test_under_eighteen_rejected() {
        let mut form = sample_form();
        form.birth_date = NaiveDate::from_ymd_opt(2007, 6, 16).unwrap();
        let report = validate_form(&form, today());
        assert_eq!(report.age, 17);
        assert!(!report.adult);
        assert!(!report.valid);
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let mut form = sample_form();
        form.birth_date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert!(!validate_form(&form, today()).valid);
    }
}

#[cfg(test)]
mod consent_rule_tests {
    use super::*;

    #[test]
    fn test_consent_false_invalidates_otherwise_valid_form() {
        let mut form = sample_form();
        form.kvkk_accepted = false;
        let report = validate_form(&form, today());
        assert!(report.required_fields_present);
        assert!(report.phone_digits_ok);
        assert!(report.email_like);
        assert!(report.adult);
        assert!(!report.kvkk_accepted);
        assert!(!report.valid);
    }
}

#[cfg(test)]
mod national_id_tests {
    use super::*;

    #[test]
    fn test_eleven_digit_id_accepted() {
        assert!(is_valid_national_id("12345678901"));
    }

    #[test]
    fn test_malformed_ids_rejected() {
        assert!(!is_valid_national_id("1234567890")); // 10 digits
        assert!(!is_valid_national_id("123456789012")); // 12 digits
        assert!(!is_valid_national_id("12345A78901")); // letter
        assert!(!is_valid_national_id("123.456.789-01")); // formatted
        assert!(!is_valid_national_id(""));
    }
}

#[cfg(test)]
mod catalog_tests {
    use rust_kyc_api::catalog;

    #[test]
    fn test_known_values_accepted() {
        assert!(catalog::is_known_nationality("Türk"));
        assert!(catalog::is_known_nationality("Japon"));
        assert!(catalog::is_known_country("Türkiye"));
        assert!(catalog::is_known_country("Güney Kore"));
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert!(!catalog::is_known_nationality("Marslı"));
        assert!(!catalog::is_known_country("Atlantis"));
        // Country labels are not nationality labels
        assert!(!catalog::is_known_nationality("Türkiye"));
        assert!(!catalog::is_known_country("Türk"));
    }

    #[test]
    fn test_catalogs_are_parallel() {
        assert_eq!(catalog::NATIONALITIES.len(), catalog::COUNTRIES.len());
    }
}

#[cfg(test)]
mod profile_construction_tests {
    use super::*;

    fn refs() -> CustomerRefs {
        CustomerRefs {
            customer_id: "cus_1".to_string(),
            national_id: "12345678901".to_string(),
        }
    }

    #[test]
    fn test_consent_timestamp_present_iff_accepted() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

        let accepted = build_profile(&refs(), &sample_form(), now);
        assert!(accepted.kvkk_accepted);
        assert_eq!(accepted.kvkk_accepted_at, Some(now));
        assert_eq!(accepted.kvkk_version.as_deref(), Some("v1.0"));

        let mut form = sample_form();
        form.kvkk_accepted = false;
        let declined = build_profile(&refs(), &form, now);
        assert!(!declined.kvkk_accepted);
        assert_eq!(declined.kvkk_accepted_at, None);
    }

    #[test]
    fn test_derived_values() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let profile = build_profile(&refs(), &sample_form(), now);

        assert_eq!(profile.full_name(), "Ali Veli");
        assert_eq!(profile.age_on(today()), 20);
        assert!(profile.is_email_like());
        assert!(profile.is_phone_like());
    }

    #[test]
    fn test_full_name_trims_when_a_part_is_empty() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let mut form = sample_form();
        form.last_name = String::new();
        let profile = build_profile(&refs(), &form, now);
        assert_eq!(profile.full_name(), "Ali");
    }

    #[test]
    fn test_document_body_has_no_derived_fields() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let profile = build_profile(&refs(), &sample_form(), now);

        let doc = serde_json::to_value(&profile).unwrap();
        let obj = doc.as_object().unwrap();
        assert!(obj.contains_key("customer_id"));
        assert!(obj.contains_key("kvkk_accepted_at"));
        assert!(!obj.contains_key("full_name"));
        assert!(!obj.contains_key("age"));
        assert!(!obj.contains_key("is_email_like"));
        assert!(!obj.contains_key("is_phone_like"));
    }

    #[test]
    fn test_gender_serializes_with_store_labels() {
        assert_eq!(
            serde_json::to_value(Gender::Male).unwrap(),
            serde_json::json!("Erkek")
        );
        assert_eq!(
            serde_json::to_value(Gender::Female).unwrap(),
            serde_json::json!("Kadın")
        );
    }
}

#[cfg(test)]
mod consent_module_tests {
    use rust_kyc_api::consent;

    #[test]
    fn test_disclosure_checksum_matches_text() {
        let d = consent::disclosure();
        assert_eq!(d.checksum, consent::kvkk_checksum());
        assert!(d.text.contains("6698"));
        assert_eq!(d.version, consent::KVKK_VERSION);
    }
}

#[cfg(test)]
mod error_handling_tests {
    use rust_kyc_api::errors::AppError;

    #[test]
    fn test_app_error_types() {
        let store_error = AppError::StoreError("upsert timeout".to_string());
        assert!(matches!(store_error, AppError::StoreError(_)));

        let not_found = AppError::NotFound("profile not found".to_string());
        assert!(matches!(not_found, AppError::NotFound(_)));

        let bad_request = AppError::BadRequest("unknown nationality".to_string());
        assert!(matches!(bad_request, AppError::BadRequest(_)));
    }

    #[test]
    fn test_error_display() {
        let error = AppError::StoreError("Connection timeout".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Document store error"));
        assert!(display.contains("Connection timeout"));

        let error = AppError::NotFound("Profile not found".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Not found"));
        assert!(display.contains("Profile not found"));
    }
}
