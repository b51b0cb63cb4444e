//! Pure form validation.
//!
//! All functions are side-effect free and cheap enough to recompute on every
//! field change. The email and phone checks are intentionally loose
//! heuristics; they gate obvious typos, not full syntactic validity, and the
//! looseness is the agreed business rule.

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::models::{KycFormState, ValidationReport};

/// Minimum whole-year age to pass onboarding.
pub const MIN_AGE: i32 = 18;

/// Minimum number of digit characters a phone entry must carry.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Loose email check: the value carries both an `@` and a `.`.
pub fn is_email_like(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Number of ASCII digit characters in a phone entry, ignoring formatting.
pub fn phone_digit_count(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Loose phone check: at least [`MIN_PHONE_DIGITS`] digit characters.
pub fn is_phone_like(phone: &str) -> bool {
    phone_digit_count(phone) >= MIN_PHONE_DIGITS
}

/// Whole years between `birth` and `today`, anniversary-based.
///
/// The year difference is decremented when the birthday has not yet occurred
/// in the current year. Future birth dates yield negative values, which the
/// adult check rejects anyway.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// T.C. Kimlik No format check: exactly 11 digits.
///
/// Checked at submit time only; the national id is a fixed reference handed
/// to the screen, not a user-editable form field.
pub fn is_valid_national_id(national_id: &str) -> bool {
    let re = Regex::new(r"^[0-9]{11}$").unwrap();
    re.is_match(national_id)
}

/// Evaluates every validator rule against the current form state.
///
/// Returns per-rule signals plus the derived age and full name, so callers
/// can bind individual field indicators. `valid` is the conjunction of all
/// rules.
pub fn validate_form(form: &KycFormState, today: NaiveDate) -> ValidationReport {
    let required_fields_present = !form.first_name.trim().is_empty()
        && !form.last_name.trim().is_empty()
        && !form.phone.trim().is_empty()
        && !form.email.trim().is_empty()
        && !form.address.trim().is_empty()
        && !form.nationality.is_empty()
        && !form.residence_country.is_empty();

    let phone_digits_ok = is_phone_like(&form.phone);
    let email_like = is_email_like(&form.email);
    let age = age_on(form.birth_date, today);
    let adult = age >= MIN_AGE;
    let kvkk_accepted = form.kvkk_accepted;

    let full_name = format!("{} {}", form.first_name, form.last_name)
        .trim()
        .to_string();

    ValidationReport {
        valid: required_fields_present && phone_digits_ok && email_like && adult && kvkk_accepted,
        required_fields_present,
        phone_digits_ok,
        email_like,
        adult,
        kvkk_accepted,
        age,
        full_name,
    }
}
