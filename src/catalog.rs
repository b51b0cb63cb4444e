//! Fixed selection catalogs for the nationality and residence-country pickers.
//!
//! Static read-only lists; submissions are checked against them as an
//! allow-set before any save is attempted.

/// Nationalities offered by the picker (Turkish labels).
pub const NATIONALITIES: &[&str] = &[
    "Türk",
    "Alman",
    "Amerikan",
    "İngiliz",
    "Fransız",
    "İtalyan",
    "İspanyol",
    "Rus",
    "Azeri",
    "Ukraynalı",
    "Bulgar",
    "Yunan",
    "Romen",
    "Arnavut",
    "Gürcü",
    "Çinli",
    "Japon",
    "Koreli",
    "Hindistanlı",
    "Pakistanlı",
    "İranlı",
    "Suriyeli",
    "Mısırlı",
];

/// Residence countries offered by the picker (Turkish labels).
pub const COUNTRIES: &[&str] = &[
    "Türkiye",
    "Almanya",
    "Amerika Birleşik Devletleri",
    "Birleşik Krallık",
    "Fransa",
    "İtalya",
    "İspanya",
    "Rusya",
    "Azerbaycan",
    "Ukrayna",
    "Bulgaristan",
    "Yunanistan",
    "Romanya",
    "Arnavutluk",
    "Gürcistan",
    "Çin",
    "Japonya",
    "Güney Kore",
    "Hindistan",
    "Pakistan",
    "İran",
    "Suriye",
    "Mısır",
];

/// Whether `value` is one of the offered nationalities.
pub fn is_known_nationality(value: &str) -> bool {
    NATIONALITIES.contains(&value)
}

/// Whether `value` is one of the offered residence countries.
pub fn is_known_country(value: &str) -> bool {
    COUNTRIES.contains(&value)
}
