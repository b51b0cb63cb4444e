//! KVKK data-protection consent.
//!
//! Holds the disclosure text shown to the customer, its version, and a
//! SHA-256 checksum of the text so a client can verify it rendered exactly
//! the text the consent record refers to.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::models::KvkkDisclosure;

/// Version of the consent text currently in force.
pub const KVKK_VERSION: &str = "v1.0";

/// The disclosure text presented before consent.
pub const KVKK_TEXT: &str = "\
6698 sayılı Kişisel Verilerin Korunması Kanunu kapsamında, kimlik, iletişim \
ve adres bilgileriniz müşteri tanıma (KYC) yükümlülüklerimizin yerine \
getirilmesi amacıyla işlenecek ve yasal saklama süreleri boyunca \
muhafaza edilecektir. Bilgileriniz, mevzuatın zorunlu kıldığı haller \
dışında üçüncü kişilerle paylaşılmaz. Kanun'un 11. maddesi uyarınca \
verilerinize erişme, düzeltme ve silme taleplerinizi bize iletebilirsiniz.";

/// Consent granted at a point in time, for a specific text version.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsentReceipt {
    pub accepted_at: DateTime<Utc>,
    pub version: String,
}

/// Records consent to the current text version at `now`.
pub fn grant(now: DateTime<Utc>) -> ConsentReceipt {
    ConsentReceipt {
        accepted_at: now,
        version: KVKK_VERSION.to_string(),
    }
}

/// SHA-256 checksum (hex encoded) of the current disclosure text.
pub fn kvkk_checksum() -> String {
    let mut hasher = Sha256::new();
    hasher.update(KVKK_TEXT.as_bytes());
    hex::encode(hasher.finalize())
}

/// The full disclosure payload served to clients.
pub fn disclosure() -> KvkkDisclosure {
    KvkkDisclosure {
        version: KVKK_VERSION.to_string(),
        text: KVKK_TEXT.to_string(),
        checksum: kvkk_checksum(),
    }
}
