//! Telegram Passport data shared with the bot, and the errors a bot can
//! report back about it. The payloads stay encrypted; decrypting them needs
//! the bot's private key and is out of scope here.

use serde::{Deserialize, Serialize};

use super::tag;
use crate::one_of::one_of;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportData {
    pub data: Vec<EncryptedPassportElement>,
    pub credentials: EncryptedCredentials,
}

/// A file uploaded to Telegram Passport, in JPEG format once decrypted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportFile {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: u64,
    pub file_date: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPassportElement {
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,
    /// Base64-encoded encrypted data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<PassportFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_side: Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_side: Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selfie: Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<Vec<PassportFile>>,
    /// Base64-encoded element hash, for `PassportElementErrorUnspecified`.
    pub hash: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncryptedPassportElementType {
    PersonalDetails,
    Passport,
    DriverLicense,
    IdentityCard,
    InternalPassport,
    Address,
    UtilityBill,
    BankStatement,
    RentalAgreement,
    PassportRegistration,
    TemporaryRegistration,
    PhoneNumber,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedCredentials {
    pub data: String,
    pub hash: String,
    pub secret: String,
}

one_of! {
    /// An error in the Telegram Passport element submitted by the user,
    /// keyed on the wire by `source`.
    ///
    /// Decode order: `DataField`, `FrontSide`, `ReverseSide`, `Selfie`, `File`,
    /// `Files`, `TranslationFile`, `TranslationFiles`, `Unspecified`.
    #[derive(Eq)]
    pub enum PassportElementError {
        DataField(PassportElementErrorDataField),
        FrontSide(PassportElementErrorFrontSide),
        ReverseSide(PassportElementErrorReverseSide),
        Selfie(PassportElementErrorSelfie),
        File(PassportElementErrorFile),
        Files(PassportElementErrorFiles),
        TranslationFile(PassportElementErrorTranslationFile),
        TranslationFiles(PassportElementErrorTranslationFiles),
        Unspecified(PassportElementErrorUnspecified),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorDataField {
    pub source: tag::Data,
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,
    pub field_name: String,
    pub data_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorFrontSide {
    pub source: tag::FrontSide,
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,
    pub file_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorReverseSide {
    pub source: tag::ReverseSide,
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,
    pub file_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorSelfie {
    pub source: tag::Selfie,
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,
    pub file_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorFile {
    pub source: tag::SourceFile,
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,
    pub file_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorFiles {
    pub source: tag::SourceFiles,
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,
    pub file_hashes: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorTranslationFile {
    pub source: tag::TranslationFile,
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,
    pub file_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorTranslationFiles {
    pub source: tag::TranslationFiles,
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,
    pub file_hashes: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorUnspecified {
    pub source: tag::Unspecified,
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,
    pub element_hash: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn source_selects_variant_with_same_fields() {
        // front_side, reverse_side and selfie share every field but `source`.
        let error: PassportElementError = serde_json::from_value(json!({
            "source": "selfie",
            "type": "passport",
            "file_hash": "abc",
            "message": "blurry"
        }))
        .unwrap();
        match error {
            PassportElementError::Selfie(selfie) => {
                assert_eq!(selfie.kind, EncryptedPassportElementType::Passport);
                assert_eq!(selfie.message, "blurry");
            }
            other => panic!("expected selfie error, got {other:?}"),
        }
    }

    #[test]
    fn data_field_error_round_trips() {
        let error = PassportElementError::from(PassportElementErrorDataField {
            source: tag::Data,
            kind: EncryptedPassportElementType::PersonalDetails,
            field_name: "first_name".to_string(),
            data_hash: "hash".to_string(),
            message: "does not match".to_string(),
        });
        let encoded = serde_json::to_value(&error).unwrap();
        assert_eq!(encoded["source"], "data");
        assert_eq!(encoded["type"], "personal_details");
        assert_eq!(serde_json::from_value::<PassportElementError>(encoded).unwrap(), error);
    }
}
