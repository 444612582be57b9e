use crate::request::Request;
use crate::types::PassportElementError;

/// Tell a user that some Telegram Passport elements contain errors; the user
/// cannot resubmit those elements until the errors are fixed.
pub fn set_passport_data_errors(user_id: i64, errors: Vec<PassportElementError>) -> Request {
    Request::new("setPassportDataErrors")
        .with("user_id", user_id)
        .with("errors", errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{tag, EncryptedPassportElementType, PassportElementErrorDataField};
    use serde_json::json;

    #[test]
    fn errors_encode_with_source_and_type() {
        let error = PassportElementErrorDataField {
            source: tag::Data,
            kind: EncryptedPassportElementType::PersonalDetails,
            field_name: "first_name".to_string(),
            data_hash: "aGFzaA==".to_string(),
            message: "Misspelled".to_string(),
        };
        let req = set_passport_data_errors(9, vec![error.into()]);
        assert_eq!(req.keys(), vec!["errors", "user_id"]);
        assert_eq!(
            req.get("errors"),
            Some(&json!([{
                "source": "data",
                "type": "personal_details",
                "field_name": "first_name",
                "data_hash": "aGFzaA==",
                "message": "Misspelled"
            }]))
        );
    }
}
