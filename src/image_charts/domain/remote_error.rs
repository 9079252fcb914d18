use serde::Deserialize;

pub const ERROR_VALIDATION_HEADER: &str = "x-ic-error-validation";
pub const ERROR_CODE_HEADER: &str = "x-ic-error-code";

// x-ic-error-validation ヘッダーの各要素
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessage {
    pub message: String,
}

/// Parses the validation header and joins its messages with newlines.
pub fn join_validation_messages(raw: &str) -> Result<String, serde_json::Error> {
    let messages: Vec<ValidationMessage> = serde_json::from_str(raw)?;
    Ok(messages
        .into_iter()
        .map(|m| m.message)
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_single_message() {
        let joined = join_validation_messages(r#"[{"message":"\"chs\" is required"}]"#).unwrap();
        assert_eq!(joined, "\"chs\" is required");
    }

    #[test]
    fn test_join_multiple_messages_ignores_extra_fields() {
        let raw = r#"[{"message":"first","path":["chs"]},{"message":"second","type":"any.required"}]"#;
        assert_eq!(join_validation_messages(raw).unwrap(), "first\nsecond");
    }

    #[test]
    fn test_join_empty_array() {
        assert_eq!(join_validation_messages("[]").unwrap(), "");
    }

    #[test]
    fn test_join_rejects_malformed_payload() {
        assert!(join_validation_messages("not json").is_err());
    }
}
