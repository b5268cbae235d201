use serde::{Deserialize, Serialize};

/// Body of the outbound conversion call.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertRequest {
    pub prompt: String,
}

/// Success-class response body. Servers may omit `system_prompt`; the
/// client treats a missing field as an empty result.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertResponse {
    #[serde(default)]
    pub system_prompt: String,
}

/// Failure-class response body. `detail` is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_prompt_field() {
        let request = ConvertRequest {
            prompt: "Write a poem".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({ "prompt": "Write a poem" }));
    }

    #[test]
    fn response_defaults_missing_system_prompt_to_empty() {
        let response: ConvertResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.system_prompt, "");
    }

    #[test]
    fn response_reads_system_prompt() {
        let response: ConvertResponse =
            serde_json::from_str(r#"{"system_prompt":"You are a poetic assistant."}"#).unwrap();
        assert_eq!(response.system_prompt, "You are a poetic assistant.");
    }

    #[test]
    fn error_detail_is_optional() {
        let error: ApiError = serde_json::from_str("{}").unwrap();
        assert!(error.detail.is_none());

        let error: ApiError = serde_json::from_str(r#"{"detail":"bad key"}"#).unwrap();
        assert_eq!(error.detail.as_deref(), Some("bad key"));
    }
}
