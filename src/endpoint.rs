//! Endpoint URL normalization.

use reqwest::Url;

use crate::error::InferenceError;

/// Build a proper endpoint URL from the formats users actually supply.
///
/// Adds `https://` when no scheme is given and appends the
/// OpenAI-compatible `/v1` path when no path is present. A trailing slash
/// is dropped either way.
pub fn build_endpoint_url(endpoint: &str) -> Result<String, InferenceError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(InferenceError::Configuration(
            "endpoint cannot be empty".to_string(),
        ));
    }

    let with_scheme = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("https://{endpoint}")
    };

    let url = Url::parse(&with_scheme).map_err(|e| {
        InferenceError::Configuration(format!("invalid endpoint URL '{with_scheme}': {e}"))
    })?;
    if url.host_str().is_none() {
        return Err(InferenceError::Configuration(format!(
            "invalid endpoint URL '{with_scheme}': missing host"
        )));
    }

    let base = with_scheme.trim_end_matches('/').to_string();
    if url.path().is_empty() || url.path() == "/" {
        Ok(format!("{base}/v1"))
    } else {
        Ok(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_scheme_and_default_path() {
        let url = build_endpoint_url("api.example.com").unwrap();
        assert_eq!(url, "https://api.example.com/v1");
    }

    #[test]
    fn test_keeps_existing_path() {
        let url = build_endpoint_url("http://localhost:8000/v1").unwrap();
        assert_eq!(url, "http://localhost:8000/v1");

        let url = build_endpoint_url("https://host.example.com/openai/v1/").unwrap();
        assert_eq!(url, "https://host.example.com/openai/v1");
    }

    #[test]
    fn test_trailing_slash_without_path() {
        let url = build_endpoint_url("https://api.example.com/").unwrap();
        assert_eq!(url, "https://api.example.com/v1");
    }

    #[test]
    fn test_rejects_empty_and_invalid() {
        assert!(build_endpoint_url("   ").is_err());
        assert!(build_endpoint_url("https://").is_err());
    }
}
