//! Desktop configuration loaded from the process environment.

/// Backend used when `JOT_API_BASE_URL` is unset
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Client configuration resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    /// Base URL of the notes REST API
    pub api_base_url: String,
}

impl DesktopConfig {
    /// Read configuration from the environment (after dotenvy has run).
    #[must_use]
    pub fn from_env() -> Self {
        let api_base_url = normalize_text_option(std::env::var("JOT_API_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self { api_base_url }
    }
}

/// Normalizes optional text config by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
#[must_use]
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_text_option_rejects_empty() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some("   ".to_string())), None);
    }

    #[test]
    fn normalize_text_option_trims_value() {
        assert_eq!(
            normalize_text_option(Some(" http://localhost:8080/api ".to_string())),
            Some("http://localhost:8080/api".to_string())
        );
    }
}
