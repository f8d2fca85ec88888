use serde::Deserialize;

/// Processing values returned by the backend after creating a payment
/// transaction.
///
/// Only the two fields that drive routing are modeled; everything else is
/// carried through `extra` untouched for the delegated flow handlers to
/// consume.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ProcessingValues {
    /// URL of the gateway's hosted checkout page. When present and non-empty,
    /// it overrides every standard flow.
    #[serde(default)]
    pub negdi_redirect_url: Option<String>,
    /// Domain-level failure reported by the backend without a transport error.
    #[serde(default)]
    pub error: Option<BackendError>,
    /// Fields opaque to this component (redirect form html, provider
    /// references, etc.).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProcessingValues {
    /// The hosted checkout URL, if actionable. An empty string counts as
    /// absent, matching how the host form treats falsy values.
    pub fn hosted_checkout_url(&self) -> Option<&str> {
        self.negdi_redirect_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BackendError {
    #[serde(default)]
    pub message: Option<String>,
}
