use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The payment completion mechanism selected earlier in the host form.
///
/// The host defines `redirect`, `direct` and `token`. Anything else it hands
/// over is preserved in `Other` so the dispatch can still fall through to the
/// backend-error and unhandled-response branches instead of rejecting the
/// value outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Redirect,
    Direct,
    Token,
    Other(String),
}

impl FromStr for Flow {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "redirect" => Self::Redirect,
            "direct" => Self::Direct,
            "token" => Self::Token,
            other => Self::Other(other.to_owned()),
        })
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redirect => f.write_str("redirect"),
            Self::Direct => f.write_str("direct"),
            Self::Token => f.write_str("token"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Per-attempt state populated by the host form before initiation runs.
///
/// Passed explicitly into every operation; this component never reads it from
/// shared instance state.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentContext {
    /// Route of the transaction-creation endpoint.
    pub transaction_route: String,
    /// The id of the selected payment option's provider.
    pub provider_id: u32,
    /// The code of the selected payment option's provider.
    pub provider_code: String,
    /// The id of the selected payment option.
    pub payment_option_id: u32,
    /// The code of the selected payment method, if any.
    pub payment_method_code: Option<String>,
}

/// Request body for the transaction-creation call, assembled by the host's
/// parameter-preparation routine. Opaque to this component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionRequest(serde_json::Value);

impl TransactionRequest {
    pub fn new(body: serde_json::Value) -> Self {
        Self(body)
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}

impl Default for TransactionRequest {
    fn default() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }
}
