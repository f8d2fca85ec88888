use crate::domain::payment::TransactionRequest;
use crate::domain::ports::TransactionEndpoint;
use crate::domain::processing::ProcessingValues;
use crate::error::RpcError;
use async_trait::async_trait;
use serde::Deserialize;

/// `TransactionEndpoint` adapter that POSTs the host-prepared request body as
/// JSON to the transaction route.
///
/// The backend answers in the host framework's RPC convention: HTTP 200 with
/// either a `result` object or an `error` object. An `error` becomes
/// `RpcError::Backend` (a structured failure, shown verbatim); a non-success
/// status, connection failure or undecodable body becomes a transport/decode
/// failure (shown as a generic dialog).
pub struct HttpTransactionEndpoint {
    client: reqwest::Client,
}

impl HttpTransactionEndpoint {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransactionEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionEndpoint for HttpTransactionEndpoint {
    async fn create_transaction(
        &self,
        route: &str,
        request: &TransactionRequest,
    ) -> Result<ProcessingValues, RpcError> {
        let response = self
            .client
            .post(route)
            .json(request.as_json())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        decode_envelope(&body)
    }
}

#[derive(Deserialize)]
struct RpcEnvelope {
    #[serde(default)]
    result: Option<ProcessingValues>,
    #[serde(default)]
    error: Option<EnvelopeError>,
}

#[derive(Deserialize)]
struct EnvelopeError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<EnvelopeErrorData>,
}

#[derive(Deserialize)]
struct EnvelopeErrorData {
    #[serde(default)]
    message: Option<String>,
}

/// Decodes the RPC response body.
///
/// Accepts both the enveloped form (`{"result": ...}` / `{"error": ...}`) and
/// bare processing values. The error message is taken from `error.data.message`
/// first, then `error.message`, matching where the backend puts it.
fn decode_envelope(body: &str) -> Result<ProcessingValues, RpcError> {
    let envelope: RpcEnvelope = serde_json::from_str(body)?;
    if let Some(error) = envelope.error {
        let message = error
            .data
            .and_then(|data| data.message)
            .or(error.message)
            .unwrap_or_else(|| "Unknown server error".to_owned());
        return Err(RpcError::Backend { message });
    }
    match envelope.result {
        Some(values) => Ok(values),
        None => Ok(serde_json::from_str(body)?),
    }
}
