use crate::domain::payment::TransactionRequest;
use crate::domain::ports::TransactionEndpoint;
use crate::domain::processing::ProcessingValues;
use crate::error::RpcError;
use async_trait::async_trait;
use std::path::Path;

/// `TransactionEndpoint` adapter that answers every call with canned
/// processing values. Used by the demo binary in offline mode and by tests
/// that exercise the dispatch without a backend.
#[derive(Clone, Debug)]
pub struct FixtureEndpoint {
    values: ProcessingValues,
}

impl FixtureEndpoint {
    pub fn new(values: ProcessingValues) -> Self {
        Self { values }
    }

    /// Loads the canned processing values from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, RpcError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::new(serde_json::from_str(&raw)?))
    }
}

#[async_trait]
impl TransactionEndpoint for FixtureEndpoint {
    async fn create_transaction(
        &self,
        _route: &str,
        _request: &TransactionRequest,
    ) -> Result<ProcessingValues, RpcError> {
        Ok(self.values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_fixture_endpoint_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"negdi_redirect_url": "https://pay.example/c/9"}}"#).unwrap();

        let endpoint = FixtureEndpoint::from_file(file.path()).unwrap();
        let values = endpoint
            .create_transaction("/payment/transaction/1", &TransactionRequest::default())
            .await
            .unwrap();
        assert_eq!(
            values.hosted_checkout_url(),
            Some("https://pay.example/c/9")
        );
    }

    #[test]
    fn test_fixture_endpoint_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = FixtureEndpoint::from_file(file.path()).unwrap_err();
        assert!(matches!(err, RpcError::Decode(_)));
    }
}
