use super::payment::{PaymentContext, TransactionRequest};
use super::processing::ProcessingValues;
use crate::error::RpcError;
use async_trait::async_trait;

/// Remote procedure call that creates a payment transaction on the backend
/// and returns its processing values.
#[async_trait]
pub trait TransactionEndpoint: Send + Sync {
    async fn create_transaction(
        &self,
        route: &str,
        request: &TransactionRequest,
    ) -> Result<ProcessingValues, RpcError>;
}

/// The host form's standard flow handlers. Their internals are owned by the
/// host; this component only selects which one runs.
#[async_trait]
pub trait FlowHandlers: Send + Sync {
    async fn process_redirect(&self, ctx: &PaymentContext, values: &ProcessingValues);
    async fn process_direct(&self, ctx: &PaymentContext, values: &ProcessingValues);
    async fn process_token(&self, ctx: &PaymentContext, values: &ProcessingValues);
}

/// UI collaborators of the host form: the error dialog and the submit control
/// that was disabled before initiation started.
pub trait PaymentUi: Send + Sync {
    fn display_error_dialog(&self, title: &str, message: &str);
    fn enable_submit(&self);
}

/// Full-page navigation. Terminal for the document context; nothing runs
/// after it.
pub trait Navigator: Send + Sync {
    fn redirect(&self, url: &str);
}

pub type TransactionEndpointBox = Box<dyn TransactionEndpoint>;
pub type FlowHandlersBox = Box<dyn FlowHandlers>;
pub type PaymentUiBox = Box<dyn PaymentUi>;
pub type NavigatorBox = Box<dyn Navigator>;
