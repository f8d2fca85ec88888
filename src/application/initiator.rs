use crate::domain::payment::{Flow, PaymentContext, TransactionRequest};
use crate::domain::ports::{FlowHandlersBox, NavigatorBox, PaymentUiBox, TransactionEndpointBox};
use crate::error::RpcError;

pub const PAYMENT_ERROR_TITLE: &str = "Payment Error";
pub const PROCESSING_FAILED_TITLE: &str = "Payment processing failed";
pub const GENERIC_ERROR_TITLE: &str = "Error";

pub const GENERIC_PROCESSING_MESSAGE: &str = "An error occurred during payment processing.";
pub const GENERIC_UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again.";
pub const UNHANDLED_RESPONSE_MESSAGE: &str =
    "The payment server returned an unexpected response. Please try again later.";

/// Terminal state reached by one initiation attempt.
///
/// Exactly one is produced per invocation; the submit control is re-enabled
/// on every dialog-showing variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Full-page navigation to the gateway's hosted checkout page.
    HostedCheckoutRedirect { url: String },
    /// One of the host's standard flow handlers took over.
    Delegated(Flow),
    /// The backend reported a domain-level error in the processing values.
    BackendErrorShown,
    /// The response matched no flow and carried no error.
    UnhandledResponse,
    /// The remote call itself failed.
    RpcFailureShown { structured: bool },
}

/// Intercepts the host form's "create transaction and process payment" step.
///
/// `PaymentInitiator` owns no state of its own; the host's handler set, UI
/// collaborators and navigator are injected at construction, and the payment
/// context travels with each call.
pub struct PaymentInitiator {
    endpoint: TransactionEndpointBox,
    handlers: FlowHandlersBox,
    ui: PaymentUiBox,
    navigator: NavigatorBox,
}

impl PaymentInitiator {
    /// Creates a new `PaymentInitiator` instance.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The transaction-creation remote call.
    /// * `handlers` - The host's redirect/direct/token flow handlers.
    /// * `ui` - The host's error dialog and submit control.
    /// * `navigator` - Full-page navigation.
    pub fn new(
        endpoint: TransactionEndpointBox,
        handlers: FlowHandlersBox,
        ui: PaymentUiBox,
        navigator: NavigatorBox,
    ) -> Self {
        Self {
            endpoint,
            handlers,
            ui,
            navigator,
        }
    }

    /// Creates the transaction and routes its processing values.
    ///
    /// Priority-ordered dispatch, first match wins: hosted checkout redirect,
    /// then the standard flow matching `flow`, then a backend-reported error,
    /// then the unhandled-response dialog. Remote-call failures never
    /// propagate; they are classified and surfaced as dialogs here.
    ///
    /// The host is expected to have disabled the submit control before
    /// calling; every non-navigating error path re-enables it.
    pub async fn initiate_payment_flow(
        &self,
        ctx: &PaymentContext,
        request: &TransactionRequest,
        flow: &Flow,
    ) -> Outcome {
        let values = match self
            .endpoint
            .create_transaction(&ctx.transaction_route, request)
            .await
        {
            Ok(values) => values,
            Err(err) => return self.report_rpc_failure(err),
        };

        if let Some(url) = values.hosted_checkout_url() {
            tracing::info!(%url, provider = %ctx.provider_code, "redirecting to hosted checkout");
            self.navigator.redirect(url);
            return Outcome::HostedCheckoutRedirect {
                url: url.to_owned(),
            };
        }

        match flow {
            Flow::Redirect => {
                self.handlers.process_redirect(ctx, &values).await;
                Outcome::Delegated(Flow::Redirect)
            }
            Flow::Direct => {
                self.handlers.process_direct(ctx, &values).await;
                Outcome::Delegated(Flow::Direct)
            }
            Flow::Token => {
                self.handlers.process_token(ctx, &values).await;
                Outcome::Delegated(Flow::Token)
            }
            Flow::Other(name) => {
                if let Some(error) = &values.error {
                    let message = error
                        .message
                        .clone()
                        .unwrap_or_else(|| GENERIC_PROCESSING_MESSAGE.to_owned());
                    tracing::error!(flow = %name, %message, "backend reported a processing error");
                    self.ui.display_error_dialog(PAYMENT_ERROR_TITLE, &message);
                    self.ui.enable_submit();
                    Outcome::BackendErrorShown
                } else {
                    // The original form silently dropped this case. Report it
                    // instead so the user is never left with a dead button.
                    tracing::warn!(flow = %name, "response matched no flow and carried no error");
                    self.ui
                        .display_error_dialog(PAYMENT_ERROR_TITLE, UNHANDLED_RESPONSE_MESSAGE);
                    self.ui.enable_submit();
                    Outcome::UnhandledResponse
                }
            }
        }
    }

    fn report_rpc_failure(&self, err: RpcError) -> Outcome {
        let structured = match err.structured_message() {
            Some(message) => {
                self.ui.display_error_dialog(PROCESSING_FAILED_TITLE, message);
                true
            }
            None => {
                tracing::error!(error = %err, "transaction creation failed");
                self.ui
                    .display_error_dialog(GENERIC_ERROR_TITLE, GENERIC_UNEXPECTED_MESSAGE);
                false
            }
        };
        // The button was disabled before initiating the flow.
        self.ui.enable_submit();
        Outcome::RpcFailureShown { structured }
    }
}
