use async_trait::async_trait;
use payment_initiation::application::initiator::PaymentInitiator;
use payment_initiation::domain::payment::{PaymentContext, TransactionRequest};
use payment_initiation::domain::ports::{
    FlowHandlers, Navigator, PaymentUi, TransactionEndpoint,
};
use payment_initiation::domain::processing::ProcessingValues;
use payment_initiation::error::RpcError;
use std::sync::{Arc, Mutex};

/// One observable side effect of an initiation attempt, in the order it
/// happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Navigated(String),
    RedirectFlow {
        provider_code: String,
        payment_option_id: u32,
        values: ProcessingValues,
    },
    DirectFlow {
        provider_code: String,
        payment_option_id: u32,
        values: ProcessingValues,
    },
    TokenFlow {
        provider_code: String,
        payment_option_id: u32,
        values: ProcessingValues,
    },
    Dialog {
        title: String,
        message: String,
    },
    SubmitEnabled,
}

#[derive(Default, Clone)]
pub struct EffectLog(Arc<Mutex<Vec<Effect>>>);

impl EffectLog {
    pub fn record(&self, effect: Effect) {
        self.0.lock().unwrap().push(effect);
    }

    pub fn snapshot(&self) -> Vec<Effect> {
        self.0.lock().unwrap().clone()
    }

    /// Drains the log, so consecutive invocations can be compared.
    pub fn take(&self) -> Vec<Effect> {
        std::mem::take(&mut self.0.lock().unwrap())
    }
}

pub struct RecordingHandlers(pub EffectLog);

#[async_trait]
impl FlowHandlers for RecordingHandlers {
    async fn process_redirect(&self, ctx: &PaymentContext, values: &ProcessingValues) {
        self.0.record(Effect::RedirectFlow {
            provider_code: ctx.provider_code.clone(),
            payment_option_id: ctx.payment_option_id,
            values: values.clone(),
        });
    }

    async fn process_direct(&self, ctx: &PaymentContext, values: &ProcessingValues) {
        self.0.record(Effect::DirectFlow {
            provider_code: ctx.provider_code.clone(),
            payment_option_id: ctx.payment_option_id,
            values: values.clone(),
        });
    }

    async fn process_token(&self, ctx: &PaymentContext, values: &ProcessingValues) {
        self.0.record(Effect::TokenFlow {
            provider_code: ctx.provider_code.clone(),
            payment_option_id: ctx.payment_option_id,
            values: values.clone(),
        });
    }
}

pub struct RecordingUi(pub EffectLog);

impl PaymentUi for RecordingUi {
    fn display_error_dialog(&self, title: &str, message: &str) {
        self.0.record(Effect::Dialog {
            title: title.to_owned(),
            message: message.to_owned(),
        });
    }

    fn enable_submit(&self) {
        self.0.record(Effect::SubmitEnabled);
    }
}

pub struct RecordingNavigator(pub EffectLog);

impl Navigator for RecordingNavigator {
    fn redirect(&self, url: &str) {
        self.0.record(Effect::Navigated(url.to_owned()));
    }
}

/// What the stubbed transaction endpoint answers with, rebuilt per call so
/// repeated invocations stay independent.
#[derive(Clone)]
pub enum CannedResponse {
    Values(ProcessingValues),
    BackendFailure(String),
    UnexpectedFailure,
}

pub struct StubEndpoint(pub CannedResponse);

#[async_trait]
impl TransactionEndpoint for StubEndpoint {
    async fn create_transaction(
        &self,
        _route: &str,
        _request: &TransactionRequest,
    ) -> Result<ProcessingValues, RpcError> {
        match &self.0 {
            CannedResponse::Values(values) => Ok(values.clone()),
            CannedResponse::BackendFailure(message) => Err(RpcError::Backend {
                message: message.clone(),
            }),
            CannedResponse::UnexpectedFailure => {
                Err(RpcError::Io(std::io::Error::other("socket closed")))
            }
        }
    }
}

pub fn initiator_with(response: CannedResponse, log: &EffectLog) -> PaymentInitiator {
    PaymentInitiator::new(
        Box::new(StubEndpoint(response)),
        Box::new(RecordingHandlers(log.clone())),
        Box::new(RecordingUi(log.clone())),
        Box::new(RecordingNavigator(log.clone())),
    )
}

pub fn payment_context() -> PaymentContext {
    PaymentContext {
        transaction_route: "/payment/transaction/42".to_owned(),
        provider_id: 3,
        provider_code: "negdi".to_owned(),
        payment_option_id: 11,
        payment_method_code: Some("card".to_owned()),
    }
}

pub fn values_from(json: &str) -> ProcessingValues {
    serde_json::from_str(json).expect("fixture json must deserialize")
}
