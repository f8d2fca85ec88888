use crate::domain::payment::PaymentContext;
use crate::domain::ports::{FlowHandlers, Navigator, PaymentUi};
use crate::domain::processing::ProcessingValues;
use async_trait::async_trait;

/// Terminal-bound stand-in for the host form's dialog and submit control.
pub struct ConsoleUi;

impl PaymentUi for ConsoleUi {
    fn display_error_dialog(&self, title: &str, message: &str) {
        println!("[dialog] {title}: {message}");
    }

    fn enable_submit(&self) {
        println!("[form] submit control re-enabled");
    }
}

/// Prints the navigation target instead of unloading a page.
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn redirect(&self, url: &str) {
        println!("[navigate] {url}");
    }
}

/// Flow handlers that only announce the handoff. The real handlers belong to
/// the host form and are out of scope here.
pub struct LoggingFlowHandlers;

impl LoggingFlowHandlers {
    fn announce(&self, kind: &str, ctx: &PaymentContext, values: &ProcessingValues) {
        tracing::info!(
            flow = kind,
            provider = %ctx.provider_code,
            payment_option = ctx.payment_option_id,
            opaque_fields = values.extra.len(),
            "delegating to standard flow handler"
        );
        println!(
            "[flow] {kind} flow handler invoked for provider '{}'",
            ctx.provider_code
        );
    }
}

#[async_trait]
impl FlowHandlers for LoggingFlowHandlers {
    async fn process_redirect(&self, ctx: &PaymentContext, values: &ProcessingValues) {
        self.announce("redirect", ctx, values);
    }

    async fn process_direct(&self, ctx: &PaymentContext, values: &ProcessingValues) {
        self.announce("direct", ctx, values);
    }

    async fn process_token(&self, ctx: &PaymentContext, values: &ProcessingValues) {
        self.announce("token", ctx, values);
    }
}
