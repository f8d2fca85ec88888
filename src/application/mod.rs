//! Application layer orchestrating a single payment initiation attempt.
//!
//! This module defines the `PaymentInitiator`, which creates the transaction
//! through the injected endpoint port and routes the result to exactly one of
//! the host's flow handlers, the navigator, or the error dialog.

pub mod initiator;
