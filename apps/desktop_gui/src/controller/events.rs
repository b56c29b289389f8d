//! UI/backend events and error modeling for the desktop controller.

use shared::protocol::StateFrame;

pub enum UiEvent {
    Info(String),
    /// Response to a queued backend command.
    StateApplied(StateFrame),
    /// Unsolicited push from the host's state_updated channel.
    HostPush(StateFrame),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    WorkerStartup,
    Request,
    Subscription,
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(context: UiErrorContext) -> &'static str {
    match context {
        UiErrorContext::WorkerStartup => "Host worker startup",
        UiErrorContext::Request => "Host request",
        UiErrorContext::Subscription => "Push subscription",
    }
}
