//! Explicit state container for the view. "Last write wins" is enforced
//! with the frame sequence number rather than event arrival order, so a
//! stale push cannot overwrite a newer command response or vice versa.

use shared::domain::CounterState;
use shared::protocol::StateFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOrigin {
    Response,
    Push,
}

#[derive(Debug, Default)]
pub struct StateStore {
    frame: Option<StateFrame>,
}

impl StateStore {
    pub fn new() -> Self {
        Self { frame: None }
    }

    /// Accepts a frame from either the response path or the push path.
    /// Frames whose sequence is not newer than the held one are discarded.
    /// Returns whether the held state changed.
    pub fn apply_frame(&mut self, incoming: StateFrame, origin: FrameOrigin) -> bool {
        if let Some(current) = &self.frame {
            if incoming.seq <= current.seq {
                tracing::debug!(
                    ?origin,
                    incoming = incoming.seq.0,
                    held = current.seq.0,
                    "discarding stale state frame"
                );
                return false;
            }
        }
        self.frame = Some(incoming);
        true
    }

    pub fn state(&self) -> Option<&CounterState> {
        self.frame.as_ref().map(|frame| &frame.state)
    }
}
