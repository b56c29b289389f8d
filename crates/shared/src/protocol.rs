use serde::{Deserialize, Serialize};

use crate::domain::{CounterState, StateSeq};

/// Requests the front-end may issue against the counter host. Tag names are
/// the operation names of the host contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostRequest {
    GetState,
    IncrementCounter,
    DecrementCounter,
    ResetCounter,
}

impl HostRequest {
    pub fn name(self) -> &'static str {
        match self {
            HostRequest::GetState => "get_state",
            HostRequest::IncrementCounter => "increment_counter",
            HostRequest::DecrementCounter => "decrement_counter",
            HostRequest::ResetCounter => "reset_counter",
        }
    }
}

/// A full counter state plus the sequence number under which the host
/// published it. The unit of exchange on both the response path and the
/// push path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFrame {
    pub seq: StateSeq,
    pub state: CounterState,
}

/// Unsolicited notifications from the host, zero or more times, any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum HostEvent {
    StateUpdated { frame: StateFrame },
}
