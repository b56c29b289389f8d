use serde::{Deserialize, Serialize};

/// Inclusive bounds the host enforces on the counter value.
pub const COUNT_MIN: i32 = 0;
pub const COUNT_MAX: i32 = 5;

/// Monotonic sequence number attached to every published state. Consumers
/// must discard frames whose sequence is not newer than the one they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateSeq(pub u64);

impl StateSeq {
    pub fn next(self) -> StateSeq {
        StateSeq(self.0 + 1)
    }
}

/// The shared record exchanged between front-end and host. Replaced
/// wholesale on every response and push; never partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub title: String,
    pub count: i32,
    /// True while the host's external API call is in flight. Drives control
    /// disabling in the front-end; the title carries the matching progress
    /// text for display only.
    pub busy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterAction {
    Decrement,
    Increment,
    Reset,
}

pub fn clamp_count(count: i32) -> i32 {
    count.clamp(COUNT_MIN, COUNT_MAX)
}
