//! Pure mapping from counter state to the widgets the shell paints.

use shared::domain::{CounterState, COUNT_MAX, COUNT_MIN};

/// Explanatory text shown only while the countdown is above zero.
pub const THRESHOLD_NOTE: &str = "Note: When the countdown hits zero, the counter host will \
     trigger an external API call, displaying \"API call in progress...\" followed by a final \
     message. Also, when incrementing the counter to five, a different trigger will activate.";

/// Enablement of the three controls. While the host's external API call is
/// in flight every control is off, regardless of the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSet {
    pub decrement_enabled: bool,
    pub increment_enabled: bool,
    pub reset_enabled: bool,
}

impl ControlSet {
    pub fn from_state(state: &CounterState) -> Self {
        Self {
            decrement_enabled: !state.busy && state.count > COUNT_MIN,
            increment_enabled: !state.busy && state.count < COUNT_MAX,
            reset_enabled: !state.busy,
        }
    }
}

/// The full UI description for one render of the counter screen. Idempotent
/// given the same state; holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub heading: String,
    pub counter_text: String,
    pub note: Option<&'static str>,
    pub controls: ControlSet,
}

impl ViewModel {
    pub fn from_state(state: &CounterState) -> Self {
        Self {
            heading: state.title.clone(),
            counter_text: format!("Countdown: {}", state.count),
            note: (state.count > 0).then_some(THRESHOLD_NOTE),
            controls: ControlSet::from_state(state),
        }
    }
}
