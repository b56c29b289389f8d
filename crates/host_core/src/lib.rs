//! In-process counter host: the authoritative owner of the counter state.
//!
//! The host exposes the four RPC-style operations of the front-end contract
//! plus a broadcast push channel. Every mutation publishes the full state
//! under a fresh sequence number; threshold triggers may publish again, and
//! the reactor completion arrives later as a pure push event.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use shared::domain::{clamp_count, CounterAction, CounterState, StateSeq, COUNT_MAX, COUNT_MIN};
use shared::protocol::{HostEvent, HostRequest, StateFrame};
use tokio::sync::{broadcast, Mutex};
use tracing::debug;

pub mod config;

pub use config::{load_settings, HostSettings};

/// Title shown while the simulated external API call is in flight.
pub const BUSY_TITLE: &str = "API call in progress...";
/// Title pushed when the reactor's external API call completes.
pub const REACTOR_DONE_TITLE: &str = "Reactor finished external API call";
/// Title published when the counter lands on its upper bound.
pub const CEILING_TITLE: &str = "Counter reached 5! second trigger activated.";
/// Title published by a reset.
pub const RESET_TITLE: &str = "Counter reset!";

/// Value a reset restores.
pub const RESET_COUNT: i32 = 3;

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// RPC surface the front-end bridge drives. Every call resolves to the full
/// authoritative state; mutating calls also publish to subscribers before
/// they return.
#[async_trait]
pub trait HostHandle: Send + Sync {
    async fn get_state(&self) -> Result<StateFrame>;
    async fn increment_counter(&self) -> Result<StateFrame>;
    async fn decrement_counter(&self) -> Result<StateFrame>;
    async fn reset_counter(&self) -> Result<StateFrame>;
    fn subscribe_events(&self) -> broadcast::Receiver<HostEvent>;

    async fn handle(&self, request: HostRequest) -> Result<StateFrame> {
        match request {
            HostRequest::GetState => self.get_state().await,
            HostRequest::IncrementCounter => self.increment_counter().await,
            HostRequest::DecrementCounter => self.decrement_counter().await,
            HostRequest::ResetCounter => self.reset_counter().await,
        }
    }
}

pub struct CounterHost {
    inner: Mutex<HostState>,
    events: broadcast::Sender<HostEvent>,
    reactor_delay: Duration,
}

struct HostState {
    state: CounterState,
    seq: StateSeq,
}

impl CounterHost {
    pub fn new() -> Arc<Self> {
        Self::with_settings(HostSettings::default())
    }

    pub fn with_settings(settings: HostSettings) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            inner: Mutex::new(HostState {
                state: CounterState {
                    title: settings.initial_title,
                    count: clamp_count(settings.initial_count),
                    busy: false,
                },
                seq: StateSeq(0),
            }),
            events,
            reactor_delay: settings.reactor_delay,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<HostEvent> {
        self.events.subscribe()
    }

    /// Bumps the sequence and pushes the current state to subscribers. A
    /// send error only means nobody is subscribed yet.
    fn publish(&self, inner: &mut HostState) -> StateFrame {
        inner.seq = inner.seq.next();
        let frame = StateFrame {
            seq: inner.seq,
            state: inner.state.clone(),
        };
        let _ = self.events.send(HostEvent::StateUpdated {
            frame: frame.clone(),
        });
        frame
    }
}

/// Applies one action: mutate, publish, then evaluate threshold triggers.
/// The returned frame is the latest published one, so a call that lands on a
/// threshold resolves to the trigger's state rather than the intermediate.
async fn apply(host: &Arc<CounterHost>, action: CounterAction) -> StateFrame {
    let mut inner = host.inner.lock().await;
    match action {
        CounterAction::Decrement => {
            if inner.state.count > COUNT_MIN {
                inner.state.count -= 1;
            }
        }
        CounterAction::Increment => {
            if inner.state.count < COUNT_MAX {
                inner.state.count += 1;
            }
        }
        CounterAction::Reset => {
            inner.state.count = RESET_COUNT;
            inner.state.title = RESET_TITLE.to_string();
        }
    }

    let mut frame = host.publish(&mut inner);
    if let Some(trigger_frame) = run_threshold_triggers(host, &mut inner) {
        frame = trigger_frame;
    }

    debug!(
        ?action,
        count = frame.state.count,
        seq = frame.seq.0,
        "applied counter action"
    );
    frame
}

/// Threshold side effects, evaluated after every action. Landing on the
/// lower bound starts the external API call; landing on the upper bound
/// publishes the second trigger title.
fn run_threshold_triggers(host: &Arc<CounterHost>, inner: &mut HostState) -> Option<StateFrame> {
    match inner.state.count {
        COUNT_MIN => {
            inner.state.busy = true;
            inner.state.title = BUSY_TITLE.to_string();
            let frame = host.publish(inner);
            schedule_reactor(Arc::clone(host));
            Some(frame)
        }
        COUNT_MAX => {
            inner.state.title = CEILING_TITLE.to_string();
            Some(host.publish(inner))
        }
        _ => None,
    }
}

/// The simulated external API call. Completion is announced purely as a push
/// event once the configured delay elapses.
fn schedule_reactor(host: Arc<CounterHost>) {
    tokio::spawn(async move {
        tokio::time::sleep(host.reactor_delay).await;
        let mut inner = host.inner.lock().await;
        inner.state.title = REACTOR_DONE_TITLE.to_string();
        inner.state.busy = false;
        host.publish(&mut inner);
        debug!(seq = inner.seq.0, "reactor finished external API call");
    });
}

#[async_trait]
impl HostHandle for Arc<CounterHost> {
    async fn get_state(&self) -> Result<StateFrame> {
        let inner = self.inner.lock().await;
        Ok(StateFrame {
            seq: inner.seq,
            state: inner.state.clone(),
        })
    }

    async fn increment_counter(&self) -> Result<StateFrame> {
        Ok(apply(self, CounterAction::Increment).await)
    }

    async fn decrement_counter(&self) -> Result<StateFrame> {
        Ok(apply(self, CounterAction::Decrement).await)
    }

    async fn reset_counter(&self) -> Result<StateFrame> {
        Ok(apply(self, CounterAction::Reset).await)
    }

    fn subscribe_events(&self) -> broadcast::Receiver<HostEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
