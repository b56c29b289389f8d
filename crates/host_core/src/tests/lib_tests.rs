use super::*;
use tokio::time::timeout;

const RECV_TIMEOUT: Duration = Duration::from_secs(2);

fn settings(initial_count: i32, reactor_delay: Duration) -> HostSettings {
    HostSettings {
        initial_title: "Ready".to_string(),
        initial_count,
        reactor_delay,
    }
}

/// Reactor long enough that its completion never interferes with the
/// assertions of a test that is not about the reactor.
fn idle_reactor() -> Duration {
    Duration::from_secs(600)
}

async fn next_frame(events: &mut broadcast::Receiver<HostEvent>) -> StateFrame {
    let event = timeout(RECV_TIMEOUT, events.recv())
        .await
        .expect("timed out waiting for host event")
        .expect("host event channel closed");
    let HostEvent::StateUpdated { frame } = event;
    frame
}

#[tokio::test]
async fn default_host_starts_from_configured_defaults() {
    let host = CounterHost::new();
    let frame = host.get_state().await.expect("get_state");
    assert_eq!(frame.state.title, "Initial Hello From Rust!");
    assert_eq!(frame.state.count, 3);
    assert!(!frame.state.busy);
}

#[tokio::test]
async fn snapshot_reflects_settings_and_does_not_bump_sequence() {
    let host = CounterHost::with_settings(settings(3, idle_reactor()));

    let first = host.get_state().await.expect("get_state");
    let second = host.get_state().await.expect("get_state");

    assert_eq!(first.seq, StateSeq(0));
    assert_eq!(first, second);
    assert_eq!(first.state.title, "Ready");
    assert_eq!(first.state.count, 3);
    assert!(!first.state.busy);
}

#[tokio::test]
async fn out_of_bounds_initial_count_is_clamped() {
    let host = CounterHost::with_settings(settings(99, idle_reactor()));
    let frame = host.get_state().await.expect("get_state");
    assert_eq!(frame.state.count, COUNT_MAX);
}

#[tokio::test]
async fn decrement_to_zero_resolves_to_busy_state() {
    let host = CounterHost::with_settings(settings(1, idle_reactor()));
    let mut events = host.subscribe_events();

    let response = host.decrement_counter().await.expect("decrement");

    assert_eq!(response.state.count, 0);
    assert!(response.state.busy);
    assert_eq!(response.state.title, BUSY_TITLE);

    // Both the post-action state and the trigger state were pushed, in order.
    let intermediate = next_frame(&mut events).await;
    assert_eq!(intermediate.state.count, 0);
    assert!(!intermediate.state.busy);

    let trigger = next_frame(&mut events).await;
    assert_eq!(trigger, response);
    assert!(intermediate.seq < trigger.seq);
}

#[tokio::test]
async fn decrement_at_lower_bound_does_not_go_negative() {
    let host = CounterHost::with_settings(settings(1, idle_reactor()));
    host.decrement_counter().await.expect("decrement to zero");

    let response = host.decrement_counter().await.expect("decrement at zero");
    assert_eq!(response.state.count, 0);
}

#[tokio::test]
async fn increment_clamps_at_upper_bound_and_fires_second_trigger() {
    let host = CounterHost::with_settings(settings(4, idle_reactor()));

    let at_ceiling = host.increment_counter().await.expect("increment");
    assert_eq!(at_ceiling.state.count, COUNT_MAX);
    assert_eq!(at_ceiling.state.title, CEILING_TITLE);
    assert!(!at_ceiling.state.busy);

    let clamped = host.increment_counter().await.expect("increment at ceiling");
    assert_eq!(clamped.state.count, COUNT_MAX);
}

#[tokio::test]
async fn reset_restores_reset_count_and_title() {
    let host = CounterHost::with_settings(settings(5, idle_reactor()));

    let response = host.reset_counter().await.expect("reset");
    assert_eq!(response.state.count, RESET_COUNT);
    assert_eq!(response.state.title, RESET_TITLE);
    assert!(!response.state.busy);
}

#[tokio::test]
async fn reactor_completion_is_pushed_after_the_delay() {
    let host = CounterHost::with_settings(settings(1, Duration::from_millis(10)));
    let mut events = host.subscribe_events();

    let busy = host.decrement_counter().await.expect("decrement");
    assert!(busy.state.busy);

    let done = loop {
        let frame = next_frame(&mut events).await;
        if frame.state.title == REACTOR_DONE_TITLE {
            break frame;
        }
    };

    assert!(!done.state.busy);
    assert_eq!(done.state.count, 0);
    assert!(busy.seq < done.seq);
}

#[tokio::test]
async fn sequence_strictly_increases_across_dispatched_requests() {
    let host = CounterHost::with_settings(settings(3, idle_reactor()));
    let mut events = host.subscribe_events();

    for request in [
        HostRequest::IncrementCounter,
        HostRequest::DecrementCounter,
        HostRequest::ResetCounter,
        HostRequest::IncrementCounter,
    ] {
        host.handle(request).await.expect("dispatch request");
    }

    let mut last = StateSeq(0);
    while let Ok(Ok(HostEvent::StateUpdated { frame })) =
        timeout(Duration::from_millis(100), events.recv()).await
    {
        assert!(frame.seq > last, "sequence must strictly increase");
        last = frame.seq;
    }
    assert!(last >= StateSeq(4));
}
