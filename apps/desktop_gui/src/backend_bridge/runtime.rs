//! Runtime bridge between the UI command queue and the counter host.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use host_core::{load_settings, CounterHost, HostHandle};
use shared::protocol::HostEvent;
use tokio::sync::broadcast::error::RecvError;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn spawn_host_worker(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::WorkerStartup,
                    format!("failed to build host worker runtime: {err}"),
                )));
                tracing::error!("failed to build host worker runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let host = CounterHost::with_settings(load_settings());
            let _ = ui_tx.try_send(UiEvent::Info("Counter host ready".to_string()));

            // Push subscription: once, for the lifetime of the process. On a
            // lagged receiver the latest snapshot is re-fetched so the
            // front-end lands on current state instead of a gap.
            let mut events = host.subscribe_events();
            let push_tx = ui_tx.clone();
            let push_host = Arc::clone(&host);
            tokio::spawn(async move {
                loop {
                    match events.recv().await {
                        Ok(HostEvent::StateUpdated { frame }) => {
                            let _ = push_tx.try_send(UiEvent::HostPush(frame));
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "push subscription lagged; resyncing");
                            let _ = push_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::Subscription,
                                format!("missed {skipped} pushed updates; resynced to latest"),
                            )));
                            if let Ok(frame) = push_host.get_state().await {
                                let _ = push_tx.try_send(UiEvent::HostPush(frame));
                            }
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            });

            while let Ok(cmd) = cmd_rx.recv() {
                match host.handle(cmd.request()).await {
                    Ok(frame) => {
                        let _ = ui_tx.try_send(UiEvent::StateApplied(frame));
                    }
                    Err(err) => {
                        let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                            UiErrorContext::Request,
                            format!("{err:#}"),
                        )));
                    }
                }
            }
        });
    });
}
