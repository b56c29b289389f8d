use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::store::{FrameOrigin, StateStore};
use crate::ui::view::ViewModel;

/// Idle repaint cadence; host pushes can arrive while no input is happening.
const IDLE_REPAINT: Duration = Duration::from_millis(100);

pub struct CounterApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    store: StateStore,
    status: String,
}

impl CounterApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            store: StateStore::new(),
            status: "Connecting to counter host...".to_string(),
        };
        // Initial fetch; the loading screen stays up until the frame lands.
        dispatch_backend_command(&app.cmd_tx, BackendCommand::FetchState, &mut app.status);
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::StateApplied(frame) => {
                    self.store.apply_frame(frame, FrameOrigin::Response);
                }
                UiEvent::HostPush(frame) => {
                    self.store.apply_frame(frame, FrameOrigin::Push);
                }
                UiEvent::Error(err) => {
                    self.status = format!("{} error: {}", err_label(err.context()), err.message());
                }
            }
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn show_loading_screen(&self, ui: &mut egui::Ui) {
        ui.add_space(ui.available_height() * 0.35);
        ui.vertical_centered(|ui| {
            ui.add(egui::Spinner::new().size(28.0));
            ui.add_space(8.0);
            ui.label("Loading counter state...");
        });
    }

    fn show_counter_screen(&mut self, ui: &mut egui::Ui) {
        let Some(state) = self.store.state().cloned() else {
            return;
        };
        let view = ViewModel::from_state(&state);

        let mut clicked = None;
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new(&view.heading).strong().size(26.0));
            ui.add_space(8.0);
            ui.label(egui::RichText::new(&view.counter_text).size(32.0));

            if let Some(note) = view.note {
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    ui.set_max_width(420.0);
                    ui.label(egui::RichText::new(note).weak());
                });
            }

            ui.add_space(14.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(
                        view.controls.decrement_enabled,
                        egui::Button::new("Decrement"),
                    )
                    .clicked()
                {
                    clicked = Some(BackendCommand::DecrementCounter);
                }
                if ui
                    .add_enabled(
                        view.controls.increment_enabled,
                        egui::Button::new("Increment"),
                    )
                    .clicked()
                {
                    clicked = Some(BackendCommand::IncrementCounter);
                }
                if ui
                    .add_enabled(view.controls.reset_enabled, egui::Button::new("Reset"))
                    .clicked()
                {
                    clicked = Some(BackendCommand::ResetCounter);
                }
            });
        });

        if let Some(cmd) = clicked {
            self.dispatch(cmd);
        }
    }
}

impl eframe::App for CounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.store.state().is_some() {
                self.show_counter_screen(ui);
            } else {
                self.show_loading_screen(ui);
            }
        });

        ctx.request_repaint_after(IDLE_REPAINT);
    }
}
