//! Frontend module for egui UI
//!
//! A thin shell around [`Workbench`]: the left panel holds the submission
//! form, the central panel shows the session summary, the `<<` / `>>`
//! navigation and the trellis canvas. Engine failures and rejected input are
//! shown in a modal window that blocks the rest of the UI until dismissed.
//!
//! # Submodules
//!
//! - `form` - Submission form panel
//! - `canvas` - egui painter adapter for draw instructions

pub mod canvas;
mod form;

use crate::app::{AppAction, Workbench};
use crate::config::{AppConfig, LayoutConfig};
use crate::input::DecodeForm;
use crate::session::Session;
use crate::trellis::{layout_visible, required_canvas_width};
use crate::types::bits_to_string;
use canvas::{path_color, EguiCanvas};
use std::time::Duration;

/// Main application state for the trellis viewer
pub struct TrellisApp {
    workbench: Workbench,
    form: DecodeForm,
    layout: LayoutConfig,
}

impl TrellisApp {
    pub fn new(workbench: Workbench, config: &AppConfig) -> Self {
        let defaults = &config.defaults;
        Self {
            workbench,
            form: DecodeForm::new(
                defaults.observed.clone(),
                defaults.generators.clone(),
                defaults.probability.clone(),
            ),
            layout: config.layout.clone(),
        }
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        // Arrow keys belong to the text fields while one is focused
        if ctx.memory(|m| m.focused().is_some()) || self.workbench.last_error().is_some() {
            return;
        }
        let (forward, back) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowLeft),
            )
        });
        if forward {
            self.workbench.handle_action(AppAction::Advance);
        }
        if back {
            self.workbench.handle_action(AppAction::Retreat);
        }
    }

    fn show_error_modal(&mut self, ctx: &egui::Context) {
        let Some(error) = self.workbench.last_error() else {
            return;
        };
        let title = error.title();
        let message = error.to_string();

        let mut dismissed = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.workbench.handle_action(AppAction::DismissError);
        }
    }

    fn show_session(&mut self, ui: &mut egui::Ui) {
        let Some(session) = self.workbench.session() else {
            ui.centered_and_justified(|ui| {
                ui.label("Submit a sequence to see candidate paths.");
            });
            return;
        };

        show_summary(ui, session);
        ui.separator();

        let mut action = None;
        ui.horizontal(|ui| {
            let reveal = session.reveal();
            if ui
                .add_enabled(reveal.can_retreat(), egui::Button::new("<<"))
                .clicked()
            {
                action = Some(AppAction::Retreat);
            }
            if ui
                .add_enabled(reveal.can_advance(), egui::Button::new(">>"))
                .clicked()
            {
                action = Some(AppAction::Advance);
            }
            ui.label(format!(
                "{} of {} candidate paths",
                reveal.revealed_count(),
                reveal.path_count()
            ));
        });
        ui.separator();

        paint_trellis(ui, session, &self.layout);

        if let Some(action) = action {
            self.workbench.handle_action(action);
        }
    }
}

fn show_summary(ui: &mut egui::Ui, session: &Session) {
    egui::Grid::new("session_summary")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            ui.label("Encoded");
            ui.monospace(bits_to_string(session.encoded()));
            ui.end_row();
            ui.label("Observed");
            ui.monospace(bits_to_string(session.observed()));
            ui.end_row();
            ui.label("Decoded");
            ui.monospace(bits_to_string(session.decoded()));
            ui.end_row();
            ui.label("Memory length");
            ui.monospace(session.memory_length().to_string());
            ui.end_row();
        });
}

fn paint_trellis(ui: &mut egui::Ui, session: &Session, layout: &LayoutConfig) {
    let geometry = layout.geometry();
    let width = required_canvas_width(session.paths(), layout.step_length, layout.margin);
    let label_color = ui.visuals().text_color();

    egui::ScrollArea::both().show(ui, |ui| {
        let (response, painter) = ui.allocate_painter(
            egui::vec2(width as f32, layout.canvas_height as f32),
            egui::Sense::hover(),
        );
        let origin = response.rect.min + egui::vec2(layout.margin as f32 / 2.0, 0.0);

        for (rank, instructions) in layout_visible(session, &geometry).iter().enumerate() {
            EguiCanvas::new(&painter, origin, path_color(rank), label_color).paint(instructions);
        }
    });
}

impl eframe::App for TrellisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let had_messages = self.workbench.process_engine_messages();
        self.handle_keyboard_shortcuts(ctx);

        if had_messages {
            ctx.request_repaint();
        } else if self.workbench.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        let modal_open = self.workbench.last_error().is_some();

        egui::SidePanel::left("form_panel")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal_open, |ui| {
                    let pending = self.workbench.is_pending();
                    if let Some(action) = form::show(ui, &mut self.form, pending) {
                        self.workbench.handle_action(action);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| self.show_session(ui));
        });

        self.show_error_modal(ctx);
    }
}

impl Drop for TrellisApp {
    fn drop(&mut self) {
        self.workbench.shutdown();
    }
}
