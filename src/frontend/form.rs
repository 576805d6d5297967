//! Submission form panel

use crate::app::AppAction;
use crate::input::DecodeForm;
use egui::Ui;

/// Render the form. Returns a submit action when Start is clicked.
pub fn show(ui: &mut Ui, form: &mut DecodeForm, pending: bool) -> Option<AppAction> {
    ui.label("Binary input,\nonly '0' and '1' are accepted.");
    ui.text_edit_singleline(&mut form.observed);
    ui.separator();

    ui.label("Generators,\nseparated by commas.");
    ui.text_edit_singleline(&mut form.generators);
    ui.separator();

    ui.label("Error probability p,\nwhere 0 < p < 1.");
    ui.text_edit_singleline(&mut form.probability);
    ui.separator();

    let mut action = None;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!pending, egui::Button::new("Start"))
            .clicked()
        {
            action = Some(AppAction::Submit(form.clone()));
        }
        if pending {
            ui.spinner();
            ui.label("Decoding...");
        }
    });
    action
}
