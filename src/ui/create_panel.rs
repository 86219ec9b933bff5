//! Role assignment creation form.

use eframe::egui::{self, Ui};
use egui_phosphor::regular::FLOPPY_DISK;

use super::app::{App, Screen};
use super::components::{back_button, panel_header, primary_button_with_icon, styled_button};

/// Show the creation form.
///
/// Returns `Some(screen)` if navigation is requested. On submit the draft is
/// parsed first; the list screen is only reached once the server confirms
/// the creation.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Screen> {
    let mut next_screen = None;

    if back_button(ui) {
        next_screen = Some(Screen::Roles);
    }

    panel_header(ui, "Nouveau rôle employé");

    egui::Grid::new("role_create_grid")
        .num_columns(2)
        .spacing([20.0, 10.0])
        .show(ui, |ui| {
            ui.label("Identifiant employé:");
            ui.add(egui::TextEdit::singleline(&mut app.draft.employee_id).desired_width(120.0));
            ui.end_row();

            ui.label("Identifiant rôle:");
            ui.add(egui::TextEdit::singleline(&mut app.draft.role_id).desired_width(120.0));
            ui.end_row();
        });

    ui.add_space(20.0);

    ui.horizontal(|ui| {
        if styled_button(ui, "Annuler").clicked() {
            next_screen = Some(Screen::Roles);
        }

        ui.add_space(10.0);

        if primary_button_with_icon(ui, FLOPPY_DISK, "Enregistrer").clicked() {
            submit(app);
        }
    });

    next_screen
}

fn submit(app: &mut App) {
    match app.draft.parse() {
        Ok(data) => app.create_role(data),
        Err(e) => app.error_message = Some(e.to_string()),
    }
}
