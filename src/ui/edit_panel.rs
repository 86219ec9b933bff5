//! Role assignment edit form, pre-populated from the server.

use eframe::egui::{self, Ui};
use egui_phosphor::regular::FLOPPY_DISK;

use super::app::{App, Screen};
use super::components::{back_button, panel_header, primary_button_with_icon, styled_button};

/// Show the edit form for the role assignment `id`.
///
/// Returns `Some(screen)` if navigation is requested. The form stays put on
/// a failed save; the list screen is only reached once the server confirms
/// the update.
pub fn show(app: &mut App, ui: &mut Ui, id: i64) -> Option<Screen> {
    let mut next_screen = None;

    if back_button(ui) {
        next_screen = Some(Screen::Roles);
    }

    panel_header(ui, &format!("Modifier le rôle employé #{id}"));

    if app.edit_loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Chargement...");
        });
        return next_screen;
    }

    egui::Grid::new("role_edit_grid")
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
            submit(app, id);
        }
    });

    next_screen
}

fn submit(app: &mut App, id: i64) {
    match app.draft.parse() {
        Ok(data) => app.update_role(id, data.into()),
        Err(e) => app.error_message = Some(e.to_string()),
    }
}
