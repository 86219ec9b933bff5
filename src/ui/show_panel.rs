//! Read-only detail display for a single role assignment.

use eframe::egui::{self, RichText, Ui};

use super::app::{App, Screen};
use super::components::{back_button, panel_header, styled_button};

/// Show the detail screen.
///
/// Returns `Some(screen)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Screen> {
    let mut next_screen = None;

    if back_button(ui) {
        next_screen = Some(Screen::Roles);
    }

    panel_header(ui, "Détail du rôle employé");

    match &app.detail {
        None => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Chargement...");
            });
        }
        Some(role) => {
            egui::Grid::new("role_detail_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Identifiant:").strong());
                    ui.label(role.id.to_string());
                    ui.end_row();

                    ui.label(RichText::new("Identifiant employé:").strong());
                    ui.label(role.employee_id.to_string());
                    ui.end_row();

                    ui.label(RichText::new("Identifiant rôle:").strong());
                    ui.label(role.role_id.to_string());
                    ui.end_row();

                    ui.label(RichText::new("Créé le:").strong());
                    ui.label(
                        role.created_at
                            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Modifié le:").strong());
                    ui.label(
                        role.updated_at
                            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    );
                    ui.end_row();
                });

            ui.add_space(20.0);

            if styled_button(ui, "Retour à la liste").clicked() {
                next_screen = Some(Screen::Roles);
            }
        }
    }

    next_screen
}
