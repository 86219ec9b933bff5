//! Employee role list panel with search, pagination, and row actions.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, CARET_LEFT, CARET_RIGHT, EYE, PENCIL, PLUS, TRASH};

use super::app::{App, Screen};
use super::components::{
    action_button, back_button, danger_action_button, panel_header, primary_button_with_icon,
    styled_button_with_icon,
};

/// Show the role list panel.
///
/// Returns `Some(screen)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Screen> {
    let mut next_screen = None;

    if back_button(ui) {
        next_screen = Some(Screen::Home);
    }

    panel_header(ui, "Rôles des employés");

    // Toolbar: create and refresh
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Nouveau rôle").clicked() {
            next_screen = Some(Screen::RoleCreate);
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Actualiser").clicked() {
            app.load_roles();
        }
    });

    ui.add_space(10.0);

    // Search box; every edit reloads the list server-side
    ui.horizontal(|ui| {
        ui.label("Recherche:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.search)
                    .desired_width(220.0)
                    .hint_text("Employé ou rôle..."),
            )
            .changed()
        {
            app.load_roles();
        }
    });

    ui.add_space(15.0);

    show_table(app, ui, &mut next_screen);

    ui.add_space(10.0);

    show_pagination(app, ui);

    next_screen
}

fn show_table(app: &mut App, ui: &mut Ui, next_screen: &mut Option<Screen>) {
    if let Some(meta) = &app.meta {
        ui.label(format!(
            "{} rôle(s) — page {} sur {}",
            app.roles.len(),
            meta.current_page,
            meta.last_page
        ));
    } else if app.is_loading {
        ui.label("Chargement...");
    }

    ui.add_space(10.0);

    ScrollArea::vertical().id_salt("roles_scroll").show(ui, |ui| {
        ui.add_space(4.0);
        egui::Grid::new("roles_grid")
            .num_columns(5)
            .striped(true)
            .min_col_width(80.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Id");
                ui.strong("Employé");
                ui.strong("Rôle");
                ui.strong("Créé le");
                ui.strong("Actions");
                ui.end_row();

                // Data rows, in server order
                for role in &app.roles {
                    ui.label(role.id.to_string());
                    ui.label(role.employee_id.to_string());
                    ui.label(role.role_id.to_string());
                    ui.label(
                        role.created_at
                            .map(|d| d.format("%Y-%m-%d").to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    );

                    ui.horizontal(|ui| {
                        ui.add_space(8.0);
                        if action_button(ui, EYE, "Voir").clicked() {
                            *next_screen = Some(Screen::RoleShow(role.id));
                        }
                        ui.add_space(4.0);
                        if action_button(ui, PENCIL, "Modifier").clicked() {
                            *next_screen = Some(Screen::RoleEdit(role.id));
                        }
                        ui.add_space(4.0);
                        if danger_action_button(ui, TRASH, "Supprimer").clicked() {
                            app.delete_target = Some(role.id);
                            app.show_delete_confirm = true;
                        }
                    });

                    ui.end_row();
                }
            });

        if !app.is_loading && app.roles.is_empty() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Aucun rôle employé").weak());
            });
        }
    });
}

fn show_pagination(app: &mut App, ui: &mut Ui) {
    let (has_prev, has_next) = match &app.meta {
        Some(meta) => (meta.has_prev(app.page), meta.has_next(app.page)),
        None => (false, false),
    };

    ui.horizontal(|ui| {
        if ui
            .add_enabled(
                has_prev,
                egui::Button::new(format!("{CARET_LEFT} Précédent")),
            )
            .clicked()
        {
            app.page -= 1;
            app.load_roles();
        }

        ui.add_space(10.0);

        if ui
            .add_enabled(has_next, egui::Button::new(format!("Suivant {CARET_RIGHT}")))
            .clicked()
        {
            app.page += 1;
            app.load_roles();
        }
    });
}
