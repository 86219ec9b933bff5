//! Login screen placeholder.

use eframe::egui::{RichText, Ui};

use super::app::Screen;
use super::components::{back_button, panel_header};

/// Show the login screen.
///
/// Returns `Some(screen)` if navigation is requested.
pub fn show(ui: &mut Ui) -> Option<Screen> {
    let mut next_screen = None;

    if back_button(ui) {
        next_screen = Some(Screen::Home);
    }

    panel_header(ui, "Connexion");

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("Bientôt disponible").size(18.0).weak());
        ui.add_space(10.0);
        ui.label("L'authentification est assurée par le portail RH central.");
    });

    next_screen
}
