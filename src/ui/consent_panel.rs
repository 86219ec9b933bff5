//! Static privacy policy and consent page.
//!
//! Purely presentational: no state, no network calls, the visitor's choice
//! is not persisted.

use eframe::egui::{RichText, ScrollArea, Ui};

use super::app::Screen;
use super::components::{back_button, panel_header, primary_button_with_icon, styled_button};

/// Show the consent page.
///
/// Returns `Some(screen)` if navigation is requested: declining returns to
/// the home screen, accepting continues to the login screen.
pub fn show(ui: &mut Ui) -> Option<Screen> {
    let mut next_screen = None;

    if back_button(ui) {
        next_screen = Some(Screen::Home);
    }

    panel_header(ui, "Politique de confidentialité");

    ScrollArea::vertical().id_salt("consent_scroll").show(ui, |ui| {
        ui.label(
            "Avant d'accéder au portail de gestion des ressources humaines, \
             veuillez prendre connaissance de la manière dont vos données \
             personnelles sont traitées.",
        );

        ui.add_space(15.0);

        section(
            ui,
            "Collecte des données",
            "Dans le cadre de la gestion administrative du personnel, nous \
             collectons les informations strictement nécessaires au suivi des \
             rôles et affectations des employés : identifiant de l'employé, \
             rôles attribués et dates de modification. Aucune donnée n'est \
             collectée à d'autres fins.",
        );

        section(
            ui,
            "Utilisation des données",
            "Les données collectées sont utilisées exclusivement par le \
             service des ressources humaines pour l'attribution et le suivi \
             des rôles au sein de l'organisation. Elles ne sont ni cédées ni \
             transmises à des tiers, et ne font l'objet d'aucun traitement \
             automatisé de profilage.",
        );

        section(
            ui,
            "Vos droits",
            "Conformément à la réglementation en vigueur, vous disposez d'un \
             droit d'accès, de rectification et de suppression des données \
             vous concernant. Pour exercer ces droits, adressez-vous au \
             service des ressources humaines de votre établissement.",
        );

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if styled_button(ui, "Refuser").clicked() {
                next_screen = Some(Screen::Home);
            }

            ui.add_space(10.0);

            if primary_button_with_icon(ui, "", "Accepter").clicked() {
                next_screen = Some(Screen::Login);
            }
        });
    });

    next_screen
}

fn section(ui: &mut Ui, title: &str, body: &str) {
    ui.group(|ui| {
        ui.set_width(ui.available_width().min(700.0));
        ui.label(RichText::new(title).strong().size(16.0));
        ui.add_space(5.0);
        ui.label(body);
    });
    ui.add_space(10.0);
}
