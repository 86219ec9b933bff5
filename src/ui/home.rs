//! Home screen with navigation cards and the recent activity log.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{IDENTIFICATION_BADGE, SHIELD_CHECK};

use super::app::{App, LogLevel, Screen};
use super::components::nav_card;

/// Show the home screen.
///
/// Returns `Some(screen)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Screen> {
    let mut next_screen = None;

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);

        // Header
        ui.label(RichText::new("Administration RH").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(
            RichText::new("Gestion des rôles attribués aux employés")
                .size(14.0)
                .weak(),
        );

        ui.add_space(40.0);

        // Navigation cards row
        let available = ui.available_width();
        let spacing = 30.0;
        let card_width = ((available - spacing) / 2.0).clamp(160.0, 260.0);
        let card_size = egui::vec2(card_width, card_width * 0.75);
        let total_width = card_width * 2.0 + spacing;
        let start_offset = ((available - total_width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(start_offset);

            if nav_card(
                ui,
                "Rôles des employés",
                "Attribuer et gérer les rôles",
                IDENTIFICATION_BADGE,
                card_size,
            )
            .clicked()
            {
                next_screen = Some(Screen::Roles);
            }

            ui.add_space(spacing);

            if nav_card(
                ui,
                "Politique de confidentialité",
                "Consentement et vie privée",
                SHIELD_CHECK,
                card_size,
            )
            .clicked()
            {
                next_screen = Some(Screen::Consent);
            }
        });

        ui.add_space(40.0);
    });

    // Recent activity
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::symmetric(10, 0))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Activité récente").strong());
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
                if app.log_messages.is_empty() {
                    ui.label(RichText::new("Aucune activité récente").weak());
                } else {
                    for entry in app.log_messages.iter().rev().take(10) {
                        let color = match entry.level {
                            LogLevel::Info => Color32::GRAY,
                            LogLevel::Success => Color32::from_rgb(100, 200, 100),
                            LogLevel::Error => Color32::from_rgb(230, 100, 100),
                        };

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                    .small()
                                    .color(Color32::DARK_GRAY),
                            );
                            ui.label(RichText::new(&entry.message).color(color));
                        });
                    }
                }
            });
        });

    next_screen
}
