// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Previous / page / Next controls under the card grid.

use crate::models::gallery::Gallery;

/// Result of pagination bar interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    None,
    Previous,
    Next,
    Page(usize),
}

const SELECTED_FILL: egui::Color32 = egui::Color32::from_rgb(13, 148, 136);

/// Display the pagination bar.
///
/// The returned response covers the whole bar so the caller can scroll it
/// into view.
pub fn show(ui: &mut egui::Ui, gallery: &Gallery) -> (PaginationAction, egui::Response) {
    let mut action = PaginationAction::None;
    let total = gallery.total_pages();
    let current = gallery.page();

    let response = ui
        .horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 6.0;

            if ui
                .add_enabled(gallery.can_go_previous(), egui::Button::new("⏴ Previous"))
                .clicked()
            {
                action = PaginationAction::Previous;
            }

            if gallery.features().enable_page_buttons {
                let enabled = gallery.can_pick_page();
                for page in gallery.page_numbers() {
                    let selected = page == current;
                    let mut button = egui::Button::new(page.to_string())
                        .min_size(egui::vec2(32.0, 32.0))
                        .selected(selected);
                    if selected {
                        button = button.fill(SELECTED_FILL);
                    }

                    if ui.add_enabled(enabled, button).clicked() {
                        action = PaginationAction::Page(page);
                    }
                }
            } else if total == 0 {
                ui.label("No pages");
            } else {
                ui.label(format!("Page {} of {}", current, total));
            }

            if ui
                .add_enabled(gallery.can_go_next(), egui::Button::new("Next ⏵"))
                .clicked()
            {
                action = PaginationAction::Next;
            }
        })
        .response;

    (action, response)
}
