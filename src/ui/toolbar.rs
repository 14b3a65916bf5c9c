// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Gallery header.
//!
//! Shows the gallery title and, when enabled, the "Randomize Projects"
//! button.

/// Result of header interaction.
pub enum ToolbarAction {
    None,
    Shuffle,
}

/// Display the header row.
pub fn show(ui: &mut egui::Ui, title: &str, can_shuffle: bool) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.heading(
            egui::RichText::new(title)
                .size(30.0)
                .strong()
                .color(egui::Color32::from_rgb(45, 212, 191)),
        );

        if can_shuffle {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button = egui::Button::new(
                    egui::RichText::new("🔀 Randomize Projects").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(13, 148, 136))
                .rounding(8.0)
                .min_size(egui::vec2(0.0, 36.0));

                if ui.add(button).clicked() {
                    action = ToolbarAction::Shuffle;
                }
            });
        }
    });

    action
}
