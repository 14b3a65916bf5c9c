// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project card grid.
//!
//! This module draws the visible page as a grid of cards (image, title,
//! description, link) and keeps the thumbnail textures those cards use.

use crate::io::media::ThumbnailLoader;
use crate::models::project::CardView;
use crate::util::layout::{card_width, columns_for_width, cover_uv, CARD_IMAGE_ASPECT};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

const GRID_SPACING: f32 = 24.0;

/// A decoded thumbnail uploaded to the GPU.
struct Thumbnail {
    texture: egui::TextureHandle,
    width: u32,
    height: u32,
}

/// Thumbnail textures keyed by media URL.
pub struct ThumbnailCache {
    loader: ThumbnailLoader,
    textures: HashMap<String, Thumbnail>,
    in_flight: HashSet<String>,
    failed: HashSet<String>,
}

impl ThumbnailCache {
    /// Relative media paths resolve against `base_dir`.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        let loader = ThumbnailLoader::new(base_dir);
        log::debug!("Thumbnail cache started with {} workers", loader.worker_count());
        Self {
            loader,
            textures: HashMap::new(),
            in_flight: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    /// Upload thumbnails decoded since the last frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        for (url, result) in self.loader.finished() {
            self.in_flight.remove(&url);
            match result {
                Ok(img) => {
                    let size = [img.width as usize, img.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &img.pixels);
                    let texture = ctx.load_texture(&url, color_image, egui::TextureOptions::LINEAR);
                    self.textures.insert(
                        url,
                        Thumbnail {
                            texture,
                            width: img.width,
                            height: img.height,
                        },
                    );
                }
                Err(e) => {
                    log::error!("Failed to load thumbnail {}: {}", url, e);
                    self.failed.insert(url);
                }
            }
        }
    }

    /// Whether any thumbnail is still decoding.
    pub fn is_busy(&self) -> bool {
        !self.in_flight.is_empty()
    }

    fn lookup(&mut self, url: &str) -> Option<&Thumbnail> {
        if !self.textures.contains_key(url)
            && !self.failed.contains(url)
            && !self.in_flight.contains(url)
            && self.loader.request(url)
        {
            self.in_flight.insert(url.to_string());
        }
        self.textures.get(url)
    }
}

/// Display the cards of the current page.
pub fn show<'a>(
    ui: &mut egui::Ui,
    cards: impl Iterator<Item = CardView<'a>>,
    thumbnails: &mut ThumbnailCache,
) {
    let cards: Vec<CardView<'a>> = cards.collect();
    if cards.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(egui::RichText::new("No projects to show").weak());
        });
        return;
    }

    let available = ui.available_width();
    let columns = columns_for_width(available);
    let width = card_width(available, columns, GRID_SPACING);

    for row in cards.chunks(columns) {
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = GRID_SPACING;
            for card in row {
                ui.allocate_ui(egui::vec2(width, 0.0), |ui| {
                    ui.set_width(width);
                    show_card(ui, card, width, thumbnails);
                });
            }
        });
        ui.add_space(GRID_SPACING);
    }
}

fn show_card(ui: &mut egui::Ui, card: &CardView<'_>, width: f32, thumbnails: &mut ThumbnailCache) {
    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_rgb(30, 41, 59))
        .rounding(12.0)
        .inner_margin(egui::Margin::same(0.0))
        .show(ui, |ui| {
            let image_size = egui::vec2(width, width / CARD_IMAGE_ASPECT);
            let thumbnail = match card.image {
                Some(url) => thumbnails.lookup(url),
                None => None,
            };

            match thumbnail {
                Some(thumb) => {
                    let ((u0, v0), (u1, v1)) = cover_uv(thumb.width, thumb.height, CARD_IMAGE_ASPECT);
                    let uv = egui::Rect::from_min_max(egui::pos2(u0, v0), egui::pos2(u1, v1));
                    let image = egui::Image::new(egui::load::SizedTexture::new(
                        thumb.texture.id(),
                        image_size,
                    ))
                    .uv(uv)
                    .fit_to_exact_size(image_size);
                    ui.add(image);
                }
                None => placeholder(ui, image_size),
            }

            egui::Frame::none()
                .inner_margin(egui::Margin::same(16.0))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(card.title)
                            .size(18.0)
                            .strong()
                            .color(egui::Color32::from_rgb(94, 234, 212)),
                    );
                    ui.label(
                        egui::RichText::new(card.description)
                            .color(egui::Color32::from_gray(200)),
                    );
                    if !card.link.is_empty() {
                        ui.add_space(6.0);
                        ui.hyperlink_to("View Project", card.link);
                    }
                });
        });
}

fn placeholder(ui: &mut egui::Ui, size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(55));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "🖼",
        egui::FontId::proportional(32.0),
        egui::Color32::from_gray(120),
    );
}
