// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the application structure that implements the
//! eframe::App trait. It owns the gallery state, forwards user actions to
//! it, drives its timers from the frame loop and handles data file loading.

use crate::config::{Features, GalleryConfig};
use crate::models::{gallery::Gallery, project::ProjectRecord};
use crate::ui::{cards, pagination_bar, toolbar};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How often to check on thumbnails still decoding.
const THUMBNAIL_POLL: Duration = Duration::from_millis(100);

/// Result of a background data file import.
struct LoadedProjects {
    path: PathBuf,
    projects: Vec<ProjectRecord>,
}

/// Main application state.
pub struct FolioApp {
    config: GalleryConfig,

    /// Features from the command line or config file, restored when the
    /// minimal layout is switched off
    configured_features: Features,

    /// Directory relative media paths resolve against
    base_dir: Option<PathBuf>,

    gallery: Gallery,

    thumbnails: cards::ThumbnailCache,

    /// Receiver for background data loading
    data_loader: Option<Receiver<Result<LoadedProjects, String>>>,

    /// Loading state message
    loading_message: Option<String>,
}

impl FolioApp {
    /// Create the application with an already loaded project list.
    pub fn new(config: GalleryConfig, projects: Vec<ProjectRecord>, data_path: Option<&Path>) -> Self {
        let base_dir = data_path.and_then(Path::parent).map(Path::to_path_buf);

        Self {
            gallery: Gallery::new(projects.into(), &config, Instant::now()),
            thumbnails: cards::ThumbnailCache::new(base_dir.clone()),
            configured_features: config.features,
            config,
            base_dir,
            data_loader: None,
            loading_message: None,
        }
    }

    /// Replace the gallery with a fresh one over `projects`.
    ///
    /// Dropping the old gallery cancels its pending transitions.
    fn mount(&mut self, projects: Vec<ProjectRecord>, base_dir: Option<PathBuf>) {
        if base_dir != self.base_dir {
            self.thumbnails = cards::ThumbnailCache::new(base_dir.clone());
            self.base_dir = base_dir;
        }
        self.remount(projects.into());
    }

    fn remount(&mut self, source: Arc<[ProjectRecord]>) {
        self.gallery = Gallery::new(source, &self.config, Instant::now());
    }

    /// Switch between the minimal preset and the configured features.
    fn set_minimal_layout(&mut self, minimal: bool) {
        let features = if minimal {
            Features::minimal()
        } else {
            self.configured_features
        };
        self.set_features(features);
    }

    fn set_features(&mut self, features: Features) {
        if self.config.features != features {
            log::info!("Switching gallery features to {:?}", features);
            self.config.features = features;
            self.remount(Arc::clone(self.gallery.source()));
        }
    }

    /// Import a project data file in the background.
    fn open_data_file(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.data_loader = Some(receiver);
        self.loading_message = Some(format!("Loading {}...", path.display()));

        std::thread::spawn(move || {
            let result = crate::io::serialization::import_projects(&path)
                .map(|projects| LoadedProjects { path, projects })
                .map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);
        });
    }

    fn load_bundled_data(&mut self) {
        match crate::io::serialization::bundled_projects() {
            Ok(projects) => self.mount(projects, None),
            Err(e) => log::error!("Failed to load bundled projects: {:#}", e),
        }
    }

    fn check_data_loader(&mut self) {
        let Some(ref receiver) = self.data_loader else {
            return;
        };
        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                log::error!("Project data loader stopped without a result");
                self.data_loader = None;
                self.loading_message = None;
                return;
            }
        };

        self.data_loader = None;
        self.loading_message = None;

        match result {
            Ok(loaded) => {
                log::info!("Loaded {} projects from {}", loaded.projects.len(), loaded.path.display());
                let base_dir = loaded.path.parent().map(Path::to_path_buf);
                self.mount(loaded.projects, base_dir);
            }
            Err(e) => {
                // Keep showing the previous gallery
                log::error!("Failed to load project data: {}", e);
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Data...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Project data", &["json", "yaml", "yml"])
                        .pick_file()
                    {
                        self.open_data_file(path);
                    }
                    ui.close_menu();
                }
                if ui.button("Load Bundled Projects").clicked() {
                    self.load_bundled_data();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let mut minimal = self.config.features == Features::minimal();
                if ui.checkbox(&mut minimal, "Minimal Layout").changed() {
                    self.set_minimal_layout(minimal);
                    ui.close_menu();
                }
            });
        });
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_data_loader();

        let now = Instant::now();
        self.gallery.tick(now);
        self.thumbnails.poll(ctx);

        // Wake up for the next loading/scroll deadline
        if let Some(deadline) = self.gallery.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
        if self.loading_message.is_some() {
            ctx.request_repaint();
        } else if self.thumbnails.is_busy() {
            ctx.request_repaint_after(THUMBNAIL_POLL);
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.menu_bar(ctx, ui);
        });

        // Keyboard paging
        if !ctx.wants_keyboard_input() {
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
                self.gallery.click_previous(now);
            }
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
                self.gallery.click_next(now);
            }
        }

        let mut toolbar_action = toolbar::ToolbarAction::None;
        let mut pagination_action = pagination_bar::PaginationAction::None;

        egui::CentralPanel::default().show(ctx, |ui| {
            // Show loading overlay while a data file is being read
            if let Some(ref message) = self.loading_message {
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.spinner();
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new(message)
                                .size(16.0)
                                .color(egui::Color32::from_gray(200)),
                        );
                    });
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    toolbar_action =
                        toolbar::show(ui, &self.config.title, self.gallery.can_shuffle());
                    ui.label(
                        egui::RichText::new(format!("{} projects", self.gallery.items().len()))
                            .weak(),
                    );
                    ui.add_space(24.0);

                    if self.gallery.is_loading() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(160.0);
                            ui.add(egui::Spinner::new().size(64.0));
                            ui.add_space(160.0);
                        });
                    } else {
                        cards::show(ui, self.gallery.visible_cards(), &mut self.thumbnails);
                    }

                    ui.add_space(32.0);
                    let (action, response) = ui
                        .vertical_centered(|ui| pagination_bar::show(ui, &self.gallery))
                        .inner;
                    pagination_action = action;

                    if self.gallery.take_scroll_request() {
                        response.scroll_to_me(Some(egui::Align::Center));
                    }
                });
        });

        match toolbar_action {
            toolbar::ToolbarAction::Shuffle => self.gallery.click_shuffle(now),
            toolbar::ToolbarAction::None => {}
        }

        match pagination_action {
            pagination_bar::PaginationAction::Previous => self.gallery.click_previous(now),
            pagination_bar::PaginationAction::Next => self.gallery.click_next(now),
            pagination_bar::PaginationAction::Page(page) => self.gallery.click_page(page, now),
            pagination_bar::PaginationAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(features: Features) -> FolioApp {
        let config = GalleryConfig {
            features,
            ..Default::default()
        };
        let projects = crate::io::serialization::bundled_projects().unwrap();
        FolioApp::new(config, projects, None)
    }

    #[test]
    fn test_minimal_toggle_restores_configured_features() {
        let custom = Features {
            enable_shuffle: true,
            enable_loading_animation: false,
            enable_auto_scroll: false,
            enable_page_buttons: true,
        };
        let mut app = app_with(custom);

        app.set_minimal_layout(true);
        assert_eq!(app.config.features, Features::minimal());
        assert_eq!(app.gallery.features(), Features::minimal());

        app.set_minimal_layout(false);
        assert_eq!(app.config.features, custom);
        assert_eq!(app.gallery.features(), custom);
    }

    #[test]
    fn test_dead_data_loader_clears_loading_state() {
        let mut app = app_with(Features::minimal());
        let (sender, receiver) = channel::<Result<LoadedProjects, String>>();
        app.data_loader = Some(receiver);
        app.loading_message = Some("Loading...".to_string());
        drop(sender);

        app.check_data_loader();
        assert!(app.data_loader.is_none());
        assert!(app.loading_message.is_none());
        assert_eq!(app.gallery.items().len(), 23);
    }

    #[test]
    fn test_pending_data_loader_keeps_waiting() {
        let mut app = app_with(Features::minimal());
        let (_sender, receiver) = channel::<Result<LoadedProjects, String>>();
        app.data_loader = Some(receiver);
        app.loading_message = Some("Loading...".to_string());

        app.check_data_loader();
        assert!(app.data_loader.is_some());
        assert!(app.loading_message.is_some());
    }
}
