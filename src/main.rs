// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Folio - A paginated project gallery
//!
//! A cross-platform desktop application that presents a fixed collection
//! of project records as pages of cards, with optional shuffling.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::FolioApp;
use clap::Parser;
use config::{Features, GalleryConfig};
use std::path::PathBuf;

/// Browse a collection of projects one page at a time
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Folio - A paginated project gallery")]
struct Args {
    /// Project data file (JSON or YAML); the bundled projects are used if omitted
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Gallery configuration file (JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Plain pagination without shuffle, spinner or auto-scroll
    #[arg(long)]
    minimal: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => io::serialization::import_config(path)?,
        None => GalleryConfig::default(),
    };
    if args.minimal {
        config.features = Features::minimal();
    }

    let projects = match args.data {
        Some(ref path) => io::serialization::import_projects(path)?,
        None => io::serialization::bundled_projects()?,
    };
    log::info!("Starting with {} projects", projects.len());

    let title = config.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([420.0, 480.0])
            .with_title(format!("Folio - {}", title)),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Folio",
        options,
        Box::new(move |_cc| Ok(Box::new(FolioApp::new(config, projects, args.data.as_deref())))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
