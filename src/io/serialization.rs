// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project data and configuration file loading.
//!
//! Both file kinds may be YAML or JSON; the format is picked from the file
//! extension.

use crate::config::GalleryConfig;
use crate::models::project::ProjectRecord;
use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Project list compiled into the binary, used when no data file is given.
const BUNDLED_PROJECTS: &str = include_str!("../../data/pentagram-data.json");

/// Parse the bundled project list.
pub fn bundled_projects() -> Result<Vec<ProjectRecord>> {
    serde_json::from_str(BUNDLED_PROJECTS).context("Bundled project data is malformed")
}

/// Import a project list from a YAML or JSON file.
pub fn import_projects(path: &Path) -> Result<Vec<ProjectRecord>> {
    let projects: Vec<ProjectRecord> = import_by_extension(path)?;
    log::info!("Imported {} projects from {}", projects.len(), path.display());
    Ok(projects)
}

/// Load and validate a gallery configuration file.
pub fn import_config(path: &Path) -> Result<GalleryConfig> {
    let config: GalleryConfig = import_by_extension(path)?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    Ok(config)
}

fn import_by_extension<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let extension = path.extension().and_then(|s| s.to_str());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let data = match extension {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse YAML in {}", path.display()))?,
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON in {}", path.display()))?,
        _ => bail!("Unsupported file extension: {:?}", extension),
    };
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_bundled_projects_parse() {
        let projects = bundled_projects().unwrap();
        assert_eq!(projects.len(), 23);
        assert!(projects.iter().all(|p| !p.title.is_empty()));
    }

    #[test]
    fn test_import_json_projects() {
        let file = write_file(
            ".json",
            r#"[
                {"title": "A", "description": "first", "media_url": ["a.png"], "project_page_url": "https://a"},
                {"title": "B", "description": "second", "project_page_url": "https://b"}
            ]"#,
        );

        let projects = import_projects(file.path()).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].cover_image(), Some("a.png"));
        assert_eq!(projects[1].cover_image(), None);
    }

    #[test]
    fn test_import_yaml_projects() {
        let file = write_file(
            ".yaml",
            "- title: A\n  description: first\n  media_url: [a.png]\n  project_page_url: https://a\n",
        );

        let projects = import_projects(file.path()).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "A");
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_file(".txt", "[]");
        assert!(import_projects(file.path()).is_err());
    }

    #[test]
    fn test_import_config_validates() {
        let good = write_file(".yml", "title: Work\npage_size: 4\n");
        let config = import_config(good.path()).unwrap();
        assert_eq!(config.title, "Work");
        assert_eq!(config.page_size, 4);

        let bad = write_file(".json", r#"{"page_size": 0}"#);
        assert!(import_config(bad.path()).is_err());
    }
}
