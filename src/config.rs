// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Gallery configuration.
//!
//! Settings come from an optional YAML or JSON file; anything missing falls
//! back to the polished defaults.

use crate::util::pagination::PAGE_SIZE;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Optional behaviours of the gallery view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Offer the "Randomize Projects" action.
    pub enable_shuffle: bool,
    /// Show a spinner for a short delay around page changes and shuffles.
    pub enable_loading_animation: bool,
    /// Scroll the pagination bar into view once content has settled.
    pub enable_auto_scroll: bool,
    /// Numbered page buttons instead of a "Page X of Y" label.
    pub enable_page_buttons: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self::polished()
    }
}

impl Features {
    pub fn polished() -> Self {
        Self {
            enable_shuffle: true,
            enable_loading_animation: true,
            enable_auto_scroll: true,
            enable_page_buttons: true,
        }
    }

    /// Plain Previous / Next pagination with nothing else.
    pub fn minimal() -> Self {
        Self {
            enable_shuffle: false,
            enable_loading_animation: false,
            enable_auto_scroll: false,
            enable_page_buttons: false,
        }
    }
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub title: String,
    pub page_size: usize,
    pub loading_delay_ms: u64,
    pub scroll_delay_ms: u64,
    pub features: Features,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Pentagram Projects".to_string(),
            page_size: PAGE_SIZE,
            loading_delay_ms: 600,
            scroll_delay_ms: 100,
            features: Features::default(),
        }
    }
}

impl GalleryConfig {
    /// Reject settings the gallery cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be at least 1");
        }
        Ok(())
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_polished() {
        let config = GalleryConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.features, Features::polished());
        assert_eq!(config.loading_delay(), Duration::from_millis(600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: GalleryConfig = serde_yaml::from_str(
            "page_size: 6\nfeatures:\n  enable_shuffle: false\n",
        )
        .unwrap();

        assert_eq!(config.page_size, 6);
        assert!(!config.features.enable_shuffle);
        assert!(config.features.enable_loading_animation);
        assert_eq!(config.scroll_delay_ms, 100);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = GalleryConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
