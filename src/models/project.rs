// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project records shown in the gallery.
//!
//! Records are loaded once and never modified. Only the fields the cards
//! need are modelled; unknown fields in the data file are ignored.

use serde::{Deserialize, Serialize};

/// One project entry from the data file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Image URLs; only the first is displayed.
    #[serde(default)]
    pub media_url: Vec<String>,
    #[serde(default)]
    pub project_page_url: String,
}

impl ProjectRecord {
    /// First non-empty image URL, if the record has one.
    pub fn cover_image(&self) -> Option<&str> {
        self.media_url
            .first()
            .map(String::as_str)
            .filter(|url| !url.trim().is_empty())
    }

    /// Borrowed view with exactly the fields a card displays.
    pub fn card(&self) -> CardView<'_> {
        CardView {
            title: &self.title,
            description: &self.description,
            image: self.cover_image(),
            link: &self.project_page_url,
        }
    }
}

/// What a gallery card renders for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub image: Option<&'a str>,
    pub link: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_uses_first_image() {
        let record = ProjectRecord {
            title: "Signage".to_string(),
            description: "Wayfinding".to_string(),
            media_url: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            project_page_url: "https://example.com/signage".to_string(),
        };

        let card = record.card();
        assert_eq!(card.image, Some("a.jpg"));
        assert_eq!(card.title, "Signage");
        assert_eq!(card.link, "https://example.com/signage");
    }

    #[test]
    fn test_missing_media_is_not_fabricated() {
        let record: ProjectRecord =
            serde_json::from_str(r#"{"title": "Bare", "project_page_url": "x"}"#).unwrap();

        assert!(record.media_url.is_empty());
        assert_eq!(record.card().image, None);

        let blank: ProjectRecord =
            serde_json::from_str(r#"{"title": "Blank", "media_url": [""]}"#).unwrap();
        assert_eq!(blank.cover_image(), None);
    }
}
