// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Gallery view state.
//!
//! Owns the working project list, the current page and the cosmetic
//! loading flag. User actions map one-to-one onto the `click_*` methods;
//! delayed effects are driven by [`Gallery::tick`] from the frame loop.

use super::project::{CardView, ProjectRecord};
use crate::config::{Features, GalleryConfig};
use crate::util::pagination::Paginator;
use crate::util::sequencer::{Sequencer, Transition};
use crate::util::shuffle::shuffled;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Instant;

/// Work to apply once the loading delay has elapsed.
#[derive(Debug)]
enum PendingChange {
    /// First display after mount.
    Mount,
    /// The page already changed; only the spinner is outstanding.
    Navigate,
    /// A shuffled list waiting to be installed.
    Shuffle(Arc<[ProjectRecord]>),
}

/// State behind one gallery view.
pub struct Gallery {
    /// Canonical list, never reordered.
    source: Arc<[ProjectRecord]>,
    /// Working list: the source or a shuffled copy of it.
    items: Arc<[ProjectRecord]>,
    /// Current page, 1-indexed.
    page: usize,
    is_loading: bool,
    scroll_requested: bool,
    features: Features,
    paginator: Paginator,
    sequencer: Sequencer<PendingChange>,
    rng: StdRng,
}

impl Gallery {
    /// Mount a gallery over `source`.
    pub fn new(source: Arc<[ProjectRecord]>, config: &GalleryConfig, now: Instant) -> Self {
        let mut gallery = Self {
            items: Arc::clone(&source),
            source,
            page: 1,
            is_loading: false,
            scroll_requested: false,
            features: config.features,
            paginator: Paginator::new(config.page_size),
            sequencer: Sequencer::new(config.loading_delay(), config.scroll_delay()),
            rng: StdRng::from_rng(&mut rand::rng()),
        };

        if gallery.features.enable_loading_animation {
            gallery.is_loading = true;
            gallery.sequencer.schedule(PendingChange::Mount, false, now);
        }

        log::info!(
            "Gallery mounted with {} projects ({} pages of {})",
            gallery.items.len(),
            gallery.total_pages(),
            gallery.paginator.page_size()
        );
        gallery
    }

    /// Use a deterministic shuffle sequence.
    #[cfg(test)]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The canonical list, shareable with a replacement gallery.
    pub fn source(&self) -> &Arc<[ProjectRecord]> {
        &self.source
    }

    pub fn items(&self) -> &[ProjectRecord] {
        &self.items
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn features(&self) -> Features {
        self.features
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.items.len())
    }

    /// Records on the current page.
    pub fn visible(&self) -> &[ProjectRecord] {
        self.paginator.page_slice(&self.items, self.page)
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = CardView<'_>> {
        self.visible().iter().map(ProjectRecord::card)
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        self.paginator.page_numbers(self.total_pages())
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_loading && self.total_pages() > 0 && self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_loading && self.page < self.total_pages()
    }

    /// Whether numbered page buttons accept clicks.
    pub fn can_pick_page(&self) -> bool {
        !self.is_loading && self.total_pages() > 0
    }

    pub fn can_shuffle(&self) -> bool {
        self.features.enable_shuffle
    }

    pub fn click_previous(&mut self, now: Instant) {
        let target = self.paginator.previous(self.page);
        self.navigate(target, now);
    }

    pub fn click_next(&mut self, now: Instant) {
        let target = self.paginator.next(self.page, self.total_pages());
        self.navigate(target, now);
    }

    /// Jump to page `page`, clamped to the valid range.
    pub fn click_page(&mut self, page: usize, now: Instant) {
        let target = self.paginator.go_to_page(page, self.total_pages());
        self.navigate(target, now);
    }

    /// Replace the working list with a fresh permutation of the source.
    pub fn click_shuffle(&mut self, now: Instant) {
        if !self.features.enable_shuffle {
            log::debug!("Shuffle is disabled for this gallery");
            return;
        }

        let items: Arc<[ProjectRecord]> = shuffled(&self.source, &mut self.rng).into();
        log::info!("Shuffling {} projects", items.len());
        self.begin(PendingChange::Shuffle(items), now);
    }

    /// Advance delayed transitions up to `now`.
    pub fn tick(&mut self, now: Instant) {
        while let Some(transition) = self.sequencer.poll(now) {
            match transition {
                Transition::Loaded(change) => self.apply(change),
                Transition::ScrollRequested => self.scroll_requested = true,
            }
        }
    }

    /// When the next delayed transition is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.sequencer.next_deadline()
    }

    /// Returns `true` once per requested scroll to the pagination bar.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }

    /// Cancel anything in flight before the view goes away.
    pub fn teardown(&mut self) {
        self.sequencer.cancel();
        self.is_loading = false;
        self.scroll_requested = false;
    }

    fn navigate(&mut self, target: usize, now: Instant) {
        if self.is_loading {
            log::debug!("Ignoring navigation to page {} while loading", target);
            return;
        }
        if target == self.page {
            return;
        }

        log::info!("Page {} -> {} of {}", self.page, target, self.total_pages());
        self.page = target;
        self.begin(PendingChange::Navigate, now);
    }

    fn begin(&mut self, change: PendingChange, now: Instant) {
        if self.features.enable_loading_animation {
            self.is_loading = true;
            self.sequencer
                .schedule(change, self.features.enable_auto_scroll, now);
        } else {
            self.apply(change);
            if self.features.enable_auto_scroll {
                self.scroll_requested = true;
            }
        }
    }

    fn apply(&mut self, change: PendingChange) {
        match change {
            PendingChange::Shuffle(items) => {
                self.items = items;
                self.page = 1;
                log::info!("Installed shuffled projects");
            }
            PendingChange::Navigate | PendingChange::Mount => {}
        }
        self.is_loading = false;
    }
}

impl Drop for Gallery {
    fn drop(&mut self) {
        self.teardown();
    }
}
