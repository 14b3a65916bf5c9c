// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Cancelable, supersedable delayed transitions.
//!
//! A transition runs through a loading phase and an optional settling
//! phase. Each scheduled transition gets a fresh generation; scheduling a
//! new one or calling [`Sequencer::cancel`] retires the previous one, and a
//! completion carrying a retired generation is ignored.
//!
//! There are no threads here. Callers feed the current [`Instant`] to
//! [`Sequencer::poll`] (once per frame in the app, explicitly in tests).

use std::time::{Duration, Instant};

/// Identifier of one scheduled transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Phase of the pending transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Spinner is showing; the payload has not been delivered yet.
    Loading,
    /// Payload delivered; waiting to ask for a scroll.
    Settling,
}

/// Something that happened when a phase completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<T> {
    /// Loading finished and the payload is ready to be applied.
    Loaded(T),
    /// Content has settled; scroll the pagination control into view.
    ScrollRequested,
}

#[derive(Debug)]
struct Pending<T> {
    generation: Generation,
    phase: Phase,
    deadline: Instant,
    payload: Option<T>,
    scroll: bool,
}

/// At most one in-flight transition, newest wins.
#[derive(Debug)]
pub struct Sequencer<T> {
    next_generation: u64,
    pending: Option<Pending<T>>,
    loading_delay: Duration,
    scroll_delay: Duration,
}

impl<T> Sequencer<T> {
    pub fn new(loading_delay: Duration, scroll_delay: Duration) -> Self {
        Self {
            next_generation: 0,
            pending: None,
            loading_delay,
            scroll_delay,
        }
    }

    /// Start a transition, superseding whatever was in flight.
    ///
    /// When `scroll` is set, a settling phase follows loading and ends
    /// with [`Transition::ScrollRequested`].
    pub fn schedule(&mut self, payload: T, scroll: bool, now: Instant) -> Generation {
        self.next_generation += 1;
        let generation = Generation(self.next_generation);

        if let Some(old) = self.pending.take() {
            log::debug!("Transition {:?} superseded by {:?}", old.generation, generation);
        }

        self.pending = Some(Pending {
            generation,
            phase: Phase::Loading,
            deadline: now + self.loading_delay,
            payload: Some(payload),
            scroll,
        });
        generation
    }

    /// Drop the pending transition. Nothing fires after this.
    pub fn cancel(&mut self) {
        if let Some(old) = self.pending.take() {
            log::debug!("Transition {:?} cancelled", old.generation);
        }
    }

    /// When the pending phase is due, if anything is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Fire the pending phase if its deadline has passed.
    ///
    /// At most one phase fires per call; loop until `None` to catch up
    /// after a long gap.
    pub fn poll(&mut self, now: Instant) -> Option<Transition<T>> {
        let pending = self.pending.as_ref()?;
        if now < pending.deadline {
            return None;
        }
        let generation = pending.generation;
        self.complete(generation)
    }

    /// Complete the current phase of `generation`.
    ///
    /// Returns `None` when `generation` is not the one in flight.
    pub fn complete(&mut self, generation: Generation) -> Option<Transition<T>> {
        let pending = self.pending.as_mut()?;
        if pending.generation != generation {
            log::debug!("Ignoring stale completion of {:?}", generation);
            return None;
        }

        match pending.phase {
            Phase::Loading => {
                let payload = pending.payload.take()?;
                if pending.scroll {
                    pending.phase = Phase::Settling;
                    pending.deadline += self.scroll_delay;
                } else {
                    self.pending = None;
                }
                Some(Transition::Loaded(payload))
            }
            Phase::Settling => {
                self.pending = None;
                Some(Transition::ScrollRequested)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOAD: Duration = Duration::from_millis(600);
    const SCROLL: Duration = Duration::from_millis(100);

    #[test]
    fn test_loading_then_scroll() {
        let start = Instant::now();
        let mut seq = Sequencer::new(LOAD, SCROLL);
        seq.schedule("page", true, start);

        assert_eq!(seq.poll(start + Duration::from_millis(599)), None);
        assert_eq!(seq.poll(start + LOAD), Some(Transition::Loaded("page")));
        assert_eq!(seq.next_deadline(), Some(start + LOAD + SCROLL));
        assert_eq!(seq.poll(start + LOAD), None);
        assert_eq!(
            seq.poll(start + LOAD + SCROLL),
            Some(Transition::ScrollRequested)
        );
        assert_eq!(seq.next_deadline(), None);
    }

    #[test]
    fn test_without_scroll_ends_after_loading() {
        let start = Instant::now();
        let mut seq = Sequencer::new(LOAD, SCROLL);
        seq.schedule(1, false, start);

        assert_eq!(seq.poll(start + LOAD), Some(Transition::Loaded(1)));
        assert_eq!(seq.next_deadline(), None);
    }

    #[test]
    fn test_newer_schedule_supersedes() {
        let start = Instant::now();
        let mut seq = Sequencer::new(LOAD, SCROLL);
        let first = seq.schedule("first", true, start);
        let second = seq.schedule("second", true, start + Duration::from_millis(300));

        assert!(second > first);
        assert_eq!(seq.complete(first), None);
        // The first deadline passing must not deliver anything.
        assert_eq!(seq.poll(start + LOAD), None);
        assert_eq!(
            seq.poll(start + Duration::from_millis(900)),
            Some(Transition::Loaded("second"))
        );
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut seq = Sequencer::new(LOAD, SCROLL);
        let generation = seq.schedule((), true, start);
        seq.cancel();

        assert_eq!(seq.poll(start + LOAD + SCROLL), None);
        assert_eq!(seq.complete(generation), None);
        assert_eq!(seq.next_deadline(), None);
    }

    #[test]
    fn test_catch_up_after_long_gap() {
        let start = Instant::now();
        let mut seq = Sequencer::new(LOAD, SCROLL);
        seq.schedule('x', true, start);

        let late = start + Duration::from_secs(5);
        assert_eq!(seq.poll(late), Some(Transition::Loaded('x')));
        assert_eq!(seq.poll(late), Some(Transition::ScrollRequested));
        assert_eq!(seq.poll(late), None);
    }
}
