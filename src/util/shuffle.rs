// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Uniform shuffling of the project list.

use rand::seq::SliceRandom;
use rand::Rng;

/// Return a uniformly shuffled copy of `source`.
///
/// The source is left untouched, so shuffling the canonical list twice
/// gives two independent permutations rather than a permutation of a
/// permutation.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(source: &[T], rng: &mut R) -> Vec<T> {
    let mut items = source.to_vec();
    items.shuffle(rng);
    items
}
