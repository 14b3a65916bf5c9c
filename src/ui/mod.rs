// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Folio gallery.

pub mod cards;
pub mod pagination_bar;
pub mod toolbar;
