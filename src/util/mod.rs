// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pure helpers with no egui dependency.

pub mod layout;
pub mod pagination;
pub mod sequencer;
pub mod shuffle;
