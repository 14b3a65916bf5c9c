// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O for project data, configuration and card images.

pub mod media;
pub mod serialization;
