// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Card grid geometry.
//!
//! Column count follows the window width, and card images are cropped to
//! fill a fixed 16:9 frame.

/// Window width at which the grid switches to two columns.
pub const TWO_COLUMN_BREAKPOINT: f32 = 640.0;

/// Aspect ratio of the image frame on each card.
pub const CARD_IMAGE_ASPECT: f32 = 16.0 / 9.0;

/// Number of card columns for the available width.
pub fn columns_for_width(width: f32) -> usize {
    if width >= TWO_COLUMN_BREAKPOINT {
        2
    } else {
        1
    }
}

/// Width of one card when `columns` cards share `available` with `spacing` between them.
pub fn card_width(available: f32, columns: usize, spacing: f32) -> f32 {
    let columns = columns.max(1) as f32;
    ((available - spacing * (columns - 1.0)) / columns).max(0.0)
}

/// Texture coordinates that crop an image to fill a frame of `frame_aspect`.
///
/// Returns `((u_min, v_min), (u_max, v_max))`, centred on the image.
pub fn cover_uv(image_width: u32, image_height: u32, frame_aspect: f32) -> ((f32, f32), (f32, f32)) {
    if image_width == 0 || image_height == 0 || frame_aspect <= 0.0 {
        return ((0.0, 0.0), (1.0, 1.0));
    }

    let image_aspect = image_width as f32 / image_height as f32;
    if image_aspect > frame_aspect {
        // Wider than the frame: trim the sides
        let visible = frame_aspect / image_aspect;
        let margin = (1.0 - visible) / 2.0;
        ((margin, 0.0), (1.0 - margin, 1.0))
    } else {
        // Taller than the frame: trim top and bottom
        let visible = image_aspect / frame_aspect;
        let margin = (1.0 - visible) / 2.0;
        ((0.0, margin), (1.0, 1.0 - margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_breakpoint() {
        assert_eq!(columns_for_width(320.0), 1);
        assert_eq!(columns_for_width(639.9), 1);
        assert_eq!(columns_for_width(640.0), 2);
        assert_eq!(columns_for_width(1600.0), 2);
    }

    #[test]
    fn test_card_width_splits_space() {
        assert!((card_width(1000.0, 2, 20.0) - 490.0).abs() < 0.0001);
        assert!((card_width(500.0, 1, 20.0) - 500.0).abs() < 0.0001);
        assert_eq!(card_width(10.0, 2, 40.0), 0.0);
    }

    #[test]
    fn test_cover_uv_crops_wide_image() {
        let ((u0, v0), (u1, v1)) = cover_uv(3200, 900, CARD_IMAGE_ASPECT);
        assert!((u0 - 0.25).abs() < 0.0001);
        assert!((u1 - 0.75).abs() < 0.0001);
        assert_eq!((v0, v1), (0.0, 1.0));
    }

    #[test]
    fn test_cover_uv_crops_tall_image() {
        let ((u0, v0), (u1, v1)) = cover_uv(900, 900, CARD_IMAGE_ASPECT);
        assert_eq!((u0, u1), (0.0, 1.0));
        let visible = v1 - v0;
        assert!((visible - 9.0 / 16.0).abs() < 0.0001);
    }

    #[test]
    fn test_cover_uv_degenerate() {
        assert_eq!(cover_uv(0, 10, CARD_IMAGE_ASPECT), ((0.0, 0.0), (1.0, 1.0)));
    }
}
