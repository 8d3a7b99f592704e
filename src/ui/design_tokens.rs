// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! # Organization
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.7, 0.84, 0.98); // Light blue
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8); // Medium dark blue

    // Accent (warm scale, sentinel circle)
    pub const ACCENT_400: Color = Color::from_rgb(1.0, 0.62, 0.35);
    pub const ACCENT_500: Color = Color::from_rgb(0.95, 0.5, 0.2);

    // Semantic colors
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Subtle separators and resting circles.
    pub const SUBTLE: f32 = 0.25;
    /// Hovering overlays.
    pub const OVERLAY_HOVER: f32 = 0.6;
    /// Strong overlay backdrops.
    pub const OVERLAY_STRONG: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    /// 4px
    pub const XS: f32 = 4.0;
    /// 8px
    pub const SM: f32 = 8.0;
    /// 16px
    pub const MD: f32 = 16.0;
    /// 24px
    pub const LG: f32 = 24.0;
    /// 32px
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Height of the navigation bar.
    pub const NAVBAR_HEIGHT: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Body text.
    pub const BODY: f32 = 14.0;
    /// Secondary/caption text.
    pub const CAPTION: f32 = 12.0;
    /// Screen titles.
    pub const TITLE_LG: f32 = 24.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    /// Buttons and small containers.
    pub const SM: f32 = 4.0;
    /// Panels.
    pub const MD: f32 = 8.0;
}

const _: () = {
    assert!(sizing::NAVBAR_HEIGHT > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacities_are_ordered() {
        assert!(opacity::SUBTLE < opacity::OVERLAY_HOVER);
        assert!(opacity::OVERLAY_HOVER < opacity::OVERLAY_STRONG);
    }

    #[test]
    fn brand_and_accent_are_distinct() {
        assert_ne!(palette::PRIMARY_500, palette::ACCENT_500);
    }
}
