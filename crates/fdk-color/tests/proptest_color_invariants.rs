//! Property-based invariant tests for color primitives.
//!
//! These tests verify invariants that must hold for any valid inputs:
//!
//! 1. Hex parsing round-trips through Display.
//! 2. Parsing never panics on arbitrary strings.
//! 3. Contrast text always opposes the background's lightness class.
//! 4. Darken never raises a channel; lighten never lowers one.
//! 5. Darken/lighten stay in range for every percent, including > 100.
//! 6. Luminance is monotone in each channel.
//! 7. Alpha strings are well-formed for any float input.

use fdk_color::{Rgb, TEXT_ON_DARK, TEXT_ON_LIGHT};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Hex parsing round-trips through Display
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hex_round_trip(color in rgb_strategy()) {
        prop_assert_eq!(Rgb::parse_hex(&color.to_hex()), Ok(color));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Parsing never panics on arbitrary strings
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parse_hex_total(input in ".*") {
        let _ = Rgb::parse_hex(&input);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Contrast text opposes the background's lightness class
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contrast_text_opposes_background(color in rgb_strategy()) {
        let text = color.contrasting_text();
        prop_assert!(text == TEXT_ON_LIGHT || text == TEXT_ON_DARK);
        prop_assert_ne!(
            text.is_light(),
            color.is_light(),
            "text {} does not oppose background {}",
            text, color
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Darken never raises a channel; lighten never lowers one
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn darken_is_non_increasing(color in rgb_strategy(), percent in 0u8..=100) {
        let darker = color.darken(percent);
        prop_assert!(darker.r <= color.r);
        prop_assert!(darker.g <= color.g);
        prop_assert!(darker.b <= color.b);
    }

    #[test]
    fn lighten_is_non_decreasing(color in rgb_strategy(), percent in 0u8..=100) {
        let lighter = color.lighten(percent);
        prop_assert!(lighter.r >= color.r);
        prop_assert!(lighter.g >= color.g);
        prop_assert!(lighter.b >= color.b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Darken/lighten never panic for any percent, including out of range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn shift_total_for_any_percent(color in rgb_strategy(), percent in any::<u8>()) {
        let _ = color.darken(percent);
        let _ = color.lighten(percent);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Luminance is monotone in each channel
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn luminance_monotone_in_green(r in any::<u8>(), b in any::<u8>(), g in 0u8..255) {
        let lo = Rgb::new(r, g, b).luminance_u8();
        let hi = Rgb::new(r, g + 1, b).luminance_u8();
        prop_assert!(hi >= lo);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Alpha strings are well-formed for any float input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn alpha_string_well_formed(color in rgb_strategy(), alpha in any::<f32>()) {
        let s = color.with_alpha(alpha);
        prop_assert!(s.starts_with("rgba("));
        prop_assert!(s.ends_with(')'));
        prop_assert_eq!(s.matches(',').count(), 3);
    }
}
