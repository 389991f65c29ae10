//! Alert feedback parameters shared by the status-bar blink and the
//! floating time overlay.
//!
//! Kept free of AppKit types so the step math runs as plain host tests.

/// Number of alpha steps in one icon blink sequence.
pub const BLINK_STEPS: u32 = 6;

/// Seconds between blink steps.
pub const BLINK_INTERVAL_SECS: f64 = 0.3;

/// Dimmed icon alpha while blinking.
pub const BLINK_DIM_ALPHA: f64 = 0.3;

/// Overlay entrance fade/scale duration.
pub const OVERLAY_FADE_IN_SECS: f64 = 0.4;

/// Fully-visible hold before the overlay starts its exit animation.
pub const OVERLAY_HOLD_SECS: f64 = 2.5;

/// Overlay exit fade/scale duration.
pub const OVERLAY_FADE_OUT_SECS: f64 = 0.5;

/// Icon alpha for a given blink step.
///
/// Steps at or past the end of the sequence are always fully opaque, so
/// the icon never finishes dimmed whatever the parity of the step count.
pub fn blink_alpha(step: u32, steps: u32) -> f64 {
    if step >= steps {
        1.0
    } else if step % 2 == 0 {
        BLINK_DIM_ALPHA
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_alpha_starts_dim_and_alternates() {
        assert_eq!(blink_alpha(0, BLINK_STEPS), BLINK_DIM_ALPHA);
        assert_eq!(blink_alpha(1, BLINK_STEPS), 1.0);
        assert_eq!(blink_alpha(2, BLINK_STEPS), BLINK_DIM_ALPHA);
        assert_eq!(blink_alpha(3, BLINK_STEPS), 1.0);
    }

    #[test]
    fn test_blink_ends_opaque_for_either_parity() {
        assert_eq!(blink_alpha(6, 6), 1.0);
        assert_eq!(blink_alpha(7, 7), 1.0);
        assert_eq!(blink_alpha(9, 7), 1.0);
    }

    #[test]
    fn test_overlay_timeline_total() {
        let total = OVERLAY_FADE_IN_SECS + OVERLAY_HOLD_SECS + OVERLAY_FADE_OUT_SECS;
        assert!((total - 3.4).abs() < 1e-9);
    }
}
