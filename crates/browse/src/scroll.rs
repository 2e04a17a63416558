//! Scroll threshold detection.
//!
//! The trigger fires when the remaining unscrolled distance drops below a
//! multiple of the visible height, i.e. the user is within roughly one
//! viewport of the bottom. The multiplier is a tunable, not a contract; the
//! default of 1.2 starts the next load just before the bottom comes into view.

/// Scroll metrics of the hosting viewport at one instant.
///
/// All values in pixels. `content_height` is the full scrollable height,
/// `visible_height` the viewport's own height, `scroll_offset` the distance
/// already scrolled from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_offset: f32,
    pub visible_height: f32,
    pub content_height: f32,
}

/// Default multiple of the visible height that arms the trigger.
pub const DEFAULT_THRESHOLD_FACTOR: f32 = 1.2;

/// Decides whether a scroll position is close enough to the bottom to load
/// the next page.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTrigger {
    threshold_factor: f32,
}

impl ScrollTrigger {
    pub fn new(threshold_factor: f32) -> Self {
        Self { threshold_factor }
    }

    pub fn threshold_factor(&self) -> f32 {
        self.threshold_factor
    }

    /// `content_height - scroll_offset <= visible_height * factor`
    pub fn should_load(&self, viewport: &Viewport) -> bool {
        viewport.content_height - viewport.scroll_offset
            <= viewport.visible_height * self.threshold_factor
    }
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_far_from_bottom_does_not_fire() {
        let trigger = ScrollTrigger::default();
        let viewport = Viewport {
            scroll_offset: 0.0,
            visible_height: 600.0,
            content_height: 4000.0,
        };
        assert!(!trigger.should_load(&viewport));
    }

    #[test]
    fn test_fires_within_threshold_of_bottom() {
        let trigger = ScrollTrigger::default();
        // 4000 - 3300 = 700 <= 600 * 1.2 = 720
        let viewport = Viewport {
            scroll_offset: 3300.0,
            visible_height: 600.0,
            content_height: 4000.0,
        };
        assert!(trigger.should_load(&viewport));
    }

    #[test]
    fn test_exact_threshold_fires() {
        let trigger = ScrollTrigger::default();
        // 4000 - 3280 = 720 == 600 * 1.2
        let viewport = Viewport {
            scroll_offset: 3280.0,
            visible_height: 600.0,
            content_height: 4000.0,
        };
        assert!(trigger.should_load(&viewport));
    }

    #[test]
    fn test_short_content_always_fires() {
        // Content shorter than the viewport: the remaining distance can
        // never exceed the threshold, so any scroll event qualifies.
        let trigger = ScrollTrigger::default();
        let viewport = Viewport {
            scroll_offset: 0.0,
            visible_height: 600.0,
            content_height: 400.0,
        };
        assert!(trigger.should_load(&viewport));
    }

    #[test]
    fn test_custom_factor() {
        let tight = ScrollTrigger::new(1.0);
        let viewport = Viewport {
            scroll_offset: 3300.0,
            visible_height: 600.0,
            content_height: 4000.0,
        };
        // 700 > 600 * 1.0
        assert!(!tight.should_load(&viewport));
    }
}
