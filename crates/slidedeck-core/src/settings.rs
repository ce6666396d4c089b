//! Presenter timing and gesture configuration.

/// Tunables for transitions, gestures, and transient feedback.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PresenterConfig {
    /// Time the transition lock stays engaged after a slide change.
    pub settle_ms: u16,
    /// Duration of the slide enter animation.
    pub transition_ms: u16,
    /// Minimum horizontal travel for a swipe to count as navigation.
    pub swipe_min_distance: u16,
    /// Vertical travel outside the content region before document scroll is blocked.
    pub touch_scroll_slop: u16,
    /// How long a prev/next control pulses when navigation hits an edge.
    pub boundary_pulse_ms: u16,
    /// Lifetime of a live-region announcement.
    pub announcement_ms: u16,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            settle_ms: 300,
            transition_ms: 300,
            swipe_min_distance: 50,
            touch_scroll_slop: 10,
            boundary_pulse_ms: 200,
            announcement_ms: 1_000,
        }
    }
}

impl PresenterConfig {
    pub const fn with_settle_ms(mut self, settle_ms: u16) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    pub const fn with_transition_ms(mut self, transition_ms: u16) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    pub const fn with_swipe_min_distance(mut self, swipe_min_distance: u16) -> Self {
        self.swipe_min_distance = swipe_min_distance;
        self
    }

    pub const fn with_touch_scroll_slop(mut self, touch_scroll_slop: u16) -> Self {
        self.touch_scroll_slop = touch_scroll_slop;
        self
    }

    pub const fn with_boundary_pulse_ms(mut self, boundary_pulse_ms: u16) -> Self {
        self.boundary_pulse_ms = boundary_pulse_ms;
        self
    }

    pub const fn with_announcement_ms(mut self, announcement_ms: u16) -> Self {
        self.announcement_ms = announcement_ms;
        self
    }

    /// Clamps every duration to at least one millisecond.
    pub fn sanitized(self) -> Self {
        Self {
            settle_ms: self.settle_ms.max(1),
            transition_ms: self.transition_ms.max(1),
            swipe_min_distance: self.swipe_min_distance,
            touch_scroll_slop: self.touch_scroll_slop,
            boundary_pulse_ms: self.boundary_pulse_ms.max(1),
            announcement_ms: self.announcement_ms.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_override_defaults_and_durations_stay_positive() {
        let config = PresenterConfig::default()
            .with_settle_ms(0)
            .with_transition_ms(450)
            .with_swipe_min_distance(80)
            .with_touch_scroll_slop(0)
            .with_boundary_pulse_ms(0)
            .with_announcement_ms(2_500)
            .sanitized();

        assert_eq!(config.settle_ms, 1);
        assert_eq!(config.transition_ms, 450);
        assert_eq!(config.swipe_min_distance, 80);
        assert_eq!(config.touch_scroll_slop, 0);
        assert_eq!(config.boundary_pulse_ms, 1);
        assert_eq!(config.announcement_ms, 2_500);
    }
}
