//! Presentation view model and animation metadata.

use crate::input::FocusTarget;

/// Slide enter animation direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    /// New slide enters from the right (moving forward).
    SlideLeft,
    /// New slide enters from the left (moving backward).
    SlideRight,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// Terminal boundary of the slide sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Edge {
    Start,
    End,
}

/// How many entrance elements of the active slide are visible.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EntranceProgress {
    pub revealed: u8,
    pub total: u8,
}

impl EntranceProgress {
    pub const fn complete(self) -> bool {
        self.revealed >= self.total
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ModalView<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

/// Projection of the presentation state consumed by the display synchronizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Screen<'a> {
    pub active_slide: u16,
    pub slide_total: u16,
    pub indicator_total: u16,
    /// `(active_slide + 1) / slide_total * 100`
    pub progress_pct: f32,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub slide_title: &'a str,
    pub title_suffix: &'a str,
    pub boundary_pulse: Option<Edge>,
    pub entrance: EntranceProgress,
    pub announcement: Option<&'a str>,
    pub modal: Option<ModalView<'a>>,
    pub focus: FocusTarget,
    pub fullscreen: bool,
    pub document_scroll_locked: bool,
    pub animation: Option<AnimationFrame>,
}

impl Screen<'_> {
    /// One-based slide number shown in the counter.
    pub const fn counter(&self) -> u16 {
        self.active_slide.saturating_add(1)
    }
}

/// Progress-bar fill for a zero-based slide index.
pub fn progress_pct(index: u16, total: u16) -> f32 {
    if total == 0 {
        return 0.0;
    }

    (index as f32 + 1.0) / total as f32 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_one_based_fraction() {
        assert_eq!(progress_pct(3, 8), 50.0);
        assert_eq!(progress_pct(0, 4), 25.0);
        assert_eq!(progress_pct(7, 8), 100.0);
        assert_eq!(progress_pct(0, 0), 0.0);
    }

    #[test]
    fn animation_frame_expires_after_duration() {
        let spec = AnimationSpec::new(AnimationKind::SlideLeft, 1_000, 300);

        assert_eq!(
            spec.frame(1_150),
            Some(AnimationFrame {
                kind: AnimationKind::SlideLeft,
                progress_pct: 50,
            })
        );
        assert_eq!(spec.frame(1_300), None);
    }
}
