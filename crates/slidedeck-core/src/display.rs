//! Display synchronizer: applies a [`Screen`] to the page's named elements.
//!
//! [`PageSurface`] is a retained model of the document. Every element is
//! optional; [`sync`] skips whatever the page does not provide.

use core::fmt::Write;

use heapless::{String, Vec};
use log::warn;

use crate::render::{Edge, Screen};

/// Marker capacity for slide panels and indicators. Decks beyond this still
/// navigate; markers past the limit are not drawn.
pub const MAX_SLIDES: usize = 64;
pub const TITLE_BYTES: usize = 160;
pub const ANNOUNCEMENT_BYTES: usize = 256;
pub const MODAL_TITLE_BYTES: usize = 96;
pub const MODAL_BODY_BYTES: usize = 1_024;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ButtonState {
    pub disabled: bool,
    pub pulsing: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ModalOverlay {
    pub hidden: bool,
    pub title: String<MODAL_TITLE_BYTES>,
    pub body: String<MODAL_BODY_BYTES>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageSurface {
    /// Active marker per slide panel.
    pub slides: Vec<bool, MAX_SLIDES>,
    /// Active marker per indicator.
    pub indicators: Vec<bool, MAX_SLIDES>,
    pub counter: Option<String<8>>,
    pub total: Option<String<8>>,
    pub progress_fill_pct: Option<f32>,
    pub previous_button: Option<ButtonState>,
    pub next_button: Option<ButtonState>,
    pub document_title: String<TITLE_BYTES>,
    pub live_region: Option<String<ANNOUNCEMENT_BYTES>>,
    pub modal: Option<ModalOverlay>,
    pub scroll_locked: bool,
}

impl PageSurface {
    /// A page that provides every named element.
    pub fn complete(slides: u16, indicators: u16) -> Self {
        let mut surface = Self::bare(slides, indicators);
        surface.counter = Some(String::new());
        surface.total = Some(String::new());
        surface.progress_fill_pct = Some(0.0);
        surface.previous_button = Some(ButtonState::default());
        surface.next_button = Some(ButtonState::default());
        surface.modal = Some(ModalOverlay {
            hidden: true,
            ..ModalOverlay::default()
        });
        surface
    }

    /// A page with slides and indicators but no optional elements.
    pub fn bare(slides: u16, indicators: u16) -> Self {
        if slides as usize > MAX_SLIDES || indicators as usize > MAX_SLIDES {
            warn!(
                "page markers clamped to {} (slides={} indicators={})",
                MAX_SLIDES, slides, indicators
            );
        }

        let mut surface = Self::default();
        for _ in 0..(slides as usize).min(MAX_SLIDES) {
            let _ = surface.slides.push(false);
        }
        for _ in 0..(indicators as usize).min(MAX_SLIDES) {
            let _ = surface.indicators.push(false);
        }
        surface
    }

    pub fn active_slide(&self) -> Option<usize> {
        self.slides.iter().position(|active| *active)
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|active| *active)
    }
}

/// Apply `screen` to `surface`, skipping absent elements.
pub fn sync(screen: &Screen<'_>, surface: &mut PageSurface) {
    let active = screen.active_slide as usize;
    for (index, marker) in surface.slides.iter_mut().enumerate() {
        *marker = index == active;
    }
    for (index, marker) in surface.indicators.iter_mut().enumerate() {
        *marker = index == active;
    }

    if let Some(counter) = surface.counter.as_mut() {
        counter.clear();
        let _ = write!(counter, "{}", screen.counter());
    }
    if let Some(total) = surface.total.as_mut() {
        total.clear();
        let _ = write!(total, "{}", screen.slide_total);
    }
    if let Some(fill) = surface.progress_fill_pct.as_mut() {
        *fill = screen.progress_pct;
    }

    if let Some(button) = surface.previous_button.as_mut() {
        button.disabled = !screen.previous_enabled;
        button.pulsing = screen.boundary_pulse == Some(Edge::Start);
    }
    if let Some(button) = surface.next_button.as_mut() {
        button.disabled = !screen.next_enabled;
        button.pulsing = screen.boundary_pulse == Some(Edge::End);
    }

    surface.document_title.clear();
    push_truncated(&mut surface.document_title, screen.slide_title);
    if !screen.title_suffix.is_empty() {
        push_truncated(&mut surface.document_title, " - ");
        push_truncated(&mut surface.document_title, screen.title_suffix);
    }

    surface.live_region = screen.announcement.map(|text| {
        let mut region = String::new();
        push_truncated(&mut region, text);
        region
    });

    if let Some(overlay) = surface.modal.as_mut() {
        overlay.title.clear();
        overlay.body.clear();
        match screen.modal {
            Some(view) => {
                overlay.hidden = false;
                push_truncated(&mut overlay.title, view.title);
                push_truncated(&mut overlay.body, view.body);
            }
            None => overlay.hidden = true,
        }
    }

    surface.scroll_locked = screen.document_scroll_locked;
}

/// Append as many whole characters of `text` as fit.
pub fn push_truncated<const N: usize>(dst: &mut String<N>, text: &str) {
    for ch in text.chars() {
        if dst.push(ch).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        input::FocusTarget,
        render::{EntranceProgress, ModalView},
    };

    fn screen(active_slide: u16, slide_total: u16) -> Screen<'static> {
        Screen {
            active_slide,
            slide_total,
            indicator_total: slide_total,
            progress_pct: crate::render::progress_pct(active_slide, slide_total),
            previous_enabled: active_slide > 0,
            next_enabled: active_slide + 1 < slide_total,
            slide_title: "Controles",
            title_suffix: "Trabajo",
            boundary_pulse: None,
            entrance: EntranceProgress::default(),
            announcement: None,
            modal: None,
            focus: FocusTarget::Document,
            fullscreen: false,
            document_scroll_locked: true,
            animation: None,
        }
    }

    #[test]
    fn exactly_one_slide_and_indicator_active() {
        let mut surface = PageSurface::complete(8, 8);
        sync(&screen(3, 8), &mut surface);

        assert_eq!(surface.slides.iter().filter(|a| **a).count(), 1);
        assert_eq!(surface.indicators.iter().filter(|a| **a).count(), 1);
        assert_eq!(surface.active_slide(), Some(3));
        assert_eq!(surface.active_indicator(), Some(3));
        assert_eq!(surface.counter.as_deref(), Some("4"));
        assert_eq!(surface.total.as_deref(), Some("8"));
        assert_eq!(surface.progress_fill_pct, Some(50.0));
        assert_eq!(surface.document_title.as_str(), "Controles - Trabajo");
    }

    #[test]
    fn markers_clamp_to_capacity_while_counter_stays_exact() {
        let mut surface = PageSurface::complete(70, 70);
        assert_eq!(surface.slides.len(), MAX_SLIDES);
        assert_eq!(surface.indicators.len(), MAX_SLIDES);

        sync(&screen(65, 70), &mut surface);
        assert_eq!(surface.active_slide(), None);
        assert_eq!(surface.counter.as_deref(), Some("66"));
        assert_eq!(surface.total.as_deref(), Some("70"));

        sync(&screen(63, 70), &mut surface);
        assert_eq!(surface.active_slide(), Some(63));
    }

    #[test]
    fn buttons_disable_at_boundaries() {
        let mut surface = PageSurface::complete(3, 3);

        sync(&screen(0, 3), &mut surface);
        assert_eq!(surface.previous_button.map(|b| b.disabled), Some(true));
        assert_eq!(surface.next_button.map(|b| b.disabled), Some(false));

        let mut last = screen(2, 3);
        last.boundary_pulse = Some(Edge::End);
        sync(&last, &mut surface);
        assert_eq!(surface.previous_button.map(|b| b.disabled), Some(false));
        assert_eq!(
            surface.next_button,
            Some(ButtonState {
                disabled: true,
                pulsing: true,
            })
        );
    }

    #[test]
    fn absent_elements_are_skipped() {
        let mut surface = PageSurface::bare(4, 2);
        sync(&screen(3, 4), &mut surface);

        assert_eq!(surface.active_slide(), Some(3));
        assert_eq!(surface.active_indicator(), None);
        assert!(surface.counter.is_none());
        assert!(surface.progress_fill_pct.is_none());
        assert!(surface.previous_button.is_none());
        assert!(surface.modal.is_none());
        assert_eq!(surface.document_title.as_str(), "Controles - Trabajo");
    }

    #[test]
    fn modal_overlay_follows_screen() {
        let mut surface = PageSurface::complete(2, 2);
        let mut open = screen(0, 2);
        open.modal = Some(ModalView {
            title: "ISO 27001",
            body: "Annex A controls",
        });

        sync(&open, &mut surface);
        let overlay = surface.modal.clone().unwrap();
        assert!(!overlay.hidden);
        assert_eq!(overlay.title.as_str(), "ISO 27001");

        sync(&screen(0, 2), &mut surface);
        let overlay = surface.modal.clone().unwrap();
        assert!(overlay.hidden);
        assert!(overlay.body.is_empty());
    }

    #[test]
    fn truncation_keeps_whole_characters() {
        let mut text: String<5> = String::new();
        push_truncated(&mut text, "Gestión");
        assert_eq!(text.as_str(), "Gesti");

        let mut tight: String<4> = String::new();
        push_truncated(&mut tight, "abcó");
        assert_eq!(tight.as_str(), "abc");
    }
}
