use std::fmt::Write;

use slidedeck_core::{
    display::{ButtonState, PageSurface, sync},
    render::{AnimationKind, Screen},
};

const PROGRESS_CELLS: usize = 24;

/// Draws the page model as a few lines of text.
pub(super) struct ConsoleRenderer {
    surface: PageSurface,
}

impl ConsoleRenderer {
    pub(super) fn new(slides: u16, indicators: u16) -> Self {
        Self {
            surface: PageSurface::complete(slides, indicators),
        }
    }

    pub(super) fn surface(&self) -> &PageSurface {
        &self.surface
    }

    pub(super) fn render(&mut self, screen: Screen<'_>, now_ms: u64, frame: &mut String) {
        sync(&screen, &mut self.surface);
        frame.clear();

        let surface = &self.surface;
        let fill_pct = surface.progress_fill_pct.unwrap_or(0.0);
        let filled = ((fill_pct / 100.0) * PROGRESS_CELLS as f32).round() as usize;
        let _ = writeln!(
            frame,
            "[{:>6} ms] {} / {}  [{}{}] {:>5.1}%  {}",
            now_ms,
            surface.counter.as_deref().unwrap_or("?"),
            surface.total.as_deref().unwrap_or("?"),
            "#".repeat(filled.min(PROGRESS_CELLS)),
            ".".repeat(PROGRESS_CELLS.saturating_sub(filled)),
            fill_pct,
            surface.document_title
        );

        frame.push_str("  slides ");
        for active in &surface.slides {
            frame.push_str(if *active { "[*]" } else { "[ ]" });
        }
        frame.push_str("  indicators ");
        for active in &surface.indicators {
            frame.push(if *active { '*' } else { 'o' });
        }
        frame.push('\n');

        let _ = write!(
            frame,
            "  prev:{} next:{}  entrance {}/{}  focus {:?}",
            button_label(surface.previous_button),
            button_label(surface.next_button),
            screen.entrance.revealed,
            screen.entrance.total,
            screen.focus
        );
        if let Some(animation) = screen.animation {
            let direction = match animation.kind {
                AnimationKind::SlideLeft => "<-",
                AnimationKind::SlideRight => "->",
            };
            let _ = write!(frame, "  anim {} {}%", direction, animation.progress_pct);
        }
        if screen.fullscreen {
            frame.push_str("  fullscreen");
        }
        if surface.scroll_locked {
            frame.push_str("  scroll-locked");
        }
        frame.push('\n');

        if let Some(live) = surface.live_region.as_ref() {
            let _ = writeln!(frame, "  live: {}", live);
        }
        if let Some(overlay) = surface.modal.as_ref().filter(|overlay| !overlay.hidden) {
            let _ = writeln!(frame, "  modal: {}", overlay.title);
            let _ = writeln!(frame, "    {}", overlay.body);
        }
    }
}

fn button_label(state: Option<ButtonState>) -> &'static str {
    match state {
        Some(state) if state.pulsing => "pulse",
        Some(state) if state.disabled => "off",
        Some(_) => "on",
        None => "-",
    }
}
