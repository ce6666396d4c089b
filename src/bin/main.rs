use std::{
    cell::Cell,
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use slidedeck_core::{
    app::{HostRequest, PresentationApp, SlideChange, SlideObserver, TickResult},
    deck::{SlideDeck, StaticDeck},
    input::MockInput,
    settings::PresenterConfig,
};

use console::ConsoleRenderer;
use fullscreen::SimulatedFullscreen;
use script::ScriptStep;

#[path = "main/console.rs"]
mod console;
#[path = "main/deck.rs"]
mod deck;
#[path = "main/fullscreen.rs"]
mod fullscreen;
#[path = "main/script.rs"]
mod script;

type App<'o> = PresentationApp<'o, StaticDeck<'static>, MockInput>;

/// Replay an input script against the course presentation.
#[derive(Debug, Parser)]
#[command(name = "slidedeck", version, about, long_about = None)]
struct Args {
    /// Input script; read from stdin when omitted
    #[arg(long, short)]
    script: Option<PathBuf>,

    /// How long the transition lock stays engaged after a slide change
    #[arg(long, default_value_t = 300)]
    settle_ms: u16,

    /// Duration of the slide enter animation
    #[arg(long, default_value_t = 300)]
    transition_ms: u16,

    /// Minimum horizontal travel for a touch gesture to count as a swipe
    #[arg(long, default_value_t = 50)]
    swipe_threshold: u16,

    /// Vertical touch travel outside the content before page scroll is blocked
    #[arg(long, default_value_t = 10)]
    touch_slop: u16,

    /// How long the prev/next control pulses at the first or last slide
    #[arg(long, default_value_t = 200)]
    pulse_ms: u16,

    /// Lifetime of a live-region announcement
    #[arg(long, default_value_t = 1_000)]
    announcement_ms: u16,

    /// Virtual clock step while waiting
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    frame_ms: u64,

    /// Print only the final frame
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Default)]
struct SlideLog {
    changes: Cell<u32>,
}

impl SlideObserver for SlideLog {
    fn on_slide_changed(&self, change: &SlideChange<'_>) {
        self.changes.set(self.changes.get().saturating_add(1));
        info!(
            "slide: {} -> {} of {} at {}ms ({})",
            change.from.saturating_add(1),
            change.to.saturating_add(1),
            change.total,
            change.at_ms,
            change.title
        );
    }
}

struct Session {
    renderer: ConsoleRenderer,
    fullscreen: SimulatedFullscreen,
    frame: String,
    now_ms: u64,
    frame_ms: u64,
    quiet: bool,
}

impl Session {
    fn run_step(&mut self, app: &mut App<'_>, step: ScriptStep) {
        match step {
            ScriptStep::Event(event) => {
                let disposition = app.handle_event(event, self.now_ms);
                debug!("script: {:?} -> {:?}", event, disposition);
            }
            ScriptStep::Wait(duration_ms) => {
                let until_ms = self.now_ms.saturating_add(duration_ms);
                while self.now_ms < until_ms {
                    self.now_ms = self.now_ms.saturating_add(self.frame_ms).min(until_ms);
                    self.tick(app);
                }
            }
            ScriptStep::GoTo(index) => {
                let outcome = app.go_to_slide(index, self.now_ms);
                debug!("script: goto {} -> {:?}", index, outcome);
            }
            ScriptStep::OpenModal { id, title } => {
                if !app.open_modal(&id, &title, self.now_ms) {
                    warn!("script: modal {:?} not opened", id);
                }
            }
            ScriptStep::Help => app.show_help(),
            ScriptStep::Debug => app.show_debug_info(),
            ScriptStep::Fullscreen => app.toggle_fullscreen(),
            ScriptStep::DenyFullscreen => self.fullscreen.deny_next_request(),
        }

        self.service_host_requests(app);
        self.tick(app);
    }

    fn tick(&mut self, app: &mut App<'_>) {
        if app.tick(self.now_ms) == TickResult::RenderRequested && !self.quiet {
            self.present(app);
        }
    }

    fn present(&mut self, app: &App<'_>) {
        let now_ms = self.now_ms;
        let renderer = &mut self.renderer;
        let frame = &mut self.frame;
        app.with_screen(now_ms, |screen| renderer.render(screen, now_ms, frame));
        println!("{}", self.frame);
    }

    fn service_host_requests(&mut self, app: &mut App<'_>) {
        while let Some(request) = app.pop_host_request() {
            match request {
                HostRequest::FocusSlideContent { slide } => {
                    debug!("host: content of slide {} scrolled to top and focused", slide);
                }
                HostRequest::Focus(target) => debug!("host: focus {:?}", target),
                HostRequest::EnterFullscreen => match self.fullscreen.request_enter() {
                    Ok(()) => app.set_fullscreen_state(true),
                    Err(err) => warn!("fullscreen: enter failed: {}", err),
                },
                HostRequest::ExitFullscreen => match self.fullscreen.request_exit() {
                    Ok(()) => app.set_fullscreen_state(false),
                    Err(err) => warn!("fullscreen: exit failed: {}", err),
                },
                HostRequest::ShowHelp => println!("{}\n", app.help_text()),
                HostRequest::DebugInfo(snapshot) => println!("{:#?}\n", snapshot),
            }
        }
    }
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read script from stdin")?;
            Ok(source)
        }
    }
}

fn presenter_config(args: &Args) -> PresenterConfig {
    PresenterConfig::default()
        .with_settle_ms(args.settle_ms)
        .with_transition_ms(args.transition_ms)
        .with_swipe_min_distance(args.swipe_threshold)
        .with_touch_scroll_slop(args.touch_slop)
        .with_boundary_pulse_ms(args.pulse_ms)
        .with_announcement_ms(args.announcement_ms)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let source = read_script(args.script.as_deref())?;
    let steps = script::parse_script(&source).context("failed to parse input script")?;

    let config = presenter_config(&args);

    let slide_log = SlideLog::default();
    let deck = deck::course_deck();
    let mut session = Session {
        renderer: ConsoleRenderer::new(deck.slide_count(), deck.indicator_count()),
        fullscreen: SimulatedFullscreen::new(),
        frame: String::new(),
        now_ms: 0,
        frame_ms: args.frame_ms,
        quiet: args.quiet,
    };
    let mut app = PresentationApp::new(deck, MockInput::new(), config);
    app.subscribe(&slide_log);

    info!(
        "presenting {} slides, {} script steps",
        app.total_slides(),
        steps.len()
    );

    session.tick(&mut app);
    for step in steps {
        session.run_step(&mut app, step);
    }

    // Let pending timers run out so the final frame is settled.
    while let Some(deadline_ms) = app.next_deadline_ms() {
        session.now_ms = session.now_ms.max(deadline_ms);
        session.tick(&mut app);
    }
    session.present(&app);

    info!(
        "finished at {}ms on slide {} of {} after {} slide changes (fullscreen={})",
        session.now_ms,
        app.current_slide().saturating_add(1),
        app.total_slides(),
        slide_log.changes.get(),
        session.fullscreen.is_active()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_flags_reach_the_presenter_config() {
        let args = Args::try_parse_from([
            "slidedeck",
            "--transition-ms",
            "500",
            "--touch-slop",
            "24",
            "--pulse-ms",
            "120",
            "--announcement-ms",
            "1500",
        ])
        .unwrap();
        let config = presenter_config(&args);

        assert_eq!(config.settle_ms, 300);
        assert_eq!(config.transition_ms, 500);
        assert_eq!(config.swipe_min_distance, 50);
        assert_eq!(config.touch_scroll_slop, 24);
        assert_eq!(config.boundary_pulse_ms, 120);
        assert_eq!(config.announcement_ms, 1_500);
    }
}
