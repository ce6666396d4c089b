//! Presentation state machine: slide navigation, modal overlay, and
//! transient feedback.

use core::fmt::Write;

use heapless::{Deque, String, Vec};
use log::{debug, info, trace, warn};

use crate::{
    deck::SlideDeck,
    display::{ANNOUNCEMENT_BYTES, MODAL_TITLE_BYTES, push_truncated},
    input::{
        Control, FocusTarget, InputEvent, InputProvider,
        arbitration::{
            Command, Disposition, SwipeDirection, SwipeTracker, classify_context_menu,
            classify_key, classify_touch_move, classify_wheel,
        },
    },
    render::{
        AnimationFrame, AnimationKind, AnimationSpec, Edge, EntranceProgress, ModalView, Screen,
        progress_pct,
    },
    settings::PresenterConfig,
    timers::{TimerKind, TimerSet},
};

const MAX_OBSERVERS: usize = 8;
const MAX_HOST_REQUESTS: usize = 16;
const MAX_ENTRANCE_ELEMENTS: usize = 48;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavPhase {
    Idle,
    Transitioning,
}

/// Result of a navigation request. Rejected requests are never errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavOutcome {
    Moved,
    /// Out of range, already current, or the transition lock is engaged.
    Ignored,
    /// Next/previous hit the end of the deck; the matching control pulses.
    Boundary(Edge),
}

/// Shared lock written by both navigation and the modal overlay.
/// Last writer wins.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransitionLock {
    engaged: bool,
}

impl TransitionLock {
    pub const fn new() -> Self {
        Self { engaged: false }
    }

    pub fn engage(&mut self) {
        self.engaged = true;
    }

    pub fn release(&mut self) {
        self.engaged = false;
    }

    pub fn set(&mut self, engaged: bool) {
        self.engaged = engaged;
    }

    pub const fn is_engaged(&self) -> bool {
        self.engaged
    }
}

/// Root-level overflow lock. Nothing in the presentation ever unlocks it;
/// resize and modal changes only reassert it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DocumentScroll {
    locked: bool,
    reasserted: u32,
}

impl DocumentScroll {
    pub const fn locked() -> Self {
        Self {
            locked: true,
            reasserted: 0,
        }
    }

    pub fn reassert(&mut self) {
        self.locked = true;
        self.reasserted = self.reasserted.wrapping_add(1);
    }

    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    pub const fn reassert_count(&self) -> u32 {
        self.reasserted
    }
}

/// Side effects the host has to carry out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HostRequest {
    /// Reset the slide's content scroll offset and move focus into it.
    FocusSlideContent { slide: u16 },
    Focus(FocusTarget),
    EnterFullscreen,
    ExitFullscreen,
    ShowHelp,
    DebugInfo(DebugSnapshot),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideData {
    pub current: u16,
    pub total: u16,
    pub progress_pct: f32,
    pub is_transitioning: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DebugSnapshot {
    pub current: u16,
    pub total: u16,
    pub transitioning: bool,
    pub modal_open: bool,
    pub slide_elements: u16,
    pub indicators: u16,
    pub scroll_locked: bool,
    pub pending_timers: u8,
}

/// Notification sent after every successful slide transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlideChange<'a> {
    pub from: u16,
    pub to: u16,
    pub total: u16,
    pub title: &'a str,
    pub announcement: &'a str,
    pub at_ms: u64,
}

/// Subscriber to slide transitions. Callbacks take `&self`; observers that
/// record state use interior mutability.
pub trait SlideObserver {
    fn on_slide_changed(&self, change: &SlideChange<'_>);
}

#[derive(Clone, Copy)]
enum Subscriber<'o> {
    /// Built-in polite live region.
    LiveRegion,
    External(&'o dyn SlideObserver),
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
enum ModalState {
    #[default]
    Closed,
    Open(OpenModal),
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct OpenModal {
    template: u16,
    title: String<MODAL_TITLE_BYTES>,
    previously_focused: FocusTarget,
    /// Lock value to restore on close.
    restore_lock: bool,
}

pub struct PresentationApp<'o, DK, IN>
where
    DK: SlideDeck,
    IN: InputProvider,
{
    deck: DK,
    input: IN,
    config: PresenterConfig,
    total: u16,
    current: u16,
    lock: TransitionLock,
    generation: u32,
    timers: TimerSet,
    transition: Option<AnimationSpec>,
    revealed: u64,
    entrance_total: u8,
    boundary_pulse: Option<Edge>,
    focus: FocusTarget,
    modal: ModalState,
    swipe: SwipeTracker,
    scroll: DocumentScroll,
    fullscreen: bool,
    announcement: Option<String<ANNOUNCEMENT_BYTES>>,
    subscribers: Vec<Subscriber<'o>, MAX_OBSERVERS>,
    host_requests: Deque<HostRequest, MAX_HOST_REQUESTS>,
    pending_redraw: bool,
}

include!("runtime.rs");
include!("navigation.rs");
include!("input.rs");
include!("modal.rs");
include!("view.rs");
