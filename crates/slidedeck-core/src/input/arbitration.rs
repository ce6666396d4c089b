//! Decides whether an input event navigates the presentation or passes
//! through to native scrolling.
//!
//! Keys fall in exactly one of two classes:
//!
//! - scroll keys ([`SCROLL_KEYS`]) scroll natively while focus is inside the
//!   content region and only navigate when focus is elsewhere;
//! - global keys ([`GLOBAL_KEYS`]) and Ctrl/Cmd shortcuts are captured no
//!   matter where focus is.

use super::{Key, Modifiers, Region};

/// Keys that scroll the content region when it has focus.
pub const SCROLL_KEYS: [Key; 7] = [
    Key::Up,
    Key::Down,
    Key::PageUp,
    Key::PageDown,
    Key::Home,
    Key::End,
    Key::Space,
];

/// Keys captured for the presentation regardless of focus.
pub const GLOBAL_KEYS: [Key; 5] = [Key::Left, Key::Right, Key::Escape, Key::F5, Key::F11];

/// Keys blocked while the modal overlay is open.
pub const MODAL_BLOCKED_KEYS: [Key; 7] = [
    Key::Left,
    Key::Right,
    Key::PageUp,
    Key::PageDown,
    Key::Home,
    Key::End,
    Key::Space,
];

/// What the host should do with the event's default action.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Disposition {
    PassThrough,
    PreventDefault,
}

/// Presentation-level action derived from an event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    ToggleFullscreen,
    ShowHelp,
    ShowDebug,
    CloseModal,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyRoute {
    pub disposition: Disposition,
    pub command: Option<Command>,
}

impl KeyRoute {
    const PASS: Self = Self {
        disposition: Disposition::PassThrough,
        command: None,
    };
    const BLOCK: Self = Self {
        disposition: Disposition::PreventDefault,
        command: None,
    };

    const fn run(command: Command) -> Self {
        Self {
            disposition: Disposition::PreventDefault,
            command: Some(command),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwipeDirection {
    /// Finger travelled towards the left edge.
    Left,
    /// Finger travelled towards the right edge.
    Right,
}

pub fn is_scroll_key(key: Key) -> bool {
    SCROLL_KEYS.contains(&key)
}

pub fn is_global_key(key: Key) -> bool {
    GLOBAL_KEYS.contains(&key)
}

/// Route a key press given the region holding focus.
pub fn classify_key(key: Key, modifiers: Modifiers, focus: Region, modal_open: bool) -> KeyRoute {
    if modal_open {
        return classify_modal_key(key, modifiers);
    }

    if modifiers.command() {
        return match key {
            Key::Home => KeyRoute::run(Command::First),
            Key::End => KeyRoute::run(Command::Last),
            Key::Char('d' | 'D') => KeyRoute::run(Command::ShowDebug),
            Key::Char('+' | '-' | '0') if !focus.scrollable() => KeyRoute::BLOCK,
            _ => KeyRoute::PASS,
        };
    }

    match key {
        Key::Char('?') if modifiers.shift => KeyRoute::run(Command::ShowHelp),
        Key::Left => KeyRoute::run(Command::Previous),
        Key::Right => KeyRoute::run(Command::Next),
        Key::Escape | Key::F5 => KeyRoute::run(Command::First),
        Key::F11 => KeyRoute::run(Command::ToggleFullscreen),
        _ if is_scroll_key(key) && focus.scrollable() => KeyRoute::PASS,
        Key::PageDown | Key::Space => KeyRoute::run(Command::Next),
        Key::PageUp => KeyRoute::run(Command::Previous),
        Key::Home => KeyRoute::run(Command::First),
        Key::End => KeyRoute::run(Command::Last),
        Key::Up | Key::Down => KeyRoute::BLOCK,
        _ => KeyRoute::PASS,
    }
}

fn classify_modal_key(key: Key, modifiers: Modifiers) -> KeyRoute {
    match key {
        Key::Escape => KeyRoute::run(Command::CloseModal),
        Key::F11 => KeyRoute::run(Command::ToggleFullscreen),
        Key::Char('d' | 'D') if modifiers.command() => KeyRoute::run(Command::ShowDebug),
        Key::Char('?') if modifiers.shift => KeyRoute::run(Command::ShowHelp),
        Key::F5 if !modifiers.command() => KeyRoute::BLOCK,
        Key::Char('+' | '-' | '0') if modifiers.command() => KeyRoute::BLOCK,
        _ if MODAL_BLOCKED_KEYS.contains(&key) => KeyRoute::BLOCK,
        _ => KeyRoute::PASS,
    }
}

pub fn classify_wheel(target: Region) -> Disposition {
    if target.scrollable() {
        Disposition::PassThrough
    } else {
        Disposition::PreventDefault
    }
}

/// Touch drags scroll natively inside the content region; elsewhere the
/// document is held still once vertical travel exceeds `slop`.
pub fn classify_touch_move(target: Region, start_y: Option<i32>, y: i32, slop: u16) -> Disposition {
    if target.scrollable() {
        return Disposition::PassThrough;
    }

    let Some(start_y) = start_y else {
        return Disposition::PassThrough;
    };

    if y.abs_diff(start_y) > slop as u32 {
        Disposition::PreventDefault
    } else {
        Disposition::PassThrough
    }
}

pub fn classify_context_menu(target: Region) -> Disposition {
    match target {
        Region::Link { .. } => Disposition::PassThrough,
        _ => Disposition::PreventDefault,
    }
}

/// A gesture is a swipe only when horizontal travel dominates and exceeds
/// `min_distance`.
pub fn classify_swipe(dx: i32, dy: i32, min_distance: u16) -> Option<SwipeDirection> {
    let horizontal = dx.unsigned_abs();
    if horizontal <= dy.unsigned_abs() || horizontal <= min_distance as u32 {
        return None;
    }

    if dx < 0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

/// Transient touch-gesture state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SwipeTracker {
    start: Option<(i32, i32)>,
    moved: bool,
}

impl SwipeTracker {
    pub const fn new() -> Self {
        Self {
            start: None,
            moved: false,
        }
    }

    pub fn begin(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
        self.moved = false;
    }

    pub fn mark_moved(&mut self) {
        self.moved = true;
    }

    pub fn start_y(&self) -> Option<i32> {
        self.start.map(|(_, y)| y)
    }

    /// Close the gesture. Taps without movement never classify as swipes.
    pub fn finish(&mut self, x: i32, y: i32, min_distance: u16) -> Option<SwipeDirection> {
        let start = self.start.take();
        let moved = core::mem::take(&mut self.moved);
        let (start_x, start_y) = start?;
        if !moved {
            return None;
        }

        classify_swipe(x.saturating_sub(start_x), y.saturating_sub(start_y), min_distance)
    }
}
