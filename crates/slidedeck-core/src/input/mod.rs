//! Input abstraction layer.

pub mod arbitration;
mod mock;

pub use mock::MockInput;

/// Keys the presentation reacts to. Anything else arrives as [`Key::Char`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Space,
    Escape,
    F5,
    F11,
    Char(char),
}

/// Modifier state held while a key was pressed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
    };

    pub const fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub const fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub const fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Ctrl on most platforms, Cmd on macOS.
    pub const fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Part of the page an event targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Region {
    /// Anything outside the scrollable content: frame, controls, indicators.
    Chrome,
    /// The active slide's scrollable content region.
    Content,
    /// A hyperlink or reference entry.
    Link { in_content: bool },
    ModalBackdrop,
    ModalBody,
}

impl Region {
    /// Whether native scrolling is allowed for events targeting this region.
    pub const fn scrollable(self) -> bool {
        matches!(
            self,
            Self::Content | Self::ModalBody | Self::Link { in_content: true }
        )
    }
}

/// Activatable controls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Control {
    Previous,
    Next,
    Indicator(u16),
    /// Tag button opening a modal, by tag-button index.
    ModalTag(u16),
    ModalClose,
    ModalBackdrop,
}

/// Focusable elements.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FocusTarget {
    #[default]
    Document,
    PreviousButton,
    NextButton,
    Indicator(u16),
    SlideContent(u16),
    ModalTag(u16),
    ModalClose,
}

impl FocusTarget {
    /// Region a keyboard event lands in while this element has focus.
    pub const fn region(self) -> Region {
        match self {
            Self::SlideContent(_) => Region::Content,
            Self::ModalClose => Region::ModalBody,
            Self::Document
            | Self::PreviousButton
            | Self::NextButton
            | Self::Indicator(_)
            | Self::ModalTag(_) => Region::Chrome,
        }
    }
}

/// Raw events consumed by the presentation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Key { key: Key, modifiers: Modifiers },
    Activate(Control),
    Focus(FocusTarget),
    Wheel { target: Region },
    TouchStart { x: i32, y: i32 },
    TouchMove { x: i32, y: i32, target: Region },
    TouchEnd { x: i32, y: i32 },
    ContextMenu { target: Region },
    /// Pointer entered an element; visual only.
    Hover { target: Region },
    Resize,
}

impl InputEvent {
    pub const fn key(key: Key) -> Self {
        Self::Key {
            key,
            modifiers: Modifiers::NONE,
        }
    }
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
