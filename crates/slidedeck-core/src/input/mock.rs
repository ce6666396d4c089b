use super::{InputEvent, InputProvider};

/// Input source for hosts that push events through
/// [`PresentationApp::handle_event`](crate::app::PresentationApp::handle_event)
/// instead of being polled.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(None)
    }
}
