use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub(super) enum FullscreenError {
    #[error("fullscreen request denied by the host")]
    Denied,
    #[error("already in fullscreen mode")]
    AlreadyActive,
    #[error("not in fullscreen mode")]
    NotActive,
}

/// Host fullscreen API stand-in. Requests complete immediately but can be
/// refused, like a browser rejecting a request without a user gesture.
#[derive(Debug, Default)]
pub(super) struct SimulatedFullscreen {
    active: bool,
    deny_next: bool,
}

impl SimulatedFullscreen {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn deny_next_request(&mut self) {
        self.deny_next = true;
    }

    pub(super) fn request_enter(&mut self) -> Result<(), FullscreenError> {
        self.check_denied()?;
        if self.active {
            return Err(FullscreenError::AlreadyActive);
        }
        self.active = true;
        Ok(())
    }

    pub(super) fn request_exit(&mut self) -> Result<(), FullscreenError> {
        self.check_denied()?;
        if !self.active {
            return Err(FullscreenError::NotActive);
        }
        self.active = false;
        Ok(())
    }

    pub(super) fn is_active(&self) -> bool {
        self.active
    }

    fn check_denied(&mut self) -> Result<(), FullscreenError> {
        if core::mem::take(&mut self.deny_next) {
            return Err(FullscreenError::Denied);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_then_exit() {
        let mut fullscreen = SimulatedFullscreen::new();

        assert_eq!(fullscreen.request_enter(), Ok(()));
        assert!(fullscreen.is_active());
        assert_eq!(
            fullscreen.request_enter(),
            Err(FullscreenError::AlreadyActive)
        );
        assert_eq!(fullscreen.request_exit(), Ok(()));
        assert!(!fullscreen.is_active());
    }

    #[test]
    fn denial_applies_to_one_request() {
        let mut fullscreen = SimulatedFullscreen::new();
        fullscreen.deny_next_request();

        assert_eq!(fullscreen.request_enter(), Err(FullscreenError::Denied));
        assert!(!fullscreen.is_active());
        assert_eq!(fullscreen.request_enter(), Ok(()));
    }
}
