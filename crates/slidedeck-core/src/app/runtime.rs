impl<'o, DK, IN> PresentationApp<'o, DK, IN>
where
    DK: SlideDeck,
    IN: InputProvider,
{
    /// Register an observer for successful slide transitions. Returns `false`
    /// when the subscription list is full.
    pub fn subscribe(&mut self, observer: &'o dyn SlideObserver) -> bool {
        let accepted = self.subscribers.push(Subscriber::External(observer)).is_ok();
        if !accepted {
            warn!("observer list full; subscription dropped");
        }
        accepted
    }

    /// Report the outcome of an asynchronous fullscreen change.
    pub fn set_fullscreen_state(&mut self, active: bool) {
        if self.fullscreen != active {
            self.fullscreen = active;
            self.pending_redraw = true;
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        let request = if self.fullscreen {
            HostRequest::ExitFullscreen
        } else {
            HostRequest::EnterFullscreen
        };
        self.push_host_request(request);
    }

    pub fn show_help(&mut self) {
        self.push_host_request(HostRequest::ShowHelp);
    }

    pub fn show_debug_info(&mut self) {
        let snapshot = self.debug_snapshot();
        info!(
            "debug: slide={}/{} transitioning={} modal_open={} slide_elements={} indicators={} scroll_locked={} pending_timers={}",
            snapshot.current.saturating_add(1),
            snapshot.total,
            snapshot.transitioning,
            snapshot.modal_open,
            snapshot.slide_elements,
            snapshot.indicators,
            snapshot.scroll_locked,
            snapshot.pending_timers
        );
        self.push_host_request(HostRequest::DebugInfo(snapshot));
    }

    fn fire_due_timers(&mut self, now_ms: u64) {
        while let Some(timer) = self.timers.pop_due(now_ms) {
            match timer.kind {
                TimerKind::Settle => self.settle_transition(),
                TimerKind::Reveal { element } => {
                    if timer.generation == self.generation {
                        self.revealed |= 1u64 << element;
                    }
                }
                TimerKind::BoundaryPulse(edge) => {
                    if self.boundary_pulse == Some(edge) {
                        self.boundary_pulse = None;
                    }
                }
                TimerKind::AnnouncementExpiry => self.announcement = None,
            }
            self.pending_redraw = true;
        }
    }

    fn settle_transition(&mut self) {
        match &mut self.modal {
            ModalState::Open(open) => {
                open.restore_lock = false;
                debug!("nav: transition settled while modal open");
            }
            ModalState::Closed => self.lock.release(),
        }
    }

    fn schedule(&mut self, kind: TimerKind, due_ms: u64) {
        if !self.timers.schedule(kind, due_ms, self.generation) {
            warn!("timer set full; dropping {:?}", kind);
        }
    }

    fn push_host_request(&mut self, request: HostRequest) {
        if self.host_requests.push_back(request).is_err() {
            warn!("host request queue full; dropping {:?}", request);
        }
    }
}
