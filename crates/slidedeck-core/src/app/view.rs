impl<'o, DK, IN> PresentationApp<'o, DK, IN>
where
    DK: SlideDeck,
    IN: InputProvider,
{
    pub fn new(deck: DK, input: IN, config: PresenterConfig) -> Self {
        let slide_count = deck.slide_count();
        if slide_count == 0 {
            warn!("deck has no slides; presenting a single empty placeholder");
        }

        let mut app = Self {
            total: slide_count.max(1),
            deck,
            input,
            config: config.sanitized(),
            current: 0,
            lock: TransitionLock::new(),
            generation: 0,
            timers: TimerSet::new(),
            transition: None,
            revealed: 0,
            entrance_total: 0,
            boundary_pulse: None,
            focus: FocusTarget::Document,
            modal: ModalState::Closed,
            swipe: SwipeTracker::new(),
            scroll: DocumentScroll::locked(),
            fullscreen: false,
            announcement: None,
            subscribers: Vec::new(),
            host_requests: Deque::new(),
            pending_redraw: true,
        };
        let _ = app.subscribers.push(Subscriber::LiveRegion);
        app.reveal_entrance_immediately();

        debug!(
            "presentation ready slides={} indicators={} tags={} modals={}",
            app.total,
            app.deck.indicator_count(),
            app.deck.tag_button_count(),
            app.deck.modal_count()
        );
        app
    }

    /// Drain polled input, fire due timers, and report whether the view changed.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);
        self.fire_due_timers(now_ms);

        let rendered = if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        };

        if self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            rendered
        }
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let slide = self.deck.slide_at(self.current);
        let modal = match &self.modal {
            ModalState::Open(open) => Some(ModalView {
                title: open.title.as_str(),
                body: self
                    .deck
                    .modal_at(open.template)
                    .map(|template| template.body)
                    .unwrap_or(""),
            }),
            ModalState::Closed => None,
        };

        f(Screen {
            active_slide: self.current,
            slide_total: self.total,
            indicator_total: self.deck.indicator_count(),
            progress_pct: progress_pct(self.current, self.total),
            previous_enabled: self.current > 0,
            next_enabled: self.current.saturating_add(1) < self.total,
            slide_title: slide.map(|s| s.title).unwrap_or(""),
            title_suffix: self.deck.document_title_suffix(),
            boundary_pulse: self.boundary_pulse,
            entrance: EntranceProgress {
                revealed: self.revealed.count_ones() as u8,
                total: self.entrance_total,
            },
            announcement: self.announcement.as_ref().map(|text| text.as_str()),
            modal,
            focus: self.focus,
            fullscreen: self.fullscreen,
            document_scroll_locked: self.scroll.is_locked(),
            animation: self.transition_frame(now_ms),
        });
    }

    pub fn current_slide_data(&self) -> SlideData {
        SlideData {
            current: self.current,
            total: self.total,
            progress_pct: progress_pct(self.current, self.total),
            is_transitioning: self.lock.is_engaged(),
        }
    }

    pub fn debug_snapshot(&self) -> DebugSnapshot {
        DebugSnapshot {
            current: self.current,
            total: self.total,
            transitioning: self.lock.is_engaged(),
            modal_open: self.modal_open(),
            slide_elements: self.deck.slide_count(),
            indicators: self.deck.indicator_count(),
            scroll_locked: self.scroll.is_locked(),
            pending_timers: self.timers.len().min(u8::MAX as usize) as u8,
        }
    }

    pub fn current_slide(&self) -> u16 {
        self.current
    }

    pub fn total_slides(&self) -> u16 {
        self.total
    }

    pub fn phase(&self) -> NavPhase {
        if self.lock.is_engaged() {
            NavPhase::Transitioning
        } else {
            NavPhase::Idle
        }
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_engaged()
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn document_scroll(&self) -> DocumentScroll {
        self.scroll
    }

    pub fn help_text(&self) -> &str {
        self.deck.help_text()
    }

    pub fn deck(&self) -> &DK {
        &self.deck
    }

    /// Earliest pending timer deadline, for hosts that sleep between ticks.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.timers.next_due_ms()
    }

    /// Next queued host request, oldest first.
    pub fn pop_host_request(&mut self) -> Option<HostRequest> {
        self.host_requests.pop_front()
    }

    /// Hand every queued host request to `f`; returns how many were drained.
    pub fn drain_host_requests<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(HostRequest),
    {
        let mut drained = 0;
        while let Some(request) = self.host_requests.pop_front() {
            f(request);
            drained += 1;
        }
        drained
    }
}
