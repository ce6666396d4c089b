impl<'o, DK, IN> PresentationApp<'o, DK, IN>
where
    DK: SlideDeck,
    IN: InputProvider,
{
    pub fn go_to_slide(&mut self, index: u16, now_ms: u64) -> NavOutcome {
        self.fire_due_timers(now_ms);
        self.transition_to(index, now_ms)
    }

    pub fn next_slide(&mut self, now_ms: u64) -> NavOutcome {
        self.fire_due_timers(now_ms);
        if self.lock.is_engaged() {
            debug!("nav: next ignored while locked current={}", self.current);
            return NavOutcome::Ignored;
        }

        if self.current.saturating_add(1) < self.total {
            self.transition_to(self.current + 1, now_ms)
        } else {
            debug!("nav: already at last slide");
            self.boundary_feedback(Edge::End, now_ms)
        }
    }

    pub fn previous_slide(&mut self, now_ms: u64) -> NavOutcome {
        self.fire_due_timers(now_ms);
        if self.lock.is_engaged() {
            debug!("nav: previous ignored while locked current={}", self.current);
            return NavOutcome::Ignored;
        }

        if self.current > 0 {
            self.transition_to(self.current - 1, now_ms)
        } else {
            debug!("nav: already at first slide");
            self.boundary_feedback(Edge::Start, now_ms)
        }
    }

    pub fn first_slide(&mut self, now_ms: u64) -> NavOutcome {
        self.go_to_slide(0, now_ms)
    }

    pub fn last_slide(&mut self, now_ms: u64) -> NavOutcome {
        self.go_to_slide(self.total - 1, now_ms)
    }

    fn transition_to(&mut self, index: u16, now_ms: u64) -> NavOutcome {
        if self.lock.is_engaged() {
            debug!("nav: go_to {} ignored while locked", index);
            return NavOutcome::Ignored;
        }
        if index >= self.total || index == self.current {
            debug!(
                "nav: go_to {} ignored current={} total={}",
                index, self.current, self.total
            );
            return NavOutcome::Ignored;
        }

        let from = self.current;
        self.generation = self.generation.wrapping_add(1);
        let cancelled = self.timers.cancel_stale(self.generation);

        self.lock.engage();
        self.current = index;
        self.schedule(TimerKind::Settle, now_ms + self.config.settle_ms as u64);

        let kind = if index > from {
            AnimationKind::SlideLeft
        } else {
            AnimationKind::SlideRight
        };
        self.transition = Some(AnimationSpec::new(kind, now_ms, self.config.transition_ms));
        self.start_entrance(now_ms);

        self.focus = FocusTarget::SlideContent(index);
        self.push_host_request(HostRequest::FocusSlideContent { slide: index });

        debug!(
            "nav: slide {} -> {} of {} generation={} cancelled_timers={} entrance={}",
            from, index, self.total, self.generation, cancelled, self.entrance_total
        );

        self.notify_slide_changed(from, now_ms);
        self.pending_redraw = true;
        NavOutcome::Moved
    }

    fn boundary_feedback(&mut self, edge: Edge, now_ms: u64) -> NavOutcome {
        self.timers.cancel_kind(TimerKind::BoundaryPulse(edge));
        self.boundary_pulse = Some(edge);
        self.schedule(
            TimerKind::BoundaryPulse(edge),
            now_ms + self.config.boundary_pulse_ms as u64,
        );
        self.pending_redraw = true;
        NavOutcome::Boundary(edge)
    }

    /// Hide every entrance element of the new slide and schedule its reveals.
    fn start_entrance(&mut self, now_ms: u64) {
        self.revealed = 0;
        self.entrance_total = 0;
        let Some(slide) = self.deck.slide_at(self.current) else {
            return;
        };

        let mut element = 0usize;
        'groups: for group in slide.entrance {
            for index in 0..group.count {
                if element >= MAX_ENTRANCE_ELEMENTS {
                    break 'groups;
                }

                let due_ms = now_ms + group.kind.reveal_delay_ms(index) as u64;
                let kind = TimerKind::Reveal {
                    element: element as u8,
                };
                if !self.timers.schedule(kind, due_ms, self.generation) {
                    self.revealed |= 1u64 << element;
                }
                element += 1;
            }
        }
        self.entrance_total = element as u8;
    }

    fn reveal_entrance_immediately(&mut self) {
        let count = self
            .deck
            .slide_at(self.current)
            .map(|slide| slide.entrance_element_count())
            .unwrap_or(0)
            .min(MAX_ENTRANCE_ELEMENTS);

        self.entrance_total = count as u8;
        self.revealed = if count == 0 { 0 } else { u64::MAX >> (64 - count) };
    }

    fn transition_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.transition.and_then(|spec| spec.frame(now_ms))
    }

    fn notify_slide_changed(&mut self, from: u16, now_ms: u64) {
        for position in 0..self.subscribers.len() {
            let subscriber = self.subscribers[position];
            match subscriber {
                Subscriber::LiveRegion => self.announce(now_ms),
                Subscriber::External(observer) => {
                    let slide = self.deck.slide_at(self.current);
                    observer.on_slide_changed(&SlideChange {
                        from,
                        to: self.current,
                        total: self.total,
                        title: slide.map(|s| s.title).unwrap_or(""),
                        announcement: slide.map(|s| s.announcement).unwrap_or(""),
                        at_ms: now_ms,
                    });
                }
            }
        }
    }

    /// Replace the live-region text; the previous expiry timer no longer applies.
    fn announce(&mut self, now_ms: u64) {
        let mut text: String<ANNOUNCEMENT_BYTES> = String::new();
        let words = self.deck.position_words();
        let _ = write!(
            text,
            "{} {} {} {}: ",
            words.slide,
            self.current + 1,
            words.of,
            self.total
        );
        if let Some(slide) = self.deck.slide_at(self.current) {
            push_truncated(&mut text, slide.announcement);
        }

        self.timers.cancel_kind(TimerKind::AnnouncementExpiry);
        self.announcement = Some(text);
        self.schedule(
            TimerKind::AnnouncementExpiry,
            now_ms + self.config.announcement_ms as u64,
        );
    }
}
