impl<'o, DK, IN> PresentationApp<'o, DK, IN>
where
    DK: SlideDeck,
    IN: InputProvider,
{
    /// Apply one event and report whether the host should keep its default
    /// behavior (scrolling, zoom, context menu).
    pub fn handle_event(&mut self, event: InputEvent, now_ms: u64) -> Disposition {
        match event {
            InputEvent::Key { key, modifiers } => {
                let route = classify_key(key, modifiers, self.focus.region(), self.modal_open());
                trace!(
                    "input: key={:?} modifiers={:?} focus={:?} -> {:?}",
                    key, modifiers, self.focus, route
                );
                if let Some(command) = route.command {
                    self.run_command(command, now_ms);
                }
                route.disposition
            }
            InputEvent::Activate(control) => {
                self.activate(control, now_ms);
                Disposition::PreventDefault
            }
            InputEvent::Focus(target) => {
                self.focus = target;
                Disposition::PassThrough
            }
            InputEvent::Wheel { target } => classify_wheel(target),
            InputEvent::TouchStart { x, y } => {
                self.swipe.begin(x, y);
                Disposition::PassThrough
            }
            InputEvent::TouchMove { y, target, .. } => {
                self.swipe.mark_moved();
                classify_touch_move(
                    target,
                    self.swipe.start_y(),
                    y,
                    self.config.touch_scroll_slop,
                )
            }
            InputEvent::TouchEnd { x, y } => {
                match self.swipe.finish(x, y, self.config.swipe_min_distance) {
                    Some(SwipeDirection::Left) => {
                        let _ = self.next_slide(now_ms);
                    }
                    Some(SwipeDirection::Right) => {
                        let _ = self.previous_slide(now_ms);
                    }
                    None => {}
                }
                Disposition::PassThrough
            }
            InputEvent::ContextMenu { target } => classify_context_menu(target),
            InputEvent::Hover { target } => {
                trace!("input: hover {:?}", target);
                Disposition::PassThrough
            }
            InputEvent::Resize => {
                self.scroll.reassert();
                self.pending_redraw = true;
                Disposition::PassThrough
            }
        }
    }

    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => {
                    let _ = self.handle_event(event, now_ms);
                }
                Ok(None) => break,
                Err(_) => {
                    warn!("input provider failed; dropping pending input batch");
                    break;
                }
            }
        }
    }

    fn run_command(&mut self, command: Command, now_ms: u64) {
        match command {
            Command::Next => {
                let _ = self.next_slide(now_ms);
            }
            Command::Previous => {
                let _ = self.previous_slide(now_ms);
            }
            Command::First => {
                let _ = self.first_slide(now_ms);
            }
            Command::Last => {
                let _ = self.last_slide(now_ms);
            }
            Command::ToggleFullscreen => self.toggle_fullscreen(),
            Command::ShowHelp => self.show_help(),
            Command::ShowDebug => self.show_debug_info(),
            Command::CloseModal => {
                let _ = self.close_modal(now_ms);
            }
        }
    }

    fn activate(&mut self, control: Control, now_ms: u64) {
        match control {
            Control::Previous => {
                let _ = self.previous_slide(now_ms);
            }
            Control::Next => {
                let _ = self.next_slide(now_ms);
            }
            Control::Indicator(index) => {
                let _ = self.go_to_slide(index, now_ms);
            }
            Control::ModalTag(tag) => {
                self.focus = FocusTarget::ModalTag(tag);
                let _ = self.open_tag(tag, now_ms);
            }
            Control::ModalClose | Control::ModalBackdrop => {
                let _ = self.close_modal(now_ms);
            }
        }
    }
}
