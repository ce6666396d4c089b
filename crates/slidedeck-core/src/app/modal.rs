impl<'o, DK, IN> PresentationApp<'o, DK, IN>
where
    DK: SlideDeck,
    IN: InputProvider,
{
    /// Open the overlay on the template registered as `content_id`.
    ///
    /// Returns `false` when a modal is already open or the template does not
    /// exist; neither case changes any state.
    pub fn open_modal(&mut self, content_id: &str, title: &str, now_ms: u64) -> bool {
        let Some(template) = self.deck.find_modal(content_id) else {
            debug!("modal: unknown template {:?}", content_id);
            return false;
        };

        let mut text = String::new();
        push_truncated(&mut text, title);
        self.open_template(template, text, now_ms)
    }

    /// Open the modal targeted by tag button `tag`, titled with the button's label.
    pub fn open_tag(&mut self, tag: u16, now_ms: u64) -> bool {
        let resolved = self.deck.tag_button_at(tag).and_then(|button| {
            let template = self.deck.find_modal(button.target)?;
            let mut title = String::new();
            push_truncated(&mut title, button.title);
            Some((template, title))
        });
        let Some((template, title)) = resolved else {
            debug!("modal: tag {} has no template", tag);
            return false;
        };

        self.open_template(template, title, now_ms)
    }

    /// Hide the overlay, restore the pre-modal lock value, and return focus.
    pub fn close_modal(&mut self, now_ms: u64) -> bool {
        self.fire_due_timers(now_ms);
        let ModalState::Open(open) = core::mem::take(&mut self.modal) else {
            return false;
        };

        self.lock.set(open.restore_lock);
        self.focus = open.previously_focused;
        self.push_host_request(HostRequest::Focus(open.previously_focused));
        self.scroll.reassert();
        self.pending_redraw = true;

        debug!(
            "modal: closed template={} lock_restored={} focus={:?}",
            open.template, open.restore_lock, open.previously_focused
        );
        true
    }

    pub fn modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Open(_))
    }

    fn open_template(
        &mut self,
        template: u16,
        title: String<MODAL_TITLE_BYTES>,
        now_ms: u64,
    ) -> bool {
        self.fire_due_timers(now_ms);
        if self.modal_open() {
            debug!("modal: already open, template {} ignored", template);
            return false;
        }

        let restore_lock = self.lock.is_engaged();
        self.lock.engage();
        self.modal = ModalState::Open(OpenModal {
            template,
            title,
            previously_focused: self.focus,
            restore_lock,
        });

        self.focus = FocusTarget::ModalClose;
        self.push_host_request(HostRequest::Focus(FocusTarget::ModalClose));
        self.scroll.reassert();
        self.pending_redraw = true;

        debug!(
            "modal: opened template={} restore_lock={}",
            template, restore_lock
        );
        true
    }
}
