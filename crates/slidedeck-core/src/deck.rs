//! Slide deck contract: fixed-order slides, tag buttons, and modal templates.

/// Staggered entrance family for a slide's content elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntranceKind {
    /// Direct children of the scrollable content region.
    Content,
    PillarCard,
    ProcessStep,
    ControlCategory,
    FindingCard,
    ComponentCard,
}

impl EntranceKind {
    /// Reveal delay of the `index`-th element of this family, relative to the
    /// start of the transition.
    pub const fn reveal_delay_ms(self, index: u8) -> u32 {
        let (base, step) = match self {
            Self::Content => (50, 100),
            Self::PillarCard => (250, 120),
            Self::ProcessStep => (300, 100),
            Self::ControlCategory => (250, 100),
            Self::FindingCard => (200, 130),
            Self::ComponentCard => (200, 110),
        };
        base + step * index as u32
    }
}

/// A run of `count` elements that share one entrance family.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EntranceGroup {
    pub kind: EntranceKind,
    pub count: u8,
}

impl EntranceGroup {
    pub const fn new(kind: EntranceKind, count: u8) -> Self {
        Self { kind, count }
    }
}

/// Handle to one slide panel and its indicator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlideRef<'a> {
    /// Short title used for the document title.
    pub title: &'a str,
    /// Longer description read out by the live region.
    pub announcement: &'a str,
    pub entrance: &'a [EntranceGroup],
}

impl<'a> SlideRef<'a> {
    pub const fn new(title: &'a str, announcement: &'a str) -> Self {
        Self {
            title,
            announcement,
            entrance: &[],
        }
    }

    pub const fn with_entrance(mut self, entrance: &'a [EntranceGroup]) -> Self {
        self.entrance = entrance;
        self
    }

    pub fn entrance_element_count(&self) -> usize {
        self.entrance.iter().map(|group| group.count as usize).sum()
    }
}

/// Button that opens a modal template.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TagButton<'a> {
    pub target: &'a str,
    pub title: &'a str,
}

/// Supplementary content addressable by identifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ModalTemplate<'a> {
    pub id: &'a str,
    pub body: &'a str,
}

/// Words around the position in a live-region announcement:
/// `{slide} {n} {of} {total}: {announcement}`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PositionWords<'a> {
    pub slide: &'a str,
    pub of: &'a str,
}

impl PositionWords<'static> {
    pub const ENGLISH: Self = Self {
        slide: "Slide",
        of: "of",
    };
}

/// Read-only document structure consumed by the presentation.
pub trait SlideDeck {
    fn slide_count(&self) -> u16;
    fn slide_at(&self, index: u16) -> Option<SlideRef<'_>>;

    /// Number of indicator elements; normally one per slide.
    fn indicator_count(&self) -> u16 {
        self.slide_count()
    }

    /// Appended to the slide title when composing the document title.
    fn document_title_suffix(&self) -> &str;

    fn tag_button_count(&self) -> u16 {
        0
    }

    fn tag_button_at(&self, _index: u16) -> Option<TagButton<'_>> {
        None
    }

    fn modal_count(&self) -> u16 {
        0
    }

    fn modal_at(&self, _index: u16) -> Option<ModalTemplate<'_>> {
        None
    }

    fn help_text(&self) -> &str {
        ""
    }

    fn position_words(&self) -> PositionWords<'_> {
        PositionWords::ENGLISH
    }

    /// Position of the modal template with the given identifier.
    fn find_modal(&self, id: &str) -> Option<u16> {
        (0..self.modal_count()).find(|&index| self.modal_at(index).is_some_and(|t| t.id == id))
    }
}

/// Deck backed by borrowed static tables.
#[derive(Clone, Copy, Debug)]
pub struct StaticDeck<'a> {
    slides: &'a [SlideRef<'a>],
    title_suffix: &'a str,
    indicators: Option<u16>,
    tags: &'a [TagButton<'a>],
    modals: &'a [ModalTemplate<'a>],
    help: &'a str,
    position_words: PositionWords<'a>,
}

impl<'a> StaticDeck<'a> {
    pub const fn new(slides: &'a [SlideRef<'a>], title_suffix: &'a str) -> Self {
        Self {
            slides,
            title_suffix,
            indicators: None,
            tags: &[],
            modals: &[],
            help: "",
            position_words: PositionWords::ENGLISH,
        }
    }

    pub const fn with_indicator_count(mut self, indicators: u16) -> Self {
        self.indicators = Some(indicators);
        self
    }

    pub const fn with_tag_buttons(mut self, tags: &'a [TagButton<'a>]) -> Self {
        self.tags = tags;
        self
    }

    pub const fn with_modals(mut self, modals: &'a [ModalTemplate<'a>]) -> Self {
        self.modals = modals;
        self
    }

    pub const fn with_help(mut self, help: &'a str) -> Self {
        self.help = help;
        self
    }

    pub const fn with_position_words(mut self, words: PositionWords<'a>) -> Self {
        self.position_words = words;
        self
    }
}

impl SlideDeck for StaticDeck<'_> {
    fn slide_count(&self) -> u16 {
        self.slides.len().min(u16::MAX as usize) as u16
    }

    fn slide_at(&self, index: u16) -> Option<SlideRef<'_>> {
        self.slides.get(index as usize).copied()
    }

    fn indicator_count(&self) -> u16 {
        self.indicators.unwrap_or_else(|| self.slide_count())
    }

    fn document_title_suffix(&self) -> &str {
        self.title_suffix
    }

    fn tag_button_count(&self) -> u16 {
        self.tags.len().min(u16::MAX as usize) as u16
    }

    fn tag_button_at(&self, index: u16) -> Option<TagButton<'_>> {
        self.tags.get(index as usize).copied()
    }

    fn modal_count(&self) -> u16 {
        self.modals.len().min(u16::MAX as usize) as u16
    }

    fn modal_at(&self, index: u16) -> Option<ModalTemplate<'_>> {
        self.modals.get(index as usize).copied()
    }

    fn help_text(&self) -> &str {
        self.help
    }

    fn position_words(&self) -> PositionWords<'_> {
        self.position_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUPS: [EntranceGroup; 2] = [
        EntranceGroup::new(EntranceKind::Content, 3),
        EntranceGroup::new(EntranceKind::PillarCard, 2),
    ];
    const SLIDES: [SlideRef<'static>; 2] = [
        SlideRef::new("Intro", "Opening slide"),
        SlideRef::new("Pillars", "Security pillars").with_entrance(&GROUPS),
    ];
    const MODALS: [ModalTemplate<'static>; 2] = [
        ModalTemplate {
            id: "tpl-a",
            body: "A",
        },
        ModalTemplate {
            id: "tpl-b",
            body: "B",
        },
    ];

    #[test]
    fn static_deck_exposes_fixed_tables() {
        let deck = StaticDeck::new(&SLIDES, "Deck").with_modals(&MODALS);

        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.indicator_count(), 2);
        assert_eq!(deck.slide_at(1).map(|s| s.title), Some("Pillars"));
        assert!(deck.slide_at(2).is_none());
        assert_eq!(deck.find_modal("tpl-b"), Some(1));
        assert_eq!(deck.find_modal("missing"), None);
    }

    #[test]
    fn page_may_carry_fewer_indicators_than_slides() {
        let deck = StaticDeck::new(&SLIDES, "Deck").with_indicator_count(1);

        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.indicator_count(), 1);
        assert_eq!(deck.position_words(), PositionWords::ENGLISH);
    }

    #[test]
    fn entrance_delays_follow_family_stagger() {
        assert_eq!(EntranceKind::Content.reveal_delay_ms(0), 50);
        assert_eq!(EntranceKind::Content.reveal_delay_ms(2), 250);
        assert_eq!(EntranceKind::FindingCard.reveal_delay_ms(1), 330);
        assert_eq!(SLIDES[1].entrance_element_count(), 5);
    }
}
