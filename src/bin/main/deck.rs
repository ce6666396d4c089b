use slidedeck_core::deck::{
    EntranceGroup, EntranceKind, ModalTemplate, PositionWords, SlideRef, StaticDeck, TagButton,
};

const TITLE_SUFFIX: &str = "Trabajo colaborativo";
const POSITION_WORDS: PositionWords<'static> = PositionWords {
    slide: "Diapositiva",
    of: "de",
};

const COVER: [EntranceGroup; 1] = [EntranceGroup::new(EntranceKind::Content, 3)];
const PILLARS: [EntranceGroup; 2] = [
    EntranceGroup::new(EntranceKind::Content, 2),
    EntranceGroup::new(EntranceKind::PillarCard, 3),
];
const RISKS: [EntranceGroup; 2] = [
    EntranceGroup::new(EntranceKind::Content, 2),
    EntranceGroup::new(EntranceKind::ProcessStep, 5),
];
const CONTROLS: [EntranceGroup; 2] = [
    EntranceGroup::new(EntranceKind::Content, 2),
    EntranceGroup::new(EntranceKind::ControlCategory, 4),
];
const POLICIES: [EntranceGroup; 2] = [
    EntranceGroup::new(EntranceKind::Content, 2),
    EntranceGroup::new(EntranceKind::FindingCard, 4),
];
const CONTINUITY: [EntranceGroup; 2] = [
    EntranceGroup::new(EntranceKind::Content, 2),
    EntranceGroup::new(EntranceKind::ComponentCard, 4),
];
const CLOSING: [EntranceGroup; 1] = [EntranceGroup::new(EntranceKind::Content, 3)];

const SLIDES: [SlideRef<'static>; 8] = [
    SlideRef::new(
        "Portada - Task 2 Attacking and defending",
        "Portada del trabajo colaborativo",
    )
    .with_entrance(&COVER),
    SlideRef::new(
        "Pilares de Seguridad Informática",
        "Pilares fundamentales de la seguridad informática con aportes de Edwin Pantoja y Manuel Menéndez",
    )
    .with_entrance(&PILLARS),
    SlideRef::new(
        "Gestión de Riesgos",
        "Gestión de riesgos por Manuel Enrique Menéndez Olivares",
    )
    .with_entrance(&RISKS),
    SlideRef::new(
        "Controles de Seguridad",
        "Controles de seguridad según ISO 27001 por Manuel Enrique Menéndez Olivares",
    )
    .with_entrance(&CONTROLS),
    SlideRef::new(
        "Políticas de Seguridad",
        "Políticas de seguridad organizacional por Manuel Enrique Menéndez Olivares",
    )
    .with_entrance(&POLICIES),
    SlideRef::new(
        "Planes de Continuidad",
        "Planes de continuidad investigados por Hernando Arevalo Arevalo y complementados por Manuel Menéndez",
    )
    .with_entrance(&CONTINUITY),
    SlideRef::new("Conclusiones", "Conclusiones del trabajo colaborativo").with_entrance(&CLOSING),
    SlideRef::new("Referencias", "Referencias académicas y reconocimientos")
        .with_entrance(&CLOSING),
];

const TAGS: [TagButton<'static>; 3] = [
    TagButton {
        target: "iso27001",
        title: "ISO/IEC 27001",
    },
    TagButton {
        target: "nist-csf",
        title: "NIST Cybersecurity Framework",
    },
    TagButton {
        target: "bia",
        title: "Análisis de impacto al negocio",
    },
];

const MODALS: [ModalTemplate<'static>; 3] = [
    ModalTemplate {
        id: "iso27001",
        body: "Norma internacional para sistemas de gestión de seguridad de la información. \
               El Anexo A agrupa los controles organizacionales, de personas, físicos y tecnológicos.",
    },
    ModalTemplate {
        id: "nist-csf",
        body: "Marco de referencia con las funciones Gobernar, Identificar, Proteger, Detectar, \
               Responder y Recuperar.",
    },
    ModalTemplate {
        id: "bia",
        body: "Identifica procesos críticos, el tiempo máximo tolerable de interrupción \
               y los objetivos de tiempo y punto de recuperación.",
    },
];

const HELP: &str = "\
CONTROLES DE NAVEGACIÓN - Task 2 Attacking and defending

TECLADO:
  Flechas izquierda/derecha: navegar entre diapositivas
  Espacio/PageDown: siguiente diapositiva
  PageUp: diapositiva anterior
  Home: primera diapositiva (Portada)
  End: última diapositiva (Referencias)
  Escape: volver al inicio o cerrar el modal
  F11: pantalla completa
  Ctrl+D: información de debug
  Shift+?: esta ayuda

MOUSE/TÁCTIL:
  Botones de navegación e indicadores laterales
  Gestos de deslizar en pantallas táctiles";

pub(super) const fn course_deck() -> StaticDeck<'static> {
    StaticDeck::new(&SLIDES, TITLE_SUFFIX)
        .with_tag_buttons(&TAGS)
        .with_modals(&MODALS)
        .with_help(HELP)
        .with_position_words(POSITION_WORDS)
}
