//! Line-oriented input scripts.
//!
//! One command per line; blank lines and lines starting with `#` are
//! skipped. Slide, indicator, and tag numbers are zero-based.
//!
//! ```text
//! key right
//! key d ctrl
//! click indicator 3
//! focus content 0
//! wheel chrome
//! swipe 300 200 240 205
//! wait 350
//! ```

use std::str::{FromStr, SplitWhitespace};

use slidedeck_core::input::{Control, FocusTarget, InputEvent, Key, Modifiers, Region};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub(super) enum ScriptStep {
    Event(InputEvent),
    /// Advance the virtual clock.
    Wait(u64),
    GoTo(u16),
    OpenModal { id: String, title: String },
    Help,
    Debug,
    Fullscreen,
    /// Make the simulated host refuse its next fullscreen request.
    DenyFullscreen,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(super) enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: `{command}` expects {expected}")]
    MissingArgument {
        line: usize,
        command: String,
        expected: &'static str,
    },
    #[error("line {line}: `{value}` is not a valid number")]
    InvalidNumber { line: usize, value: String },
    #[error("line {line}: unknown {kind} `{name}`")]
    UnknownName {
        line: usize,
        kind: &'static str,
        name: String,
    },
}

pub(super) fn parse_script(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let mut tokens = Tokens::new(index + 1, text);
        parse_line(&mut tokens, &mut steps)?;
    }

    Ok(steps)
}

fn parse_line(tokens: &mut Tokens<'_>, steps: &mut Vec<ScriptStep>) -> Result<(), ScriptError> {
    let line = tokens.line;
    match tokens.command {
        "key" => {
            let key = parse_key(line, tokens.word("a key name")?)?;
            let mut modifiers = Modifiers::NONE;
            for name in tokens.by_ref() {
                modifiers = match name {
                    "ctrl" => modifiers.with_ctrl(),
                    "meta" | "cmd" => modifiers.with_meta(),
                    "shift" => modifiers.with_shift(),
                    other => return Err(unknown(line, "modifier", other)),
                };
            }
            steps.push(ScriptStep::Event(InputEvent::Key { key, modifiers }));
        }
        "click" => {
            let control = match tokens.word("a control")? {
                "prev" | "previous" => Control::Previous,
                "next" => Control::Next,
                "indicator" => Control::Indicator(tokens.number("an indicator index")?),
                "tag" => Control::ModalTag(tokens.number("a tag index")?),
                "close" => Control::ModalClose,
                "backdrop" => Control::ModalBackdrop,
                other => return Err(unknown(line, "control", other)),
            };
            steps.push(ScriptStep::Event(InputEvent::Activate(control)));
        }
        "focus" => {
            let target = match tokens.word("a focus target")? {
                "document" => FocusTarget::Document,
                "prev" | "previous" => FocusTarget::PreviousButton,
                "next" => FocusTarget::NextButton,
                "indicator" => FocusTarget::Indicator(tokens.number("an indicator index")?),
                "content" => FocusTarget::SlideContent(tokens.number("a slide index")?),
                "tag" => FocusTarget::ModalTag(tokens.number("a tag index")?),
                "close" => FocusTarget::ModalClose,
                other => return Err(unknown(line, "focus target", other)),
            };
            steps.push(ScriptStep::Event(InputEvent::Focus(target)));
        }
        "wheel" => {
            let target = tokens.region()?;
            steps.push(ScriptStep::Event(InputEvent::Wheel { target }));
        }
        "touch" => {
            let event = match tokens.word("start, move, or end")? {
                "start" => InputEvent::TouchStart {
                    x: tokens.number("x")?,
                    y: tokens.number("y")?,
                },
                "move" => InputEvent::TouchMove {
                    x: tokens.number("x")?,
                    y: tokens.number("y")?,
                    target: tokens.region()?,
                },
                "end" => InputEvent::TouchEnd {
                    x: tokens.number("x")?,
                    y: tokens.number("y")?,
                },
                other => return Err(unknown(line, "touch phase", other)),
            };
            steps.push(ScriptStep::Event(event));
        }
        "swipe" => {
            let (x0, y0) = (tokens.number("start x")?, tokens.number("start y")?);
            let (x1, y1) = (tokens.number("end x")?, tokens.number("end y")?);
            steps.push(ScriptStep::Event(InputEvent::TouchStart { x: x0, y: y0 }));
            steps.push(ScriptStep::Event(InputEvent::TouchMove {
                x: x1,
                y: y1,
                target: Region::Chrome,
            }));
            steps.push(ScriptStep::Event(InputEvent::TouchEnd { x: x1, y: y1 }));
        }
        "contextmenu" => {
            let target = tokens.region()?;
            steps.push(ScriptStep::Event(InputEvent::ContextMenu { target }));
        }
        "hover" => {
            let target = tokens.region()?;
            steps.push(ScriptStep::Event(InputEvent::Hover { target }));
        }
        "resize" => steps.push(ScriptStep::Event(InputEvent::Resize)),
        "wait" => steps.push(ScriptStep::Wait(tokens.number("milliseconds")?)),
        "goto" => steps.push(ScriptStep::GoTo(tokens.number("a slide index")?)),
        "modal" => {
            let id = tokens.word("a template id")?.to_owned();
            let title = tokens.collect::<Vec<_>>().join(" ");
            steps.push(ScriptStep::OpenModal { id, title });
        }
        "help" => steps.push(ScriptStep::Help),
        "debug" => steps.push(ScriptStep::Debug),
        "fullscreen" => steps.push(ScriptStep::Fullscreen),
        "deny-fullscreen" => steps.push(ScriptStep::DenyFullscreen),
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_owned(),
            });
        }
    }

    Ok(())
}

fn parse_key(line: usize, name: &str) -> Result<Key, ScriptError> {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(Key::Char(ch));
    }

    let key = match name.to_ascii_lowercase().as_str() {
        "left" => Key::Left,
        "right" => Key::Right,
        "up" => Key::Up,
        "down" => Key::Down,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "home" => Key::Home,
        "end" => Key::End,
        "space" => Key::Space,
        "escape" | "esc" => Key::Escape,
        "f5" => Key::F5,
        "f11" => Key::F11,
        _ => return Err(unknown(line, "key", name)),
    };
    Ok(key)
}

fn unknown(line: usize, kind: &'static str, name: &str) -> ScriptError {
    ScriptError::UnknownName {
        line,
        kind,
        name: name.to_owned(),
    }
}

struct Tokens<'a> {
    line: usize,
    command: &'a str,
    rest: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(line: usize, text: &'a str) -> Self {
        let mut rest = text.split_whitespace();
        let command = rest.next().unwrap_or_default();
        Self {
            line,
            command,
            rest,
        }
    }

    fn word(&mut self, expected: &'static str) -> Result<&'a str, ScriptError> {
        self.rest.next().ok_or_else(|| ScriptError::MissingArgument {
            line: self.line,
            command: self.command.to_owned(),
            expected,
        })
    }

    fn number<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ScriptError> {
        let value = self.word(expected)?;
        value.parse().map_err(|_| ScriptError::InvalidNumber {
            line: self.line,
            value: value.to_owned(),
        })
    }

    fn region(&mut self) -> Result<Region, ScriptError> {
        let region = match self.word("a region")? {
            "chrome" => Region::Chrome,
            "content" => Region::Content,
            "link" => Region::Link { in_content: false },
            "content-link" => Region::Link { in_content: true },
            "backdrop" => Region::ModalBackdrop,
            "modal" => Region::ModalBody,
            other => return Err(unknown(self.line, "region", other)),
        };
        Ok(region)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.rest.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_with_modifiers() {
        let steps = parse_script("key right\nkey d ctrl\nkey ? shift\nkey F11").unwrap();

        assert_eq!(
            steps,
            vec![
                ScriptStep::Event(InputEvent::key(Key::Right)),
                ScriptStep::Event(InputEvent::Key {
                    key: Key::Char('d'),
                    modifiers: Modifiers::NONE.with_ctrl(),
                }),
                ScriptStep::Event(InputEvent::Key {
                    key: Key::Char('?'),
                    modifiers: Modifiers::NONE.with_shift(),
                }),
                ScriptStep::Event(InputEvent::key(Key::F11)),
            ]
        );
    }

    #[test]
    fn swipe_expands_to_touch_sequence() {
        let steps = parse_script("swipe 300 200 240 205").unwrap();

        assert_eq!(steps.len(), 3);
        assert_eq!(
            steps[0],
            ScriptStep::Event(InputEvent::TouchStart { x: 300, y: 200 })
        );
        assert_eq!(
            steps[2],
            ScriptStep::Event(InputEvent::TouchEnd { x: 240, y: 205 })
        );
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let source = "# warm up\n\n  wait 300\nclick indicator 4\nmodal iso27001 ISO 27001\n";
        let steps = parse_script(source).unwrap();

        assert_eq!(
            steps,
            vec![
                ScriptStep::Wait(300),
                ScriptStep::Event(InputEvent::Activate(Control::Indicator(4))),
                ScriptStep::OpenModal {
                    id: "iso27001".to_owned(),
                    title: "ISO 27001".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn errors_carry_line_numbers() {
        assert_eq!(
            parse_script("wait 10\njump 3"),
            Err(ScriptError::UnknownCommand {
                line: 2,
                command: "jump".to_owned(),
            })
        );
        assert_eq!(
            parse_script("wait soon"),
            Err(ScriptError::InvalidNumber {
                line: 1,
                value: "soon".to_owned(),
            })
        );
        assert!(matches!(
            parse_script("touch move 1 2"),
            Err(ScriptError::MissingArgument { line: 1, .. })
        ));
        assert!(matches!(
            parse_script("wheel sidebar"),
            Err(ScriptError::UnknownName { kind: "region", .. })
        ));
    }
}
