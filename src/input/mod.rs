use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

use crate::game::quiz::definition::Label;
use crate::game::quiz::Phase;


lazy_static! {
    static ref CHOICE_REGEX: Regex = Regex::new(r"^\s*([[:alnum:]])\s*[.):]?\s*$").unwrap();
}

const OPTION_KEYS: [(&'static str, Label); 6] = [
    ("A", Label::A),
    ("1", Label::A),
    ("B", Label::B),
    ("2", Label::B),
    ("C", Label::C),
    ("3", Label::C),
];

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Begin,
    Answer(Label),
    Unrecognized(String),
}

fn parse_choice(line: &str) -> Option<Label> {
    let line = unidecode(line).to_uppercase();
    let captures = CHOICE_REGEX.captures(&line)?;
    let key = captures.get(1)?.as_str();
    OPTION_KEYS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}

impl InputEvent {
    /// Turns one line of player input into an event, given what the quiz is
    /// currently waiting for.
    pub fn interpret(line: &str, phase: Phase) -> InputEvent {
        match phase {
            Phase::Start => InputEvent::Begin,
            Phase::InProgress => match parse_choice(line) {
                Some(label) => InputEvent::Answer(label),
                None => InputEvent::Unrecognized(line.trim().to_owned()),
            },
            Phase::Loading | Phase::Error | Phase::Finished => {
                InputEvent::Unrecognized(line.trim().to_owned())
            }
        }
    }
}
