use serde::{Deserialize, Deserializer};
use std::convert::TryFrom;
use std::fmt;
use thiserror::Error;
use unidecode::unidecode;

const MISSING_QUESTION: &'static str = "[missing question]";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Label {
    A,
    B,
    C,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::A, Label::B, Label::C];

    pub fn parse(text: &str) -> Option<Label> {
        match unidecode(text).trim().to_uppercase().as_ref() {
            "A" => Some(Label::A),
            "B" => Some(Label::B),
            "C" => Some(Label::C),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::A => "A",
            Label::B => "B",
            Label::C => "C",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Blank cells are as good as missing ones.
fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RawQuestion {
    #[serde(default, deserialize_with = "non_blank")]
    pub question: Option<String>,
    #[serde(default, rename = "optionA", deserialize_with = "non_blank")]
    pub option_a: Option<String>,
    #[serde(default, rename = "optionB", deserialize_with = "non_blank")]
    pub option_b: Option<String>,
    #[serde(default, rename = "optionC", deserialize_with = "non_blank")]
    pub option_c: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub correct: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidRecord {
    #[error("no correct answer given")]
    MissingCorrect,
    #[error("correct answer `{0}` is not one of A, B or C")]
    UnknownCorrect(String),
}

/// A multiple-choice question with exactly one option per [`Label`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub text: String,
    options: [String; 3],
    pub correct: Label,
}

impl Question {
    pub fn option(&self, label: Label) -> &str {
        match label {
            Label::A => &self.options[0],
            Label::B => &self.options[1],
            Label::C => &self.options[2],
        }
    }

    pub fn options(&self) -> impl Iterator<Item = (Label, &str)> {
        self.options
            .iter()
            .enumerate()
            .map(|(index, text)| (Label::ALL[index], text.as_str()))
    }

    pub fn is_correct(&self, label: Label) -> bool {
        self.correct == label
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = InvalidRecord;

    fn try_from(raw_question: RawQuestion) -> Result<Self, Self::Error> {
        let correct = match raw_question.correct {
            None => return Err(InvalidRecord::MissingCorrect),
            Some(c) => Label::parse(&c).ok_or(InvalidRecord::UnknownCorrect(c))?,
        };

        let or_missing = |option: Option<String>, label: Label| {
            option.unwrap_or_else(|| format!("[missing option {}]", label))
        };

        Ok(Question {
            text: raw_question
                .question
                .unwrap_or_else(|| MISSING_QUESTION.to_owned()),
            options: [
                or_missing(raw_question.option_a, Label::A),
                or_missing(raw_question.option_b, Label::B),
                or_missing(raw_question.option_c, Label::C),
            ],
            correct,
        })
    }
}
