use crate::game::quiz::definition::{Label, Question};

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Loading,
    LoadFailed(String),
    Welcome(usize),
    QuestionBegins {
        number: usize,
        total: usize,
        question: Question,
    },
    Score {
        score: u32,
        max: u32,
    },
    GuessCorrect(Label),
    GuessIncorrect {
        chosen: Label,
        correct: Label,
    },
    InvalidChoice,
    QuizResults {
        score: u32,
        max: u32,
    },
}

/// Whatever presents the quiz to the player.
pub trait QuizOutput {
    fn say(&self, message: &Message);
}
