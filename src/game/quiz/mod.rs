use rand::Rng;
use tracing::{error, info, warn};

use self::definition::*;
use crate::game::settings::Settings;

pub mod definition;
pub mod selector;
mod transition;

pub use self::transition::InvalidTransition;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Loading,
    Error,
    Start,
    InProgress,
    Finished,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnswerResult {
    pub label: Label,
    pub correct: Label,
    pub is_correct: bool,
    pub is_last: bool,
}

/// A single quiz session, from loading the bank to the final score.
#[derive(Debug)]
pub struct Quiz {
    current_phase: Phase,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
}

impl Quiz {
    pub fn new() -> Quiz {
        Quiz {
            current_phase: Phase::Loading,
            questions: Vec::new(),
            current_index: 0,
            score: 0,
        }
    }

    fn set_current_phase(&mut self, phase: Phase) {
        info!("Entering quiz phase: {:?}", phase);
        self.current_phase = phase;
    }

    fn check_phase(
        &self,
        operation: &'static str,
        expected: Phase,
    ) -> Result<(), InvalidTransition> {
        if self.current_phase == expected {
            Ok(())
        } else {
            Err(InvalidTransition {
                operation,
                phase: self.current_phase,
            })
        }
    }

    pub fn on_loaded<R: Rng + ?Sized>(
        &mut self,
        bank: Result<QuestionBank, LoadError>,
        settings: &Settings,
        rng: &mut R,
    ) -> Result<(), InvalidTransition> {
        self.check_phase("load questions", Phase::Loading)?;

        let bank = match bank {
            Ok(bank) => bank,
            Err(e) => {
                error!("Quiz could not be loaded: {}", e);
                self.set_current_phase(Phase::Error);
                return Ok(());
            }
        };

        match bank.check_size(settings.required_questions) {
            Ok(()) => (),
            Err(e) if !e.is_fatal() => warn!("{}, running a shorter quiz", e),
            Err(e) => {
                error!("Quiz could not be loaded: {}", e);
                self.set_current_phase(Phase::Error);
                return Ok(());
            }
        }

        self.questions = selector::select(&bank, settings.max_questions, rng);
        if self.questions.is_empty() {
            error!("No question was selected");
            self.set_current_phase(Phase::Error);
            return Ok(());
        }
        info!(
            "Selected {} of {} questions",
            self.questions.len(),
            bank.len()
        );
        self.set_current_phase(Phase::Start);
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), InvalidTransition> {
        self.check_phase("start", Phase::Start)?;
        self.current_index = 0;
        self.score = 0;
        self.set_current_phase(Phase::InProgress);
        Ok(())
    }

    pub fn answer(&mut self, label: Label) -> Result<AnswerResult, InvalidTransition> {
        self.check_phase("answer", Phase::InProgress)?;

        let (correct, is_correct) = match self.current_question() {
            Some(question) => (question.correct, question.is_correct(label)),
            None => {
                return Err(InvalidTransition {
                    operation: "answer",
                    phase: self.current_phase,
                })
            }
        };

        if is_correct {
            self.score += 1;
        }
        self.current_index += 1;

        let is_last = self.current_index == self.questions.len();
        if is_last {
            self.set_current_phase(Phase::Finished);
        }

        Ok(AnswerResult {
            label,
            correct,
            is_correct,
            is_last,
        })
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.current_phase {
            Phase::InProgress => self.questions.get(self.current_index),
            _ => None,
        }
    }

    /// Score rescaled to `0..=max_scale`, relative to the number of questions
    /// actually asked. `None` when the quiz has no questions.
    pub fn normalized_score(&self, max_scale: u32) -> Option<u32> {
        if self.questions.is_empty() {
            return None;
        }
        let scaled = self.score as u64 * max_scale as u64 / self.questions.len() as u64;
        Some(scaled as u32)
    }

    pub fn is_finished(&self) -> bool {
        self.current_phase == Phase::Finished
    }

    pub fn phase(&self) -> Phase {
        self.current_phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }
}
