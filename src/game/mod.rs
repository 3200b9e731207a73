use rand::Rng;
use tracing::debug;

pub mod quiz;
pub mod settings;

use crate::input::InputEvent;
use crate::output::{Message, QuizOutput};
use self::quiz::definition::{LoadError, QuestionBank};
use self::quiz::{Phase, Quiz};
use self::settings::Settings;


/// Owns the quiz session and connects it to the player: input events go in,
/// messages come out.
pub struct Game<O> {
    quiz: Quiz,
    settings: Settings,
    output: O,
}

impl<O: QuizOutput> Game<O> {
    pub fn new(settings: Settings, output: O) -> Self {
        output.say(&Message::Loading);
        Game {
            quiz: Quiz::new(),
            settings,
            output,
        }
    }

    pub fn load<R: Rng + ?Sized>(&mut self, bank: Result<QuestionBank, LoadError>, rng: &mut R) {
        let failure = bank.as_ref().err().map(|e| e.to_string());
        if let Err(e) = self.quiz.on_loaded(bank, &self.settings, rng) {
            debug!("Ignoring load: {}", e);
            return;
        }
        match self.quiz.phase() {
            Phase::Start => self
                .output
                .say(&Message::Welcome(self.quiz.question_count())),
            _ => {
                let reason = failure.unwrap_or_else(|| LoadError::EmptyBank.to_string());
                self.output.say(&Message::LoadFailed(reason));
            }
        }
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Begin => match self.quiz.start() {
                Ok(()) => self.announce_question(),
                Err(e) => debug!("Ignoring begin: {}", e),
            },
            InputEvent::Answer(label) => match self.quiz.answer(label) {
                Ok(result) => {
                    debug!("Score is now {}", self.quiz.score());
                    if result.is_correct {
                        self.output.say(&Message::GuessCorrect(result.label));
                    } else {
                        self.output.say(&Message::GuessIncorrect {
                            chosen: result.label,
                            correct: result.correct,
                        });
                    }
                    if result.is_last {
                        self.announce_results();
                    } else {
                        self.announce_question();
                    }
                }
                Err(e) => debug!("Ignoring answer: {}", e),
            },
            InputEvent::Unrecognized(text) => match self.quiz.phase() {
                Phase::InProgress => self.output.say(&Message::InvalidChoice),
                phase => debug!("Ignoring input `{}` during {:?} phase", text, phase),
            },
        }
    }

    fn announce_question(&self) {
        if let Some(question) = self.quiz.current_question() {
            self.output.say(&Message::QuestionBegins {
                number: self.quiz.current_index() + 1,
                total: self.quiz.question_count(),
                question: question.clone(),
            });
        }
        if let Some(score) = self.quiz.normalized_score(self.settings.max_score) {
            self.output.say(&Message::Score {
                score,
                max: self.settings.max_score,
            });
        }
    }

    fn announce_results(&self) {
        if let Some(score) = self.quiz.normalized_score(self.settings.max_score) {
            self.output.say(&Message::QuizResults {
                score,
                max: self.settings.max_score,
            });
        }
    }

    pub fn phase(&self) -> Phase {
        self.quiz.phase()
    }

    pub fn is_over(&self) -> bool {
        self.quiz.is_finished() || self.quiz.phase() == Phase::Error
    }
}
