use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

struct ContextBuilder {
    bank_size: usize,
    settings: Settings,
}

impl ContextBuilder {
    fn new() -> Self {
        ContextBuilder {
            bank_size: 5,
            settings: Settings::default(),
        }
    }

    fn bank_size(mut self, bank_size: usize) -> Self {
        self.bank_size = bank_size;
        self
    }

    fn build(self) -> Quiz {
        let records = (0..self.bank_size).map(|i| RawQuestion {
            question: Some(format!("question {}", i)),
            option_a: Some("a".to_owned()),
            option_b: Some("b".to_owned()),
            option_c: Some("c".to_owned()),
            correct: Some(Label::ALL[i % 3].as_str().to_owned()),
        });
        let bank = QuestionBank::load(records);
        let mut quiz = Quiz::new();
        let mut rng = StdRng::seed_from_u64(1234);
        quiz.on_loaded(bank, &self.settings, &mut rng).unwrap();
        quiz
    }
}

fn correct_label(quiz: &Quiz) -> Label {
    quiz.current_question().unwrap().correct
}

fn wrong_label(quiz: &Quiz) -> Label {
    let correct = correct_label(quiz);
    *Label::ALL.iter().find(|l| **l != correct).unwrap()
}

#[test]
fn starts_in_loading_phase() {
    let quiz = Quiz::new();
    assert_eq!(quiz.phase(), Phase::Loading);
    assert_eq!(quiz.current_question(), None);
    assert_eq!(quiz.normalized_score(100), None);
}

#[test]
fn loaded_bank_enters_start_phase() {
    let quiz = ContextBuilder::new().build();
    assert_eq!(quiz.phase(), Phase::Start);
    assert_eq!(quiz.question_count(), 3);
    assert_eq!(quiz.current_question(), None);
}

#[test]
fn start_begins_first_question() {
    let mut quiz = ContextBuilder::new().build();
    quiz.start().unwrap();
    assert_eq!(quiz.phase(), Phase::InProgress);
    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.score(), 0);
    assert!(quiz.current_question().is_some());
}

#[test]
fn cannot_start_twice() {
    let mut quiz = ContextBuilder::new().build();
    quiz.start().unwrap();
    quiz.answer(correct_label(&quiz)).unwrap();
    let result = quiz.start();
    assert_eq!(
        result,
        Err(InvalidTransition {
            operation: "start",
            phase: Phase::InProgress
        })
    );
    assert_eq!(quiz.current_index(), 1);
    assert_eq!(quiz.score(), 1);
}

#[test]
fn cannot_answer_before_start() {
    let mut quiz = ContextBuilder::new().build();
    assert!(quiz.answer(Label::A).is_err());
    assert_eq!(quiz.phase(), Phase::Start);
    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.score(), 0);
}

#[test]
fn cannot_load_twice() {
    let mut quiz = ContextBuilder::new().build();
    let mut rng = StdRng::seed_from_u64(0);
    let result = quiz.on_loaded(Err(LoadError::EmptyBank), &Settings::default(), &mut rng);
    assert!(result.is_err());
    assert_eq!(quiz.phase(), Phase::Start);
}

#[test]
fn all_correct_answers_score_full_marks() {
    let mut quiz = ContextBuilder::new().bank_size(5).build();
    assert_eq!(quiz.question_count(), 3);
    quiz.start().unwrap();
    for _ in 0..3 {
        let result = quiz.answer(correct_label(&quiz)).unwrap();
        assert!(result.is_correct);
    }
    assert!(quiz.is_finished());
    assert_eq!(quiz.score(), 3);
    assert_eq!(quiz.normalized_score(100), Some(100));
}

#[test]
fn mixed_answers_round_down() {
    let mut quiz = ContextBuilder::new().build();
    quiz.start().unwrap();
    quiz.answer(correct_label(&quiz)).unwrap();
    let result = quiz.answer(wrong_label(&quiz)).unwrap();
    assert!(!result.is_correct);
    assert!(!result.is_last);
    let result = quiz.answer(correct_label(&quiz)).unwrap();
    assert!(result.is_last);
    assert_eq!(quiz.score(), 2);
    assert_eq!(quiz.normalized_score(100), Some(66));
}

#[test]
fn answer_result_reports_correct_label() {
    let mut quiz = ContextBuilder::new().build();
    quiz.start().unwrap();
    let correct = correct_label(&quiz);
    let wrong = wrong_label(&quiz);
    let result = quiz.answer(wrong).unwrap();
    assert_eq!(result.label, wrong);
    assert_eq!(result.correct, correct);
}

#[test]
fn small_bank_runs_shorter_quiz() {
    let mut quiz = ContextBuilder::new().bank_size(1).build();
    assert_eq!(quiz.phase(), Phase::Start);
    assert_eq!(quiz.question_count(), 1);
    quiz.start().unwrap();
    quiz.answer(correct_label(&quiz)).unwrap();
    assert!(quiz.is_finished());
    assert_eq!(quiz.normalized_score(100), Some(100));

    let mut quiz = ContextBuilder::new().bank_size(1).build();
    quiz.start().unwrap();
    quiz.answer(wrong_label(&quiz)).unwrap();
    assert!(quiz.is_finished());
    assert_eq!(quiz.normalized_score(100), Some(0));
}

#[test]
fn empty_bank_is_an_error() {
    let mut quiz = ContextBuilder::new().bank_size(0).build();
    assert_eq!(quiz.phase(), Phase::Error);
    assert!(quiz.start().is_err());
    assert!(quiz.answer(Label::A).is_err());
    assert_eq!(quiz.phase(), Phase::Error);
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.normalized_score(100), None);
}

#[test]
fn unreadable_source_is_an_error() {
    let mut quiz = Quiz::new();
    let mut rng = StdRng::seed_from_u64(0);
    let source = csv::Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
    quiz.on_loaded(Err(LoadError::Source(source)), &Settings::default(), &mut rng)
        .unwrap();
    assert_eq!(quiz.phase(), Phase::Error);
}

#[test]
fn finished_quiz_ignores_answers() {
    let mut quiz = ContextBuilder::new().build();
    quiz.start().unwrap();
    for _ in 0..3 {
        quiz.answer(wrong_label(&quiz)).unwrap();
    }
    assert!(quiz.is_finished());
    for label in Label::ALL.iter() {
        assert!(quiz.answer(*label).is_err());
    }
    assert_eq!(quiz.phase(), Phase::Finished);
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.current_index(), 3);
    assert!(quiz.start().is_err());
}

#[test]
fn score_never_jumps_and_stays_in_range() {
    for seed in 0..20 {
        let mut quiz = ContextBuilder::new().bank_size(7).build();
        let mut rng = StdRng::seed_from_u64(seed);
        quiz.start().unwrap();
        let mut previous = 0;
        while !quiz.is_finished() {
            let label = Label::ALL[rng.gen_range(0, 3)];
            quiz.answer(label).unwrap();
            assert!(quiz.score() >= previous);
            assert!(quiz.score() <= previous + 1);
            assert!(quiz.score() <= quiz.question_count());
            let normalized = quiz.normalized_score(100).unwrap();
            assert!(normalized <= 100);
            previous = quiz.score();
        }
        assert_eq!(quiz.current_index(), quiz.question_count());
    }
}
