use rand::Rng;

use crate::game::quiz::definition::{Question, QuestionBank};


/// Draws up to `count` distinct questions from the bank, uniformly and without
/// replacement. The draw order is the presentation order.
pub fn select<R>(bank: &QuestionBank, count: usize, rng: &mut R) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    let questions = bank.get_questions();
    let mut candidates: Vec<usize> = (0..questions.len()).collect();
    let mut selected = Vec::with_capacity(count.min(candidates.len()));
    while selected.len() < count && !candidates.is_empty() {
        let pick = rng.gen_range(0, candidates.len());
        let index = candidates.swap_remove(pick);
        selected.push(questions[index].clone());
    }
    selected
}
