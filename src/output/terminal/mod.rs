use itertools::Itertools;
use std::io::Write;
use tracing::error;

use crate::output::{Message, QuizOutput};


/// Renders quiz messages as plain text on standard output.
#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            Loading => "Loading...".into(),
            LoadFailed(reason) => format!(
                "The quiz could not be loaded!\nPlease check that the question file exists and is well formed.\n({})",
                reason
            ),
            Welcome(count) => format!(
                "Welcome to the quiz! {} questions are waiting for you.\nPress Enter to begin.",
                count
            ),
            QuestionBegins {
                number,
                total,
                question,
            } => {
                let options = question
                    .options()
                    .map(|(label, text)| format!("  {}: {}", label, text))
                    .join("\n");
                format!(
                    "\nQuestion {} / {}\n{}\n{}",
                    number, total, question.text, options
                )
            }
            Score { score, max } => format!("Score: {} / {}", score, max),
            GuessCorrect(label) => format!("✅ {} is correct!", label),
            GuessIncorrect { chosen, correct } => {
                format!("❌ {} is incorrect, the answer was {}.", chosen, correct)
            }
            InvalidChoice => "Please answer with A, B or C.".into(),
            QuizResults { score, max } => format!("\nQuiz complete!\nFinal score: {} / {}", score, max),
        }
    }
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        let text = self.interpret_message(message);
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{}", text).and_then(|_| handle.flush()) {
            error!("Error writing message: {}", e);
        }
    }
}
