use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Message, QuizOutput};

#[derive(Clone, Default)]
pub struct MockOutput {
    text_output: Arc<RwLock<Vec<Message>>>,
}

impl MockOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::replace(&mut *self.text_output.write(), Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.text_output.read().iter().any(|m| m == message)
    }
}

impl QuizOutput for MockOutput {
    fn say(&self, message: &Message) {
        self.text_output.write().push(message.clone());
    }
}
