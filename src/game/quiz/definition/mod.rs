use std::convert::TryFrom;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

pub mod question;

pub use question::{InvalidRecord, Label, Question, RawQuestion};


#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read questions: {0}")]
    Source(#[from] csv::Error),
    #[error("the question bank has no usable questions")]
    EmptyBank,
    #[error("the question bank only has {available} of the {required} expected questions")]
    DegradedBank { available: usize, required: usize },
}

impl LoadError {
    pub fn is_fatal(&self) -> bool {
        match self {
            LoadError::Source(_) | LoadError::EmptyBank => true,
            LoadError::DegradedBank { .. } => false,
        }
    }
}

/// Every question available to a session, in source order.
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn open(source: &Path) -> Result<QuestionBank, LoadError> {
        info!("Loading questions from {}", source.display());
        let reader = csv::ReaderBuilder::new().flexible(true).from_path(source)?;
        Self::from_csv(reader)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuestionBank, LoadError> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);
        Self::from_csv(reader)
    }

    fn from_csv<R: Read>(mut csv_reader: csv::Reader<R>) -> Result<QuestionBank, LoadError> {
        csv_reader.headers()?;
        let mut records = Vec::new();
        for (index, record) in csv_reader.deserialize::<RawQuestion>().enumerate() {
            match record {
                Ok(raw_question) => records.push(raw_question),
                Err(e) => warn!("Skipping unreadable row {}: {}", index + 1, e),
            }
        }
        Self::load(records)
    }

    /// Builds a bank out of raw rows. Rows without a usable correct answer are
    /// dropped, missing text is replaced by a placeholder.
    pub fn load<I>(records: I) -> Result<QuestionBank, LoadError>
    where
        I: IntoIterator<Item = RawQuestion>,
    {
        let questions: Vec<Question> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw_question)| match Question::try_from(raw_question) {
                Ok(question) => Some(question),
                Err(e) => {
                    warn!("Dropping question on row {}: {}", index + 1, e);
                    None
                }
            })
            .collect();

        if questions.is_empty() {
            return Err(LoadError::EmptyBank);
        }
        info!("Loaded {} questions", questions.len());
        Ok(QuestionBank { questions })
    }

    pub fn check_size(&self, required: usize) -> Result<(), LoadError> {
        match self.questions.len() {
            0 => Err(LoadError::EmptyBank),
            available if available < required => {
                Err(LoadError::DegradedBank {
                    available,
                    required,
                })
            }
            _ => Ok(()),
        }
    }

    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
