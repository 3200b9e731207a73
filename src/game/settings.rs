use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Settings {
    pub source: PathBuf,
    pub max_questions: usize,
    pub required_questions: usize,
    pub max_score: u32,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            source: PathBuf::from("questions.csv"),
            max_questions: 3,
            required_questions: 3,
            max_score: 100,
            seed: None,
        }
    }
}

fn read_env_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Could not read {}", name)),
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Result<Option<String>>,
{
    match lookup(name)? {
        Some(value) => {
            let parsed = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid value for {}: `{}`", name, value))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        Self::from_vars(read_env_var)
    }

    /// Applies `QUIZ_*` overrides found through `lookup` on top of the defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let mut settings = Settings::default();
        if let Some(source) = lookup("QUIZ_SOURCE")? {
            settings.source = PathBuf::from(source);
        }
        if let Some(max_questions) = parse_var(&lookup, "QUIZ_MAX_QUESTIONS")? {
            settings.max_questions = max_questions;
        }
        if let Some(required_questions) = parse_var(&lookup, "QUIZ_REQUIRED_QUESTIONS")? {
            settings.required_questions = required_questions;
        }
        if let Some(max_score) = parse_var(&lookup, "QUIZ_MAX_SCORE")? {
            settings.max_score = max_score;
        }
        settings.seed = parse_var(&lookup, "QUIZ_SEED")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_questions == 0 {
            bail!("A quiz needs at least one question");
        }
        if self.max_score == 0 {
            bail!("The maximum score must be positive");
        }
        Ok(())
    }
}
