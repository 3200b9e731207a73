use thiserror::Error;

use crate::game::quiz::Phase;

#[derive(Debug, Error, PartialEq)]
#[error("cannot {operation} while the quiz is in the {phase:?} phase")]
pub struct InvalidTransition {
    pub operation: &'static str,
    pub phase: Phase,
}
