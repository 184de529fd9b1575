use thiserror::Error;

use crate::card::{Card, Color};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnoError {
    #[error("hand index {index} is out of range for a hand of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{card} cannot be played on {top}")]
    IllegalPlay { card: Card, top: Card },
    #[error("no cards left to draw")]
    EmptyDeck,
    #[error("the discard pile has no top card")]
    NoTopCard,
    #[error("the discard pile is empty, nothing to recolor")]
    NothingToRecolor,
    #[error("{0} is not a color a wild card can take")]
    InvalidColorChoice(Color),
    #[error("the game has not started")]
    NotStarted,
    #[error("the game has already started")]
    AlreadyStarted,
    #[error("the turn is not in a state that allows this")]
    StillResolving,
    #[error("the game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl UnoError {
    /// Errors caused by a bad decision. The session asks the same actor again
    /// instead of giving up.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            UnoError::IndexOutOfRange { .. }
                | UnoError::IllegalPlay { .. }
                | UnoError::InvalidColorChoice(_)
        )
    }
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
