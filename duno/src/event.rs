use std::fmt;

use crate::{
    card::{Card, Color},
    effect::EffectKind,
    error::UnoError,
    player::Side,
};

/// Something that happened during a session, for whoever is presenting it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    OpeningCard(Card),
    CardPlayed { actor: Side, card: Card },
    CardDrawn { actor: Side, card: Card, forced: bool },
    DrawSkipped { actor: Side },
    EffectApplied {
        kind: EffectKind,
        affected: Side,
        magnitude: usize,
    },
    ColorChanged(Color),
    TurnSkipped(Side),
    DecisionRejected { actor: Side, reason: UnoError },
    GameWon(Side),
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::OpeningCard(card) => write!(f, "Opening card is {card}"),
            GameEvent::CardPlayed { actor, card } => write!(f, "Player {actor} played {card}"),
            GameEvent::CardDrawn {
                actor,
                forced: true,
                ..
            } => write!(f, "Player {actor} was forced to draw a card"),
            GameEvent::CardDrawn { actor, .. } => write!(f, "Player {actor} drew a card"),
            GameEvent::DrawSkipped { actor } => {
                write!(f, "No cards left, player {actor} draws nothing")
            }
            GameEvent::EffectApplied {
                kind,
                affected,
                magnitude,
            } => write!(f, "{kind} ({magnitude}) applied to player {affected}"),
            GameEvent::ColorChanged(color) => write!(f, "Color is now {color}"),
            GameEvent::TurnSkipped(side) => write!(f, "Player {side} is skipped"),
            GameEvent::DecisionRejected { actor, reason } => {
                write!(f, "Player {actor}: {reason}")
            }
            GameEvent::GameWon(side) => write!(f, "Player {side} wins!"),
        }
    }
}
