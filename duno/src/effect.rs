//! What a played card does to the other participant and to turn order.
//!
//! Resolution is split in two: [`resolve`] maps a card to an ordered list of
//! [`Effect`]s without touching any state, and the session applies them one by
//! one. With two participants a Reverse degenerates into a Skip, but it still
//! toggles the direction flag.

use strum_macros::Display;

use crate::{
    card::{Card, Rank},
    constants::{DRAW_FOUR_PENALTY, DRAW_TWO_PENALTY},
    player::Side,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Unconditionally add `count` cards from the draw pile to `target`'s hand.
    ForceDraw { target: Side, count: usize },
    SkipNextTurn,
    ToggleDirection,
    /// `by` picks the color the top card shows from now on.
    RequireColorChoice { by: Side },
}

impl Effect {
    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::ForceDraw { .. } => EffectKind::ForceDraw,
            Effect::SkipNextTurn => EffectKind::SkipNextTurn,
            Effect::ToggleDirection => EffectKind::ToggleDirection,
            Effect::RequireColorChoice { .. } => EffectKind::ColorChoice,
        }
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum EffectKind {
    ForceDraw,
    SkipNextTurn,
    ToggleDirection,
    ColorChoice,
}

/// Effects of `card` played by `played_by` against `against`, the actor next
/// in turn order at the moment of play.
///
/// Effects are applied in the order returned. A DrawFour makes `against` draw
/// before `played_by` names the color; both happen before the turn moves on.
pub fn resolve(card: &Card, played_by: Side, against: Side) -> Vec<Effect> {
    match card.rank() {
        Rank::Number(_) => vec![],
        Rank::Skip => vec![Effect::SkipNextTurn],
        Rank::Reverse => vec![Effect::ToggleDirection, Effect::SkipNextTurn],
        Rank::DrawTwo => vec![
            Effect::ForceDraw {
                target: against,
                count: DRAW_TWO_PENALTY,
            },
            Effect::SkipNextTurn,
        ],
        Rank::DrawFour => vec![
            Effect::ForceDraw {
                target: against,
                count: DRAW_FOUR_PENALTY,
            },
            Effect::RequireColorChoice { by: played_by },
            Effect::SkipNextTurn,
        ],
        Rank::ColorChange => vec![Effect::RequireColorChoice { by: played_by }],
    }
}

/// Effects of the card flipped to open the discard pile. Action cards hit the
/// starting actor as if the opponent had played them; an opening ColorChange
/// lets the starting actor pick the color.
pub fn resolve_opening(card: &Card, starter: Side) -> Vec<Effect> {
    match card.rank() {
        Rank::ColorChange => vec![Effect::RequireColorChoice { by: starter }],
        _ => resolve(card, starter.other(), starter),
    }
}
