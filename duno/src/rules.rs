use crate::card::Card;

/// Whether `candidate` may be played on `top`.
///
/// A wild candidate is always playable, and a top card still showing `Wild`
/// accepts anything.
pub fn is_playable(candidate: &Card, top: &Card) -> bool {
    candidate.color() == top.color()
        || candidate.rank() == top.rank()
        || candidate.is_wild()
        || top.is_wild()
}
