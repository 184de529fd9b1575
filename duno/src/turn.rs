use strum_macros::Display;

use crate::{
    card::{Card, Rank},
    error::{Result, UnoError},
    player::Side,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    PlayAt(usize),
    DrawCard,
}

/// What to do with a voluntarily drawn card that happens to be playable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    PlayImmediately,
    KeepInHand,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral,
    Skip,
    Reverse,
    Draw,
    Wild,
    WildDraw,
    SelfDraw,
    NothingToDraw,
}

impl From<Rank> for TurnActionResult {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::Number(_) => TurnActionResult::Neutral,
            Rank::Skip => TurnActionResult::Skip,
            Rank::Reverse => TurnActionResult::Reverse,
            Rank::DrawTwo => TurnActionResult::Draw,
            Rank::ColorChange => TurnActionResult::Wild,
            Rank::DrawFour => TurnActionResult::WildDraw,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayTurnResult {
    pub turn_action_result: TurnActionResult,
    pub won: bool,
}

#[derive(Clone, Copy, Debug, Display, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnState {
    #[default]
    Idle,
    AwaitingDecision(Side),
    Resolving(Side, Card),
    Terminal(Side),
}

/// Whose turn it is, and the direction of play.
#[derive(Debug, Default)]
pub struct TurnController {
    state: TurnState,
    direction: Direction,
}

impl TurnController {
    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            TurnState::Terminal(winner) => Some(winner),
            _ => None,
        }
    }

    /// The actor a decision is expected from.
    pub fn awaiting(&self) -> Result<Side> {
        match self.state {
            TurnState::AwaitingDecision(actor) => Ok(actor),
            _ => Err(self.unavailable()),
        }
    }

    pub fn begin(&mut self, starter: Side) -> Result<()> {
        match self.state {
            TurnState::Idle => {
                self.state = TurnState::AwaitingDecision(starter);
                Ok(())
            }
            _ => Err(UnoError::AlreadyStarted),
        }
    }

    pub fn begin_resolving(&mut self, card: Card) -> Result<()> {
        let actor = self.awaiting()?;
        self.state = TurnState::Resolving(actor, card);
        Ok(())
    }

    /// Hands the turn on from the resolving actor, passing over `skips`
    /// further actors.
    pub fn finish_resolving(&mut self, skips: usize) -> Result<Side> {
        let TurnState::Resolving(actor, _) = self.state else {
            return Err(self.unavailable());
        };
        Ok(self.hand_over(actor, 1 + skips))
    }

    /// Skips the actor still waiting for their first decision, as an opening
    /// action card does.
    pub fn skip_current(&mut self, skips: usize) -> Result<Side> {
        let actor = self.awaiting()?;
        Ok(self.hand_over(actor, skips))
    }

    /// Ends the actor's turn without a play.
    pub fn pass(&mut self) -> Result<Side> {
        let actor = self.awaiting()?;
        Ok(self.hand_over(actor, 1))
    }

    pub fn finish_with_winner(&mut self, winner: Side) {
        self.state = TurnState::Terminal(winner);
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    // Either direction visits the other seat next when there are only two.
    fn hand_over(&mut self, actor: Side, steps: usize) -> Side {
        let next = (0..steps).fold(actor, |side, _| side.other());
        self.state = TurnState::AwaitingDecision(next);
        next
    }

    fn unavailable(&self) -> UnoError {
        match self.state {
            TurnState::Idle => UnoError::NotStarted,
            TurnState::Terminal(_) => UnoError::GameOver,
            TurnState::AwaitingDecision(_) | TurnState::Resolving(..) => UnoError::StillResolving,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Color;

    fn started(starter: Side) -> TurnController {
        let mut turns = TurnController::default();
        turns.begin(starter).unwrap();
        turns
    }

    #[test]
    fn begins_idle() {
        let turns = TurnController::default();
        assert_eq!(turns.state(), TurnState::Idle);
        assert_eq!(turns.awaiting(), Err(UnoError::NotStarted));
    }

    #[test]
    fn begin_only_once() {
        let mut turns = started(Side::B);
        assert_eq!(turns.state(), TurnState::AwaitingDecision(Side::B));
        assert_eq!(turns.begin(Side::A), Err(UnoError::AlreadyStarted));
    }

    #[test]
    fn plain_play_advances_once() {
        let mut turns = started(Side::A);
        let card = Card::number(Color::Red, 4);
        turns.begin_resolving(card).unwrap();
        assert_eq!(turns.state(), TurnState::Resolving(Side::A, card));

        assert_eq!(turns.finish_resolving(0), Ok(Side::B));
        assert_eq!(turns.state(), TurnState::AwaitingDecision(Side::B));
    }

    #[test]
    fn cannot_finish_without_resolving() {
        let mut turns = started(Side::A);
        assert_eq!(turns.finish_resolving(0), Err(UnoError::StillResolving));

        turns.begin_resolving(Card::number(Color::Red, 4)).unwrap();
        assert_eq!(turns.pass(), Err(UnoError::StillResolving));
    }

    #[test]
    fn pass_hands_turn_to_opponent() {
        let mut turns = started(Side::B);
        assert_eq!(turns.pass(), Ok(Side::A));
        assert_eq!(turns.state(), TurnState::AwaitingDecision(Side::A));
    }

    #[test]
    fn skip_returns_turn_to_actor() {
        let mut turns = started(Side::A);
        turns.begin_resolving(Card::new(Color::Red, Rank::Skip)).unwrap();

        assert_eq!(turns.finish_resolving(1), Ok(Side::A));
    }

    #[test]
    fn opening_skip_passes_over_starter() {
        let mut turns = started(Side::A);
        assert_eq!(turns.skip_current(1), Ok(Side::B));
        assert_eq!(turns.skip_current(0), Ok(Side::B));
    }

    #[test]
    fn toggle_direction_flips_back_and_forth() {
        let mut turns = started(Side::A);
        assert_eq!(turns.direction(), Direction::Clockwise);
        turns.toggle_direction();
        assert_eq!(turns.direction(), Direction::CounterClockwise);
        turns.toggle_direction();
        assert_eq!(turns.direction(), Direction::Clockwise);
    }

    #[test]
    fn terminal_is_absorbing() {
        let mut turns = started(Side::A);
        turns.finish_with_winner(Side::A);

        assert_eq!(turns.winner(), Some(Side::A));
        assert_eq!(turns.awaiting(), Err(UnoError::GameOver));
        assert_eq!(turns.pass(), Err(UnoError::GameOver));
        assert_eq!(turns.begin(Side::B), Err(UnoError::AlreadyStarted));
    }

    #[test]
    fn rank_maps_to_result() {
        assert_eq!(
            TurnActionResult::from(Rank::Number(3)),
            TurnActionResult::Neutral
        );
        assert_eq!(
            TurnActionResult::from(Rank::DrawFour),
            TurnActionResult::WildDraw
        );
    }
}
