use rand::{seq::IteratorRandom, Rng};

use crate::{
    card::{Card, Color},
    player::{Hand, Side},
    turn::{Decision, Disposition},
};

/// Source of decisions for one participant.
///
/// The session calls these while it drives a turn and keeps calling
/// [`Controller::turn_decision`] until it gets a decision it can apply.
pub trait Controller {
    fn turn_decision(&mut self, actor: Side, hand: &Hand, top: Card) -> Decision;

    /// Only asked when `drawn` can be played on `top`.
    fn drawn_card_disposition(&mut self, actor: Side, drawn: Card, top: Card) -> Disposition;

    fn color_choice(&mut self, actor: Side) -> Color;
}

/// Plays the first playable card it holds, otherwise draws.
#[derive(Debug)]
pub struct CpuController<R> {
    rng: R,
}

impl<R: Rng> CpuController<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Controller for CpuController<R> {
    fn turn_decision(&mut self, _actor: Side, hand: &Hand, top: Card) -> Decision {
        match hand.first_playable(&top) {
            Some(index) => Decision::PlayAt(index),
            None => Decision::DrawCard,
        }
    }

    fn drawn_card_disposition(&mut self, _actor: Side, _drawn: Card, _top: Card) -> Disposition {
        Disposition::PlayImmediately
    }

    fn color_choice(&mut self, _actor: Side) -> Color {
        random_color(&mut self.rng)
    }
}

pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::concrete()
        .choose(rng)
        .unwrap_or(Color::Red)
}

/// Decides who plays first.
pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> Side {
    if rng.gen_bool(0.5) {
        Side::A
    } else {
        Side::B
    }
}
