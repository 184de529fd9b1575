#![allow(dead_code)]

use std::{collections::VecDeque, iter};

use duno::{
    card::{Card, Color},
    controller::Controller,
    player::{Hand, Side},
    session::Session,
    turn::{Decision, Disposition},
};

/// Replays a fixed list of decisions and colors.
#[derive(Debug)]
pub struct Scripted {
    decisions: VecDeque<Decision>,
    colors: VecDeque<Color>,
    disposition: Disposition,
    pub turn_requests: usize,
    pub color_requests: usize,
}

impl Scripted {
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            colors: VecDeque::new(),
            disposition: Disposition::PlayImmediately,
            turn_requests: 0,
            color_requests: 0,
        }
    }

    pub fn idle() -> Self {
        Self::new(Vec::<Decision>::new())
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    pub fn keeping_drawn_cards(mut self) -> Self {
        self.disposition = Disposition::KeepInHand;
        self
    }
}

impl Controller for Scripted {
    fn turn_decision(&mut self, _actor: Side, _hand: &Hand, _top: Card) -> Decision {
        self.turn_requests += 1;
        self.decisions
            .pop_front()
            .expect("no decision left in the script")
    }

    fn drawn_card_disposition(&mut self, _actor: Side, _drawn: Card, _top: Card) -> Disposition {
        self.disposition
    }

    fn color_choice(&mut self, _actor: Side) -> Color {
        self.color_requests += 1;
        self.colors.pop_front().unwrap_or(Color::Red)
    }
}

/// A session dealt from a stacked deck: `hand_a`, then `hand_b`, then the
/// opening card, then `rest` as the draw pile.
pub fn stacked_session(hand_a: Vec<Card>, hand_b: Vec<Card>, opening: Card, rest: Vec<Card>) -> Session {
    assert_eq!(hand_a.len(), hand_b.len(), "hands must be the same size");
    let hand_size = hand_a.len();
    let deck = hand_a
        .into_iter()
        .chain(hand_b)
        .chain(iter::once(opening))
        .chain(rest)
        .collect();

    Session::builder()
        .with_hand_size(hand_size)
        .with_deck(deck)
        .with_seed(1)
        .build()
        .unwrap()
}

pub fn filler(count: usize) -> Vec<Card> {
    (0..count)
        .map(|i| Card::number(Color::Yellow, (i % 10) as u8))
        .collect()
}
