use std::fmt;

use rand::Rng;
use strum_macros::{Display, EnumIter};

use crate::{
    card::Card,
    deck::Piles,
    error::{Result, UnoError},
    rules::is_playable,
};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum ParticipantKind {
    Human,
    Cpu,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Result<Card> {
        self.0.get(index).copied().ok_or(UnoError::IndexOutOfRange {
            index,
            len: self.0.len(),
        })
    }

    pub fn add_card(&mut self, card: Card) {
        self.0.push(card);
    }

    /// Draws one card from `piles` into this hand.
    pub fn draw<R: Rng + ?Sized>(&mut self, piles: &mut Piles, rng: &mut R) -> Result<Card> {
        let card = piles.draw(rng)?;
        self.add_card(card);
        Ok(card)
    }

    pub fn play(&mut self, index: usize) -> Result<Card> {
        if index >= self.0.len() {
            return Err(UnoError::IndexOutOfRange {
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn count(&self) -> usize {
        self.0.len()
    }

    pub fn has_any_playable(&self, top: &Card) -> bool {
        self.0.iter().any(|card| is_playable(card, top))
    }

    pub fn first_playable(&self, top: &Card) -> Option<usize> {
        self.0.iter().position(|card| is_playable(card, top))
    }

    pub fn points(&self) -> u32 {
        self.0.iter().map(Card::points).sum()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{index}] {card}")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Player {
    pub side: Side,
    pub kind: ParticipantKind,
    pub hand: Hand,
}

impl Player {
    pub fn new(side: Side, kind: ParticipantKind, cards: Vec<Card>) -> Self {
        Self {
            side,
            kind,
            hand: Hand::new(cards),
        }
    }

    pub fn cards_count(&self) -> usize {
        self.hand.count()
    }
}
