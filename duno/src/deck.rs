use std::collections::VecDeque;

use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::{
    card::{Card, Color, Rank},
    constants::*,
    error::{Result, UnoError},
};

/// Every card of a standard deck, in a fixed order.
pub fn build_catalog() -> Vec<Card> {
    let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK);

    // Colored Cards
    for color in Color::concrete() {
        // Number Cards
        for number in NUMBER_CARDS_PER_COLOR {
            cards.push(Card::number(color, *number));
        }

        // Skip Cards
        for _ in 0..SKIP_CARDS_PER_COLOR {
            cards.push(Card::new(color, Rank::Skip));
        }

        // Reverse Cards
        for _ in 0..REVERSE_CARDS_PER_COLOR {
            cards.push(Card::new(color, Rank::Reverse));
        }

        // Draw Two Cards
        for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
            cards.push(Card::new(color, Rank::DrawTwo));
        }
    }

    for _ in 0..COLOR_CHANGE_CARDS_IN_DECK {
        cards.push(Card::wild(Rank::ColorChange));
    }

    for _ in 0..DRAW_FOUR_CARDS_IN_DECK {
        cards.push(Card::wild(Rank::DrawFour));
    }

    cards
}

/// The draw pile and the discard pile of one session.
///
/// The top of the discard pile may show a color different from the card
/// underneath it: playing a wild card leaves it `Wild` until a color is chosen,
/// after which the chosen color is layered over it. Every other card stays
/// exactly as it was printed.
#[derive(Debug, Default)]
pub struct Piles {
    draw: VecDeque<Card>,
    discard: Vec<Card>,
    top_color: Option<Color>,
}

impl Piles {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            draw: cards.into_iter().collect(),
            discard: Vec::new(),
            top_color: None,
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.draw.make_contiguous().shuffle(rng);
        debug!(cards = self.draw.len(), "shuffled draw pile");
    }

    /// Takes the front card of the draw pile, recycling the discard pile
    /// first if the draw pile is empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card> {
        if self.draw.is_empty() {
            self.recycle(rng);
        }
        self.draw.pop_front().ok_or(UnoError::EmptyDeck)
    }

    /// Puts a card back into the draw pile and reshuffles it.
    pub(crate) fn return_to_draw<R: Rng + ?Sized>(&mut self, card: Card, rng: &mut R) {
        self.draw.push_back(card);
        self.shuffle(rng);
    }

    pub(crate) fn draw_pile_has(&self, predicate: impl Fn(&Card) -> bool) -> bool {
        self.draw.iter().any(predicate)
    }

    fn recycle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Some(top) = self.discard.pop() else {
            return;
        };
        let recycled = self.discard.len();
        self.draw.extend(self.discard.drain(..));
        self.discard.push(top);
        if recycled > 0 {
            debug!(recycled, "recycled discard pile into draw pile");
            self.shuffle(rng);
        }
    }

    pub fn place_on_discard(&mut self, card: Card) {
        self.discard.push(card);
        self.top_color = None;
    }

    /// The top of the discard pile, as it currently shows.
    pub fn top_card(&self) -> Result<Card> {
        let top = self.discard.last().copied().ok_or(UnoError::NoTopCard)?;
        Ok(match self.top_color {
            Some(color) => top.recolored(color),
            None => top,
        })
    }

    pub fn override_top_color(&mut self, color: Color) -> Result<()> {
        if self.discard.is_empty() {
            return Err(UnoError::NothingToRecolor);
        }
        self.top_color = Some(color);
        Ok(())
    }

    pub fn draw_count(&self) -> usize {
        self.draw.len()
    }

    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }
}
