use core::fmt;
use std::fmt::Display;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Wild,
}

impl Color {
    /// The four colors a wild card may be turned into.
    pub fn concrete() -> impl Iterator<Item = Color> {
        Color::iter().filter(|color| !color.is_wild())
    }

    pub fn is_wild(self) -> bool {
        self == Color::Wild
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    DrawFour,
    ColorChange,
}

impl Rank {
    /// DrawFour and ColorChange only ever come paired with [`Color::Wild`].
    pub fn is_wild(self) -> bool {
        matches!(self, Rank::DrawFour | Rank::ColorChange)
    }

    pub fn points(self) -> u32 {
        match self {
            Rank::Number(number) => number.into(),
            Rank::Skip | Rank::Reverse | Rank::DrawTwo => 20,
            Rank::DrawFour | Rank::ColorChange => 50,
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(number) => write!(f, "{number}"),
            Rank::Skip => write!(f, "Skip"),
            Rank::Reverse => write!(f, "Reverse"),
            Rank::DrawTwo => write!(f, "Draw Two"),
            Rank::DrawFour => write!(f, "Draw Four"),
            Rank::ColorChange => write!(f, "Color Change"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    color: Color,
    rank: Rank,
}

impl Card {
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    pub const fn number(color: Color, number: u8) -> Self {
        Self::new(color, Rank::Number(number))
    }

    pub const fn wild(rank: Rank) -> Self {
        Self::new(Color::Wild, rank)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn is_wild(&self) -> bool {
        self.color.is_wild()
    }

    pub fn points(&self) -> u32 {
        self.rank.points()
    }

    /// Copy of this card showing a different color. Only the discard pile uses
    /// this, to present a recolored wild card as its top.
    pub(crate) fn recolored(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.rank)
    }
}
