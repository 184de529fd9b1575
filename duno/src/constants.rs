pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const SKIP_CARDS_PER_COLOR: usize = 2;
pub(crate) const REVERSE_CARDS_PER_COLOR: usize = 2;
pub(crate) const DRAW_TWO_CARDS_PER_COLOR: usize = 2;

pub(crate) const CONCRETE_COLORS: usize = 4;

pub(crate) const NUMBER_CARDS_IN_DECK: usize = NUMBER_CARDS_PER_COLOR.len() * CONCRETE_COLORS;
pub(crate) const SKIP_CARDS_IN_DECK: usize = SKIP_CARDS_PER_COLOR * CONCRETE_COLORS;
pub(crate) const REVERSE_CARDS_IN_DECK: usize = REVERSE_CARDS_PER_COLOR * CONCRETE_COLORS;
pub(crate) const DRAW_TWO_CARDS_IN_DECK: usize = DRAW_TWO_CARDS_PER_COLOR * CONCRETE_COLORS;

pub(crate) const COLOR_CHANGE_CARDS_IN_DECK: usize = 4;
pub(crate) const DRAW_FOUR_CARDS_IN_DECK: usize = 4;

pub const TOTAL_CARDS_IN_DECK: usize = NUMBER_CARDS_IN_DECK
    + SKIP_CARDS_IN_DECK
    + REVERSE_CARDS_IN_DECK
    + DRAW_TWO_CARDS_IN_DECK
    + COLOR_CHANGE_CARDS_IN_DECK
    + DRAW_FOUR_CARDS_IN_DECK;

pub const DEFAULT_HAND_SIZE: usize = 7;

pub(crate) const DRAW_TWO_PENALTY: usize = 2;
pub(crate) const DRAW_FOUR_PENALTY: usize = 4;
