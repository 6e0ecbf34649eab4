use std::fmt;

use super::{Card, CardBitSet, Hand, Value};

/// All the different final hand categories a paytable pays on.
///
/// Variants are listed from the best hand to the worst. Every five
/// card hand falls into exactly one of them.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    /// Ten through ace, all of one suit.
    RoyalFlush = 0,
    /// Five cards in a sequence all of the same suit.
    StraightFlush = 1,
    /// Four of the same value.
    FourKind = 2,
    /// Three of one value and two of another value
    FullHouse = 3,
    /// Five cards of the same suit
    Flush = 4,
    /// Five cards in a sequence
    Straight = 5,
    /// Three of the same value.
    ThreeKind = 6,
    /// Two different pairs of matching cards.
    TwoPair = 7,
    /// One pair of tens, jacks, queens, kings or aces.
    #[cfg_attr(feature = "serde", serde(rename = "pair_10_or_better"))]
    Pair10OrBetter = 8,
    /// Everything else, including a pair of nines or lower.
    Nothing = 9,
}

const CATEGORIES: [Category; 10] = [
    Category::RoyalFlush,
    Category::StraightFlush,
    Category::FourKind,
    Category::FullHouse,
    Category::Flush,
    Category::Straight,
    Category::ThreeKind,
    Category::TwoPair,
    Category::Pair10OrBetter,
    Category::Nothing,
];

impl Category {
    /// How many categories there are.
    pub const COUNT: usize = 10;

    /// Every category, best first.
    pub const fn all() -> [Self; Self::COUNT] {
        CATEGORIES
    }

    /// Position of this category in `Category::all()`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The stable snake_case name used in output and configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RoyalFlush => "royal_flush",
            Self::StraightFlush => "straight_flush",
            Self::FourKind => "four_kind",
            Self::FullHouse => "full_house",
            Self::Flush => "flush",
            Self::Straight => "straight",
            Self::ThreeKind => "three_kind",
            Self::TwoPair => "two_pair",
            Self::Pair10OrBetter => "pair_10_or_better",
            Self::Nothing => "nothing",
        }
    }

    /// Look a category up by its name.
    ///
    /// ```
    /// use ride_ev::core::Category;
    ///
    /// assert_eq!(Some(Category::FourKind), Category::from_name("four_kind"));
    /// assert_eq!(None, Category::from_name("five_kind"));
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        CATEGORIES.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bit mask of the wheel, A-2-3-4-5.
const WHEEL: u16 = 1 << (Value::Ace as u16)
    | 1 << (Value::Two as u16)
    | 1 << (Value::Three as u16)
    | 1 << (Value::Four as u16)
    | 1 << (Value::Five as u16);

/// Bit mask of ten through ace.
const BROADWAY: u16 = 1 << (Value::Ten as u16)
    | 1 << (Value::Jack as u16)
    | 1 << (Value::Queen as u16)
    | 1 << (Value::King as u16)
    | 1 << (Value::Ace as u16);

/// Five distinct values in a row, or the wheel.
///
/// With all five values distinct `max - min == 4` is the same as the five
/// set bits being contiguous.
fn is_straight(value_set: u16) -> bool {
    if value_set.count_ones() != 5 {
        return false;
    }
    value_set == WHEEL || value_set >> value_set.trailing_zeros() == 0b1_1111
}

/// Classify exactly five distinct cards.
///
/// ```
/// use ride_ev::core::{Card, Category, classify_five};
///
/// let cards = ["Ah", "Kh", "Qh", "Jh", "Th"].map(|s| Card::try_from(s).unwrap());
/// assert_eq!(Category::RoyalFlush, classify_five(&cards));
/// ```
pub fn classify_five(cards: &[Card; 5]) -> Category {
    debug_assert_eq!(
        5,
        cards.iter().copied().collect::<CardBitSet>().count(),
        "classification needs five distinct cards"
    );
    classify_cards(cards.iter().copied())
}

fn classify_cards(cards: impl IntoIterator<Item = Card>) -> Category {
    // Bitset of suits, flush when only one is set.
    let mut suit_set: u8 = 0;
    // Bitset of values.
    let mut value_set: u16 = 0;
    let mut value_to_count = [0u8; 13];

    for c in cards {
        suit_set |= 1 << (c.suit as u8);
        value_set |= 1 << (c.value as u16);
        value_to_count[c.value as usize] += 1;
    }

    let mut freqs = value_to_count;
    freqs.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = suit_set.count_ones() == 1;
    let is_straight = is_straight(value_set);

    if is_straight && is_flush {
        return if value_set == BROADWAY {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
    }
    if freqs[0] == 4 {
        return Category::FourKind;
    }
    if freqs[0] == 3 && freqs[1] == 2 {
        return Category::FullHouse;
    }
    if is_flush {
        return Category::Flush;
    }
    if is_straight {
        return Category::Straight;
    }
    if freqs[0] == 3 {
        return Category::ThreeKind;
    }
    if freqs[0] == 2 && freqs[1] == 2 {
        return Category::TwoPair;
    }
    if freqs[0] == 2 {
        let paired = value_to_count
            .iter()
            .position(|&count| count == 2)
            .map(|idx| Value::from_u8(idx as u8));
        if paired.is_some_and(Value::is_ten_or_better) {
            return Category::Pair10OrBetter;
        }
    }
    Category::Nothing
}

/// Anything that can be put into one of the ten hand categories.
pub trait Classifiable {
    /// Classify this five card hand. It doesn't do any caching.
    fn classify(&self) -> Category;
}

impl Classifiable for Hand {
    fn classify(&self) -> Category {
        debug_assert_eq!(5, self.count(), "classification needs five cards");
        classify_cards(self.iter())
    }
}

impl Classifiable for [Card] {
    fn classify(&self) -> Category {
        debug_assert_eq!(
            5,
            self.iter().copied().collect::<CardBitSet>().count(),
            "classification needs five distinct cards"
        );
        classify_cards(self.iter().copied())
    }
}
