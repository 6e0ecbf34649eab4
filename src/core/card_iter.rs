use super::Card;

/// Iterate every `num_cards` sized combination of some cards.
///
/// Combinations come out in lexicographic order of their positions
/// in `possible_cards`.
///
/// ```
/// use ride_ev::core::{CardIter, Deck};
///
/// let cards = Deck::cards();
/// assert_eq!(1326, CardIter::new(&cards, 2).count());
/// ```
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be dealt
    possible_cards: &'a [Card],

    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    // Has the first combination been handed out yet.
    started: bool,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> Self {
        Self {
            possible_cards,
            idx: (0..num_cards).collect(),
            started: false,
        }
    }

    fn advance(&mut self) -> bool {
        let n = self.possible_cards.len();
        let k = self.idx.len();

        // Find the right most offset that still has room to move.
        let Some(level) = (0..k).rev().find(|&i| self.idx[i] < n - k + i) else {
            return false;
        };

        self.idx[level] += 1;
        for i in level + 1..k {
            self.idx[i] = self.idx[i - 1] + 1;
        }
        true
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.idx.len() > self.possible_cards.len() {
            return None;
        }

        if self.started {
            if !self.advance() {
                return None;
            }
        } else {
            self.started = true;
        }

        Some(self.idx.iter().map(|i| self.possible_cards[*i]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, Suit, Value};

    #[test]
    fn test_iter_one() {
        let cards = vec![Card::new(Value::Two, Suit::Spade)];

        for hand in CardIter::new(&cards, 1) {
            assert_eq!(1, hand.len());
        }
        assert_eq!(1, CardIter::new(&cards, 1).count());
    }

    #[test]
    fn test_iter_two() {
        let cards = vec![
            Card::new(Value::Two, Suit::Spade),
            Card::new(Value::Three, Suit::Spade),
            Card::new(Value::Four, Suit::Spade),
        ];

        // Make sure that we get the correct number back.
        assert_eq!(3, CardIter::new(&cards, 2).count());

        // Make sure that everything has two cards and they are different.
        for hand in CardIter::new(&cards, 2) {
            assert_eq!(2, hand.len());
            assert!(hand[0] != hand[1]);
        }
    }

    #[test]
    fn test_too_many_requested() {
        let cards = vec![Card::new(Value::Two, Suit::Spade)];
        assert_eq!(0, CardIter::new(&cards, 2).count());
    }

    #[test]
    fn test_lexicographic_order() {
        let cards: Vec<Card> = (0..4u8).map(Card::from).collect();
        let combos: Vec<Vec<u8>> = CardIter::new(&cards, 2)
            .map(|h| h.into_iter().map(u8::from).collect())
            .collect();
        assert_eq!(
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ],
            combos
        );
    }

    #[test]
    fn test_iter_deck() {
        let cards = Deck::cards();
        assert_eq!(2_598_960, CardIter::new(&cards, 5).count());
    }
}
