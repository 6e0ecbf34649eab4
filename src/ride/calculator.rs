use tracing::{event, trace_span};

use crate::core::{Card, CardBitSet, Classifiable, Deck, Hand, RideError};

use super::{CategoryMap, EnumerationResult, Outcome, Paytable};

/// Three hole cards and one shared card, all different.
///
/// The only way to build one is through `KnownCards::new`, so holding a
/// `KnownCards` means the selection has already been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KnownCards {
    hole: [Card; 3],
    shared: Card,
}

impl KnownCards {
    /// Validate a possibly incomplete selection.
    ///
    /// Missing cards are reported before repeated ones.
    ///
    /// ```
    /// use ride_ev::core::{Card, RideError};
    /// use ride_ev::ride::KnownCards;
    ///
    /// let ah = Card::try_from("Ah").ok();
    /// let kh = Card::try_from("Kh").ok();
    ///
    /// assert_eq!(
    ///     Err(RideError::IncompleteSelection),
    ///     KnownCards::new([ah, kh, None], kh)
    /// );
    /// assert!(matches!(
    ///     KnownCards::new([ah, kh, ah], kh),
    ///     Err(RideError::DuplicateCard(_))
    /// ));
    /// ```
    pub fn new(hole: [Option<Card>; 3], shared: Option<Card>) -> Result<Self, RideError> {
        let [Some(h1), Some(h2), Some(h3)] = hole else {
            return Err(RideError::IncompleteSelection);
        };
        let shared = shared.ok_or(RideError::IncompleteSelection)?;

        let mut seen = CardBitSet::new();
        for card in [h1, h2, h3, shared] {
            if !seen.insert(card) {
                return Err(RideError::DuplicateCard(card));
            }
        }

        Ok(Self {
            hole: [h1, h2, h3],
            shared,
        })
    }

    pub fn hole(&self) -> [Card; 3] {
        self.hole
    }

    pub fn shared(&self) -> Card {
        self.shared
    }

    /// All four cards as a set.
    pub fn cards(&self) -> CardBitSet {
        let [h1, h2, h3] = self.hole;
        CardBitSet::new() | h1 | h2 | h3 | self.shared
    }
}

/// Exhaustive expected value calculator.
///
/// It tries every card that could still come as the last shared card
/// and averages what the paytable pays on the finished hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvCalculator {
    paytable: Paytable,
}

impl EvCalculator {
    pub fn new(paytable: Paytable) -> Self {
        Self { paytable }
    }

    pub fn paytable(&self) -> &Paytable {
        &self.paytable
    }

    /// Validate the selection then enumerate every completion.
    pub fn evaluate(
        &self,
        hole: [Option<Card>; 3],
        shared: Option<Card>,
    ) -> Result<EnumerationResult, RideError> {
        let known = KnownCards::new(hole, shared)?;
        Ok(self.evaluate_known(&known))
    }

    /// Like `evaluate` but starting from two character card codes.
    ///
    /// An empty code counts as a card that hasn't been picked yet.
    ///
    /// ```
    /// use ride_ev::core::RideError;
    /// use ride_ev::ride::EvCalculator;
    ///
    /// let calc = EvCalculator::default();
    /// assert_eq!(
    ///     Err(RideError::IncompleteSelection),
    ///     calc.evaluate_codes(["Ah", "", "Qh"], "Jh")
    /// );
    /// ```
    pub fn evaluate_codes(
        &self,
        hole: [&str; 3],
        shared: &str,
    ) -> Result<EnumerationResult, RideError> {
        let [h1, h2, h3] = hole;
        self.evaluate(
            [parse_code(h1)?, parse_code(h2)?, parse_code(h3)?],
            parse_code(shared)?,
        )
    }

    /// Enumerate every completion of an already validated selection.
    pub fn evaluate_known(&self, known: &KnownCards) -> EnumerationResult {
        let span = trace_span!("EvCalculator::evaluate_known");
        let _enter = span.enter();

        let known_cards = known.cards();
        let pool = Deck::remaining(known_cards);
        event!(
            tracing::Level::DEBUG,
            known = ?known_cards,
            pool = pool.len(),
            "Enumerating completions"
        );

        let hand = Hand::from(known_cards);
        let mut counts: CategoryMap<usize> = CategoryMap::default();
        let mut payout_sum: i64 = 0;
        let mut breakdown = Vec::with_capacity(pool.len());

        for card in pool {
            let category = hand.with(card).classify();
            let payout = self.paytable.payout(category);

            counts[category] += 1;
            payout_sum += payout;
            event!(tracing::Level::TRACE, %card, %category, payout, "Candidate");

            breakdown.push(Outcome {
                card,
                category,
                payout,
            });
        }

        let total = breakdown.len();
        let ev = ratio(payout_sum as f64, total);
        let probabilities = counts.map(|_, n| ratio(*n as f64, total));

        event!(tracing::Level::DEBUG, ev, payout_sum, total, "Finished enumeration");

        EnumerationResult {
            ev,
            payout_sum,
            total,
            probabilities,
            counts,
            breakdown,
        }
    }
}

fn ratio(numerator: f64, total: usize) -> f64 {
    // An empty pool can't happen with four known cards.
    if total == 0 {
        0.0
    } else {
        numerator / total as f64
    }
}

fn parse_code(code: &str) -> Result<Option<Card>, RideError> {
    let code = code.trim();
    if code.is_empty() {
        Ok(None)
    } else {
        Card::try_from(code).map(Some)
    }
}
