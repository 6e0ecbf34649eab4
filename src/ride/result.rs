use crate::core::{Card, Category};

use super::CategoryMap;

/// What a single candidate last card turns the hand into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// The card that completes the hand.
    pub card: Card,
    /// The category of the completed five card hand.
    pub category: Category,
    /// What the paytable pays on that category.
    pub payout: i64,
}

/// The full result of enumerating every completion of a hand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumerationResult {
    /// Expected net payout per unit wagered.
    pub ev: f64,
    /// Sum of every candidate's payout. `ev` is this over `total`.
    pub payout_sum: i64,
    /// How many candidate cards were tried.
    pub total: usize,
    /// Share of candidates landing in each category.
    pub probabilities: CategoryMap<f64>,
    /// Number of candidates landing in each category.
    pub counts: CategoryMap<usize>,
    /// One entry per candidate, in deck order.
    pub breakdown: Vec<Outcome>,
}

impl EnumerationResult {
    pub fn count(&self, category: Category) -> usize {
        self.counts[category]
    }

    pub fn probability(&self, category: Category) -> f64 {
        self.probabilities[category]
    }

    /// The flat key/value table an exporter writes out.
    ///
    /// The EV comes first, then a probability row and a count row for
    /// every category, best category first.
    ///
    /// ```
    /// use ride_ev::ride::EvCalculator;
    ///
    /// let result = EvCalculator::default()
    ///     .evaluate_codes(["2c", "2d", "2h"], "7s")
    ///     .unwrap();
    /// let rows = result.export_rows();
    ///
    /// assert_eq!("ev", rows[0].0);
    /// assert_eq!(21, rows.len());
    /// ```
    pub fn export_rows(&self) -> Vec<(String, String)> {
        let mut rows = Vec::with_capacity(1 + 2 * Category::COUNT);
        rows.push(("ev".to_string(), self.ev.to_string()));
        rows.extend(
            self.probabilities
                .iter()
                .map(|(c, p)| (format!("probability.{}", c), p.to_string())),
        );
        rows.extend(
            self.counts
                .iter()
                .map(|(c, n)| (format!("count.{}", c), n.to_string())),
        );
        rows
    }
}
