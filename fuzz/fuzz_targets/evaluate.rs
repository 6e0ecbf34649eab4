#![no_main]
use libfuzzer_sys::fuzz_target;
use ride_ev::core::{Card, RideError};
use ride_ev::ride::EvCalculator;

fuzz_target!(|input: ([Option<Card>; 3], Option<Card>)| {
    let (hole, shared) = input;
    match EvCalculator::default().evaluate(hole, shared) {
        Ok(result) => {
            assert_eq!(48, result.total);
            assert_eq!(48, result.counts.values().sum::<usize>());
            assert_eq!(result.payout_sum as f64 / 48.0, result.ev);
        }
        Err(RideError::IncompleteSelection) => {
            assert!(hole.iter().any(Option::is_none) || shared.is_none());
        }
        Err(RideError::DuplicateCard(_)) => {}
        Err(e) => panic!("unexpected error {}", e),
    }
});
