#![no_main]
use libfuzzer_sys::fuzz_target;
use ride_ev::core::{Card, CardBitSet, Category, Classifiable, Hand, classify_five};

fuzz_target!(|cards: [Card; 5]| {
    // Only distinct cards make a hand.
    if cards.iter().copied().collect::<CardBitSet>().count() != 5 {
        return;
    }

    let category = classify_five(&cards);
    assert!(Category::all().contains(&category));
    assert_eq!(category, cards[..].classify());
    assert_eq!(category, Hand::new_with_cards(cards.to_vec()).classify());
});
