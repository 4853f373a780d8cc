#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate poker_hands;

use libfuzzer_sys::fuzz_target;
use poker_hands::core::{Card, Hand, PokerHandError};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub first: Vec<Card>,
    pub second: Vec<Card>,
}

fuzz_target!(|input: Input| {
    let (Ok(first), Ok(second)) = (Hand::new(&input.first), Hand::new(&input.second)) else {
        // Only wrong sizes and duplicates are ever rejected.
        for cards in [&input.first, &input.second] {
            match Hand::new(cards) {
                Ok(_) => {}
                Err(PokerHandError::InvalidHandSize(n)) => assert_ne!(5, n),
                Err(PokerHandError::DuplicateCard(c)) => {
                    assert!(cards.iter().filter(|x| **x == c).count() > 1)
                }
                Err(e) => panic!("Unexpected error {e}"),
            }
        }
        return;
    };

    let first_key = first.rank_key();
    let second_key = second.rank_key();

    // The category decides first, and the key always agrees with it.
    assert_eq!(first.category(), first_key.category());
    assert!(first.is(first.category()));
    if first.category() > second.category() {
        assert!(first_key > second_key);
    }
    assert_eq!(first_key.cmp(&second_key), first.cmp_strength(&second));
    assert_eq!(first.cmp_strength(&second), second.cmp_strength(&first).reverse());
});
