#![no_main]

extern crate libfuzzer_sys;
extern crate poker_hands;

use libfuzzer_sys::fuzz_target;
use poker_hands::core::Hand;

fuzz_target!(|data: &str| {
    // Any string either fails to parse or round trips through Display.
    if let Ok(hand) = Hand::new_from_str(data) {
        let again = Hand::new_from_str(&hand.to_string()).unwrap();
        assert_eq!(hand, again);
        assert!(!hand.describe().is_empty());
    }
});
