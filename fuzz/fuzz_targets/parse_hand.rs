#![no_main]
use libfuzzer_sys::fuzz_target;
use ride_ev::core::{Classifiable, Hand};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = Hand::new_from_str(s) {
            assert_eq!(s.chars().count(), h.count() * 2);
            if h.count() == 5 {
                h.classify();
            }
        }
    }
});
