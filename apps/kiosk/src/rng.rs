//! # Production Order-Number Source
//!
//! `prism-core` draws order numbers through the `OrderNumberSource` trait so
//! the calculator itself stays deterministic. This module supplies the real
//! entropy for the running kiosk.

use prism_core::order::OrderNumberSource;
use rand::Rng;

/// Order-number source backed by the thread-local RNG.
///
/// Constructed fresh at each placement; holds no state worth keeping.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl OrderNumberSource for ThreadRngSource {
    fn next_u64(&mut self) -> u64 {
        rand::thread_rng().gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::order::OrderNumber;
    use prism_core::{ORDER_NUMBER_MAX, ORDER_NUMBER_MIN};

    #[test]
    fn test_thread_rng_source_stays_in_contract_range() {
        let mut source = ThreadRngSource;
        for _ in 0..256 {
            let n = OrderNumber::generate(&mut source).value();
            assert!((ORDER_NUMBER_MIN..=ORDER_NUMBER_MAX).contains(&n));
        }
    }
}
